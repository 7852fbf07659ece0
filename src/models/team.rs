//! Team data structure.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a team (database serial).
pub type TeamId = i32;

/// Display color given to teams created without one.
pub const DEFAULT_TEAM_COLOR: &str = "#00c853";

/// A team that can be entered into events.
///
/// `name` is unique across all teams. Once the team appears in a match only the
/// cosmetic fields (`abbreviation`, `color`, `logo`) may change.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Short code shown in tables, e.g. "MCI".
    pub abbreviation: Option<String>,
    pub color: String,
    pub logo: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Fields for a team that does not exist yet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NewTeam {
    pub name: String,
    pub abbreviation: Option<String>,
    pub color: Option<String>,
    pub logo: Option<String>,
}

/// Partial update of a team. `None` leaves the field unchanged.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TeamChanges {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub color: Option<String>,
    pub logo: Option<String>,
}

impl TeamChanges {
    /// True if the change touches the team's identity rather than only its looks.
    pub fn renames(&self, team: &Team) -> bool {
        self.name.as_deref().is_some_and(|n| n != team.name)
    }

    /// Apply the changes to a copy of `team`.
    pub fn apply(&self, team: &Team) -> Team {
        Team {
            id: team.id,
            name: self.name.clone().unwrap_or_else(|| team.name.clone()),
            abbreviation: self.abbreviation.clone().or_else(|| team.abbreviation.clone()),
            color: self.color.clone().unwrap_or_else(|| team.color.clone()),
            logo: self.logo.clone().or_else(|| team.logo.clone()),
            created_at: team.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team {
            id: 1,
            name: "Rovers".into(),
            abbreviation: Some("ROV".into()),
            color: DEFAULT_TEAM_COLOR.into(),
            logo: None,
            created_at: None,
        }
    }

    #[test]
    fn same_name_is_not_a_rename() {
        let changes = TeamChanges {
            name: Some("Rovers".into()),
            color: Some("#ff0000".into()),
            ..Default::default()
        };
        assert!(!changes.renames(&team()));
        let updated = changes.apply(&team());
        assert_eq!(updated.color, "#ff0000");
        assert_eq!(updated.abbreviation.as_deref(), Some("ROV"));
    }

    #[test]
    fn different_name_is_a_rename() {
        let changes = TeamChanges {
            name: Some("United".into()),
            ..Default::default()
        };
        assert!(changes.renames(&team()));
    }
}
