//! Event, EventType and EventStatus.

use crate::error::TournamentError;
use crate::models::team::TeamId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for an event.
pub type EventId = i32;

/// Competition format. Decides how results are processed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Round-robin: every team meets every other team once, results feed a table.
    League,
    /// Single elimination: winners advance to a fixed slot in the next round.
    Knockout,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::League => "league",
            EventType::Knockout => "knockout",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "league" => Ok(EventType::League),
            "knockout" => Ok(EventType::Knockout),
            other => Err(TournamentError::Validation(format!(
                "Unknown event type '{other}' (expected league or knockout)"
            ))),
        }
    }
}

/// Lifecycle of an event.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Fixtures still to be played.
    #[default]
    Active,
    /// Every fixture has a result.
    Completed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::Completed => "completed",
        }
    }
}

impl FromStr for EventStatus {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EventStatus::Active),
            "completed" => Ok(EventStatus::Completed),
            other => Err(TournamentError::Validation(format!("Unknown event status '{other}'"))),
        }
    }
}

/// A competition: a league table or a knockout bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub status: EventStatus,
    pub venue: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
}

/// Validated input for creating an event. `teams` holds at least two distinct ids.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub event_type: EventType,
    pub teams: Vec<TeamId>,
    pub venue: Option<String>,
    pub start_time: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_parses_storage_values() {
        assert_eq!("league".parse::<EventType>().unwrap(), EventType::League);
        assert_eq!("knockout".parse::<EventType>().unwrap(), EventType::Knockout);
        assert!(matches!(
            "swiss".parse::<EventType>(),
            Err(TournamentError::Validation(_))
        ));
    }

    #[test]
    fn event_serializes_type_field() {
        let event = Event {
            id: 7,
            name: "Spring Cup".into(),
            event_type: EventType::Knockout,
            status: EventStatus::Active,
            venue: None,
            start_time: None,
            created_at: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "knockout");
        assert_eq!(json["status"], "active");
    }
}
