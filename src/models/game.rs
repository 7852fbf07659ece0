//! Fixture (a match row), Slot and MatchStatus.

use crate::error::TournamentError;
use crate::models::event::EventId;
use crate::models::team::TeamId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for a match.
pub type MatchId = i32;

/// One of the two team positions in a fixture.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    #[default]
    One,
    Two,
}

impl Slot {
    /// Storage column holding the team for this slot.
    pub fn team_column(self) -> &'static str {
        match self {
            Slot::One => "team1_id",
            Slot::Two => "team2_id",
        }
    }
}

/// Whether a fixture has a result.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Completed => "completed",
        }
    }
}

impl FromStr for MatchStatus {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "completed" => Ok(MatchStatus::Completed),
            other => Err(TournamentError::Validation(format!("Unknown match status '{other}'"))),
        }
    }
}

/// A scheduled or played match between two teams.
///
/// Knockout rounds after the first start as shells with both slots empty; the
/// slots are filled in place as earlier rounds resolve.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: MatchId,
    pub event_id: EventId,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    /// None until played.
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    /// 1 = first round.
    pub round: i32,
    pub status: MatchStatus,
    pub match_date: Option<NaiveDateTime>,
    pub venue: Option<String>,
}

impl Fixture {
    /// A scheduled fixture with no scores, as created by the generator.
    pub fn new(
        id: MatchId,
        event_id: EventId,
        team1_id: Option<TeamId>,
        team2_id: Option<TeamId>,
        round: i32,
    ) -> Self {
        Self {
            id,
            event_id,
            team1_id,
            team2_id,
            team1_score: None,
            team2_score: None,
            round,
            status: MatchStatus::Scheduled,
            match_date: None,
            venue: None,
        }
    }

    pub fn team(&self, slot: Slot) -> Option<TeamId> {
        match slot {
            Slot::One => self.team1_id,
            Slot::Two => self.team2_id,
        }
    }

    pub fn set_team(&mut self, slot: Slot, team: Option<TeamId>) {
        match slot {
            Slot::One => self.team1_id = team,
            Slot::Two => self.team2_id = team,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Both scores, if the fixture has been played.
    pub fn scores(&self) -> Option<(i32, i32)> {
        match (self.status, self.team1_score, self.team2_score) {
            (MatchStatus::Completed, Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    /// A bye: completed without scores, with one team that goes through unopposed.
    pub fn is_walkover(&self) -> bool {
        self.is_completed()
            && self.team1_score.is_none()
            && self.team2_score.is_none()
            && self.team1_id.is_some() != self.team2_id.is_some()
    }

    /// Slot of the side that scored more, or the only side of a walkover.
    /// None while unplayed or on a draw.
    pub fn winning_slot(&self) -> Option<Slot> {
        if self.is_walkover() {
            return Some(if self.team1_id.is_some() { Slot::One } else { Slot::Two });
        }
        let (a, b) = self.scores()?;
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Slot::One),
            std::cmp::Ordering::Less => Some(Slot::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The team that won, derived from the scores.
    pub fn winner_id(&self) -> Option<TeamId> {
        self.winning_slot().and_then(|slot| self.team(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(a: i32, b: i32) -> Fixture {
        let mut f = Fixture::new(1, 1, Some(10), Some(20), 1);
        f.team1_score = Some(a);
        f.team2_score = Some(b);
        f.status = MatchStatus::Completed;
        f
    }

    #[test]
    fn winner_follows_scores() {
        assert_eq!(played(3, 1).winner_id(), Some(10));
        assert_eq!(played(0, 2).winner_id(), Some(20));
        assert_eq!(played(2, 2).winner_id(), None);
    }

    #[test]
    fn unplayed_fixture_has_no_winner() {
        let mut f = Fixture::new(1, 1, Some(10), Some(20), 1);
        f.team1_score = Some(1);
        f.team2_score = Some(0);
        assert_eq!(f.winner_id(), None);
    }

    #[test]
    fn walkover_winner_is_the_only_team() {
        let mut bye = Fixture::new(5, 1, Some(30), None, 2);
        assert!(!bye.is_walkover());
        bye.status = MatchStatus::Completed;
        assert!(bye.is_walkover());
        assert_eq!(bye.winner_id(), Some(30));
    }
}
