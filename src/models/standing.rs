//! Standing (one league table row) and match Outcome.

use crate::models::event::EventId;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Result of a match from one team's point of view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_score(goals_for: i32, goals_against: i32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    /// League points awarded: 3 for a win, 1 for a draw.
    pub fn points(self) -> i32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

/// A team's cumulative record within one league event.
///
/// Invariants: `points == 3 * won + drawn` and `played == won + drawn + lost`.
/// Only [`Standing::record`] and [`Standing::reset`] mutate the counters.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub event_id: EventId,
    pub team_id: TeamId,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub points: i32,
}

impl Standing {
    /// A zeroed row.
    pub fn new(event_id: EventId, team_id: TeamId) -> Self {
        Self {
            event_id,
            team_id,
            ..Default::default()
        }
    }

    /// Apply one played match.
    pub fn record(&mut self, goals_for: i32, goals_against: i32) {
        let outcome = Outcome::from_score(goals_for, goals_against);
        self.played += 1;
        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::Loss => self.lost += 1,
        }
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        self.points += outcome.points();
    }

    /// Zero every counter, keeping the (event, team) key.
    pub fn reset(&mut self) {
        *self = Self::new(self.event_id, self.team_id);
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }

    pub fn is_consistent(&self) -> bool {
        self.points == 3 * self.won + self.drawn && self.played == self.won + self.drawn + self.lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_win_draw_loss() {
        let mut s = Standing::new(1, 5);
        s.record(2, 1);
        s.record(0, 0);
        s.record(1, 3);
        assert_eq!((s.played, s.won, s.drawn, s.lost), (3, 1, 1, 1));
        assert_eq!((s.goals_for, s.goals_against), (3, 4));
        assert_eq!(s.points, 4);
        assert_eq!(s.goal_difference(), -1);
        assert!(s.is_consistent());
    }

    #[test]
    fn reset_keeps_key() {
        let mut s = Standing::new(3, 9);
        s.record(4, 0);
        s.reset();
        assert_eq!(s, Standing::new(3, 9));
    }
}
