//! Top scorer records.

use crate::models::team::TeamId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type ScorerId = i32;

/// A player's goal tally, optionally attached to a team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scorer {
    pub id: ScorerId,
    pub player: String,
    pub team_id: Option<TeamId>,
    pub goals: i32,
    pub assists: i32,
    pub matches: i32,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NewScorer {
    pub player: String,
    pub team_id: Option<TeamId>,
    pub goals: i32,
    pub assists: i32,
    pub matches: i32,
}
