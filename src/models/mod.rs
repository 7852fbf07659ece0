//! Data structures for the tournament backend: teams, events, fixtures, standings.

mod event;
mod game;
mod scorer;
mod sponsor;
mod standing;
mod team;

pub use event::{Event, EventId, EventStatus, EventType, NewEvent};
pub use game::{Fixture, MatchId, MatchStatus, Slot};
pub use scorer::{NewScorer, Scorer, ScorerId};
pub use sponsor::{NewSponsor, Sponsor, SponsorId};
pub use standing::{Outcome, Standing};
pub use team::{NewTeam, Team, TeamChanges, TeamId, DEFAULT_TEAM_COLOR};
