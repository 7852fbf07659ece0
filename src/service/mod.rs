//! Transactional tournament operations.
//!
//! Each public function is one atomic unit: it opens a transaction, loads rows, runs the
//! pure logic from [`crate::logic`] and writes the returned rows before committing. Any
//! error drops the transaction, which rolls it back.

mod events;
mod extras;
mod results;
mod standings;
mod teams;

pub use events::{create_event, event_details, list_events, list_matches, EventDetails};
pub use extras::{create_scorer, create_sponsor, list_scorers, list_sponsors};
pub use results::{record_result, RecordedResult, ResultInput};
pub use standings::{
    all_standings, event_standings, recalculate_standings, EventStandings, EventSummary,
};
pub use teams::{create_team, delete_team, list_teams, update_team};
