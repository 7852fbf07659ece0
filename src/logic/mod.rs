//! Tournament business logic: event generation and result processing.
//!
//! Everything here is pure: it works on in-memory rows and returns new rows for the
//! caller to persist.

mod generator;
mod results;

pub use generator::{
    generate_event, knockout_fixtures, league_fixtures, random_draw, EventPlan, PlannedFixture,
};
pub use results::{
    advance_winner, bracket_position, is_bye, next_slot, plan_update, rank_order, winner_of,
    Advancement, ResultUpdate, SlotWrite, StandingsTable,
};
