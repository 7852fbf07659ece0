//! Tournament backend: library with models, tournament logic, storage and the HTTP API.

pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::{ConfigError, DatabaseConfig, ServerConfig};
pub use error::{TournamentError, TournamentResult};
pub use logic::{
    advance_winner, generate_event, is_bye, next_slot, plan_update, random_draw, winner_of,
    Advancement, EventPlan, PlannedFixture, ResultUpdate, SlotWrite, StandingsTable,
};
pub use models::{
    Event, EventId, EventStatus, EventType, Fixture, MatchId, MatchStatus, NewEvent, Outcome, Slot,
    Standing, Team, TeamId,
};
pub use store::Store;
