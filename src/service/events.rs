use crate::error::{TournamentError, TournamentResult};
use crate::logic::{generate_event, rank_order};
use crate::models::{Event, EventId, EventType, NewEvent, TeamId};
use crate::store::{events, fixtures, standings, teams, FixtureDetails, StandingDetails, Store};
use serde::Serialize;
use sqlx::PgConnection;

/// An event with its fixtures and, for leagues, the ranked table.
#[derive(Clone, Debug, Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    pub matches: Vec<FixtureDetails>,
    pub standings: Vec<StandingDetails>,
}

pub async fn list_events(store: &Store) -> TournamentResult<Vec<Event>> {
    let mut conn = store.pool().acquire().await?;
    events::list(&mut conn).await
}

pub async fn event_details(store: &Store, id: EventId) -> TournamentResult<EventDetails> {
    let mut conn = store.pool().acquire().await?;
    let event = events::find(&mut conn, id)
        .await?
        .ok_or_else(|| TournamentError::not_found("Event", id))?;
    load_details(&mut conn, event).await
}

/// All fixtures, or those of one event.
pub async fn list_matches(
    store: &Store,
    event_id: Option<EventId>,
) -> TournamentResult<Vec<FixtureDetails>> {
    let mut conn = store.pool().acquire().await?;
    fixtures::list_details(&mut conn, event_id).await
}

/// Create an event with all its fixtures and opening standings in one transaction.
///
/// `event.teams` must already be validated (two or more distinct ids). Unknown team ids
/// fail with `NotFound`. `shuffle` draws the knockout bracket.
pub async fn create_event<S>(
    store: &Store,
    event: NewEvent,
    shuffle: S,
) -> TournamentResult<EventDetails>
where
    S: FnOnce(&mut [TeamId]),
{
    let mut tx = store.pool().begin().await?;

    let known = teams::existing_ids(&mut tx, &event.teams).await?;
    let missing: Vec<String> = event
        .teams
        .iter()
        .filter(|id| !known.contains(id))
        .map(|id| id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(TournamentError::NotFound(format!(
            "Unknown team ids: {}",
            missing.join(", ")
        )));
    }

    let created = events::insert(&mut tx, &event).await?;
    let plan = generate_event(created.id, created.event_type, &event.teams, shuffle);

    for planned in &plan.fixtures {
        fixtures::insert(&mut tx, created.id, planned, event.start_time).await?;
    }
    standings::upsert(&mut tx, &plan.standings).await?;

    let details = load_details(&mut tx, created).await?;
    tx.commit().await?;

    log::info!(
        "Created {} event {} '{}' with {} teams and {} matches",
        details.event.event_type,
        details.event.id,
        details.event.name,
        event.teams.len(),
        details.matches.len()
    );
    Ok(details)
}

async fn load_details(conn: &mut PgConnection, event: Event) -> TournamentResult<EventDetails> {
    let matches = fixtures::list_details(conn, Some(event.id)).await?;
    let standings = match event.event_type {
        EventType::League => ranked(standings::list_details(conn, event.id).await?),
        EventType::Knockout => Vec::new(),
    };
    Ok(EventDetails {
        event,
        matches,
        standings,
    })
}

pub(super) fn ranked(mut rows: Vec<StandingDetails>) -> Vec<StandingDetails> {
    rows.sort_by(|a, b| rank_order(&a.standing, &b.standing));
    rows
}
