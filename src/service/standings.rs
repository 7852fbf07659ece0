use super::events::ranked;
use crate::error::{TournamentError, TournamentResult};
use crate::logic::StandingsTable;
use crate::models::{Event, EventId, EventStatus, EventType};
use crate::store::{events, fixtures, standings, StandingDetails, Store};
use serde::Serialize;
use sqlx::PgConnection;

#[derive(Clone, Debug, Serialize)]
pub struct EventSummary {
    pub id: EventId,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub status: EventStatus,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            event_type: event.event_type,
            status: event.status,
        }
    }
}

/// The ranked table of one event.
#[derive(Clone, Debug, Serialize)]
pub struct EventStandings {
    pub event: EventSummary,
    pub standings: Vec<StandingDetails>,
}

/// Ranked standings of one event.
///
/// A league with matches but no standings rows is repaired first by recomputing the
/// table from its completed matches.
pub async fn event_standings(store: &Store, id: EventId) -> TournamentResult<EventStandings> {
    let mut tx = store.pool().begin().await?;
    let event = events::find(&mut tx, id)
        .await?
        .ok_or_else(|| TournamentError::not_found("Event", id))?;

    let mut rows = standings::list_details(&mut tx, id).await?;
    if rows.is_empty() && event.event_type == EventType::League && rebuild(&mut tx, id).await? > 0 {
        log::warn!("Event {id} had no standings; rebuilt them from its matches");
        rows = standings::list_details(&mut tx, id).await?;
    }
    tx.commit().await?;

    Ok(EventStandings {
        event: EventSummary::from(&event),
        standings: ranked(rows),
    })
}

/// Every event, newest first, with its ranked standings.
pub async fn all_standings(store: &Store) -> TournamentResult<Vec<EventStandings>> {
    let mut conn = store.pool().acquire().await?;
    let mut result = Vec::new();
    for event in events::list(&mut conn).await? {
        let rows = standings::list_details(&mut conn, event.id).await?;
        result.push(EventStandings {
            event: EventSummary::from(&event),
            standings: ranked(rows),
        });
    }
    Ok(result)
}

/// Zero and replay the whole table of an event from its completed matches.
pub async fn recalculate_standings(store: &Store, id: EventId) -> TournamentResult<EventStandings> {
    let mut tx = store.pool().begin().await?;
    let event = events::find(&mut tx, id)
        .await?
        .ok_or_else(|| TournamentError::not_found("Event", id))?;
    if event.event_type != EventType::League {
        return Err(TournamentError::Validation(format!(
            "Event {id} is a knockout and has no standings"
        )));
    }
    let count = rebuild(&mut tx, id).await?;
    let rows = standings::list_details(&mut tx, id).await?;
    tx.commit().await?;

    log::info!("Recalculated {count} standings for event {id}");
    Ok(EventStandings {
        event: EventSummary::from(&event),
        standings: ranked(rows),
    })
}

/// Recompute and write the table of `event_id`. Every team found in a match gets a row.
async fn rebuild(conn: &mut PgConnection, event_id: EventId) -> TournamentResult<usize> {
    let existing = standings::lock_for_event(conn, event_id).await?;
    let all = fixtures::list_for_event(conn, event_id).await?;

    let mut table = StandingsTable::from_rows(event_id, existing);
    for team in all.iter().flat_map(|f| [f.team1_id, f.team2_id]).flatten() {
        table.ensure_team(team);
    }
    table.recompute(&all);

    let rows = table.into_rows();
    standings::upsert(conn, &rows).await?;
    Ok(rows.len())
}
