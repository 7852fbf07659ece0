use crate::error::TournamentResult;
use crate::models::{Event, EventId, EventStatus, NewEvent};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};

const COLUMNS: &str = "id, name, type, status, venue, start_time, created_at";

fn from_row(row: &PgRow) -> TournamentResult<Event> {
    Ok(Event {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        event_type: row.try_get::<String, _>("type")?.parse()?,
        status: row.try_get::<String, _>("status")?.parse()?,
        venue: row.try_get("venue")?,
        start_time: row.try_get("start_time")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Newest first.
pub async fn list(conn: &mut PgConnection) -> TournamentResult<Vec<Event>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM events ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(&mut *conn)
    .await?;
    rows.iter().map(from_row).collect()
}

pub async fn find(conn: &mut PgConnection, id: EventId) -> TournamentResult<Option<Event>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM events WHERE id = $1"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn insert(conn: &mut PgConnection, event: &NewEvent) -> TournamentResult<Event> {
    let row = sqlx::query(&format!(
        "INSERT INTO events (name, type, status, venue, start_time)
         VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
    ))
    .bind(&event.name)
    .bind(event.event_type.as_str())
    .bind(EventStatus::Active.as_str())
    .bind(&event.venue)
    .bind(event.start_time)
    .fetch_one(&mut *conn)
    .await?;
    from_row(&row)
}

pub async fn set_status(
    conn: &mut PgConnection,
    id: EventId,
    status: EventStatus,
) -> TournamentResult<()> {
    sqlx::query("UPDATE events SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status.as_str())
        .execute(&mut *conn)
        .await?;
    Ok(())
}
