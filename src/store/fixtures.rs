use crate::error::TournamentResult;
use crate::logic::{PlannedFixture, SlotWrite};
use crate::models::{EventId, Fixture, MatchId, MatchStatus, TeamId};
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};

const COLUMNS: &str = "m.id, m.event_id, m.team1_id, m.team2_id, m.team1_score, m.team2_score, \
                       m.round, m.status, m.match_date, m.venue";

/// A fixture with its team names and derived winner, as shown to clients.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FixtureDetails {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub winner_id: Option<TeamId>,
}

fn from_row(row: &PgRow) -> TournamentResult<Fixture> {
    Ok(Fixture {
        id: row.try_get("id")?,
        event_id: row.try_get("event_id")?,
        team1_id: row.try_get("team1_id")?,
        team2_id: row.try_get("team2_id")?,
        team1_score: row.try_get("team1_score")?,
        team2_score: row.try_get("team2_score")?,
        round: row.try_get("round")?,
        status: row.try_get::<String, _>("status")?.parse()?,
        match_date: row.try_get("match_date")?,
        venue: row.try_get("venue")?,
    })
}

fn details_from_row(row: &PgRow) -> TournamentResult<FixtureDetails> {
    let fixture = from_row(row)?;
    Ok(FixtureDetails {
        team1_name: row.try_get("team1_name")?,
        team2_name: row.try_get("team2_name")?,
        winner_id: fixture.winner_id(),
        fixture,
    })
}

/// Every fixture of an event in creation order.
pub async fn list_for_event(
    conn: &mut PgConnection,
    event_id: EventId,
) -> TournamentResult<Vec<Fixture>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM matches m WHERE m.event_id = $1 ORDER BY m.id"
    ))
    .bind(event_id)
    .fetch_all(&mut *conn)
    .await?;
    rows.iter().map(from_row).collect()
}

/// Fixtures with team names, by round then id. `event_id` narrows to one event.
pub async fn list_details(
    conn: &mut PgConnection,
    event_id: Option<EventId>,
) -> TournamentResult<Vec<FixtureDetails>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS}, t1.name AS team1_name, t2.name AS team2_name
         FROM matches m
         LEFT JOIN teams t1 ON m.team1_id = t1.id
         LEFT JOIN teams t2 ON m.team2_id = t2.id
         WHERE $1::INTEGER IS NULL OR m.event_id = $1
         ORDER BY m.event_id, m.round, m.id"
    ))
    .bind(event_id)
    .fetch_all(&mut *conn)
    .await?;
    rows.iter().map(details_from_row).collect()
}

/// Load a fixture and lock it until the transaction ends.
pub async fn find_for_update(
    conn: &mut PgConnection,
    id: MatchId,
) -> TournamentResult<Option<Fixture>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM matches m WHERE m.id = $1 FOR UPDATE"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn insert(
    conn: &mut PgConnection,
    event_id: EventId,
    planned: &PlannedFixture,
    match_date: Option<NaiveDateTime>,
) -> TournamentResult<Fixture> {
    let row = sqlx::query(&format!(
        "INSERT INTO matches AS m (event_id, team1_id, team2_id, round, status, match_date)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    ))
    .bind(event_id)
    .bind(planned.team1_id)
    .bind(planned.team2_id)
    .bind(planned.round)
    .bind(MatchStatus::Scheduled.as_str())
    .bind(match_date)
    .fetch_one(&mut *conn)
    .await?;
    from_row(&row)
}

/// Write scores, schedule details and status exactly as held by `fixture`.
pub async fn save_result(conn: &mut PgConnection, fixture: &Fixture) -> TournamentResult<()> {
    sqlx::query(
        "UPDATE matches
         SET team1_score = $2, team2_score = $3, status = $4, match_date = $5, venue = $6
         WHERE id = $1",
    )
    .bind(fixture.id)
    .bind(fixture.team1_score)
    .bind(fixture.team2_score)
    .bind(fixture.status.as_str())
    .bind(fixture.match_date)
    .bind(&fixture.venue)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Write one bracket slot, and the status of a bye.
pub async fn set_slot(conn: &mut PgConnection, write: &SlotWrite) -> TournamentResult<()> {
    // The column name comes from a closed enum, never from input.
    let column = write.slot.team_column();
    match write.status {
        Some(status) => {
            let sql = format!("UPDATE matches SET {column} = $2, status = $3 WHERE id = $1");
            sqlx::query(&sql)
                .bind(write.match_id)
                .bind(write.team_id)
                .bind(status.as_str())
                .execute(&mut *conn)
                .await?;
        }
        None => {
            let sql = format!("UPDATE matches SET {column} = $2 WHERE id = $1");
            sqlx::query(&sql)
                .bind(write.match_id)
                .bind(write.team_id)
                .execute(&mut *conn)
                .await?;
        }
    }
    Ok(())
}
