use crate::error::TournamentResult;
use crate::models::{EventId, Standing};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};

const COLUMNS: &str = "s.event_id, s.team_id, s.played, s.won, s.drawn, s.lost, \
                       s.goals_for, s.goals_against, s.points";

/// A standing joined with the team's display fields.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StandingDetails {
    #[serde(flatten)]
    pub standing: Standing,
    pub goal_difference: i32,
    pub team_name: String,
    pub team_abbr: Option<String>,
    pub team_color: Option<String>,
    pub team_logo: Option<String>,
}

fn from_row(row: &PgRow) -> Result<Standing, sqlx::Error> {
    Ok(Standing {
        event_id: row.try_get("event_id")?,
        team_id: row.try_get("team_id")?,
        played: row.try_get("played")?,
        won: row.try_get("won")?,
        drawn: row.try_get("drawn")?,
        lost: row.try_get("lost")?,
        goals_for: row.try_get("goals_for")?,
        goals_against: row.try_get("goals_against")?,
        points: row.try_get("points")?,
    })
}

fn details_from_row(row: &PgRow) -> Result<StandingDetails, sqlx::Error> {
    let standing = from_row(row)?;
    Ok(StandingDetails {
        goal_difference: standing.goal_difference(),
        standing,
        team_name: row.try_get("team_name")?,
        team_abbr: row.try_get("team_abbr")?,
        team_color: row.try_get("team_color")?,
        team_logo: row.try_get("team_logo")?,
    })
}

/// All rows of an event, locked until the transaction ends.
pub async fn lock_for_event(
    conn: &mut PgConnection,
    event_id: EventId,
) -> TournamentResult<Vec<Standing>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM standings s WHERE s.event_id = $1 ORDER BY s.team_id FOR UPDATE"
    ))
    .bind(event_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows.iter().map(from_row).collect::<Result<_, _>>()?)
}

/// Rows of an event with team details, unordered.
pub async fn list_details(
    conn: &mut PgConnection,
    event_id: EventId,
) -> TournamentResult<Vec<StandingDetails>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS}, t.name AS team_name, t.abbreviation AS team_abbr,
                t.color AS team_color, t.logo AS team_logo
         FROM standings s
         JOIN teams t ON s.team_id = t.id
         WHERE s.event_id = $1"
    ))
    .bind(event_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows.iter().map(details_from_row).collect::<Result<_, _>>()?)
}

/// Insert or overwrite each row, keyed by (event, team).
pub async fn upsert(conn: &mut PgConnection, rows: &[Standing]) -> TournamentResult<()> {
    for s in rows {
        sqlx::query(
            "INSERT INTO standings
                (event_id, team_id, played, won, drawn, lost, goals_for, goals_against, points)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (event_id, team_id) DO UPDATE SET
                played = EXCLUDED.played,
                won = EXCLUDED.won,
                drawn = EXCLUDED.drawn,
                lost = EXCLUDED.lost,
                goals_for = EXCLUDED.goals_for,
                goals_against = EXCLUDED.goals_against,
                points = EXCLUDED.points",
        )
        .bind(s.event_id)
        .bind(s.team_id)
        .bind(s.played)
        .bind(s.won)
        .bind(s.drawn)
        .bind(s.lost)
        .bind(s.goals_for)
        .bind(s.goals_against)
        .bind(s.points)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
