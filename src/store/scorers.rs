use crate::error::TournamentResult;
use crate::models::{NewScorer, Scorer};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};

const COLUMNS: &str = "id, player, team_id, goals, assists, matches, created_at";

fn from_row(row: &PgRow) -> Result<Scorer, sqlx::Error> {
    Ok(Scorer {
        id: row.try_get("id")?,
        player: row.try_get("player")?,
        team_id: row.try_get("team_id")?,
        goals: row.try_get("goals")?,
        assists: row.try_get("assists")?,
        matches: row.try_get("matches")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Top scorers first.
pub async fn list(conn: &mut PgConnection) -> TournamentResult<Vec<Scorer>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM scorers ORDER BY goals DESC, assists DESC, player"
    ))
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows.iter().map(from_row).collect::<Result<_, _>>()?)
}

pub async fn insert(conn: &mut PgConnection, scorer: &NewScorer) -> TournamentResult<Scorer> {
    let row = sqlx::query(&format!(
        "INSERT INTO scorers (player, team_id, goals, assists, matches)
         VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
    ))
    .bind(&scorer.player)
    .bind(scorer.team_id)
    .bind(scorer.goals)
    .bind(scorer.assists)
    .bind(scorer.matches)
    .fetch_one(&mut *conn)
    .await?;
    Ok(from_row(&row)?)
}
