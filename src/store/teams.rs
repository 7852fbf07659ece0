use crate::error::{TournamentError, TournamentResult};
use crate::models::{NewTeam, Team, TeamId, DEFAULT_TEAM_COLOR};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};

const COLUMNS: &str = "id, name, abbreviation, color, logo, created_at";

fn from_row(row: &PgRow) -> Result<Team, sqlx::Error> {
    Ok(Team {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        abbreviation: row.try_get("abbreviation")?,
        color: row
            .try_get::<Option<String>, _>("color")?
            .unwrap_or_else(|| DEFAULT_TEAM_COLOR.to_string()),
        logo: row.try_get("logo")?,
        created_at: row.try_get("created_at")?,
    })
}

fn duplicate_name(err: sqlx::Error) -> TournamentError {
    match TournamentError::from(err) {
        TournamentError::Conflict(_) => {
            TournamentError::Conflict("Team already exists".to_string())
        }
        other => other,
    }
}

pub async fn list(conn: &mut PgConnection) -> TournamentResult<Vec<Team>> {
    let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM teams ORDER BY name"))
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(from_row).collect::<Result<_, _>>()?)
}

pub async fn find(conn: &mut PgConnection, id: TeamId) -> TournamentResult<Option<Team>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM teams WHERE id = $1"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.as_ref().map(from_row).transpose()?)
}

/// Which of `ids` exist.
pub async fn existing_ids(
    conn: &mut PgConnection,
    ids: &[TeamId],
) -> TournamentResult<Vec<TeamId>> {
    let rows = sqlx::query("SELECT id FROM teams WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows
        .iter()
        .map(|r| r.try_get::<TeamId, _>("id"))
        .collect::<Result<_, _>>()?)
}

pub async fn insert(conn: &mut PgConnection, team: &NewTeam) -> TournamentResult<Team> {
    let row = sqlx::query(&format!(
        "INSERT INTO teams (name, abbreviation, color, logo)
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    ))
    .bind(&team.name)
    .bind(&team.abbreviation)
    .bind(team.color.as_deref().unwrap_or(DEFAULT_TEAM_COLOR))
    .bind(&team.logo)
    .fetch_one(&mut *conn)
    .await
    .map_err(duplicate_name)?;
    Ok(from_row(&row)?)
}

pub async fn update(conn: &mut PgConnection, team: &Team) -> TournamentResult<Team> {
    let row = sqlx::query(&format!(
        "UPDATE teams SET name = $2, abbreviation = $3, color = $4, logo = $5
         WHERE id = $1 RETURNING {COLUMNS}"
    ))
    .bind(team.id)
    .bind(&team.name)
    .bind(&team.abbreviation)
    .bind(&team.color)
    .bind(&team.logo)
    .fetch_optional(&mut *conn)
    .await
    .map_err(duplicate_name)?;
    row.as_ref()
        .map(from_row)
        .transpose()?
        .ok_or_else(|| TournamentError::not_found("Team", team.id))
}

/// Returns false if no team had this id.
pub async fn delete(conn: &mut PgConnection, id: TeamId) -> TournamentResult<bool> {
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Number of matches the team plays in, in any event.
pub async fn match_count(conn: &mut PgConnection, id: TeamId) -> TournamentResult<i64> {
    let row =
        sqlx::query("SELECT COUNT(*) AS count FROM matches WHERE team1_id = $1 OR team2_id = $1")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
    Ok(row.try_get("count")?)
}
