use crate::error::TournamentResult;
use crate::models::{NewSponsor, Sponsor};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};

const COLUMNS: &str = "id, name, description, contact, logo, created_at";

fn from_row(row: &PgRow) -> Result<Sponsor, sqlx::Error> {
    Ok(Sponsor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        contact: row.try_get("contact")?,
        logo: row.try_get("logo")?,
        created_at: row.try_get("created_at")?,
    })
}

pub async fn list(conn: &mut PgConnection) -> TournamentResult<Vec<Sponsor>> {
    let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM sponsors ORDER BY name"))
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(from_row).collect::<Result<_, _>>()?)
}

pub async fn insert(conn: &mut PgConnection, sponsor: &NewSponsor) -> TournamentResult<Sponsor> {
    let row = sqlx::query(&format!(
        "INSERT INTO sponsors (name, description, contact, logo)
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    ))
    .bind(&sponsor.name)
    .bind(&sponsor.description)
    .bind(&sponsor.contact)
    .bind(&sponsor.logo)
    .fetch_one(&mut *conn)
    .await?;
    Ok(from_row(&row)?)
}
