use super::{optional_text, required_text, AppState};
use crate::error::TournamentError;
use crate::models::{NewTeam, TeamChanges, TeamId};
use crate::service;
use actix_web::web::{Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};
use serde::Deserialize;

/// Body of `POST /api/teams`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateTeamBody {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl CreateTeamBody {
    pub fn validate(self) -> Result<NewTeam, TournamentError> {
        Ok(NewTeam {
            name: required_text(&self.name, "Team name")?,
            abbreviation: abbreviation(self.abbreviation)?,
            color: color(self.color)?,
            logo: optional_text(self.logo),
        })
    }
}

/// Body of `PUT /api/teams/{id}`. Absent fields stay as they are.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateTeamBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl UpdateTeamBody {
    pub fn validate(self) -> Result<TeamChanges, TournamentError> {
        Ok(TeamChanges {
            name: self
                .name
                .as_deref()
                .map(|n| required_text(n, "Team name"))
                .transpose()?,
            abbreviation: abbreviation(self.abbreviation)?,
            color: color(self.color)?,
            logo: optional_text(self.logo),
        })
    }
}

/// Short code: up to 3 characters, stored upper case.
fn abbreviation(value: Option<String>) -> Result<Option<String>, TournamentError> {
    match optional_text(value) {
        Some(code) if code.chars().count() > 3 => Err(TournamentError::Validation(
            "Abbreviation must be at most 3 characters".to_string(),
        )),
        code => Ok(code.map(|c| c.to_uppercase())),
    }
}

/// Hex color such as `#00c853`.
fn color(value: Option<String>) -> Result<Option<String>, TournamentError> {
    match optional_text(value) {
        Some(c)
            if c.len() != 7
                || !c.starts_with('#')
                || !c[1..].chars().all(|ch| ch.is_ascii_hexdigit()) =>
        {
            Err(TournamentError::Validation(format!(
                "Color '{c}' must look like #rrggbb"
            )))
        }
        c => Ok(c),
    }
}

#[get("/api/teams")]
pub(super) async fn api_list_teams(state: AppState) -> Result<HttpResponse, TournamentError> {
    let teams = service::list_teams(&state).await?;
    Ok(HttpResponse::Ok().json(teams))
}

/// Create a team (409 if the name is taken).
#[post("/api/teams")]
pub(super) async fn api_create_team(
    state: AppState,
    body: Json<CreateTeamBody>,
) -> Result<HttpResponse, TournamentError> {
    let team = body.into_inner().validate()?;
    let created = service::create_team(&state, team).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Edit a team. Renaming is refused once the team has matches.
#[put("/api/teams/{id}")]
pub(super) async fn api_update_team(
    state: AppState,
    path: Path<TeamId>,
    body: Json<UpdateTeamBody>,
) -> Result<HttpResponse, TournamentError> {
    let changes = body.into_inner().validate()?;
    let team = service::update_team(&state, path.into_inner(), changes).await?;
    Ok(HttpResponse::Ok().json(team))
}

/// Delete a team that has no matches.
#[delete("/api/teams/{id}")]
pub(super) async fn api_delete_team(
    state: AppState,
    path: Path<TeamId>,
) -> Result<HttpResponse, TournamentError> {
    service::delete_team(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Team deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str) -> CreateTeamBody {
        CreateTeamBody {
            name: name.to_string(),
            abbreviation: None,
            color: None,
            logo: None,
        }
    }

    #[test]
    fn team_name_is_trimmed() {
        let team = body("  City  ").validate().unwrap();
        assert_eq!(team.name, "City");
        assert_eq!(team.color, None);
    }

    #[test]
    fn abbreviation_is_limited_and_upper_cased() {
        let mut b = body("City");
        b.abbreviation = Some("mci".into());
        assert_eq!(b.clone().validate().unwrap().abbreviation.as_deref(), Some("MCI"));
        b.abbreviation = Some("CITY".into());
        assert!(matches!(b.validate(), Err(TournamentError::Validation(_))));
    }

    #[test]
    fn color_must_be_hex() {
        let mut b = body("City");
        b.color = Some("#6CABDD".into());
        assert!(b.clone().validate().is_ok());
        b.color = Some("skyblue".into());
        assert!(matches!(b.validate(), Err(TournamentError::Validation(_))));
    }

    #[test]
    fn blank_rename_is_rejected() {
        let update = UpdateTeamBody {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert!(matches!(update.validate(), Err(TournamentError::Validation(_))));
    }
}
