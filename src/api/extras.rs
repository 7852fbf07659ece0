//! Scorers and sponsors.

use super::{optional_text, required_text, AppState};
use crate::error::TournamentError;
use crate::models::{NewScorer, NewSponsor, TeamId};
use crate::service;
use actix_web::web::Json;
use actix_web::{get, post, HttpResponse};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct CreateScorerBody {
    pub player: String,
    #[serde(default, alias = "teamId")]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub matches: i32,
}

impl CreateScorerBody {
    pub fn validate(self) -> Result<NewScorer, TournamentError> {
        if self.goals < 0 || self.assists < 0 || self.matches < 0 {
            return Err(TournamentError::Validation(
                "Goals, assists and matches cannot be negative".to_string(),
            ));
        }
        Ok(NewScorer {
            player: required_text(&self.player, "Player name")?,
            team_id: self.team_id,
            goals: self.goals,
            assists: self.assists,
            matches: self.matches,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateSponsorBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl CreateSponsorBody {
    pub fn validate(self) -> Result<NewSponsor, TournamentError> {
        Ok(NewSponsor {
            name: required_text(&self.name, "Sponsor name")?,
            description: optional_text(self.description),
            contact: optional_text(self.contact),
            logo: optional_text(self.logo),
        })
    }
}

#[get("/api/scorers")]
pub(super) async fn api_list_scorers(state: AppState) -> Result<HttpResponse, TournamentError> {
    Ok(HttpResponse::Ok().json(service::list_scorers(&state).await?))
}

#[post("/api/scorers")]
pub(super) async fn api_create_scorer(
    state: AppState,
    body: Json<CreateScorerBody>,
) -> Result<HttpResponse, TournamentError> {
    let scorer = body.into_inner().validate()?;
    Ok(HttpResponse::Created().json(service::create_scorer(&state, scorer).await?))
}

#[get("/api/sponsors")]
pub(super) async fn api_list_sponsors(state: AppState) -> Result<HttpResponse, TournamentError> {
    Ok(HttpResponse::Ok().json(service::list_sponsors(&state).await?))
}

#[post("/api/sponsors")]
pub(super) async fn api_create_sponsor(
    state: AppState,
    body: Json<CreateSponsorBody>,
) -> Result<HttpResponse, TournamentError> {
    let sponsor = body.into_inner().validate()?;
    Ok(HttpResponse::Created().json(service::create_sponsor(&state, sponsor).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scorer_accepts_camel_case_team() {
        let body: CreateScorerBody =
            serde_json::from_str(r#"{"player":"Erling Haaland","teamId":1,"goals":18}"#).unwrap();
        let scorer = body.validate().unwrap();
        assert_eq!(scorer.team_id, Some(1));
        assert_eq!(scorer.goals, 18);
        assert_eq!(scorer.assists, 0);
    }

    #[test]
    fn sponsor_needs_a_name() {
        let body = CreateSponsorBody {
            name: "".into(),
            description: Some("Kit supplier".into()),
            contact: None,
            logo: None,
        };
        assert!(matches!(body.validate(), Err(TournamentError::Validation(_))));
    }
}
