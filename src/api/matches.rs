use super::{optional_text, AppState};
use crate::error::TournamentError;
use crate::models::{EventId, MatchId};
use crate::service::{self, ResultInput};
use actix_web::web::{Json, Path, Query};
use actix_web::{get, put, HttpResponse};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Body of `PUT /api/matches/{id}`.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateMatchBody {
    pub team1_score: i32,
    pub team2_score: i32,
    #[serde(default)]
    pub match_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub venue: Option<String>,
}

impl UpdateMatchBody {
    pub fn validate(self) -> Result<ResultInput, TournamentError> {
        if self.team1_score < 0 || self.team2_score < 0 {
            return Err(TournamentError::Validation("Scores cannot be negative".to_string()));
        }
        Ok(ResultInput {
            team1_score: self.team1_score,
            team2_score: self.team2_score,
            match_date: self.match_date,
            venue: optional_text(self.venue),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchFilter {
    pub event_id: Option<EventId>,
}

#[get("/api/matches")]
pub(super) async fn api_list_matches(
    state: AppState,
    filter: Query<MatchFilter>,
) -> Result<HttpResponse, TournamentError> {
    let matches = service::list_matches(&state, filter.event_id).await?;
    Ok(HttpResponse::Ok().json(matches))
}

/// Record a result; updates standings or advances the bracket.
#[put("/api/matches/{id}")]
pub(super) async fn api_update_match(
    state: AppState,
    path: Path<MatchId>,
    body: Json<UpdateMatchBody>,
) -> Result<HttpResponse, TournamentError> {
    let input = body.into_inner().validate()?;
    let recorded = service::record_result(&state, path.into_inner(), input).await?;
    Ok(HttpResponse::Ok().json(recorded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_scores_are_rejected() {
        let body = UpdateMatchBody {
            team1_score: -1,
            team2_score: 0,
            match_date: None,
            venue: None,
        };
        assert!(matches!(body.validate(), Err(TournamentError::Validation(_))));
    }

    #[test]
    fn scores_are_required_on_the_wire() {
        assert!(serde_json::from_str::<UpdateMatchBody>(r#"{"team1_score": 2}"#).is_err());
        let body: UpdateMatchBody =
            serde_json::from_str(r#"{"team1_score": 2, "team2_score": 1}"#).unwrap();
        assert_eq!(body.validate().unwrap().team1_score, 2);
    }
}
