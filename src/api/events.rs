use super::{optional_text, required_text, AppState};
use crate::error::TournamentError;
use crate::logic::random_draw;
use crate::models::{EventId, EventType, NewEvent, TeamId};
use crate::service;
use actix_web::web::{Json, Path};
use actix_web::{get, post, HttpResponse};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashSet;

/// Body of `POST /api/events`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateEventBody {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub teams: Vec<TeamId>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
}

impl CreateEventBody {
    /// Require a name and at least two distinct teams.
    pub fn validate(self) -> Result<NewEvent, TournamentError> {
        let name = required_text(&self.name, "Event name")?;
        if self.teams.len() < 2 {
            return Err(TournamentError::Validation(
                "Name, type, and at least 2 teams required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.teams.iter().find(|id| !seen.insert(**id)) {
            return Err(TournamentError::Validation(format!(
                "Team {dup} is listed more than once"
            )));
        }
        Ok(NewEvent {
            name,
            event_type: self.event_type,
            teams: self.teams,
            venue: optional_text(self.venue),
            start_time: self.start_time,
        })
    }
}

#[get("/api/events")]
pub(super) async fn api_list_events(state: AppState) -> Result<HttpResponse, TournamentError> {
    let events = service::list_events(&state).await?;
    Ok(HttpResponse::Ok().json(events))
}

/// Event with its matches and (for leagues) ranked standings.
#[get("/api/events/{id}")]
pub(super) async fn api_get_event(
    state: AppState,
    path: Path<EventId>,
) -> Result<HttpResponse, TournamentError> {
    let details = service::event_details(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(details))
}

/// Create an event and generate its fixtures and standings.
#[post("/api/events")]
pub(super) async fn api_create_event(
    state: AppState,
    body: Json<CreateEventBody>,
) -> Result<HttpResponse, TournamentError> {
    let event = body.into_inner().validate()?;
    let details = service::create_event(&state, event, random_draw).await?;
    Ok(HttpResponse::Created().json(details))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(teams: Vec<TeamId>) -> CreateEventBody {
        CreateEventBody {
            name: "Summer League".to_string(),
            event_type: EventType::League,
            teams,
            venue: None,
            start_time: None,
        }
    }

    #[test]
    fn needs_two_teams() {
        assert!(matches!(body(vec![1]).validate(), Err(TournamentError::Validation(_))));
        assert!(matches!(body(vec![]).validate(), Err(TournamentError::Validation(_))));
        assert_eq!(body(vec![1, 2]).validate().unwrap().teams, vec![1, 2]);
    }

    #[test]
    fn duplicate_teams_are_rejected() {
        let err = body(vec![1, 2, 1]).validate().unwrap_err();
        assert_eq!(err.to_string(), "Team 1 is listed more than once");
    }

    #[test]
    fn parses_wire_format() {
        let parsed: CreateEventBody = serde_json::from_str(
            r#"{"name":"Cup","type":"knockout","teams":[4,5,6,7],
                "start_time":"2024-03-15T15:00:00"}"#,
        )
        .unwrap();
        let event = parsed.validate().unwrap();
        assert_eq!(event.event_type, EventType::Knockout);
        assert!(event.start_time.is_some());
    }
}
