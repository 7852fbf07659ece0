//! REST API: actix-web handlers, request bodies and error responses.
//!
//! Request bodies are explicit structs; each is validated into a model type before the
//! service layer runs. Errors render as `{"error": "..."}` with the status of their kind.

use crate::error::TournamentError;
use crate::store::Store;
use actix_web::http::StatusCode;
use actix_web::middleware::DefaultHeaders;
use actix_web::web::{self, Data};
use actix_web::{guard, HttpResponse, ResponseError};
use serde::Serialize;

mod events;
mod extras;
mod health;
mod matches;
mod standings;
mod teams;

pub use events::CreateEventBody;
pub use extras::{CreateScorerBody, CreateSponsorBody};
pub use matches::UpdateMatchBody;
pub use teams::{CreateTeamBody, UpdateTeamBody};

/// Shared state: the database pool.
pub type AppState = Data<Store>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for TournamentError {
    fn status_code(&self) -> StatusCode {
        match self {
            TournamentError::Validation(_) => StatusCode::BAD_REQUEST,
            TournamentError::NotFound(_) => StatusCode::NOT_FOUND,
            TournamentError::Conflict(_) => StatusCode::CONFLICT,
            TournamentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let TournamentError::Storage(err) = self {
            log::error!("Request failed: {err}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.client_message(),
        })
    }
}

/// Malformed or mistyped JSON bodies become a 400 with the usual error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorBody { error: message }),
        )
        .into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorBody { error: message }),
        )
        .into()
    })
}

/// Open CORS headers added to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
        .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"))
}

/// Answers CORS preflight requests for any API path.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Register every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health::api_health)
        .service(teams::api_list_teams)
        .service(teams::api_create_team)
        .service(teams::api_update_team)
        .service(teams::api_delete_team)
        .service(events::api_list_events)
        .service(events::api_get_event)
        .service(events::api_create_event)
        .service(matches::api_list_matches)
        .service(matches::api_update_match)
        .service(standings::api_all_standings)
        .service(standings::api_event_standings)
        .service(standings::api_recalculate_standings)
        .service(extras::api_list_scorers)
        .service(extras::api_create_scorer)
        .service(extras::api_list_sponsors)
        .service(extras::api_create_sponsor)
        .service(
            web::resource("/api/{tail:.*}")
                .guard(guard::Options())
                .to(preflight),
        );
}

/// Trimmed text, or a validation error naming `field` if it is blank.
fn required_text(value: &str, field: &str) -> Result<String, TournamentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trimmed text with blanks treated as absent.
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_status_codes() {
        let cases = [
            (TournamentError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (TournamentError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (TournamentError::Conflict("taken".into()), StatusCode::CONFLICT),
            (
                TournamentError::Storage(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
            assert_eq!(err.error_response().status(), status);
        }
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(matches!(
            required_text("   ", "Team name"),
            Err(TournamentError::Validation(msg)) if msg == "Team name is required"
        ));
        assert_eq!(required_text("  Rovers ", "Team name").unwrap(), "Rovers");
        assert_eq!(optional_text(Some(" ".into())), None);
    }
}
