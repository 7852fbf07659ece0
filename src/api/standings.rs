use super::AppState;
use crate::error::TournamentError;
use crate::models::EventId;
use crate::service;
use actix_web::web::Path;
use actix_web::{get, post, HttpResponse};

/// Every event with its table.
#[get("/api/standings")]
pub(super) async fn api_all_standings(state: AppState) -> Result<HttpResponse, TournamentError> {
    let all = service::all_standings(&state).await?;
    Ok(HttpResponse::Ok().json(all))
}

#[get("/api/standings/{event_id}")]
pub(super) async fn api_event_standings(
    state: AppState,
    path: Path<EventId>,
) -> Result<HttpResponse, TournamentError> {
    let table = service::event_standings(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(table))
}

/// Rebuild a league table from its completed matches.
#[post("/api/standings/{event_id}/recalculate")]
pub(super) async fn api_recalculate_standings(
    state: AppState,
    path: Path<EventId>,
) -> Result<HttpResponse, TournamentError> {
    let table = service::recalculate_standings(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(table))
}
