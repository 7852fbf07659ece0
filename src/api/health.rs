use super::AppState;
use actix_web::{get, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: String,
    database: &'static str,
    functions: [&'static str; 6],
}

/// Liveness plus database reachability. Always 200 so the UI can show the state.
#[get("/api/health")]
pub(super) async fn api_health(state: AppState) -> HttpResponse {
    let database = match state.health_check().await {
        Ok(()) => "ok",
        Err(err) => {
            log::warn!("Health check could not reach the database: {err}");
            "unavailable"
        }
    };
    HttpResponse::Ok().json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        message: "API is working!",
        timestamp: chrono::Utc::now().to_rfc3339(),
        database,
        functions: ["teams", "events", "matches", "standings", "scorers", "sponsors"],
    })
}
