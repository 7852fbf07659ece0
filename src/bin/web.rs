//! Single binary web server: REST API under /api, browser front-end from STATIC_DIR.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST, PORT, DATABASE_URL, STATIC_DIR (a `.env` file is read too).

use actix_files::Files;
use actix_web::{get, middleware::Logger, web::Data, App, HttpResponse, HttpServer};
use tournament_backend::{api, ServerConfig, Store};

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("{e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let store = Store::connect(&config.database).await.map_err(|e| {
        log::error!("Could not connect to the database: {e}");
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e)
    })?;
    store.migrate().await.map_err(|e| {
        log::error!("Database setup failed: {e}");
        std::io::Error::other(e)
    })?;

    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if !serve_static {
        log::warn!("Static directory {} not found; serving the API only", static_dir.display());
    }

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(store.clone());
    HttpServer::new(move || {
        let app = App::new()
            .wrap(api::cors_headers())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
            .service(favicon);
        if serve_static {
            app.service(Files::new("/", static_dir.clone()).index_file("index.html"))
        } else {
            app
        }
    })
    .bind(bind)?
    .run()
    .await?;

    store.close().await;
    log::info!("Server stopped");
    Ok(())
}
