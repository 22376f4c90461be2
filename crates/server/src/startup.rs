use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use service::shapes::ShapeStore;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load bind address and store path from configs or env vars, with fallbacks
fn load_config() -> anyhow::Result<(SocketAddr, String)> {
    let (host, port, db_path) = match configs::load_default() {
        Ok(mut cfg) => {
            cfg.normalize_and_validate()?;
            (cfg.server.host, cfg.server.port, cfg.storage.db_path)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            let db_path =
                env::var("SHAPES_DB_PATH").unwrap_or_else(|_| "data/shapes.json".to_string());
            (host, port, db_path)
        }
    };
    Ok((format!("{}:{}", host, port).parse()?, db_path))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let (addr, db_path) = load_config()?;
    common::env::ensure_data_dir(&db_path).await?;

    // Single process-wide store handle, opened once and shared via state
    let store: Arc<ShapeStore> = ShapeStore::new(&db_path).await?;

    let cors = build_cors();
    let app: Router = routes::build_router(store, cors);

    info!(%addr, %db_path, "starting shape registry");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
