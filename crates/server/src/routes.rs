use std::sync::Arc;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Greeting;
use service::shapes::ShapeStore;

use crate::openapi::ApiDoc;

pub mod shapes;

#[utoipa::path(
    get, path = "/", tag = "root",
    responses((status = 200, description = "Greeting"))
)]
pub async fn root() -> Json<Greeting> {
    Json(Greeting { message: "Hello world" })
}

/// Build the full application router: greeting, shape CRUD, and API docs.
pub fn build_router(store: Arc<ShapeStore>, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .route("/shapes", get(shapes::list).post(shapes::create))
        .route(
            "/shapes/:shape_id",
            get(shapes::get).put(shapes::replace).delete(shapes::delete),
        )
        .route("/shapes/upsert/:shape_id", put(shapes::upsert))
        .with_state(store);

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
