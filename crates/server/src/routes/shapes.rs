use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use common::types::Deleted;
use service::shapes::{Shape, ShapeStore};

use crate::errors::ApiError;

#[utoipa::path(
    get, path = "/shapes", tag = "shapes",
    responses((status = 200, description = "All stored shapes"))
)]
pub async fn list(State(store): State<Arc<ShapeStore>>) -> Json<Vec<Shape>> {
    let shapes = store.list().await;
    info!(count = shapes.len(), "list shapes");
    Json(shapes)
}

#[utoipa::path(
    get, path = "/shapes/{shape_id}", tag = "shapes",
    params(("shape_id" = i64, Path, description = "Shape id")),
    responses(
        (status = 200, description = "Shape found"),
        (status = 404, description = "No shape with that id")
    )
)]
pub async fn get(
    State(store): State<Arc<ShapeStore>>,
    Path(shape_id): Path<i64>,
) -> Result<Json<Shape>, ApiError> {
    match store.find_by_id(shape_id).await {
        Some(shape) => Ok(Json(shape)),
        None => Err(ApiError::NotFound(format!("No shape with id {shape_id} found"))),
    }
}

#[utoipa::path(
    post, path = "/shapes", tag = "shapes",
    request_body = crate::openapi::ShapeDoc,
    responses(
        (status = 200, description = "Inserted shape echoed back"),
        (status = 422, description = "Body failed type coercion")
    )
)]
pub async fn create(
    State(store): State<Arc<ShapeStore>>,
    Json(shape): Json<Shape>,
) -> Result<Json<Shape>, ApiError> {
    store.insert(shape.clone()).await?;
    info!(id = shape.id, name = %shape.name, "created shape");
    Ok(Json(shape))
}

#[utoipa::path(
    put, path = "/shapes/{shape_id}", tag = "shapes",
    params(("shape_id" = i64, Path, description = "Shape id")),
    request_body = crate::openapi::ShapeDoc,
    responses(
        (status = 200, description = "Replaced shape echoed back"),
        (status = 404, description = "No shape with that id"),
        (status = 422, description = "Body failed type coercion")
    )
)]
pub async fn replace(
    State(store): State<Arc<ShapeStore>>,
    Path(shape_id): Path<i64>,
    Json(shape): Json<Shape>,
) -> Result<Json<Shape>, ApiError> {
    let replaced = store.replace(shape_id, shape).await?;
    info!(id = shape_id, "replaced shape");
    Ok(Json(replaced))
}

#[utoipa::path(
    put, path = "/shapes/upsert/{shape_id}", tag = "shapes",
    params(("shape_id" = i64, Path, description = "Shape id")),
    request_body = crate::openapi::ShapeDoc,
    responses(
        (status = 200, description = "Upserted shape echoed back"),
        (status = 422, description = "Body failed type coercion")
    )
)]
pub async fn upsert(
    State(store): State<Arc<ShapeStore>>,
    Path(shape_id): Path<i64>,
    Json(shape): Json<Shape>,
) -> Result<Json<Shape>, ApiError> {
    let upserted = store.upsert(shape_id, shape).await?;
    info!(id = shape_id, "upserted shape");
    Ok(Json(upserted))
}

#[utoipa::path(
    delete, path = "/shapes/{shape_id}", tag = "shapes",
    params(("shape_id" = i64, Path, description = "Shape id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No shape with that id")
    )
)]
pub async fn delete(
    State(store): State<Arc<ShapeStore>>,
    Path(shape_id): Path<i64>,
) -> Result<Json<Deleted>, ApiError> {
    if store.delete(shape_id).await? {
        info!(id = shape_id, "deleted shape");
        Ok(Json(Deleted { ok: true }))
    } else {
        Err(ApiError::NotFound(format!("No shape with {shape_id} exists")))
    }
}
