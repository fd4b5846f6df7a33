//! HTTP handlers for the villa controller.
//!
//! Routes live under `BASE_PATH`. Each handler parses its input, calls
//! `VillaService`, and maps the outcome to a status code.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
    routing::get,
};
use json_patch::Patch;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{instrument, warn};

use super::error::VillaError;
use super::model::Villa;
use super::service::VillaService;

/// Base path of the villa controller.
pub const BASE_PATH: &str = "/api/VillaAPI";

/// Build the villa controller routes over the given service.
pub fn router(service: Arc<VillaService>) -> Router {
    Router::new()
        .route(BASE_PATH, get(list_villas).post(create_villa))
        .route(
            &format!("{}/{{id}}", BASE_PATH),
            get(get_villa)
                .put(update_villa)
                .patch(update_partial_villa)
                .delete(delete_villa),
        )
        .with_state(service)
}

/// Location of a villa's get-by-id endpoint.
pub fn villa_location(id: i64) -> String {
    format!("{}/{}", BASE_PATH, id)
}

/// Integer path id. A non-integer segment does not match the route.
#[derive(Debug, Clone, Copy)]
pub struct VillaId(pub i64);

impl<S> FromRequestParts<S> for VillaId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        raw.parse().map(VillaId).map_err(|_| {
            warn!("Path id {:?} is not an integer", raw);
            StatusCode::NOT_FOUND.into_response()
        })
    }
}

/// Parse an optional JSON body. Empty bodies and `null` are absent.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<Option<T>, VillaError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Option<T>>(body).map_err(|e| {
        warn!("Rejected request body: {}", e);
        VillaError::bad_request(format!("Invalid JSON body: {}", e))
    })
}

#[instrument(skip_all)]
async fn list_villas(State(service): State<Arc<VillaService>>) -> Json<Vec<Villa>> {
    Json(service.list().await)
}

#[instrument(skip_all, fields(id = id))]
async fn get_villa(
    State(service): State<Arc<VillaService>>,
    VillaId(id): VillaId,
) -> Result<Json<Villa>, VillaError> {
    service.get(id).await.map(Json)
}

#[instrument(skip_all)]
async fn create_villa(
    State(service): State<Arc<VillaService>>,
    body: Bytes,
) -> Result<Response, VillaError> {
    let villa = parse_body::<Villa>(&body)?;
    let created = service.create(villa).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, villa_location(created.id))],
        Json(created),
    )
        .into_response())
}

#[instrument(skip_all, fields(id = id))]
async fn delete_villa(
    State(service): State<Arc<VillaService>>,
    VillaId(id): VillaId,
) -> Result<StatusCode, VillaError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all, fields(id = id))]
async fn update_villa(
    State(service): State<Arc<VillaService>>,
    VillaId(id): VillaId,
    body: Bytes,
) -> Result<StatusCode, VillaError> {
    let villa = parse_body::<Villa>(&body)?;
    service.replace(id, villa).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all, fields(id = id))]
async fn update_partial_villa(
    State(service): State<Arc<VillaService>>,
    VillaId(id): VillaId,
    body: Bytes,
) -> Result<StatusCode, VillaError> {
    let patch = parse_body::<Patch>(&body)?;
    service.patch(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}
