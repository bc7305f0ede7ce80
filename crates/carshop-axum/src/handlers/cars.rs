//! Car handlers - CRUD over the inventory.
//!
//! Bodies are read as raw bytes and decoded with [`CarPatch::from_slice`] so
//! that decoding failures surface as `400` JSON errors. Path ids are parsed
//! here and never reach SQL text.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::ACCESS_CONTROL_ALLOW_METHODS;
use axum::response::IntoResponse;
use carshop_core::{Car, CarPatch};

use crate::error::HttpError;
use crate::state::AppState;

fn parse_car_id(raw: &str) -> Result<i64, HttpError> {
    raw.parse()
        .map_err(|_| HttpError::BadRequest(format!("Invalid car id '{raw}'")))
}

/// Acknowledgement plus the method the route represents.
fn ok_with_method(method: &'static str) -> impl IntoResponse {
    ([(ACCESS_CONTROL_ALLOW_METHODS, method)], Json("OK"))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Car>>, HttpError> {
    Ok(Json(state.core.cars().list().await?))
}

/// Returns a zero- or one-element array.
pub async fn get(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<Json<Vec<Car>>, HttpError> {
    let id = parse_car_id(&car_id)?;
    Ok(Json(state.core.cars().get(id).await?))
}

pub async fn add(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let patch = CarPatch::from_slice(&body)?;
    let car = state.core.cars().add(patch).await?;
    Ok(([(ACCESS_CONTROL_ALLOW_METHODS, "POST")], Json(car)))
}

/// Full replace of the car named by the body's `id`.
pub async fn update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let patch = CarPatch::from_slice(&body)?;
    state.core.cars().replace(patch).await?;
    Ok(ok_with_method("PUT"))
}

pub async fn remove(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let patch = CarPatch::from_slice(&body)?;
    state.core.cars().delete(&patch).await?;
    Ok(ok_with_method("DELETE"))
}

/// Partial update: only the supplied fields are written.
pub async fn patch(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_car_id(&car_id)?;
    let patch = CarPatch::from_slice(&body)?;
    state.core.cars().patch(id, &patch).await?;
    Ok(ok_with_method("PATCH"))
}
