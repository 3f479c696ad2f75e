//! Pet CRUD handlers. Every operation runs in the authenticated caller's scope.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::extractors::auth::CurrentUser;
use crate::models::{NewPet, PetBody, PetPatch};
use crate::service::PetService;
use crate::state::AppState;

/// GET /pet/pets — the caller's pets.
pub async fn list(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<PetBody>>, AppError> {
    let pets = PetService::list_for(&state.pool, user.id).await?;
    Ok(Json(pets.into_iter().map(PetBody::from).collect()))
}

/// POST /pet/pets — create a pet owned by the caller.
pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<NewPet>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let pet = PetService::create(&state.pool, user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(PetBody::from(pet))))
}

/// GET /pet/pets/:id — scoped retrieve; 404 outside the caller's scope.
pub async fn retrieve(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PetBody>, AppError> {
    let pet = PetService::get_for(&state.pool, user.id, id).await?;
    Ok(Json(PetBody::from(pet)))
}

/// PATCH /pet/pets/:id — merge provided fields.
pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<PetPatch>,
) -> Result<Json<PetBody>, AppError> {
    let pet = PetService::update_for(&state.pool, user.id, id, &patch).await?;
    Ok(Json(PetBody::from(pet)))
}

/// DELETE /pet/pets/:id — 204 on success.
pub async fn remove(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    PetService::delete_for(&state.pool, user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
