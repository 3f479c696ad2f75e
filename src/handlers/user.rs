//! Account handlers: register, token, profile.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppError;
use crate::extractors::auth::CurrentUser;
use crate::models::{Credentials, NewUser, Profile, ProfilePatch, TokenBody};
use crate::service::UserService;
use crate::state::AppState;

/// POST /user/create — register an account. 201 with the profile fields;
/// the response never carries password material.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user = UserService::register(&state.pool, &body).await?;
    tracing::info!(user_id = user.id, "account created");
    Ok((StatusCode::CREATED, Json(Profile::from(user))))
}

/// POST /user/token — exchange credentials for the account's API token.
/// Bad credentials are a 400, not a 401: the caller is not presenting a token.
pub async fn token(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<Json<TokenBody>, AppError> {
    let token = UserService::authenticate(&state.pool, &body).await?;
    Ok(Json(TokenBody { token }))
}

/// GET /user/me — the caller's own profile.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<Profile> {
    Json(Profile::from(user))
}

/// PATCH /user/me — merge provided fields into the caller's profile. A new
/// password is re-hashed before persisting.
pub async fn update_me(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>, AppError> {
    let user = UserService::update_profile(&state.pool, user.id, &patch).await?;
    Ok(Json(Profile::from(user)))
}
