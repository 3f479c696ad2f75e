//! Resolve the calling account from the Authorization header.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::auth::token::user_for_token;
use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;

/// Extractor for the authenticated account. Accepts `Authorization: Bearer <token>`
/// and the legacy `Token <token>` scheme. Missing or unknown tokens reject
/// with 401.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Authentication("authentication credentials were not provided".into())
            })?;
        let token = bearer_token(header)
            .ok_or_else(|| AppError::Authentication("invalid authorization header".into()))?;
        let user = user_for_token(&state.pool, token)
            .await?
            .ok_or_else(|| AppError::Authentication("invalid token".into()))?;
        Ok(CurrentUser(user))
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    let token = rest.trim();
    if token.is_empty() {
        return None;
    }
    (scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token"))
        .then_some(token)
}
