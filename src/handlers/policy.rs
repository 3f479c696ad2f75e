//! Policy handlers, scoped to the authenticated caller.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::auth::CurrentUser;
use crate::models::{NewPolicy, PolicyBody};
use crate::service::PolicyService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PolicyListQuery {
    pub policy_quate_number: Option<String>,
}

/// GET /pet/policies — the caller's policies ordered by policy number.
/// `?policy_quate_number=` narrows to policies referencing that quote.
pub async fn list(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<PolicyListQuery>,
) -> Result<Json<Vec<PolicyBody>>, AppError> {
    let policies = match query.policy_quate_number.as_deref() {
        Some(quate_id) => PolicyService::filter_by_quote(&state.pool, user.id, quate_id).await?,
        None => PolicyService::list_for(&state.pool, user.id).await?,
    };
    Ok(Json(policies.into_iter().map(PolicyBody::from).collect()))
}

/// POST /pet/policies — create a policy owned by the caller. Invalid premium
/// tiers and duplicate policy numbers are validation failures.
pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<NewPolicy>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let policy = PolicyService::create(&state.pool, user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(PolicyBody::from(policy))))
}

/// GET /pet/policies/:id — scoped retrieve; 404 outside the caller's scope.
pub async fn retrieve(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PolicyBody>, AppError> {
    let policy = PolicyService::get_for(&state.pool, user.id, id).await?;
    Ok(Json(PolicyBody::from(policy)))
}
