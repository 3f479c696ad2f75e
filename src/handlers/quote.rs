//! Quote handlers. Quotes carry no account reference, so these endpoints do
//! not authenticate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::models::{NewQuote, QuoteBody};
use crate::service::QuoteService;
use crate::state::AppState;

/// GET /quate/quates — all quotes.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<QuoteBody>>, AppError> {
    let quotes = QuoteService::list(&state.pool).await?;
    Ok(Json(quotes.into_iter().map(QuoteBody::from).collect()))
}

/// POST /quate/quates — create a quote; a reused identifier is a validation
/// failure.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewQuote>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let quote = QuoteService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(QuoteBody::from(quote))))
}

/// GET /quate/quates/:id — retrieve by identifier; 404 when absent.
pub async fn retrieve(
    State(state): State<AppState>,
    Path(quate_id): Path<String>,
) -> Result<Json<QuoteBody>, AppError> {
    let quote = QuoteService::get(&state.pool, &quate_id).await?;
    Ok(Json(QuoteBody::from(quote)))
}
