//! Quote routes.

use crate::handlers::quote;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn quote_routes(state: AppState) -> Router {
    Router::new()
        .route("/quates", get(quote::list).post(quote::create))
        .route("/quates/:id", get(quote::retrieve))
        .with_state(state)
}
