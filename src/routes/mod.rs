//! Routers per resource, plus the assembled application router.

mod common;
mod pet;
mod quote;
mod user;

pub use common::common_routes;
pub use pet::pet_routes;
pub use quote::quote_routes;
pub use user::user_routes;

use crate::state::AppState;
use axum::Router;

/// Full application router: common endpoints plus /user, /pet, and /quate.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/user", user_routes(state.clone()))
        .nest("/pet", pet_routes(state.clone()))
        .nest("/quate", quote_routes(state))
}
