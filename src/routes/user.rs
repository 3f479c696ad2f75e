//! Account routes. /me allows GET and PATCH only; other verbs fall through to
//! the router's 405.

use crate::handlers::user;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/create", post(user::create))
        .route("/token", post(user::token))
        .route("/me", get(user::me).patch(user::update_me))
        .with_state(state)
}
