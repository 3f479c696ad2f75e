//! Pet and policy routes (both live under /pet, as the clients expect).

use crate::handlers::{pet, policy};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn pet_routes(state: AppState) -> Router {
    Router::new()
        .route("/pets", get(pet::list).post(pet::create))
        .route(
            "/pets/:id",
            get(pet::retrieve).patch(pet::update).delete(pet::remove),
        )
        .route("/policies", get(policy::list).post(policy::create))
        .route("/policies/:id", get(policy::retrieve))
        .with_state(state)
}
