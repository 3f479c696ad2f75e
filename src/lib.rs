//! Pet-insurance administration backend: accounts, pets, policies, and rate
//! quotes over a REST API.

pub mod auth;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use migration::apply_migrations;
pub use routes::{api_router, common_routes, pet_routes, quote_routes, user_routes};
pub use state::AppState;
pub use store::ensure_database_exists;
