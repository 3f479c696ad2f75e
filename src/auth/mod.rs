//! Password hashing and API token issue/lookup.

pub mod password;
pub mod token;
