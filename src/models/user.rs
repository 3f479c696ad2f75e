//! Account records and their wire representations.
//! `password_hash` never leaves the server: the wire types below carry no
//! password material.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account row.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone_number: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub zipcode: String,
    pub state: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration payload for POST /user/create.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_phone_number")]
    pub phone_number: String,
    #[serde(default)]
    pub address_1: String,
    #[serde(default)]
    pub address_2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default = "default_zipcode")]
    pub zipcode: String,
    #[serde(default)]
    pub state: String,
}

fn default_phone_number() -> String {
    "0000000000".to_string()
}

fn default_zipcode() -> String {
    "00000".to_string()
}

/// Profile field subset returned by /user/create and /user/me.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub zipcode: String,
    pub state: String,
}

impl From<User> for Profile {
    fn from(u: User) -> Self {
        Profile {
            email: u.email,
            name: u.name,
            phone_number: u.phone_number,
            address_1: u.address_1,
            address_2: u.address_2,
            city: u.city,
            zipcode: u.zipcode,
            state: u.state,
        }
    }
}

/// Merge payload for PATCH /user/me. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub state: Option<String>,
}

/// Login payload for POST /user/token.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "test@x.io".into(),
            password_hash: "$argon2id$stub".into(),
            name: "Name".into(),
            phone_number: "1234567899".into(),
            address_1: "123 Main st".into(),
            address_2: "#123".into(),
            city: "Washington, D.C.".into(),
            zipcode: "12345".into(),
            state: "DC".into(),
            is_active: true,
            is_staff: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn profile_never_serializes_password_material() {
        let json = serde_json::to_string(&Profile::from(sample_user())).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"email\":\"test@x.io\""));
    }

    #[test]
    fn registration_defaults_match_schema_defaults() {
        let new: NewUser =
            serde_json::from_str(r#"{"email": "a@b.io", "password": "testpass"}"#).unwrap();
        assert_eq!(new.phone_number, "0000000000");
        assert_eq!(new.zipcode, "00000");
        assert_eq!(new.name, "");
    }
}
