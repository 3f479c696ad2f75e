//! Pet records: species/breed are small-integer codes with validated construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Species codes stored in `pet_species`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Cat = 0,
    Dog = 1,
    Horse = 2,
}

impl Species {
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Species::Cat),
            1 => Some(Species::Dog),
            2 => Some(Species::Horse),
            _ => None,
        }
    }
}

/// Breed codes stored in `pet_breed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breed {
    Bulldog = 0,
    Pug = 1,
    Boxer = 2,
}

impl Breed {
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Breed::Bulldog),
            1 => Some(Breed::Pug),
            2 => Some(Breed::Boxer),
            _ => None,
        }
    }
}

/// Pet row.
#[derive(Debug, Clone, FromRow)]
pub struct Pet {
    pub id: i64,
    pub user_id: i64,
    pub pet_name: String,
    pub pet_species: i16,
    pub pet_breed: i16,
    pub pet_age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for POST /pet/pets. Species and breed default to the first
/// code (cat, bulldog) like the schema defaults.
#[derive(Debug, Deserialize)]
pub struct NewPet {
    pub pet_name: String,
    #[serde(default)]
    pub pet_species: i16,
    #[serde(default)]
    pub pet_breed: i16,
    pub pet_age: i32,
}

/// Merge payload for PATCH /pet/pets/:id.
#[derive(Debug, Default, Deserialize)]
pub struct PetPatch {
    pub pet_name: Option<String>,
    pub pet_species: Option<i16>,
    pub pet_breed: Option<i16>,
    pub pet_age: Option<i32>,
}

/// Field subset serialized for pet responses.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PetBody {
    pub id: i64,
    pub pet_name: String,
    pub pet_species: i16,
    pub pet_breed: i16,
    pub pet_age: i32,
}

impl From<Pet> for PetBody {
    fn from(p: Pet) -> Self {
        PetBody {
            id: p.id,
            pet_name: p.pet_name,
            pet_species: p.pet_species,
            pet_breed: p.pet_breed,
            pet_age: p.pet_age,
        }
    }
}
