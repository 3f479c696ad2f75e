//! Pet store operations. Every query is scoped to the owning account: a
//! caller can never see or mutate another account's pets.

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{Breed, NewPet, Pet, PetPatch, Species};

pub struct PetService;

impl PetService {
    pub async fn list_for(pool: &PgPool, user_id: i64) -> Result<Vec<Pet>, AppError> {
        let pets = sqlx::query_as::<_, Pet>("SELECT * FROM pets WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(pets)
    }

    pub async fn create(pool: &PgPool, user_id: i64, new: &NewPet) -> Result<Pet, AppError> {
        validate_species(new.pet_species)?;
        validate_breed(new.pet_breed)?;
        validate_age(new.pet_age)?;

        let pet = sqlx::query_as::<_, Pet>(
            r#"
            INSERT INTO pets (user_id, pet_name, pet_species, pet_breed, pet_age)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&new.pet_name)
        .bind(new.pet_species)
        .bind(new.pet_breed)
        .bind(new.pet_age)
        .fetch_one(pool)
        .await?;
        Ok(pet)
    }

    /// Fetch one pet by id within the account's scope. Another account's pet
    /// is indistinguishable from a missing one.
    pub async fn get_for(pool: &PgPool, user_id: i64, id: i64) -> Result<Pet, AppError> {
        let pet = sqlx::query_as::<_, Pet>("SELECT * FROM pets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        pet.ok_or_else(|| AppError::NotFound(format!("pet {}", id)))
    }

    pub async fn update_for(
        pool: &PgPool,
        user_id: i64,
        id: i64,
        patch: &PetPatch,
    ) -> Result<Pet, AppError> {
        if let Some(code) = patch.pet_species {
            validate_species(code)?;
        }
        if let Some(code) = patch.pet_breed {
            validate_breed(code)?;
        }
        if let Some(age) = patch.pet_age {
            validate_age(age)?;
        }

        let pet = sqlx::query_as::<_, Pet>(
            r#"
            UPDATE pets SET
                pet_name = COALESCE($3, pet_name),
                pet_species = COALESCE($4, pet_species),
                pet_breed = COALESCE($5, pet_breed),
                pet_age = COALESCE($6, pet_age),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(patch.pet_name.as_deref())
        .bind(patch.pet_species)
        .bind(patch.pet_breed)
        .bind(patch.pet_age)
        .fetch_optional(pool)
        .await?;
        pet.ok_or_else(|| AppError::NotFound(format!("pet {}", id)))
    }

    pub async fn delete_for(pool: &PgPool, user_id: i64, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("pet {}", id)));
        }
        Ok(())
    }
}

fn validate_species(code: i16) -> Result<(), AppError> {
    Species::from_code(code)
        .map(|_| ())
        .ok_or_else(|| AppError::Validation("pet_species must be one of 0 (cat), 1 (dog), 2 (horse)".into()))
}

fn validate_breed(code: i16) -> Result<(), AppError> {
    Breed::from_code(code)
        .map(|_| ())
        .ok_or_else(|| AppError::Validation("pet_breed must be one of 0 (bulldog), 1 (pug), 2 (boxer)".into()))
}

fn validate_age(age: i32) -> Result<(), AppError> {
    if age < 0 {
        return Err(AppError::Validation("pet_age must be non-negative".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_and_negative_age_are_rejected() {
        assert!(validate_species(3).is_err());
        assert!(validate_breed(-1).is_err());
        assert!(validate_age(-1).is_err());
        assert!(validate_species(2).is_ok());
        assert!(validate_breed(2).is_ok());
        assert!(validate_age(0).is_ok());
    }
}
