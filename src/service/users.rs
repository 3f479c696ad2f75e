//! Account registration, authentication, and profile operations.

use sqlx::PgPool;

use crate::auth::{password, token};
use crate::error::AppError;
use crate::models::{Credentials, NewUser, ProfilePatch, User};
use crate::service::validation;

const DUPLICATE_EMAIL: &str = "user with this email already exists";

pub struct UserService;

impl UserService {
    /// Create an account. Validates email and password before touching the
    /// store, lower-cases the email, and hashes the password; nothing is
    /// persisted when validation fails.
    pub async fn register(pool: &PgPool, new: &NewUser) -> Result<User, AppError> {
        validation::validate_email(&new.email)?;
        validation::validate_password(&new.password)?;
        let email = validation::normalize_email(&new.email);
        let password_hash = password::hash_password(&new.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, name, phone_number, address_1, address_2, city, zipcode, state)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(&new.name)
        .bind(&new.phone_number)
        .bind(&new.address_1)
        .bind(&new.address_2)
        .bind(&new.city)
        .bind(&new.zipcode)
        .bind(&new.state)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::constraint(e, DUPLICATE_EMAIL))?;
        Ok(user)
    }

    /// Verify credentials and return the account's API token. Unknown email,
    /// wrong password, and inactive accounts fail with the same response.
    pub async fn authenticate(pool: &PgPool, creds: &Credentials) -> Result<String, AppError> {
        let email = validation::normalize_email(&creds.email);
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1 AND is_active")
            .bind(&email)
            .fetch_optional(pool)
            .await?;
        let Some(user) = user else {
            return Err(bad_credentials());
        };
        if creds.password.is_empty()
            || !password::verify_password(&creds.password, &user.password_hash)?
        {
            return Err(bad_credentials());
        }
        token::issue_for(pool, user.id).await
    }

    /// Merge provided profile fields into the account. Email is re-normalized
    /// and stays unique; a new password is validated and re-hashed.
    pub async fn update_profile(
        pool: &PgPool,
        user_id: i64,
        patch: &ProfilePatch,
    ) -> Result<User, AppError> {
        let email = match &patch.email {
            Some(e) => {
                validation::validate_email(e)?;
                Some(validation::normalize_email(e))
            }
            None => None,
        };
        let password_hash = match &patch.password {
            Some(p) => {
                validation::validate_password(p)?;
                Some(password::hash_password(p)?)
            }
            None => None,
        };

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                password_hash = COALESCE($3, password_hash),
                name = COALESCE($4, name),
                phone_number = COALESCE($5, phone_number),
                address_1 = COALESCE($6, address_1),
                address_2 = COALESCE($7, address_2),
                city = COALESCE($8, city),
                zipcode = COALESCE($9, zipcode),
                state = COALESCE($10, state),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(password_hash)
        .bind(patch.name.as_deref())
        .bind(patch.phone_number.as_deref())
        .bind(patch.address_1.as_deref())
        .bind(patch.address_2.as_deref())
        .bind(patch.city.as_deref())
        .bind(patch.zipcode.as_deref())
        .bind(patch.state.as_deref())
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::constraint(e, DUPLICATE_EMAIL))?;
        user.ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))
    }
}

fn bad_credentials() -> AppError {
    AppError::BadRequest("unable to authenticate with provided credentials".into())
}
