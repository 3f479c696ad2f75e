//! Startup DDL for application tables. Order follows foreign-key dependencies:
//! users and quotes first, then api_tokens, pets, and policies.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        name TEXT NOT NULL DEFAULT '',
        phone_number TEXT NOT NULL DEFAULT '0000000000',
        address_1 TEXT NOT NULL DEFAULT '',
        address_2 TEXT NOT NULL DEFAULT '',
        city TEXT NOT NULL DEFAULT '',
        zipcode TEXT NOT NULL DEFAULT '00000',
        state TEXT NOT NULL DEFAULT '',
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        is_staff BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS quotes (
        quate_id TEXT PRIMARY KEY,
        quate_base_rate DOUBLE PRECISION NOT NULL DEFAULT 0,
        quate_geo_factor DOUBLE PRECISION NOT NULL DEFAULT 1,
        quate_gender_factor DOUBLE PRECISION NOT NULL DEFAULT 1,
        quate_breed_factor DOUBLE PRECISION NOT NULL DEFAULT 1,
        quate_age_factor DOUBLE PRECISION NOT NULL DEFAULT 1,
        quate_policy_limit_factor DOUBLE PRECISION NOT NULL DEFAULT 1,
        quate_deductible_factor DOUBLE PRECISION NOT NULL DEFAULT 1,
        quate_coinsurance_factor DOUBLE PRECISION NOT NULL DEFAULT 1,
        quate_exam_fee BOOLEAN NOT NULL DEFAULT FALSE,
        quate_wellness BOOLEAN NOT NULL DEFAULT FALSE,
        quate_holistic BOOLEAN NOT NULL DEFAULT FALSE,
        quate_discount TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS api_tokens (
        token TEXT PRIMARY KEY,
        user_id BIGINT NOT NULL UNIQUE REFERENCES users (id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pets (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        pet_name TEXT NOT NULL,
        pet_species SMALLINT NOT NULL DEFAULT 0,
        pet_breed SMALLINT NOT NULL DEFAULT 0,
        pet_age INTEGER NOT NULL CHECK (pet_age >= 0),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS policies (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        policy_number TEXT NOT NULL UNIQUE,
        policy_premium SMALLINT NOT NULL DEFAULT 0 CHECK (policy_premium BETWEEN 0 AND 2),
        policy_quate_number TEXT REFERENCES quotes (quate_id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS pets_user_id_idx ON pets (user_id)",
    "CREATE INDEX IF NOT EXISTS policies_user_id_idx ON policies (user_id)",
    "CREATE INDEX IF NOT EXISTS policies_quate_idx ON policies (policy_quate_number)",
];

/// Apply schema DDL. Idempotent (IF NOT EXISTS throughout); safe to run on
/// every startup.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for sql in DDL {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}
