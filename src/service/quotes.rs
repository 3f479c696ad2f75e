//! Quote store operations. Quotes carry no account reference and are not
//! ownership-scoped. The factors are stored verbatim; no premium is computed
//! from them anywhere in this service.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewQuote, Quote};

const DUPLICATE_ID: &str = "quote with this quate_id already exists";

pub struct QuoteService;

impl QuoteService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Quote>, AppError> {
        let quotes = sqlx::query_as::<_, Quote>("SELECT * FROM quotes ORDER BY quate_id")
            .fetch_all(pool)
            .await?;
        Ok(quotes)
    }

    /// Create a quote. The identifier is generated when absent; a supplied
    /// identifier must be unused. Unset factors keep their declared defaults.
    pub async fn create(pool: &PgPool, new: &NewQuote) -> Result<Quote, AppError> {
        let quate_id = match &new.quate_id {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        let quote = sqlx::query_as::<_, Quote>(
            r#"
            INSERT INTO quotes (
                quate_id, quate_base_rate, quate_geo_factor, quate_gender_factor,
                quate_breed_factor, quate_age_factor, quate_policy_limit_factor,
                quate_deductible_factor, quate_coinsurance_factor,
                quate_exam_fee, quate_wellness, quate_holistic, quate_discount
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&quate_id)
        .bind(new.quate_base_rate)
        .bind(new.quate_geo_factor)
        .bind(new.quate_gender_factor)
        .bind(new.quate_breed_factor)
        .bind(new.quate_age_factor)
        .bind(new.quate_policy_limit_factor)
        .bind(new.quate_deductible_factor)
        .bind(new.quate_coinsurance_factor)
        .bind(new.quate_exam_fee)
        .bind(new.quate_wellness)
        .bind(new.quate_holistic)
        .bind(&new.quate_discount)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::constraint(e, DUPLICATE_ID))?;
        Ok(quote)
    }

    pub async fn get(pool: &PgPool, quate_id: &str) -> Result<Quote, AppError> {
        let quote = sqlx::query_as::<_, Quote>("SELECT * FROM quotes WHERE quate_id = $1")
            .bind(quate_id)
            .fetch_optional(pool)
            .await?;
        quote.ok_or_else(|| AppError::NotFound(format!("quote {}", quate_id)))
    }
}
