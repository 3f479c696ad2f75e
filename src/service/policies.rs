//! Policy store operations, scoped to the owning account. Lists are ordered
//! by policy number.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewPolicy, Policy, PremiumTier};

const DUPLICATE_NUMBER: &str = "policy with this policy_number already exists";

pub struct PolicyService;

impl PolicyService {
    pub async fn list_for(pool: &PgPool, user_id: i64) -> Result<Vec<Policy>, AppError> {
        let policies = sqlx::query_as::<_, Policy>(
            "SELECT * FROM policies WHERE user_id = $1 ORDER BY policy_number",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(policies)
    }

    /// Caller's policies referencing one quote.
    pub async fn filter_by_quote(
        pool: &PgPool,
        user_id: i64,
        quate_id: &str,
    ) -> Result<Vec<Policy>, AppError> {
        let policies = sqlx::query_as::<_, Policy>(
            "SELECT * FROM policies WHERE user_id = $1 AND policy_quate_number = $2 ORDER BY policy_number",
        )
        .bind(user_id)
        .bind(quate_id)
        .fetch_all(pool)
        .await?;
        Ok(policies)
    }

    /// Create a policy. The premium tier must be a known code; the policy
    /// number is generated when absent. A concurrent claim of the same number
    /// loses to the unique constraint and surfaces as a validation failure.
    pub async fn create(pool: &PgPool, user_id: i64, new: &NewPolicy) -> Result<Policy, AppError> {
        PremiumTier::from_code(new.policy_premium).ok_or_else(|| {
            AppError::Validation(
                "policy_premium must be one of 0 (silver), 1 (gold), 2 (platinum)".into(),
            )
        })?;
        let number = match &new.policy_number {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => generate_policy_number(),
        };

        let policy = sqlx::query_as::<_, Policy>(
            r#"
            INSERT INTO policies (user_id, policy_number, policy_premium, policy_quate_number)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&number)
        .bind(new.policy_premium)
        .bind(new.policy_quate_number.as_deref())
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::constraint(e, DUPLICATE_NUMBER))?;
        Ok(policy)
    }

    pub async fn get_for(pool: &PgPool, user_id: i64, id: i64) -> Result<Policy, AppError> {
        let policy =
            sqlx::query_as::<_, Policy>("SELECT * FROM policies WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        policy.ok_or_else(|| AppError::NotFound(format!("policy {}", id)))
    }
}

/// Default policy number: `PA-` plus 8 hex chars.
fn generate_policy_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("PA-{}", id[..8].to_uppercase())
}
