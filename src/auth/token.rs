//! Opaque API tokens. One token per account: repeated logins return the
//! existing token rather than minting a new one.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;

/// Generate a new opaque token value (64 hex chars).
pub(crate) fn new_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Return the account's token, creating it on first login. The upsert keeps
/// concurrent logins from racing: the loser of the insert gets the winner's
/// token back.
pub async fn issue_for(pool: &PgPool, user_id: i64) -> Result<String, AppError> {
    let (token,): (String,) = sqlx::query_as(
        r#"
        INSERT INTO api_tokens (token, user_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING token
        "#,
    )
    .bind(new_token())
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(token)
}

/// Resolve a presented token to its active account, or None.
pub async fn user_for_token(pool: &PgPool, token: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT u.* FROM users u
        JOIN api_tokens t ON t.user_id = u.id
        WHERE t.token = $1 AND u.is_active
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}
