//! Policy records: premium tier is a small-integer code; a policy may
//! reference one quote by its identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Premium tier codes stored in `policy_premium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumTier {
    Silver = 0,
    Gold = 1,
    Platinum = 2,
}

impl PremiumTier {
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(PremiumTier::Silver),
            1 => Some(PremiumTier::Gold),
            2 => Some(PremiumTier::Platinum),
            _ => None,
        }
    }
}

/// Policy row.
#[derive(Debug, Clone, FromRow)]
pub struct Policy {
    pub id: i64,
    pub user_id: i64,
    pub policy_number: String,
    pub policy_premium: i16,
    pub policy_quate_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for POST /pet/policies. `policy_number` is generated when
/// absent; `policy_quate_number` must name an existing quote when present.
#[derive(Debug, Deserialize)]
pub struct NewPolicy {
    pub policy_number: Option<String>,
    pub policy_premium: i16,
    pub policy_quate_number: Option<String>,
}

/// Field subset serialized for policy responses.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PolicyBody {
    pub id: i64,
    pub policy_number: String,
    pub policy_premium: i16,
    pub policy_quate_number: Option<String>,
}

impl From<Policy> for PolicyBody {
    fn from(p: Policy) -> Self {
        PolicyBody {
            id: p.id,
            policy_number: p.policy_number,
            policy_premium: p.policy_premium,
            policy_quate_number: p.policy_quate_number,
        }
    }
}
