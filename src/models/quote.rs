//! Quote records: a bag of rating factors keyed by a generated identifier.
//! Nothing in this service computes a premium from the factors; they are
//! stored and returned as-is.
//!
//! The `quate` spelling is the historical wire name and is kept verbatim on
//! routes, fields, and columns for client compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Quote row.
#[derive(Debug, Clone, FromRow)]
pub struct Quote {
    pub quate_id: String,
    pub quate_base_rate: f64,
    pub quate_geo_factor: f64,
    pub quate_gender_factor: f64,
    pub quate_breed_factor: f64,
    pub quate_age_factor: f64,
    pub quate_policy_limit_factor: f64,
    pub quate_deductible_factor: f64,
    pub quate_coinsurance_factor: f64,
    pub quate_exam_fee: bool,
    pub quate_wellness: bool,
    pub quate_holistic: bool,
    pub quate_discount: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_factor() -> f64 {
    1.0
}

/// Create payload for POST /quate/quates. Unset factors take the declared
/// defaults: base rate 0.0, multiplicative factors 1.0, endorsement flags off.
/// The identifier is generated when absent and must be unique when supplied.
#[derive(Debug, Deserialize)]
pub struct NewQuote {
    pub quate_id: Option<String>,
    #[serde(default)]
    pub quate_base_rate: f64,
    #[serde(default = "default_factor")]
    pub quate_geo_factor: f64,
    #[serde(default = "default_factor")]
    pub quate_gender_factor: f64,
    #[serde(default = "default_factor")]
    pub quate_breed_factor: f64,
    #[serde(default = "default_factor")]
    pub quate_age_factor: f64,
    #[serde(default = "default_factor")]
    pub quate_policy_limit_factor: f64,
    #[serde(default = "default_factor")]
    pub quate_deductible_factor: f64,
    #[serde(default = "default_factor")]
    pub quate_coinsurance_factor: f64,
    #[serde(default)]
    pub quate_exam_fee: bool,
    #[serde(default)]
    pub quate_wellness: bool,
    #[serde(default)]
    pub quate_holistic: bool,
    #[serde(default)]
    pub quate_discount: String,
}

/// Field subset serialized for quote responses.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuoteBody {
    pub quate_id: String,
    pub quate_base_rate: f64,
    pub quate_geo_factor: f64,
    pub quate_gender_factor: f64,
    pub quate_breed_factor: f64,
    pub quate_age_factor: f64,
    pub quate_policy_limit_factor: f64,
    pub quate_deductible_factor: f64,
    pub quate_coinsurance_factor: f64,
    pub quate_exam_fee: bool,
    pub quate_wellness: bool,
    pub quate_holistic: bool,
    pub quate_discount: String,
}

impl From<Quote> for QuoteBody {
    fn from(q: Quote) -> Self {
        QuoteBody {
            quate_id: q.quate_id,
            quate_base_rate: q.quate_base_rate,
            quate_geo_factor: q.quate_geo_factor,
            quate_gender_factor: q.quate_gender_factor,
            quate_breed_factor: q.quate_breed_factor,
            quate_age_factor: q.quate_age_factor,
            quate_policy_limit_factor: q.quate_policy_limit_factor,
            quate_deductible_factor: q.quate_deductible_factor,
            quate_coinsurance_factor: q.quate_coinsurance_factor,
            quate_exam_fee: q.quate_exam_fee,
            quate_wellness: q.quate_wellness,
            quate_holistic: q.quate_holistic,
            quate_discount: q.quate_discount,
        }
    }
}
