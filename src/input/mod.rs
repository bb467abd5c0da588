use serde::{Deserialize, Serialize};

use crate::errors::CopycraftError;

/// The three validated user inputs. Immutable once constructed; every field
/// has already passed validation, so the orchestrator can use them as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInput {
    pub niche: String,
    pub price: f64,
    pub goal: f64,
}

impl FormInput {
    pub fn new(niche: &str, price: f64, goal: f64) -> Result<Self, CopycraftError> {
        let niche = niche.trim();
        if niche.is_empty() {
            return Err(CopycraftError::Validation("niche must not be empty".into()));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(CopycraftError::Validation(
                "price must be a positive number".into(),
            ));
        }
        if !goal.is_finite() || goal <= 0.0 {
            return Err(CopycraftError::Validation(
                "revenue goal must be a positive number".into(),
            ));
        }
        Ok(Self {
            niche: niche.to_string(),
            price,
            goal,
        })
    }
}
