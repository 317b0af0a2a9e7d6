use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{AppError, AppResult};

pub type FruitId = u64;

/// A stored fruit. Immutable once the store hands it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: FruitId,
    pub name: String,
    /// Kept as the JSON number that was sent, so `3` stays `3` on the wire.
    pub price: Number,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Candidate body for `POST /fruits`.
///
/// Decoding already rejects missing fields, wrong types and unknown keys;
/// `validate` covers what the type system can't.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateFruit {
    pub name: String,
    pub price: Number,
}

impl CreateFruit {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }
        Ok(())
    }
}
