//! Calculation result model
//!
//! The value stored in the cache and returned as the response body.

use serde::{Deserialize, Serialize};

use crate::calc::Operation;

/// Outcome of one calculation.
///
/// Serialized as `{"Action","X","Y","Answer","Cached"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculationResult {
    /// Operation that produced the answer
    pub action: Operation,
    pub x: f64,
    pub y: f64,
    /// Answer rounded to two decimal places
    pub answer: f64,
    /// True when served from the cache
    pub cached: bool,
}

impl CalculationResult {
    /// Creates a freshly computed (uncached) result.
    pub fn computed(action: Operation, x: f64, y: f64, answer: f64) -> Self {
        Self {
            action,
            x,
            y,
            answer,
            cached: false,
        }
    }

    /// Encodes the result as stored in the cache.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decodes a result previously written by [`CalculationResult::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
