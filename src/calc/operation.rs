//! Operation Module
//!
//! Describes each supported operation: its name, validation rule and
//! arithmetic function. The API registers one route per entry of
//! [`Operation::ALL`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{arithmetic, KEY_DELIMITER};
use crate::error::{CalcError, Result};

// == Operation ==
/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in route registration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Wire name, also used as the route segment and in cache keys.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Route path for this operation, e.g. `/add`.
    pub fn route(self) -> String {
        format!("/{}", self.name())
    }

    // == Validate ==
    /// Rejects operands this operation is undefined for.
    pub fn validate(self, _x: f64, y: f64) -> Result<()> {
        match self {
            // -0.0 == 0.0, so both zeros are rejected
            Operation::Divide if y == 0.0 => Err(CalcError::InvalidArgument(
                "Missing/wrong format for key parameter Y: division by zero".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Runs the arithmetic function without validation.
    pub fn apply(self, x: f64, y: f64) -> f64 {
        let f: fn(f64, f64) -> f64 = match self {
            Operation::Add => arithmetic::add,
            Operation::Subtract => arithmetic::subtract,
            Operation::Multiply => arithmetic::multiply,
            Operation::Divide => arithmetic::divide,
        };
        f(x, y)
    }

    // == Evaluate ==
    /// Validates the operands, computes, and rejects results that overflow
    /// to infinity since they have no JSON representation.
    pub fn evaluate(self, x: f64, y: f64) -> Result<f64> {
        self.validate(x, y)?;
        let answer = self.apply(x, y);
        if !answer.is_finite() {
            return Err(CalcError::InvalidArgument(format!(
                "Result of {:e} {} {:e} is out of range",
                x, self, y
            )));
        }
        Ok(answer)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalcError::InvalidArgument(format!("Unknown operation: {}", s)))
    }
}

// == Cache Key ==
/// Builds the memoization key `"<x>:<operation>:<y>"`.
///
/// Operands use the shortest round-trip float formatting, which never
/// contains the delimiter, so distinct inputs cannot share a key.
/// Operand order is kept, so `2:add:3` and `3:add:2` are different keys.
pub fn cache_key(x: f64, op: Operation, y: f64) -> String {
    format!("{x}{d}{op}{d}{y}", d = KEY_DELIMITER)
}
