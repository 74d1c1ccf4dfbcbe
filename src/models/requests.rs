//! Request DTOs for the calculator API
//!
//! Defines the query-string operands accepted by every operation route.

use crate::error::{CalcError, Result};

/// Query string of an operation request (`?x=<num>&y=<num>`)
///
/// Both fields are kept as raw strings so that a missing or malformed
/// operand produces our own 400 message instead of the extractor's.
#[derive(Debug, Clone, Default)]
pub struct OperandQuery {
    pub x: Option<String>,
    pub y: Option<String>,
}

impl OperandQuery {
    /// Collects operands from decoded query pairs.
    ///
    /// The first occurrence of a repeated parameter wins; unknown
    /// parameters are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "x" => &mut query.x,
                "y" => &mut query.y,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Parses both operands.
    pub fn parse(&self) -> Result<(f64, f64)> {
        let x = parse_operand(self.x.as_deref(), "X")?;
        let y = parse_operand(self.y.as_deref(), "Y")?;
        Ok((x, y))
    }
}

/// Accepts any decimal `f64` literal except NaN and infinities.
fn parse_operand(raw: Option<&str>, name: &str) -> Result<f64> {
    raw.and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            CalcError::InvalidArgument(format!("Missing/wrong format for key parameter {}", name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(x: Option<&str>, y: Option<&str>) -> OperandQuery {
        OperandQuery {
            x: x.map(String::from),
            y: y.map(String::from),
        }
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let q = OperandQuery::from_pairs(pairs(&[("x", "2"), ("x", "5"), ("y", "3"), ("y", "9")]));
        assert_eq!(q.parse().unwrap(), (2.0, 3.0));
    }

    #[test]
    fn test_from_pairs_ignores_unknown() {
        let q = OperandQuery::from_pairs(pairs(&[("z", "1"), ("y", "3")]));
        assert!(q.x.is_none());
        assert_eq!(q.y.as_deref(), Some("3"));
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(query(Some("13.2"), Some("-8.1")).parse().unwrap(), (13.2, -8.1));
        assert_eq!(query(Some("1e3"), Some("2")).parse().unwrap(), (1000.0, 2.0));
    }

    #[test]
    fn test_missing_x() {
        let err = query(None, Some("3")).parse().unwrap_err();
        assert!(err.to_string().contains("parameter X"));
    }

    #[test]
    fn test_malformed_y() {
        let err = query(Some("2"), Some("foo")).parse().unwrap_err();
        assert!(err.to_string().contains("parameter Y"));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(query(Some("inf"), Some("1")).parse().is_err());
        assert!(query(Some("1"), Some("NaN")).parse().is_err());
        assert!(query(Some(""), Some("1")).parse().is_err());
    }
}
