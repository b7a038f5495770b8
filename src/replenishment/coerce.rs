//! Numeric coercion for loosely-typed product fields.
//!
//! Form input reaches the console as JSON numbers, numeric strings, blanks or not at
//! all. Every numeric field goes through [`coerce_number`], which never produces NaN
//! or infinity: anything that is not a finite number falls back to `0.0` and is
//! reported as [`InventoryError::InvalidNumericInput`].

use crate::replenishment::error::InventoryError;
use serde_json::Value;
use tracing::warn;

/// Value substituted for a missing or unparseable numeric field.
pub const NUMERIC_FALLBACK: f64 = 0.0;

/// A field that could not be read as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericIssue {
    pub field: &'static str,
    /// The raw input, rendered as JSON (`"abc"`, `null`, …); `None` when absent.
    pub raw: Option<String>,
}

/// Outcome of coercing one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    pub value: f64,
    pub issue: Option<NumericIssue>,
}

/// Strict parse: a finite number or an error naming the field.
pub fn parse_number(field: &str, value: Option<&Value>) -> Result<f64, InventoryError> {
    let invalid = |raw: String| InventoryError::InvalidNumericInput {
        field: field.to_string(),
        value: raw,
    };

    let parsed = match value {
        None | Some(Value::Null) => return Err(invalid("<missing>".to_string())),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(other) => return Err(invalid(other.to_string())),
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(invalid(value.map(Value::to_string).unwrap_or_default())),
    }
}

/// Lenient parse: falls back to [`NUMERIC_FALLBACK`] and logs a warning.
pub fn coerce_number(field: &'static str, value: Option<&Value>) -> Coerced {
    match parse_number(field, value) {
        Ok(value) => Coerced { value, issue: None },
        Err(e) => {
            warn!(field, error = %e, fallback = NUMERIC_FALLBACK, "Coercing numeric field");
            Coerced {
                value: NUMERIC_FALLBACK,
                issue: Some(NumericIssue {
                    field,
                    raw: value.map(Value::to_string),
                }),
            }
        }
    }
}
