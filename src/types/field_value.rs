use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A signed decimal that must span the whole cashback string.
static CASHBACK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d*\.?\d+$").expect("cashback pattern is valid")
});

/// A loosely typed scalar as it appears in bank exports.
///
/// Exports mix real numbers, numeric strings ("+74.5", "1500") and free text
/// ("None", "150 рублей") in the same column. The value is kept as found and
/// coerced on demand by the analysis that consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(Number),
    Text(String),
    Other(Value)
}

impl FieldValue {
    /// General numeric coercion.
    ///
    /// Text is trimmed and parsed as a float (sign, exponent, `inf` and `nan`
    /// included). Returns `None` for empty or non-numeric text and for
    /// structured values.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            FieldValue::Number(number) => number.as_f64(),
            FieldValue::Text(text) => {
                let text = text.trim();

                if text.is_empty() {
                    return None;
                }

                f64::from_str(text).ok()
            }
            FieldValue::Other(_) => None
        }
    }

    /// Cashback coercion.
    ///
    /// Only text that is entirely an optionally signed decimal is accepted, so
    /// "15.5$" or "None" yield `0.0` rather than a partial match.
    pub fn to_cashback(&self) -> f64 {
        match self {
            FieldValue::Bool(_) | FieldValue::Number(_) => self.to_f64().unwrap_or(0.0),
            FieldValue::Text(text) if CASHBACK_PATTERN.is_match(text) => {
                f64::from_str(text).unwrap_or(0.0)
            }
            FieldValue::Text(_) | FieldValue::Other(_) => 0.0
        }
    }

    /// Exact decimal coercion used for money totals.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Bool(flag) => Some(if *flag { Decimal::ONE } else { Decimal::ZERO }),
            FieldValue::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Some(Decimal::from(value))
                } else if let Some(value) = number.as_u64() {
                    Some(Decimal::from(value))
                } else {
                    number.as_f64().and_then(Decimal::from_f64)
                }
            }
            FieldValue::Text(text) => {
                let text = text.trim();

                Decimal::from_str(text)
                    .or_else(|_| Decimal::from_scientific(text))
                    .ok()
            }
            FieldValue::Other(_) => None
        }
    }

    /// True when the value carries nothing: empty text.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(number) => FieldValue::Number(number),
            None => FieldValue::Text(value.to_string())
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(Number::from(value))
    }
}

impl Display for FieldValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(flag) => write!(formatter, "{flag}"),
            FieldValue::Number(number) => write!(formatter, "{number}"),
            FieldValue::Text(text) => write!(formatter, "{text}"),
            FieldValue::Other(value) => write!(formatter, "{value}")
        }
    }
}

/// Deserializes a text column that may hold any JSON scalar.
///
/// Numbers and booleans are rendered to text, `null` becomes `None`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string())
    })
}
