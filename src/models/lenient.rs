//! Forgiving field decoders for documents read back from the store.
//!
//! Stored documents are not guaranteed to have clean numeric fields. A missing,
//! null, or non-numeric value decodes as zero instead of failing the whole
//! collection read. Numeric strings are accepted.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Parse a decimal from plain or scientific notation
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
}

/// Decimal value of a JSON number
pub fn number_to_decimal(number: &Number) -> Option<Decimal> {
    if let Some(i) = number.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Some(Decimal::from(u));
    }
    parse_decimal(&number.to_string())
}

/// Coerce any JSON value to a decimal, numbers and numeric strings only
pub fn value_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => number_to_decimal(n),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Decimal field, zero when unusable
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_decimal(&value).unwrap_or(Decimal::ZERO))
}

/// Whole-number field, zero when unusable, fractional, or out of range for `T`
pub fn integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    let value = Value::deserialize(deserializer)?;
    let whole = value_to_decimal(&value)
        .filter(|d| d.fract().is_zero())
        .and_then(|d| d.to_i64());
    Ok(whole.and_then(|i| T::try_from(i).ok()).unwrap_or_default())
}
