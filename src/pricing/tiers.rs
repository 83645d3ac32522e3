//! Tier tables for event booking tariffs.
//!
//! A tier maps a bracket of guest counts or hours to a fixed rate. Lookups
//! walk the table in order and take the first bracket that contains the value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Numeric range a tier applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bracket {
    /// Inclusive on both ends
    Between {
        #[serde(with = "rust_decimal::serde::str")]
        min: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        max: Decimal,
    },
    /// Strictly greater than `min`
    Above {
        #[serde(with = "rust_decimal::serde::str")]
        min: Decimal,
    },
}

impl Bracket {
    pub const fn between(min: Decimal, max: Decimal) -> Self {
        Bracket::Between { min, max }
    }

    pub const fn above(min: Decimal) -> Self {
        Bracket::Above { min }
    }

    /// Check whether the value falls inside this bracket
    pub fn contains(&self, value: Decimal) -> bool {
        match *self {
            Bracket::Between { min, max } => value >= min && value <= max,
            Bracket::Above { min } => value > min,
        }
    }
}

/// A bracket paired with the rate charged inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub bracket: Bracket,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
}

impl Tier {
    pub const fn new(bracket: Bracket, rate: Decimal) -> Self {
        Self { bracket, rate }
    }
}

/// Rate of the first tier containing `value`, or zero when none does.
pub fn rate_for(tiers: &[Tier], value: Decimal) -> Decimal {
    tiers
        .iter()
        .find(|tier| tier.bracket.contains(value))
        .map(|tier| tier.rate)
        .unwrap_or(Decimal::ZERO)
}

/// Hour brackets shared by every duration fee table and the summary buckets.
pub const HOUR_BRACKETS: [Bracket; 3] = [
    Bracket::between(dec!(1), dec!(3)),
    Bracket::between(dec!(4), dec!(6)),
    Bracket::above(dec!(6)),
];
