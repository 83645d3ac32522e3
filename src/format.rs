//! Locale-grouped rendering of monetary amounts.
//!
//! Amounts are rounded to whole units (midpoint away from zero, the same
//! default as `Intl.NumberFormat`) and grouped in thousands.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;

/// Locales the formatter knows how to group for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberLocale {
    #[default]
    EsCo,
    EnUs,
    DeDe,
    FrFr,
}

impl NumberLocale {
    pub fn tag(&self) -> &'static str {
        match self {
            NumberLocale::EsCo => "es-CO",
            NumberLocale::EnUs => "en-US",
            NumberLocale::DeDe => "de-DE",
            NumberLocale::FrFr => "fr-FR",
        }
    }

    pub fn grouping_separator(&self) -> char {
        match self {
            NumberLocale::EsCo | NumberLocale::DeDe => '.',
            NumberLocale::EnUs => ',',
            NumberLocale::FrFr => '\u{202f}',
        }
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported number locale '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for NumberLocale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "es-co" | "es" => Ok(NumberLocale::EsCo),
            "en-us" | "en" => Ok(NumberLocale::EnUs),
            "de-de" | "de" => Ok(NumberLocale::DeDe),
            "fr-fr" | "fr" => Ok(NumberLocale::FrFr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Render an amount as a grouped integer string, e.g. `1.300.000` for es-CO.
pub fn format_amount(amount: Decimal, locale: NumberLocale) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let separator = locale.grouping_separator();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
