//! Pricing engine module for event bookings.
//!
//! Provides the tiered tariff calculations used to derive booking totals.

pub mod calculators;
pub mod tiers;

// Re-export commonly used items
pub use calculators::{round_money, TariffPolicy, TariffQuote, UnknownPolicy};
pub use tiers::{Bracket, Tier, HOUR_BRACKETS};
