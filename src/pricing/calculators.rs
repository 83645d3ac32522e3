//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no storage access.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::tiers::{rate_for, Bracket, Tier, HOUR_BRACKETS};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use ventas_fiestas::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

const STANDARD_GUEST_TIERS: [Tier; 3] = [
    Tier::new(Bracket::between(dec!(1), dec!(50)), dec!(25000)),
    Tier::new(Bracket::between(dec!(51), dec!(100)), dec!(20000)),
    Tier::new(Bracket::above(dec!(100)), dec!(15000)),
];

const STANDARD_DURATION_TIERS: [Tier; 3] = [
    Tier::new(HOUR_BRACKETS[0], dec!(50000)),
    Tier::new(HOUR_BRACKETS[1], dec!(100000)),
    Tier::new(HOUR_BRACKETS[2], dec!(200000)),
];

const VOLUME_GUEST_TIERS: [Tier; 3] = [
    Tier::new(Bracket::between(dec!(1), dec!(100)), dec!(8000)),
    Tier::new(Bracket::between(dec!(101), dec!(500)), dec!(6000)),
    Tier::new(Bracket::above(dec!(500)), dec!(4000)),
];

const VOLUME_DURATION_TIERS: [Tier; 3] = [
    Tier::new(HOUR_BRACKETS[0], dec!(100000)),
    Tier::new(HOUR_BRACKETS[1], dec!(200000)),
    Tier::new(HOUR_BRACKETS[2], dec!(300000)),
];

/// Named tariff configuration for event bookings.
///
/// Both rate tables have produced stored bookings, so neither replaces the
/// other: every booking records the policy that priced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TariffPolicy {
    /// Per-guest rates for small parties (1-50, 51-100, >100 guests)
    #[default]
    Standard,
    /// Lower per-guest rates over larger brackets (1-100, 101-500, >500 guests)
    Volume,
}

impl TariffPolicy {
    pub const ALL: [TariffPolicy; 2] = [TariffPolicy::Standard, TariffPolicy::Volume];

    pub fn as_str(&self) -> &'static str {
        match self {
            TariffPolicy::Standard => "standard",
            TariffPolicy::Volume => "volume",
        }
    }

    pub fn guest_tiers(&self) -> &'static [Tier] {
        match self {
            TariffPolicy::Standard => &STANDARD_GUEST_TIERS,
            TariffPolicy::Volume => &VOLUME_GUEST_TIERS,
        }
    }

    pub fn duration_tiers(&self) -> &'static [Tier] {
        match self {
            TariffPolicy::Standard => &STANDARD_DURATION_TIERS,
            TariffPolicy::Volume => &VOLUME_DURATION_TIERS,
        }
    }

    /// Per-guest rate for the given party size
    pub fn unit_rate(&self, guest_count: u32) -> Decimal {
        rate_for(self.guest_tiers(), Decimal::from(guest_count))
    }

    /// Flat fee for the event length
    pub fn duration_fee(&self, hours: Decimal) -> Decimal {
        rate_for(self.duration_tiers(), hours)
    }

    /// guest_count × unit_rate(guest_count) + duration_fee(hours)
    pub fn total(&self, guest_count: u32, hours: Decimal) -> Decimal {
        self.quote(guest_count, hours).total
    }

    /// Price a booking and keep the breakdown.
    ///
    /// # Arguments
    /// * `guest_count` - Number of guests; the whole party pays the rate of the
    ///   guest tier it falls in
    /// * `hours` - Event length; fractional hours between duration tiers pay no fee
    ///
    /// # Returns
    /// The rate, the guest charge, the duration fee, and their exact sum
    pub fn quote(&self, guest_count: u32, hours: Decimal) -> TariffQuote {
        let unit_rate = self.unit_rate(guest_count);
        let guest_charge = Decimal::from(guest_count) * unit_rate;
        let duration_fee = self.duration_fee(hours);

        TariffQuote {
            policy: *self,
            unit_rate,
            guest_charge,
            duration_fee,
            total: guest_charge + duration_fee,
        }
    }
}

impl fmt::Display for TariffPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised policy name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tariff policy '{0}' (expected 'standard' or 'volume')")]
pub struct UnknownPolicy(pub String);

impl FromStr for TariffPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "a" => Ok(TariffPolicy::Standard),
            "volume" | "b" => Ok(TariffPolicy::Volume),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Breakdown of a booking price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffQuote {
    pub policy: TariffPolicy,
    pub unit_rate: Decimal,
    pub guest_charge: Decimal,
    pub duration_fee: Decimal,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(4));
        assert_eq!(round_money(dec!(5.5), 0), dec!(6));
    }

    #[test]
    fn test_round_money_decimal_places() {
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_money(dec!(2.35), 1), dec!(2.4));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(1333333.3333), 2), dec!(1333333.33));
    }

    // ==================== standard policy ====================

    #[test]
    fn test_standard_unit_rate_tiers() {
        let policy = TariffPolicy::Standard;
        for guests in [1, 25, 50] {
            assert_eq!(policy.unit_rate(guests), dec!(25000), "guests={guests}");
        }
        for guests in [51, 75, 100] {
            assert_eq!(policy.unit_rate(guests), dec!(20000), "guests={guests}");
        }
        for guests in [101, 1000] {
            assert_eq!(policy.unit_rate(guests), dec!(15000), "guests={guests}");
        }
        assert_eq!(policy.unit_rate(0), dec!(0));
    }

    #[test]
    fn test_standard_duration_fee_tiers() {
        let policy = TariffPolicy::Standard;
        assert_eq!(policy.duration_fee(dec!(1)), dec!(50000));
        assert_eq!(policy.duration_fee(dec!(3)), dec!(50000));
        assert_eq!(policy.duration_fee(dec!(4)), dec!(100000));
        assert_eq!(policy.duration_fee(dec!(6)), dec!(100000));
        assert_eq!(policy.duration_fee(dec!(6.5)), dec!(200000));
        assert_eq!(policy.duration_fee(dec!(12)), dec!(200000));
        assert_eq!(policy.duration_fee(dec!(0)), dec!(0));
    }

    #[test]
    fn test_standard_total_fifty_guests_three_hours() {
        let total = TariffPolicy::Standard.total(50, dec!(3));
        assert_eq!(total, dec!(1300000)); // 50 * 25000 + 50000
    }

    #[test]
    fn test_standard_total_crosses_guest_tier() {
        // 51 * 20000 + 100000
        assert_eq!(TariffPolicy::Standard.total(51, dec!(5)), dec!(1120000));
        // 150 * 15000 + 200000
        assert_eq!(TariffPolicy::Standard.total(150, dec!(8)), dec!(2450000));
    }

    #[test]
    fn test_fractional_hours_between_brackets_have_no_fee() {
        // 3.5h sits between the 1-3 and 4-6 brackets
        let quote = TariffPolicy::Standard.quote(10, dec!(3.5));
        assert_eq!(quote.duration_fee, dec!(0));
        assert_eq!(quote.total, dec!(250000));
    }

    // ==================== volume policy ====================

    #[test]
    fn test_volume_unit_rate_tiers() {
        let policy = TariffPolicy::Volume;
        assert_eq!(policy.unit_rate(1), dec!(8000));
        assert_eq!(policy.unit_rate(100), dec!(8000));
        assert_eq!(policy.unit_rate(101), dec!(6000));
        assert_eq!(policy.unit_rate(500), dec!(6000));
        assert_eq!(policy.unit_rate(501), dec!(4000));
        assert_eq!(policy.unit_rate(0), dec!(0));
    }

    #[test]
    fn test_volume_duration_fee_tiers() {
        let policy = TariffPolicy::Volume;
        assert_eq!(policy.duration_fee(dec!(2)), dec!(100000));
        assert_eq!(policy.duration_fee(dec!(5)), dec!(200000));
        assert_eq!(policy.duration_fee(dec!(7)), dec!(300000));
    }

    #[test]
    fn test_volume_total() {
        // 50 * 8000 + 100000
        assert_eq!(TariffPolicy::Volume.total(50, dec!(3)), dec!(500000));
        // 600 * 4000 + 300000
        assert_eq!(TariffPolicy::Volume.total(600, dec!(10)), dec!(2700000));
    }

    #[test]
    fn test_total_matches_formula_for_both_policies() {
        for policy in TariffPolicy::ALL {
            for guests in [1u32, 50, 51, 100, 101, 500, 501] {
                for hours in [dec!(1), dec!(3), dec!(4), dec!(6), dec!(7)] {
                    let expected = Decimal::from(guests) * policy.unit_rate(guests)
                        + policy.duration_fee(hours);
                    assert_eq!(policy.total(guests, hours), expected);
                }
            }
        }
    }

    #[test]
    fn test_quote_breakdown() {
        let quote = TariffPolicy::Standard.quote(80, dec!(4));
        assert_eq!(quote.policy, TariffPolicy::Standard);
        assert_eq!(quote.unit_rate, dec!(20000));
        assert_eq!(quote.guest_charge, dec!(1600000));
        assert_eq!(quote.duration_fee, dec!(100000));
        assert_eq!(quote.total, dec!(1700000));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("standard".parse::<TariffPolicy>(), Ok(TariffPolicy::Standard));
        assert_eq!(" Volume ".parse::<TariffPolicy>(), Ok(TariffPolicy::Volume));
        assert_eq!("b".parse::<TariffPolicy>(), Ok(TariffPolicy::Volume));
        assert!("premium".parse::<TariffPolicy>().is_err());
    }
}
