//! Event booking records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::{TariffPolicy, TariffQuote};

use super::lenient;
use super::StoredDocument;

/// Name of the store collection holding bookings
pub const BOOKINGS_COLLECTION: &str = "bookings";

/// A booking as persisted in the `bookings` collection.
///
/// `total_amount` is always computed server-side from the guest count and
/// duration by the recorded `policy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub payer_id: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub guest_count: u32,
    #[serde(
        default,
        deserialize_with = "lenient::decimal",
        serialize_with = "rust_decimal::serde::str::serialize"
    )]
    pub duration_hours: Decimal,
    #[serde(
        default,
        deserialize_with = "lenient::decimal",
        serialize_with = "rust_decimal::serde::str::serialize"
    )]
    pub total_amount: Decimal,
    #[serde(default)]
    pub policy: TariffPolicy,
}

impl Booking {
    /// Build a priced booking from already validated input
    pub fn priced(payer_id: String, guest_count: u32, duration_hours: Decimal, quote: &TariffQuote) -> Self {
        Self {
            payer_id,
            guest_count,
            duration_hours,
            total_amount: quote.total,
            policy: quote.policy,
        }
    }
}

/// Booking together with its store metadata
pub type BookingRecord = StoredDocument<Booking>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_priced_booking_takes_quote_total() {
        let quote = TariffPolicy::Standard.quote(50, dec!(3));
        let booking = Booking::priced("12345678".to_string(), 50, dec!(3), &quote);
        assert_eq!(booking.total_amount, dec!(1300000));
        assert_eq!(booking.policy, TariffPolicy::Standard);
    }

    #[test]
    fn test_booking_round_trips_through_document_json() {
        let quote = TariffPolicy::Volume.quote(120, dec!(4.5));
        let booking = Booking::priced("abc".to_string(), 120, dec!(4.5), &quote);
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["policy"], json!("volume"));
        assert_eq!(value["totalAmount"], json!("720000"));

        let back: Booking = serde_json::from_value(value).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn test_legacy_document_without_policy_is_standard() {
        let booking: Booking = serde_json::from_value(json!({
            "payerId": "1010",
            "guestCount": "20",
            "durationHours": 2,
            "totalAmount": 550000
        }))
        .unwrap();
        assert_eq!(booking.policy, TariffPolicy::Standard);
        assert_eq!(booking.guest_count, 20);
        assert_eq!(booking.total_amount, dec!(550000));
    }

    #[test]
    fn test_booking_without_payer_fails() {
        let result: Result<Booking, _> = serde_json::from_value(json!({"guestCount": 3}));
        assert!(result.is_err());
    }
}
