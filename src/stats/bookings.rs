//! Summary statistics over event bookings

use rust_decimal::Decimal;

use crate::models::Booking;
use crate::pricing::HOUR_BRACKETS;

use super::sales::total_of;

/// Booking counts per duration bracket.
///
/// Durations outside every bracket (zero, negative, or in the gaps between
/// 3 and 4 hours and below 1 hour) are not counted anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationBuckets {
    pub one_to_three: u64,
    pub four_to_six: u64,
    pub over_six: u64,
}

/// Totals reported by the bookings summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingSummary {
    pub total_guests: u64,
    pub total_hours: Decimal,
    pub buckets: DurationBuckets,
}

/// Count bookings per duration bracket.
///
/// Each booking lands in the first of [`HOUR_BRACKETS`] that contains its
/// hours: 1 to 3 inclusive, 4 to 6 inclusive, or more than 6.
///
/// # Arguments
/// * `bookings` - Decoded bookings, in any order
///
/// # Returns
/// Per-bracket counts; bookings that fit no bracket are left out
pub fn duration_bucket_counts(bookings: &[Booking]) -> DurationBuckets {
    let mut buckets = DurationBuckets::default();
    for booking in bookings {
        match HOUR_BRACKETS
            .iter()
            .position(|bracket| bracket.contains(booking.duration_hours))
        {
            Some(0) => buckets.one_to_three += 1,
            Some(1) => buckets.four_to_six += 1,
            Some(2) => buckets.over_six += 1,
            _ => {}
        }
    }
    buckets
}

/// Guest total, hour total and bucket counts for the bookings summary.
///
/// Hour totals saturate at `Decimal::MAX`.
pub fn summarize_bookings(bookings: &[Booking]) -> BookingSummary {
    BookingSummary {
        total_guests: bookings
            .iter()
            .fold(0u64, |sum, b| sum.saturating_add(u64::from(b.guest_count))),
        total_hours: total_of(bookings.iter().map(|b| b.duration_hours)),
        buckets: duration_bucket_counts(bookings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::TariffPolicy;
    use rust_decimal_macros::dec;

    fn booking(guests: u32, hours: Decimal) -> Booking {
        let quote = TariffPolicy::Standard.quote(guests, hours);
        Booking::priced("1010".to_string(), guests, hours, &quote)
    }

    #[test]
    fn test_bucket_boundaries() {
        let bookings = vec![
            booking(10, dec!(1)),
            booking(10, dec!(3)),
            booking(10, dec!(4)),
            booking(10, dec!(6)),
            booking(10, dec!(6.5)),
            booking(10, dec!(24)),
        ];
        assert_eq!(
            duration_bucket_counts(&bookings),
            DurationBuckets {
                one_to_three: 2,
                four_to_six: 2,
                over_six: 2
            }
        );
    }

    #[test]
    fn test_out_of_bracket_hours_are_excluded() {
        let bookings = vec![
            booking(10, dec!(0)),
            booking(10, dec!(-2)),
            booking(10, dec!(0.5)),
            booking(10, dec!(3.5)),
        ];
        assert_eq!(duration_bucket_counts(&bookings), DurationBuckets::default());
    }

    #[test]
    fn test_summary_totals() {
        let bookings = vec![
            booking(50, dec!(3)),
            booking(120, dec!(5)),
            booking(8, dec!(3.5)),
        ];
        let summary = summarize_bookings(&bookings);
        assert_eq!(summary.total_guests, 178);
        assert_eq!(summary.total_hours, dec!(11.5));
        assert_eq!(summary.buckets.one_to_three, 1);
        assert_eq!(summary.buckets.four_to_six, 1);
        assert_eq!(summary.buckets.over_six, 0);
    }

    #[test]
    fn test_summary_hours_saturate() {
        let bookings = vec![booking(1, Decimal::MAX), booking(1, Decimal::MAX)];
        let summary = summarize_bookings(&bookings);
        assert_eq!(summary.total_hours, Decimal::MAX);
        assert_eq!(summary.total_guests, 2);
        assert_eq!(summary.buckets.over_six, 2);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(summarize_bookings(&[]), BookingSummary::default());
    }
}
