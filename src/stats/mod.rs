//! Aggregations used by the summary endpoints.
//!
//! Pure folds over decoded records; nothing here touches the store.

pub mod bookings;
pub mod sales;

pub use bookings::{duration_bucket_counts, summarize_bookings, BookingSummary, DurationBuckets};
pub use sales::{
    average_by_category, min_by_category, peak_month_in_year, sum_by_month, total_of,
    CategoryAverages, MonthTotal,
};
