//! Response DTOs for the record endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{format_amount, NumberLocale};
use crate::models::{BookingRecord, PropertyType, Sale};
use crate::pricing::{TariffPolicy, Tier};
use crate::stats::{BookingSummary, CategoryAverages, MonthTotal};

/// Stored booking plus its locale-formatted total
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(flatten)]
    pub record: BookingRecord,
    pub formatted_total: String,
}

impl BookingResponse {
    pub fn new(record: BookingRecord, locale: NumberLocale) -> Self {
        let formatted_total = format_amount(record.data.total_amount, locale);
        Self {
            record,
            formatted_total,
        }
    }
}

/// Response for `GET /records/sum`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSumResponse {
    pub month: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub formatted_total: String,
}

impl MonthSumResponse {
    pub fn new(month: u32, total: Decimal, locale: NumberLocale) -> Self {
        Self {
            month,
            total,
            formatted_total: format_amount(total, locale),
        }
    }
}

/// Response for `GET /records/averages`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragesResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub house: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub apartment: Decimal,
    pub formatted_house: String,
    pub formatted_apartment: String,
}

impl AveragesResponse {
    pub fn new(averages: CategoryAverages, locale: NumberLocale) -> Self {
        Self {
            house: averages.house,
            apartment: averages.apartment,
            formatted_house: format_amount(averages.house, locale),
            formatted_apartment: format_amount(averages.apartment, locale),
        }
    }
}

/// Response for `GET /records/peak-month`; `month` is null when the year has no sales
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakMonthResponse {
    pub year: i32,
    pub month: Option<u32>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub formatted_total: String,
}

impl PeakMonthResponse {
    pub fn new(year: i32, peak: Option<MonthTotal>, locale: NumberLocale) -> Self {
        let total = peak.map(|p| p.total).unwrap_or(Decimal::ZERO);
        Self {
            year,
            month: peak.map(|p| p.month),
            total,
            formatted_total: format_amount(total, locale),
        }
    }
}

/// Response for `GET /records/min-by-category`; fields are null for an empty category
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinByCategoryResponse {
    pub category: PropertyType,
    pub year: Option<i32>,
    pub month: Option<u32>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub min: Option<Decimal>,
    pub formatted_min: Option<String>,
}

impl MinByCategoryResponse {
    pub fn new(category: PropertyType, lowest: Option<&Sale>, locale: NumberLocale) -> Self {
        Self {
            category,
            year: lowest.map(|s| s.year),
            month: lowest.map(|s| s.month),
            min: lowest.map(|s| s.price),
            formatted_min: lowest.map(|s| format_amount(s.price, locale)),
        }
    }
}

/// Response for `GET /bookings/summary`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummaryResponse {
    pub total_guests: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_hours: Decimal,
    #[serde(rename = "bucket1to3")]
    pub bucket_1_to_3: u64,
    #[serde(rename = "bucket4to6")]
    pub bucket_4_to_6: u64,
    #[serde(rename = "bucketOver6")]
    pub bucket_over_6: u64,
}

impl From<BookingSummary> for BookingSummaryResponse {
    fn from(summary: BookingSummary) -> Self {
        Self {
            total_guests: summary.total_guests,
            total_hours: summary.total_hours,
            bucket_1_to_3: summary.buckets.one_to_three,
            bucket_4_to_6: summary.buckets.four_to_six,
            bucket_over_6: summary.buckets.over_six,
        }
    }
}

/// One policy's tier tables
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTable {
    pub name: TariffPolicy,
    pub guest_tiers: &'static [Tier],
    pub duration_tiers: &'static [Tier],
}

/// Response for `GET /bookings/tariffs`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffsResponse {
    pub default_policy: TariffPolicy,
    pub policies: Vec<PolicyTable>,
}

impl TariffsResponse {
    pub fn new(default_policy: TariffPolicy) -> Self {
        Self {
            default_policy,
            policies: TariffPolicy::ALL
                .iter()
                .map(|policy| PolicyTable {
                    name: *policy,
                    guest_tiers: policy.guest_tiers(),
                    duration_tiers: policy.duration_tiers(),
                })
                .collect(),
        }
    }
}

/// Response for `GET /health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_peak_month_response_without_sales() {
        let value = serde_json::to_value(PeakMonthResponse::new(2030, None, NumberLocale::EnUs)).unwrap();
        assert_eq!(
            value,
            json!({"year": 2030, "month": null, "total": "0", "formattedTotal": "0"})
        );
    }

    #[test]
    fn test_min_response_empty_category_is_all_null() {
        let value = serde_json::to_value(MinByCategoryResponse::new(
            PropertyType::Apartment,
            None,
            NumberLocale::EnUs,
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({"category": "Apartment", "year": null, "month": null, "min": null, "formattedMin": null})
        );
    }

    #[test]
    fn test_summary_response_field_names() {
        let summary = BookingSummary {
            total_guests: 10,
            total_hours: dec!(7.5),
            buckets: crate::stats::DurationBuckets {
                one_to_three: 1,
                four_to_six: 0,
                over_six: 1,
            },
        };
        let value = serde_json::to_value(BookingSummaryResponse::from(summary)).unwrap();
        assert_eq!(
            value,
            json!({
                "totalGuests": 10,
                "totalHours": "7.5",
                "bucket1to3": 1,
                "bucket4to6": 0,
                "bucketOver6": 1
            })
        );
    }

    #[test]
    fn test_tariffs_response_lists_both_policies() {
        let value = serde_json::to_value(TariffsResponse::new(TariffPolicy::Volume)).unwrap();
        assert_eq!(value["defaultPolicy"], json!("volume"));
        assert_eq!(value["policies"][0]["name"], json!("standard"));
        assert_eq!(
            value["policies"][0]["guestTiers"][0],
            json!({"bracket": {"kind": "between", "min": "1", "max": "50"}, "rate": "25000"})
        );
        assert_eq!(
            value["policies"][1]["durationTiers"][2],
            json!({"bracket": {"kind": "above", "min": "6"}, "rate": "300000"})
        );
    }
}
