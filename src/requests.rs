//! Request DTOs and field validation for the record endpoints.
//!
//! Bodies are read as raw JSON so each field can be checked on its own and
//! rejected with the precondition it failed. Numbers may arrive as JSON
//! numbers or numeric strings.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::models::lenient::value_to_decimal;
use crate::models::{PropertyType, Sale};
use crate::pricing::TariffPolicy;

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

/// Validated input for a new booking, before pricing
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub payer_id: String,
    pub guest_count: u32,
    pub duration_hours: Decimal,
    pub policy: Option<TariffPolicy>,
}

/// Query for `GET /records/sum`
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

/// Query for `GET /records/peak-month`
#[derive(Debug, Default, Deserialize)]
pub struct YearQuery {
    pub year: Option<String>,
}

/// Query for `GET /records/min-by-category`
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// Non-null value of a body field
fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body.get(name).filter(|v| !v.is_null())
}

fn number(body: &Value, name: &'static str) -> Result<Decimal, ValidationError> {
    let value = field(body, name).ok_or_else(|| ValidationError::missing(name))?;
    if value.as_str().is_some_and(|s| s.trim().is_empty()) {
        return Err(ValidationError::missing(name));
    }
    if !(value.is_number() || value.is_string()) {
        return Err(ValidationError::wrong_type(name, "a number"));
    }
    value_to_decimal(value).ok_or_else(|| ValidationError::wrong_type(name, "a number"))
}

fn whole_number(body: &Value, name: &'static str) -> Result<i64, ValidationError> {
    let value = number(body, name)?;
    whole(value).ok_or_else(|| ValidationError::wrong_type(name, "a whole number"))
}

fn whole(value: Decimal) -> Option<i64> {
    use rust_decimal::prelude::ToPrimitive;

    if value.fract().is_zero() {
        value.to_i64()
    } else {
        None
    }
}

fn non_empty_string<'a>(body: &'a Value, name: &'static str) -> Result<&'a str, ValidationError> {
    let value = field(body, name).ok_or_else(|| ValidationError::missing(name))?;
    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::wrong_type(name, "a string"))?
        .trim();
    if text.is_empty() {
        return Err(ValidationError::missing(name));
    }
    Ok(text)
}

fn property_type(raw: &str, name: &'static str) -> Result<PropertyType, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::out_of_range(name, "House or Apartment"))
}

fn year_in_range(year: i64, name: &'static str) -> Result<i32, ValidationError> {
    i32::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or_else(|| {
            ValidationError::out_of_range(name, &format!("between {MIN_YEAR} and {MAX_YEAR}"))
        })
}

fn month_in_range(month: i64, name: &'static str) -> Result<u32, ValidationError> {
    u32::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| ValidationError::out_of_range(name, "between 1 and 12"))
}

/// Validate a `POST /records` body
pub fn parse_sale(body: &Value) -> Result<Sale, ValidationError> {
    let property_type = property_type(non_empty_string(body, "propertyType")?, "propertyType")?;
    let year = year_in_range(whole_number(body, "year")?, "year")?;
    let month = month_in_range(whole_number(body, "month")?, "month")?;
    let price = number(body, "price")?;
    if price <= Decimal::ZERO {
        return Err(ValidationError::out_of_range("price", "greater than 0"));
    }

    Ok(Sale {
        property_type,
        year,
        month,
        price,
    })
}

/// Validate a `POST /bookings` body
pub fn parse_booking(body: &Value) -> Result<NewBooking, ValidationError> {
    let payer_id = non_empty_string(body, "payerId")?.to_string();

    let guest_count = whole_number(body, "guestCount")?;
    if guest_count <= 0 {
        return Err(ValidationError::out_of_range("guestCount", "greater than 0"));
    }
    let guest_count = u32::try_from(guest_count).map_err(|_| {
        ValidationError::out_of_range("guestCount", &format!("at most {}", u32::MAX))
    })?;

    let duration_hours = number(body, "durationHours")?;
    if duration_hours <= Decimal::ZERO {
        return Err(ValidationError::out_of_range("durationHours", "greater than 0"));
    }

    let policy = match field(body, "policy") {
        None => None,
        Some(value) => {
            let name = value
                .as_str()
                .ok_or_else(|| ValidationError::wrong_type("policy", "a string"))?;
            Some(name.parse::<TariffPolicy>().map_err(|_| {
                ValidationError::out_of_range("policy", "'standard' or 'volume'")
            })?)
        }
    };

    Ok(NewBooking {
        payer_id,
        guest_count,
        duration_hours,
        policy,
    })
}

fn query_whole_number(raw: Option<&str>, name: &'static str) -> Result<i64, ValidationError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ValidationError::missing(name))?;
    raw.parse::<i64>()
        .map_err(|_| ValidationError::wrong_type(name, "a whole number"))
}

impl MonthQuery {
    pub fn validate(&self) -> Result<u32, ValidationError> {
        month_in_range(query_whole_number(self.month.as_deref(), "month")?, "month")
    }
}

impl YearQuery {
    pub fn validate(&self) -> Result<i32, ValidationError> {
        year_in_range(query_whole_number(self.year.as_deref(), "year")?, "year")
    }
}

impl CategoryQuery {
    pub fn validate(&self) -> Result<PropertyType, ValidationError> {
        let raw = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ValidationError::missing("category"))?;
        property_type(raw, "category")
    }
}
