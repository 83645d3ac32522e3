//! Summary statistics over sale records.
//!
//! Every function walks the slice in the order given, which for records read
//! from the store is insertion order. Ties are resolved in favour of the
//! first candidate seen.
//!
//! Prices are unbounded, so sums saturate at `Decimal::MAX` (or `MIN`)
//! instead of overflowing.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{PropertyType, Sale};
use crate::pricing::round_money;

/// Average price per property type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAverages {
    pub house: Decimal,
    pub apartment: Decimal,
}

impl CategoryAverages {
    pub fn get(&self, category: PropertyType) -> Decimal {
        match category {
            PropertyType::House => self.house,
            PropertyType::Apartment => self.apartment,
        }
    }
}

/// Month of a year together with the sales total for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: u32,
    pub total: Decimal,
}

/// Saturating sum of decimal amounts
pub fn total_of<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |sum, amount| sum.saturating_add(amount))
}

/// Total price of sales made in `month`, across every year.
///
/// # Arguments
/// * `sales` - Sales to scan, usually a whole collection or an equality query result
/// * `month` - Calendar month, 1 through 12
///
/// # Returns
/// The summed price, or zero when nothing matches or the month is outside 1..=12
pub fn sum_by_month(sales: &[Sale], month: u32) -> Decimal {
    if !(1..=12).contains(&month) {
        return Decimal::ZERO;
    }
    total_of(
        sales
            .iter()
            .filter(|sale| sale.month == month)
            .map(|sale| sale.price),
    )
}

/// Mean price per category, rounded to cents. Empty categories average 0.
pub fn average_by_category(sales: &[Sale]) -> CategoryAverages {
    let average = |category: PropertyType| {
        let (sum, count) = sales
            .iter()
            .filter(|sale| sale.property_type == category)
            .fold((Decimal::ZERO, 0u64), |(sum, count), sale| {
                (sum.saturating_add(sale.price), count + 1)
            });
        if count == 0 {
            Decimal::ZERO
        } else {
            round_money(sum / Decimal::from(count), 2)
        }
    };

    CategoryAverages {
        house: average(PropertyType::House),
        apartment: average(PropertyType::Apartment),
    }
}

/// Month of `year` with the highest summed sales.
///
/// Months are compared in ascending order against a running maximum that
/// starts at zero. Only a strictly greater total replaces it, so the earliest
/// month wins a tie.
///
/// # Arguments
/// * `sales` - Sales to scan; records from other years are ignored
/// * `year` - Year to group by month
///
/// # Returns
/// The winning month and its total, or `None` when no month of `year` totals
/// more than zero
pub fn peak_month_in_year(sales: &[Sale], year: i32) -> Option<MonthTotal> {
    let mut per_month: BTreeMap<u32, Decimal> = BTreeMap::new();
    for sale in sales.iter().filter(|sale| sale.year == year) {
        let total = per_month.entry(sale.month).or_insert(Decimal::ZERO);
        *total = total.saturating_add(sale.price);
    }

    let mut best: Option<MonthTotal> = None;
    for (month, total) in per_month {
        let current = best.map_or(Decimal::ZERO, |best| best.total);
        if total > current {
            best = Some(MonthTotal { month, total });
        }
    }
    best
}

/// First sale with the strictly smallest price in `category`
pub fn min_by_category(sales: &[Sale], category: PropertyType) -> Option<&Sale> {
    let mut lowest: Option<&Sale> = None;
    for sale in sales.iter().filter(|sale| sale.property_type == category) {
        match lowest {
            Some(current) if sale.price >= current.price => {}
            _ => lowest = Some(sale),
        }
    }
    lowest
}
