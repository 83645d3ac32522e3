//! Real-estate sale records

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;
use super::StoredDocument;

/// Name of the store collection holding sales
pub const SALES_COLLECTION: &str = "sales";

/// Kind of property sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(alias = "Casa")]
    House,
    #[serde(alias = "Apartamento")]
    Apartment,
}

impl PropertyType {
    pub const ALL: [PropertyType; 2] = [PropertyType::House, PropertyType::Apartment];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "House" | "Casa" => Ok(PropertyType::House),
            "Apartment" | "Apartamento" => Ok(PropertyType::Apartment),
            _ => Err(()),
        }
    }
}

/// A single sale as persisted in the `sales` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub property_type: PropertyType,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub year: i32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub month: u32,
    #[serde(
        default,
        deserialize_with = "lenient::decimal",
        serialize_with = "rust_decimal::serde::str::serialize"
    )]
    pub price: Decimal,
}

/// Sale together with its store metadata
pub type SaleRecord = StoredDocument<Sale>;
