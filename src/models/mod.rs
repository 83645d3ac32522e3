//! Record models for sales and bookings

pub mod booking;
pub mod lenient;
pub mod sale;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::store::Document;

pub use booking::{Booking, BookingRecord, BOOKINGS_COLLECTION};
pub use sale::{PropertyType, Sale, SaleRecord, SALES_COLLECTION};

/// Typed view of a stored document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument<T> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: DeserializeOwned> StoredDocument<T> {
    /// Decode a raw document into its typed record
    pub fn decode(document: &Document) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: document.id,
            created_at: document.created_at,
            data: serde_json::from_value(document.data.clone())?,
        })
    }

    /// Decode a collection, skipping documents that cannot be read as `T`
    pub fn decode_all(documents: &[Document]) -> Vec<Self> {
        documents
            .iter()
            .filter_map(|document| match Self::decode(document) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        "Skipping malformed document {} in {}: {}",
                        document.id,
                        document.collection,
                        e
                    );
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn document(data: serde_json::Value) -> Document {
        Document {
            id: Uuid::new_v4(),
            collection: SALES_COLLECTION.to_string(),
            created_at: Utc::now(),
            data,
        }
    }

    #[test]
    fn test_decode_all_skips_malformed_documents() {
        let docs = vec![
            document(json!({"propertyType": "House", "year": 2025, "month": 3, "price": 10})),
            document(json!({"propertyType": 42})),
            document(json!("not an object")),
            document(json!({"propertyType": "Casa", "price": "oops"})),
        ];

        let sales = SaleRecord::decode_all(&docs);
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].data.price, dec!(10));
        assert_eq!(sales[1].data.price, dec!(0));
        assert_eq!(sales[0].id, docs[0].id);
    }

    #[test]
    fn test_record_serializes_flat() {
        let doc = document(json!({"propertyType": "House", "year": 2025, "month": 3, "price": 10}));
        let record = SaleRecord::decode(&doc).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["propertyType"], json!("House"));
        assert_eq!(value["id"], json!(doc.id.to_string()));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("data").is_none());
    }
}
