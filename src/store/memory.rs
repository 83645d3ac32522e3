//! In-process document store.
//!
//! Used when no database is configured and by the test suite.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Document, DocumentStore, StorageError};
use crate::models::lenient::{number_to_decimal, parse_decimal};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Field equality used by `query_equals`.
///
/// Numbers compare by value (`3` matches `3.0`), and a numeric needle also
/// matches a stored numeric string (`"3"`).
fn field_matches(stored: &Value, needle: &Value) -> bool {
    match (stored, needle) {
        (Value::Number(a), Value::Number(b)) => match (number_to_decimal(a), number_to_decimal(b)) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
        (Value::String(s), Value::Number(n)) => {
            matches!((parse_decimal(s), number_to_decimal(n)), (Some(x), Some(y)) if x == y)
        }
        _ => stored == needle,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, collection: &str, data: Value) -> Result<Document, StorageError> {
        let document = Document {
            id: Uuid::new_v4(),
            collection: collection.to_string(),
            created_at: Utc::now(),
            data,
        };

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Document>, StorageError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> Result<Vec<Document>, StorageError> {
        let collections = self.collections.read().await;
        let matches = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| doc.data.get(field).is_some_and(|v| field_matches(v, &value)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_assigns_id_and_keeps_order() {
        let store = MemoryStore::new();
        let first = store.insert("sales", json!({"month": 1})).await.unwrap();
        let second = store.insert("sales", json!({"month": 2})).await.unwrap();
        assert_ne!(first.id, second.id);

        let all = store.get_all("sales").await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_collections_are_independent() {
        let store = MemoryStore::new();
        store.insert("sales", json!({"month": 1})).await.unwrap();
        assert!(store.get_all("bookings").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_equals_filters_on_field() {
        let store = MemoryStore::new();
        store.insert("sales", json!({"month": 3, "price": 1})).await.unwrap();
        store.insert("sales", json!({"month": 4, "price": 2})).await.unwrap();
        store.insert("sales", json!({"month": 3.0, "price": 3})).await.unwrap();
        store.insert("sales", json!({"price": 4})).await.unwrap();

        let march = store.query_equals("sales", "month", json!(3)).await.unwrap();
        let prices: Vec<_> = march.iter().map(|d| d.data["price"].clone()).collect();
        assert_eq!(prices, vec![json!(1), json!(3)]);
    }

    #[tokio::test]
    async fn test_query_equals_matches_numeric_strings() {
        let store = MemoryStore::new();
        store.insert("sales", json!({"month": "3", "price": 1})).await.unwrap();
        store.insert("sales", json!({"month": " 3 ", "price": 2})).await.unwrap();
        store.insert("sales", json!({"month": "03x", "price": 3})).await.unwrap();
        store.insert("sales", json!({"month": 3, "price": 4})).await.unwrap();

        let march = store.query_equals("sales", "month", json!(3)).await.unwrap();
        let prices: Vec<_> = march.iter().map(|d| d.data["price"].clone()).collect();
        assert_eq!(prices, vec![json!(1), json!(2), json!(4)]);

        let by_string = store.query_equals("sales", "month", json!("3")).await.unwrap();
        assert_eq!(by_string.len(), 1);
    }

    #[tokio::test]
    async fn test_query_equals_on_strings() {
        let store = MemoryStore::new();
        store.insert("sales", json!({"propertyType": "House"})).await.unwrap();
        store.insert("sales", json!({"propertyType": "Apartment"})).await.unwrap();

        let houses = store
            .query_equals("sales", "propertyType", json!("House"))
            .await
            .unwrap();
        assert_eq!(houses.len(), 1);
        assert!(store
            .query_equals("missing", "propertyType", json!("House"))
            .await
            .unwrap()
            .is_empty());
    }
}
