//! Document storage collaborator.
//!
//! Handlers only see the [`DocumentStore`] trait. Documents are append-only:
//! nothing in the service updates or deletes a stored document. Every read
//! returns documents in insertion order.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// A raw document as held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub collection: String,
    pub created_at: DateTime<Utc>,
    pub data: Value,
}

/// Storage failures, surfaced to clients as server errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short name used in logs and the health endpoint
    fn backend(&self) -> &'static str;

    /// Append a document to a collection
    async fn insert(&self, collection: &str, data: Value) -> Result<Document, StorageError>;

    /// Every document in a collection
    async fn get_all(&self, collection: &str) -> Result<Vec<Document>, StorageError>;

    /// Documents whose top-level `field` equals `value`
    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> Result<Vec<Document>, StorageError>;
}
