//! PostgreSQL document store.
//!
//! Documents live in a single JSONB table keyed by collection name; `seq`
//! preserves insertion order for every read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{Document, DocumentStore, StorageError};

/// Row from the documents table
#[derive(Debug, Clone, FromRow)]
struct DocumentRow {
    id: Uuid,
    collection: String,
    data: Value,
    created_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            collection: row.collection,
            created_at: row.created_at,
            data: row.data,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Document store migrations applied");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, collection: &str, data: Value) -> Result<Document, StorageError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (id, collection, data)
            VALUES ($1, $2, $3)
            RETURNING id, collection, data, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(collection)
        .bind(Json(&data))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Document>, StorageError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, collection, data, created_at
            FROM documents
            WHERE collection = $1
            ORDER BY seq
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> Result<Vec<Document>, StorageError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, collection, data, created_at
            FROM documents
            WHERE collection = $1
              AND CASE
                    WHEN jsonb_typeof($3) = 'number'
                     AND jsonb_typeof(data -> $2::text) = 'string'
                     AND btrim(data ->> $2::text) ~ '^[-+]?[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?$'
                    THEN btrim(data ->> $2::text)::numeric = ($3 #>> '{}')::numeric
                    ELSE data -> $2::text = $3
                  END
            ORDER BY seq
            "#,
        )
        .bind(collection)
        .bind(field)
        .bind(Json(&value))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }
}
