//! PostgreSQL document store
//!
//! Each collection is a table of JSONB documents. `id` and `timestamp` are copied
//! out of the document into columns so listings can sort without touching JSONB.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;

use super::{string_field, Collection, DbResult, Document, DocumentStore, ID_FIELD, TIMESTAMP_FIELD};
use crate::config::StoreConfig;

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool from configuration
    pub async fn connect(config: &StoreConfig) -> DbResult<Self> {
        let mut connect_options = PgConnectOptions::from_str(&config.url)?;
        if let Some(ref name) = config.name {
            connect_options = connect_options.database(name);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect_with(connect_options)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            database = config.name.as_deref().unwrap_or("<from url>"),
            "Database connection pool created"
        );

        Ok(Self::new(pool))
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(&self, collection: Collection, document: Document) -> DbResult<()> {
        let id = string_field(collection, &document, ID_FIELD)?.to_string();
        let timestamp = string_field(collection, &document, TIMESTAMP_FIELD)?.to_string();

        // Table names come from the closed `Collection` enum, never from input.
        let sql = format!(
            "INSERT INTO {} (id, timestamp, document) VALUES ($1, $2, $3)",
            collection.name()
        );
        sqlx::query(&sql)
            .bind(id)
            .bind(timestamp)
            .bind(document)
            .execute(&self.pool)
            .await?;

        tracing::debug!(collection = %collection, "Document inserted");
        Ok(())
    }

    async fn find_recent(&self, collection: Collection, limit: i64) -> DbResult<Vec<Document>> {
        let sql = format!(
            "SELECT document FROM {} ORDER BY timestamp DESC, seq DESC LIMIT $1",
            collection.name()
        );
        let documents = sqlx::query_scalar::<_, Document>(&sql)
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(collection = %collection, count = documents.len(), "Documents fetched");
        Ok(documents)
    }

    async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
