//! Document store
//!
//! Results live in three append-only collections. The [`DocumentStore`] trait is the
//! whole contract a backend must satisfy: insert one JSON document, or read the most
//! recent documents ordered by their `timestamp` field. [`Repository`] layers typed
//! records on top of it.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use evapo_common::types::{EvaporationResult, StatusCheck, StoragePlanningResult};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Store operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Record could not be converted to or from its stored document
    #[error("Document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Document lacks a field the store indexes on
    #[error("Invalid document for '{collection}': {reason}")]
    InvalidDocument {
        collection: Collection,
        reason: String,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl DbError {
    pub fn invalid_document(collection: Collection, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            collection,
            reason: reason.into(),
        }
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Stored document; always a JSON object
pub type Document = Value;

/// Named collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    EvaporationResults,
    StoragePlanningResults,
    StatusChecks,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::EvaporationResults,
        Collection::StoragePlanningResults,
        Collection::StatusChecks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::EvaporationResults => "evaporation_results",
            Collection::StoragePlanningResults => "storage_planning_results",
            Collection::StatusChecks => "status_checks",
        }
    }

    /// Number of records a history listing returns
    pub fn history_limit(self) -> i64 {
        match self {
            Collection::EvaporationResults | Collection::StoragePlanningResults => 50,
            Collection::StatusChecks => 1000,
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Field every document is sorted by
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Field every document is keyed by
pub const ID_FIELD: &str = "id";

/// Reads a required string field from a document
pub fn string_field<'a>(collection: Collection, document: &'a Document, field: &str) -> DbResult<&'a str> {
    document
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| DbError::invalid_document(collection, format!("missing string field '{}'", field)))
}

/// Append-only document storage
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist one document. Documents are never updated or deleted.
    async fn insert_one(&self, collection: Collection, document: Document) -> DbResult<()>;

    /// Up to `limit` documents, newest `timestamp` first. Ties go to the later insert.
    async fn find_recent(&self, collection: Collection, limit: i64) -> DbResult<Vec<Document>>;

    /// Cheap connectivity check
    async fn ping(&self) -> DbResult<()>;

    /// Release connections; called once during shutdown
    async fn close(&self) {}
}

/// Record type bound to its collection
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;
}

impl Record for EvaporationResult {
    const COLLECTION: Collection = Collection::EvaporationResults;
}

impl Record for StoragePlanningResult {
    const COLLECTION: Collection = Collection::StoragePlanningResults;
}

impl Record for StatusCheck {
    const COLLECTION: Collection = Collection::StatusChecks;
}

/// Typed read/write access to the store, cheap to clone into handlers
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Repository over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryDocumentStore::new()))
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Persist one record. A record that would not deserialize from its own
    /// document (e.g. a non-finite float serialized as `null`) is refused, so it can
    /// never break later listings of its collection.
    pub async fn insert<R: Record>(&self, record: &R) -> DbResult<()> {
        let document = serde_json::to_value(record)?;
        if let Err(e) = serde_json::from_value::<R>(document.clone()) {
            return Err(DbError::invalid_document(
                R::COLLECTION,
                format!("record does not read back: {}", e),
            ));
        }
        self.store.insert_one(R::COLLECTION, document).await
    }

    pub async fn list_recent<R: Record>(&self, limit: i64) -> DbResult<Vec<R>> {
        self.store
            .find_recent(R::COLLECTION, limit)
            .await?
            .into_iter()
            .map(|document| serde_json::from_value(document).map_err(DbError::from))
            .collect()
    }

    /// Most recent records, capped at the collection's history limit
    pub async fn history<R: Record>(&self) -> DbResult<Vec<R>> {
        self.list_recent(R::COLLECTION.history_limit()).await
    }

    pub async fn ping(&self) -> DbResult<()> {
        self.store.ping().await
    }

    pub async fn close(&self) {
        self.store.close().await
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository").finish_non_exhaustive()
    }
}
