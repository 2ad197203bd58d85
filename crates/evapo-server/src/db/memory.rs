//! Process-local document store
//!
//! Backs the test suite and `STORE_BACKEND=memory` runs. Contents are lost when the
//! process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{string_field, Collection, DbResult, Document, DocumentStore, ID_FIELD, TIMESTAMP_FIELD};

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held in `collection`
    pub async fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(&self, collection: Collection, document: Document) -> DbResult<()> {
        string_field(collection, &document, ID_FIELD)?;
        string_field(collection, &document, TIMESTAMP_FIELD)?;

        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document);
        Ok(())
    }

    async fn find_recent(&self, collection: Collection, limit: i64) -> DbResult<Vec<Document>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(&collection) else {
            return Ok(Vec::new());
        };

        // Insertion index breaks timestamp ties in favour of the later insert.
        let mut ordered: Vec<(usize, &str, &Document)> = documents
            .iter()
            .enumerate()
            .map(|(index, document)| {
                let timestamp = document
                    .get(TIMESTAMP_FIELD)
                    .and_then(Document::as_str)
                    .unwrap_or_default();
                (index, timestamp, document)
            })
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(a.1).then(b.0.cmp(&a.0)));

        Ok(ordered
            .into_iter()
            .take(limit)
            .map(|(_, _, document)| document.clone())
            .collect())
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }
}
