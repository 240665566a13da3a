//! In-process record store.
//!
//! Used by the test suites and for local runs without a database
//! (`store.kind = "memory"`). Collections are created on first insert and
//! keep insertion order.

use crate::error::{StoreError, StoreResult};
use crate::store::{Filter, ID_FIELD, RecordStore};
use async_trait::async_trait;
use bson::{Bson, Document};
use gamedex_core::RecordId;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory record store.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn has_id(doc: &Document, id: RecordId) -> bool {
    doc.get_object_id(ID_FIELD)
        .is_ok_and(|oid| oid == *id.as_object_id())
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: RecordId) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| has_id(doc, id)))
            .cloned())
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    async fn insert(&self, collection: &str, mut record: Document) -> StoreResult<RecordId> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        let id = match record.get(ID_FIELD) {
            None => {
                let id = RecordId::new();
                record.insert(ID_FIELD, Bson::from(id));
                id
            }
            Some(Bson::ObjectId(oid)) => {
                let id = RecordId::from(*oid);
                if docs.iter().any(|doc| has_id(doc, id)) {
                    return Err(StoreError::Internal(format!(
                        "duplicate key {id} in {collection}"
                    )));
                }
                id
            }
            Some(other) => {
                return Err(StoreError::Internal(format!(
                    "unsupported {ID_FIELD} type in {collection}: {other}"
                )));
            }
        };

        docs.push(record);
        Ok(id)
    }

    async fn replace(
        &self,
        collection: &str,
        id: RecordId,
        mut record: Document,
    ) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let Some(slot) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| has_id(doc, id)))
        else {
            return Ok(false);
        };

        record.remove(ID_FIELD);
        let mut replacement = Document::new();
        replacement.insert(ID_FIELD, Bson::from(id));
        for (key, value) in record {
            replacement.insert(key, value);
        }
        *slot = replacement;
        Ok(true)
    }

    async fn delete(&self, collection: &str, id: RecordId) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|doc| !has_id(doc, id));
        Ok(docs.len() < before)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
