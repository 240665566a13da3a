//! MongoDB-backed record store.

use crate::error::{StoreError, StoreResult};
use crate::store::{Filter, ID_FIELD, RecordStore};
use async_trait::async_trait;
use bson::{Bson, Document, doc};
use futures::TryStreamExt;
use gamedex_core::RecordId;
use mongodb::{Client, Collection, Database};

/// MongoDB-backed record store.
///
/// The driver's connection pool is shared by all requests; this type holds
/// only the database handle.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Create a store for `database_name` on the given deployment.
    ///
    /// Fails with [`StoreError::Config`] if either argument is blank. The
    /// driver connects lazily, so an unreachable server surfaces on the first
    /// operation (or [`RecordStore::health_check`]), not here.
    pub async fn connect(connection_string: &str, database_name: &str) -> StoreResult<Self> {
        if connection_string.trim().is_empty() {
            return Err(StoreError::Config(
                "mongo connection string is empty".to_string(),
            ));
        }
        if database_name.trim().is_empty() {
            return Err(StoreError::Config("mongo database name is empty".to_string()));
        }

        let client = Client::with_uri_str(connection_string)
            .await
            .map_err(|e| StoreError::Config(format!("invalid mongo connection string: {e}")))?;
        let database = client.database(database_name);

        tracing::info!(database = database_name, "MongoDB client initialized");

        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

fn id_query(id: RecordId) -> Document {
    doc! { ID_FIELD: Bson::from(id) }
}

/// Whole-value, case-insensitive match on a string field.
///
/// Only case differs between matches; width, accents and ligatures must
/// agree exactly.
fn ignore_case_query(field: &str, value: &str) -> Document {
    let pattern = format!("^{}$", regex::escape(value));
    let mut query = Document::new();
    query.insert(field, doc! { "$regex": pattern, "$options": "i" });
    query
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, collection: &str, id: RecordId) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection).find_one(id_query(id)).await?)
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let coll = self.collection(collection);
        let found = match filter {
            Filter::Eq { field, value } => {
                let mut query = Document::new();
                query.insert(field.clone(), value.clone());
                coll.find_one(query).await?
            }
            Filter::EqIgnoreCase { field, value } => {
                coll.find_one(ignore_case_query(field, value)).await?
            }
        };
        Ok(found)
    }

    async fn insert(&self, collection: &str, record: Document) -> StoreResult<RecordId> {
        let result = self.collection(collection).insert_one(record).await?;
        result
            .inserted_id
            .as_object_id()
            .map(RecordId::from)
            .ok_or_else(|| {
                StoreError::Internal(format!(
                    "store assigned a non-object id in {collection}: {}",
                    result.inserted_id
                ))
            })
    }

    async fn replace(
        &self,
        collection: &str,
        id: RecordId,
        mut record: Document,
    ) -> StoreResult<bool> {
        record.remove(ID_FIELD);
        let result = self
            .collection(collection)
            .replace_one(id_query(id), record)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, collection: &str, id: RecordId) -> StoreResult<bool> {
        let result = self.collection(collection).delete_one(id_query(id)).await?;
        Ok(result.deleted_count > 0)
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_rejects_blank_settings() {
        let err = MongoStore::connect("", "games").await.err().unwrap();
        assert!(matches!(err, StoreError::Config(_)));

        let err = MongoStore::connect("mongodb://localhost:27017", "  ")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[tokio::test]
    async fn connect_rejects_malformed_uri() {
        let err = MongoStore::connect("not a uri", "games").await.err().unwrap();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn id_query_targets_object_id() {
        let id = RecordId::new();
        let query = id_query(id);
        assert_eq!(query.get_object_id(ID_FIELD).unwrap(), *id.as_object_id());
    }

    #[test]
    fn ignore_case_query_anchors_and_escapes() {
        let query = ignore_case_query("Name", "Mario (Deluxe)+");
        let inner = query.get_document("Name").unwrap();
        assert_eq!(inner.get_str("$regex").unwrap(), r"^Mario \(Deluxe\)\+$");
        assert_eq!(inner.get_str("$options").unwrap(), "i");
    }
}
