//! Record store gateway trait.
//!
//! Every document-store operation in the service goes through [`RecordStore`].
//! Operations are scoped by collection name and work on raw BSON documents;
//! typed access lives in [`crate::repos`].

use crate::error::StoreResult;
use async_trait::async_trait;
use bson::{Bson, Document};
use gamedex_core::RecordId;

/// Name of the identifier field in stored documents.
pub const ID_FIELD: &str = "_id";

/// Predicate for [`RecordStore::find_one`].
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Field equals the value exactly.
    Eq { field: String, value: Bson },
    /// String field equals the value, ignoring case.
    EqIgnoreCase { field: String, value: String },
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn eq_ignore_case(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::EqIgnoreCase {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Evaluate the predicate against a document in process.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Self::Eq { field, value } => doc.get(field) == Some(value),
            Self::EqIgnoreCase { field, value } => doc
                .get_str(field)
                .is_ok_and(|s| s.to_lowercase() == value.to_lowercase()),
        }
    }
}

/// Collection-scoped document store.
///
/// Implementations hold no per-call state and are shared across requests.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every document in the collection, in store order.
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// The document with the given identifier, if any.
    async fn find_by_id(&self, collection: &str, id: RecordId) -> StoreResult<Option<Document>>;

    /// The first document matching the filter, if any.
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// Insert a new document. The store assigns and returns its identifier.
    async fn insert(&self, collection: &str, record: Document) -> StoreResult<RecordId>;

    /// Overwrite the document with the given identifier.
    ///
    /// Returns `false` and changes nothing when no document matches; this
    /// never inserts. Any `_id` in `record` is ignored.
    async fn replace(&self, collection: &str, id: RecordId, record: Document)
    -> StoreResult<bool>;

    /// Remove the document with the given identifier. Returns `false` if absent.
    async fn delete(&self, collection: &str, id: RecordId) -> StoreResult<bool>;

    /// Check store connectivity.
    async fn health_check(&self) -> StoreResult<()>;
}
