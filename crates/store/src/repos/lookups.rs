//! Lookup normalization.
//!
//! Every distinct name, genre, release year and developer seen on insert is
//! recorded once in its own collection. Entries are never read back by the
//! service and are not removed when games change or go away.
//!
//! The existence check and the insert are separate round trips, so two
//! concurrent inserts of the same new value can both record it.

use crate::error::StoreResult;
use crate::models::LookupKind;
use crate::store::{Filter, RecordStore};
use async_trait::async_trait;
use bson::Bson;
use gamedex_core::GameDraft;

/// Repository for lookup collections.
#[async_trait]
pub trait LookupRepo: Send + Sync {
    /// Record `value` under `kind` unless an equal entry exists.
    /// Returns `true` if an entry was inserted.
    async fn ensure_lookup(&self, kind: LookupKind, value: Bson) -> StoreResult<bool>;

    /// Ensure all four lookups for a game, one kind at a time in
    /// [`LookupKind::ALL`] order.
    async fn ensure_lookups(&self, draft: &GameDraft) -> StoreResult<()>;

    /// Every value recorded under `kind`, in store order.
    async fn list_lookups(&self, kind: LookupKind) -> StoreResult<Vec<Bson>>;
}

#[async_trait]
impl<S: RecordStore + ?Sized> LookupRepo for S {
    async fn ensure_lookup(&self, kind: LookupKind, value: Bson) -> StoreResult<bool> {
        let filter = Filter::eq(kind.field(), value.clone());
        if self.find_one(kind.collection(), &filter).await?.is_some() {
            return Ok(false);
        }

        self.insert(kind.collection(), kind.entry(value.clone()))
            .await?;
        tracing::debug!(lookup = %kind, value = %value, "Recorded new lookup value");
        Ok(true)
    }

    async fn ensure_lookups(&self, draft: &GameDraft) -> StoreResult<()> {
        for kind in LookupKind::ALL {
            self.ensure_lookup(kind, kind.value_of(draft)).await?;
        }
        Ok(())
    }

    async fn list_lookups(&self, kind: LookupKind) -> StoreResult<Vec<Bson>> {
        let docs = self.find_all(kind.collection()).await?;
        Ok(docs
            .into_iter()
            .filter_map(|mut doc| doc.remove(kind.field()))
            .collect())
    }
}
