//! Typed repositories over a [`RecordStore`](crate::store::RecordStore).
//!
//! Both traits are implemented for every record store, so they are available
//! on `Arc<dyn RecordStore>` once imported.

pub mod games;
pub mod lookups;

pub use games::GameRepo;
pub use lookups::LookupRepo;
