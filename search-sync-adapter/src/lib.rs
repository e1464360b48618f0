//! # Search Sync Adapter
//!
//! Glue components that keep a search index consistent with records held in
//! a primary datastore, and let query results be fetched back from the
//! datastore while preserving the relevance ranking produced by the search
//! engine.
//!
//! ## Architecture
//!
//! Three independent components, composed over the collaborator traits
//! defined in `search-sync-repository`:
//!
//! 1. **Ranked**: wraps an id-in query so that materializing it follows a
//!    ranked id sequence from a prior search
//! 2. **Lifecycle**: binds create/update/destroy record events to the
//!    corresponding index mutations
//! 3. **Export**: streams the full record set into fixed-size bulk batches
//!    for backfill indexing

pub mod errors;
pub mod export;
pub mod lifecycle;
pub mod ranked;

pub use errors::AdapterError;
pub use export::{BatchSink, BulkExporter, ExportConfig, ExportSummary, IndexSink};
pub use lifecycle::{LifecycleHooks, LifecycleSynchronizer};
pub use ranked::RankedRecords;
