//! # Search Sync Shared
//!
//! Shared data model for the search sync adapter: record identifiers,
//! the indexable document representation, and bulk operation descriptors
//! exchanged between the datastore side and the search engine side.

pub mod bulk;
pub mod ids;

pub use bulk::{BulkAction, BulkOperation, IndexDocument};
pub use ids::RecordId;
