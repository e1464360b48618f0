//! # Search Sync Repository
//!
//! This crate defines the contracts the sync adapter depends on: traits for
//! the datastore collaborator (records, deferred queries, full-set
//! enumeration) and for the search engine collaborator (index mutations and
//! bulk submission), along with the error types for each side.
//!
//! Concrete backends (MongoDB, OpenSearch, ...) live outside this workspace
//! and implement these traits; the adapter crates only program against them.

pub mod errors;
pub mod interfaces;

pub use errors::{SearchError, StoreError};
pub use interfaces::{Record, RecordQuery, RecordStore, SearchEngineClient, SortDirection};
