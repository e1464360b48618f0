//! Interface definitions for the sync adapter's collaborators.
//!
//! These traits allow for dependency injection and swappable backend
//! implementations on both the datastore side and the search engine side.

mod record_store;
mod search_engine_client;

pub use record_store::{Record, RecordQuery, RecordStore, SortDirection};
pub use search_engine_client::SearchEngineClient;
