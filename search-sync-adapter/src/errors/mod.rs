//! Error types for the search sync adapter.

use search_sync_repository::{SearchError, StoreError};
use thiserror::Error;

/// Errors that can occur in the sync adapter components.
///
/// The adapter is a thin coordination layer: collaborator failures are
/// wrapped, never retried or recovered locally.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Invalid component configuration. Raised before any work starts.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from the datastore collaborator.
    #[error("Datastore error: {0}")]
    StoreError(#[from] StoreError),

    /// Error from the search engine collaborator.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
}

impl AdapterError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
