//! Datastore error types.

use thiserror::Error;

/// Errors that can occur when delegating to the datastore collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to establish connection to the datastore.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Query construction or execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Full-set enumeration failed or was interrupted.
    #[error("Enumeration error: {0}")]
    EnumerationError(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create an enumeration error.
    pub fn enumeration(msg: impl Into<String>) -> Self {
        Self::EnumerationError(msg.into())
    }
}
