//! Search engine client trait definition.
//!
//! This module defines the abstract interface for the index mutations the
//! adapter drives, allowing for different backend implementations
//! (OpenSearch, Elasticsearch, mock, ...).

use async_trait::async_trait;

use crate::errors::SearchError;
use search_sync_shared::{BulkOperation, IndexDocument, RecordId};

/// Abstract interface for search engine index mutations.
///
/// All implementations must be `Send + Sync` to allow use across async
/// tasks. All methods return `Result<T, SearchError>` for consistent error
/// handling; the adapter never retries on its own.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Index a single document.
    ///
    /// If a document with the same id already exists, it is replaced.
    async fn index_document(
        &self,
        id: &RecordId,
        document: &IndexDocument,
    ) -> Result<(), SearchError>;

    /// Update the document with the given id to the given representation.
    ///
    /// The document must already exist in the index.
    async fn update_document(
        &self,
        id: &RecordId,
        document: &IndexDocument,
    ) -> Result<(), SearchError>;

    /// Delete the document with the given id from the index.
    async fn delete_document(&self, id: &RecordId) -> Result<(), SearchError>;

    /// Submit a batch of operations to the bulk API.
    ///
    /// More efficient than driving the single-document methods in a loop;
    /// the backfill path submits everything through here.
    async fn bulk(&self, operations: &[BulkOperation]) -> Result<(), SearchError>;
}
