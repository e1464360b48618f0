//! Datastore collaborator traits.
//!
//! The datastore owns query building, persistence, and enumeration; the
//! adapter only consumes these capabilities. `RecordQuery` is deferred:
//! building one (including building one through `RecordStore::query_by_ids`)
//! must not execute anything against the datastore. Only `fetch` does.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::errors::StoreError;
use search_sync_shared::{IndexDocument, RecordId};

/// A record held in the primary datastore.
///
/// Every record exposes its identifier and its serialized indexable
/// representation; the adapter never looks inside a record beyond these two.
pub trait Record: Send + Sync {
    /// The record's identifier.
    fn record_id(&self) -> RecordId;

    /// The record serialized into an indexable document.
    fn index_document(&self) -> IndexDocument;
}

/// Direction of an explicit ordering operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A deferred datastore query over records of one type.
///
/// Ordering operations consume the query and return a new one carrying the
/// explicit order; the datastore decides whether that is a fresh object or
/// the same one reconfigured. Nothing executes until `fetch` is called.
#[async_trait]
pub trait RecordQuery<R: Send>: Send {
    /// Execute the query and return the matched records in the datastore's
    /// natural order for this query.
    async fn fetch(&self) -> Result<Vec<R>, StoreError>;

    /// Order the query's results by `field`, in the given direction.
    fn order_by(self: Box<Self>, field: &str, direction: SortDirection)
        -> Box<dyn RecordQuery<R>>;

    /// Order ascending by `field`.
    fn ascending(self: Box<Self>, field: &str) -> Box<dyn RecordQuery<R>> {
        self.order_by(field, SortDirection::Ascending)
    }

    /// Order descending by `field`.
    fn descending(self: Box<Self>, field: &str) -> Box<dyn RecordQuery<R>> {
        self.order_by(field, SortDirection::Descending)
    }
}

/// The datastore's query capability for one record type.
pub trait RecordStore<R: Record>: Send + Sync {
    /// Build a deferred query for records whose identifier is in `ids`.
    ///
    /// An empty `ids` slice must produce a query that fetches the empty set.
    fn query_by_ids(&self, ids: &[RecordId]) -> Box<dyn RecordQuery<R>>;

    /// Enumerate every record of the type, in the datastore's default
    /// full-scan order. No ordering guarantee is made or required.
    fn all_records(&self) -> BoxStream<'_, Result<R, StoreError>>;
}
