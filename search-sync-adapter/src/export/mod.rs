//! Bulk export pipeline.
//!
//! Streams the entire record set of a type through fixed-size batches of
//! bulk index operations, for initial indexing and backfills. Only one
//! batch is held in memory at a time. The pipeline keeps no checkpoint: a
//! failed batch aborts the remaining enumeration and already-submitted
//! batches stay submitted, so resumption policy belongs to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, info, instrument};

use crate::errors::AdapterError;
use search_sync_repository::{Record, RecordStore, SearchEngineClient, SearchError};
use search_sync_shared::BulkOperation;

/// Configuration for the bulk exporter.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Number of operations per emitted batch. Must be greater than zero.
    pub batch_size: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl ExportConfig {
    /// Create a config with a custom batch size.
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self { batch_size }
    }
}

/// Receives the batches an export emits.
///
/// A sink failure propagates out of the export immediately; no further
/// records are enumerated.
#[async_trait]
pub trait BatchSink: Send {
    /// Submit one batch of bulk operations.
    async fn submit(&mut self, batch: Vec<BulkOperation>) -> Result<(), SearchError>;
}

/// Sink that forwards every batch to the search engine's bulk API.
pub struct IndexSink {
    client: Arc<dyn SearchEngineClient>,
}

impl IndexSink {
    /// Create a sink submitting through the given client.
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BatchSink for IndexSink {
    async fn submit(&mut self, batch: Vec<BulkOperation>) -> Result<(), SearchError> {
        self.client.bulk(&batch).await
    }
}

/// Counts reported by a completed export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    /// Records exported.
    pub records: usize,
    /// Batches emitted.
    pub batches: usize,
}

/// Streams a record type's full set into fixed-size bulk batches.
pub struct BulkExporter {
    config: ExportConfig,
}

impl BulkExporter {
    /// Create an exporter with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ExportConfig::default(),
        }
    }

    /// Create an exporter with custom configuration.
    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Enumerate every record in the store and emit batches to the sink.
    ///
    /// Records are taken in the store's default full-scan order. Every
    /// emitted batch holds exactly `batch_size` operations except the last,
    /// which holds the remainder when the record count is not an exact
    /// multiple. An empty record set emits nothing.
    #[instrument(skip(self, store, sink), fields(batch_size = self.config.batch_size))]
    pub async fn export<R: Record>(
        &self,
        store: &dyn RecordStore<R>,
        sink: &mut dyn BatchSink,
    ) -> Result<ExportSummary, AdapterError> {
        if self.config.batch_size == 0 {
            return Err(AdapterError::config("batch size must be greater than zero"));
        }

        let mut records = store.all_records();
        let mut buffer: Vec<BulkOperation> = Vec::with_capacity(self.config.batch_size);
        let mut summary = ExportSummary::default();

        while let Some(record) = records.next().await {
            let record = record?;
            buffer.push(BulkOperation::index(
                record.record_id().to_string(),
                record.index_document(),
            ));

            if buffer.len() == self.config.batch_size {
                let batch =
                    std::mem::replace(&mut buffer, Vec::with_capacity(self.config.batch_size));
                Self::emit(sink, batch, &mut summary).await?;
            }
        }

        if !buffer.is_empty() {
            Self::emit(sink, buffer, &mut summary).await?;
        }

        info!(
            records = summary.records,
            batches = summary.batches,
            "Export complete"
        );
        Ok(summary)
    }

    async fn emit(
        sink: &mut dyn BatchSink,
        batch: Vec<BulkOperation>,
        summary: &mut ExportSummary,
    ) -> Result<(), AdapterError> {
        summary.records += batch.len();
        summary.batches += 1;
        debug!(
            size = batch.len(),
            batch = summary.batches,
            "Submitting bulk batch"
        );
        sink.submit(batch).await?;
        Ok(())
    }
}

impl Default for BulkExporter {
    fn default() -> Self {
        Self::new()
    }
}
