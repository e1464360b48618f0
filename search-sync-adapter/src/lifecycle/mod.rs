//! Lifecycle index synchronization.
//!
//! Keeps the search index incrementally fresh by binding a record type's
//! create/update/destroy events to the corresponding index mutations. The
//! hooks run inline, in the caller's task, as part of the triggering event:
//! no batching, no retry, no deduplication. A failed index mutation
//! propagates to whoever performed the persistence operation, since the
//! datastore write has already committed and the caller must learn that the
//! index is now behind.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::debug;

use search_sync_repository::{Record, SearchEngineClient, SearchError};

type Hook<R> = Box<dyn Fn(&R) -> BoxFuture<'static, Result<(), SearchError>> + Send + Sync>;

/// Explicit subscription registry for a record type's lifecycle events.
///
/// The host record type owns one of these and calls the `after_*` dispatch
/// methods once the corresponding persistence operation has committed.
/// Callbacks run in registration order, awaited inline; the first error
/// stops dispatch and propagates.
///
/// A callback receives the affected record and returns a future; anything
/// the future needs from the record must be extracted before going async.
pub struct LifecycleHooks<R> {
    after_create: Vec<Hook<R>>,
    after_update: Vec<Hook<R>>,
    after_destroy: Vec<Hook<R>>,
}

impl<R> LifecycleHooks<R> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            after_create: Vec::new(),
            after_update: Vec::new(),
            after_destroy: Vec::new(),
        }
    }

    /// Register a callback for record creation.
    pub fn on_after_create<F, Fut>(&mut self, hook: F)
    where
        F: Fn(&R) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SearchError>> + Send + 'static,
    {
        self.after_create.push(Self::boxed(hook));
    }

    /// Register a callback for record updates.
    pub fn on_after_update<F, Fut>(&mut self, hook: F)
    where
        F: Fn(&R) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SearchError>> + Send + 'static,
    {
        self.after_update.push(Self::boxed(hook));
    }

    /// Register a callback for record destruction.
    pub fn on_after_destroy<F, Fut>(&mut self, hook: F)
    where
        F: Fn(&R) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SearchError>> + Send + 'static,
    {
        self.after_destroy.push(Self::boxed(hook));
    }

    /// Dispatch the creation callbacks for `record`.
    pub async fn after_create(&self, record: &R) -> Result<(), SearchError> {
        Self::dispatch(&self.after_create, record).await
    }

    /// Dispatch the update callbacks for `record`.
    pub async fn after_update(&self, record: &R) -> Result<(), SearchError> {
        Self::dispatch(&self.after_update, record).await
    }

    /// Dispatch the destruction callbacks for `record`.
    pub async fn after_destroy(&self, record: &R) -> Result<(), SearchError> {
        Self::dispatch(&self.after_destroy, record).await
    }

    fn boxed<F, Fut>(hook: F) -> Hook<R>
    where
        F: Fn(&R) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SearchError>> + Send + 'static,
    {
        Box::new(move |record| -> BoxFuture<'static, Result<(), SearchError>> {
            Box::pin(hook(record))
        })
    }

    async fn dispatch(hooks: &[Hook<R>], record: &R) -> Result<(), SearchError> {
        for hook in hooks {
            hook(record).await?;
        }
        Ok(())
    }
}

impl<R> Default for LifecycleHooks<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Binds lifecycle events to index mutations on the search engine client.
///
/// The synchronizer holds no state beyond the client; attaching it to a
/// record type registers exactly three callbacks:
///
/// - after create → index the record's document
/// - after update → update the record's document
/// - after destroy → delete the record's document
pub struct LifecycleSynchronizer {
    client: Arc<dyn SearchEngineClient>,
}

impl LifecycleSynchronizer {
    /// Create a synchronizer driving the given client.
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self { client }
    }

    /// Register index mutation callbacks for a record type's lifecycle.
    pub fn attach<R: Record + 'static>(&self, hooks: &mut LifecycleHooks<R>) {
        let client = Arc::clone(&self.client);
        hooks.on_after_create(move |record: &R| {
            let client = Arc::clone(&client);
            let id = record.record_id();
            let document = record.index_document();
            async move { client.index_document(&id, &document).await }
        });

        let client = Arc::clone(&self.client);
        hooks.on_after_update(move |record: &R| {
            let client = Arc::clone(&client);
            let id = record.record_id();
            let document = record.index_document();
            async move { client.update_document(&id, &document).await }
        });

        let client = Arc::clone(&self.client);
        hooks.on_after_destroy(move |record: &R| {
            let client = Arc::clone(&client);
            let id = record.record_id();
            async move { client.delete_document(&id).await }
        });

        debug!("Attached index lifecycle hooks");
    }
}
