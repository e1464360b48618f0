//! Rank-preserving result sets.
//!
//! A search query returns hit ids in relevance order; the datastore returns
//! the matching records in whatever order it likes. `RankedRecords` wraps
//! the datastore's deferred id-in query so that materializing it yields the
//! records in the ranked order, until the caller applies an explicit
//! ordering, which permanently switches the wrapper to the datastore's
//! natural order.

use std::collections::HashMap;

use tokio::sync::OnceCell;
use tracing::debug;

use crate::errors::AdapterError;
use search_sync_repository::{Record, RecordQuery, RecordStore, SortDirection, StoreError};
use search_sync_shared::RecordId;

/// Ordering strategy for materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderMode {
    /// Sort fetched records by their position in the ranked id sequence.
    Ranked,
    /// Keep the order the datastore fetched them in.
    Natural,
}

/// A result set whose materialization follows a ranked id sequence.
///
/// Construction is deferred: nothing executes against the datastore until
/// [`materialize`](Self::materialize) is called, and the materialized
/// sequence is cached per instance, so repeated materialization is
/// idempotent and runs the query once.
///
/// The explicit ordering methods consume `self` and return a wrapper that
/// delegates to the datastore's native ordering; ranked reordering never
/// reapplies to the returned instance.
pub struct RankedRecords<R: Record> {
    query: Box<dyn RecordQuery<R>>,
    positions: HashMap<String, usize>,
    mode: OrderMode,
    cache: OnceCell<Vec<R>>,
}

impl<R: Record> RankedRecords<R> {
    /// Build a rank-preserving result set for the records matching `ids`.
    ///
    /// `ids` is the ranked sequence from a prior search, most relevant
    /// first. Duplicate ids are tolerated; the first occurrence's position
    /// wins. An empty sequence materializes to an empty set, not an error.
    pub fn fetch(store: &dyn RecordStore<R>, ids: &[RecordId]) -> Self {
        let mut positions = HashMap::with_capacity(ids.len());
        for (position, id) in ids.iter().enumerate() {
            positions.entry(id.as_str().to_string()).or_insert(position);
        }

        Self {
            query: store.query_by_ids(ids),
            positions,
            mode: OrderMode::Ranked,
            cache: OnceCell::new(),
        }
    }

    /// Execute the query (once) and return the ordered records.
    ///
    /// Under ranked mode the fetched records are stable-sorted by rank
    /// position; records whose id is absent from the ranked sequence sort
    /// after every ranked record, keeping their relative fetch order.
    /// Ranking only permutes: the returned records are exactly the set the
    /// query fetched.
    pub async fn materialize(&self) -> Result<&[R], AdapterError> {
        let records = self
            .cache
            .get_or_try_init(|| async {
                let mut records = self.query.fetch().await?;
                if self.mode == OrderMode::Ranked {
                    records.sort_by_key(|record| self.rank_of(record));
                }
                debug!(count = records.len(), mode = ?self.mode, "Materialized result set");
                Ok::<_, StoreError>(records)
            })
            .await?;

        Ok(records.as_slice())
    }

    /// Order ascending by `field`, dropping ranked reordering.
    pub fn ascending(self, field: &str) -> Self {
        self.natural(|query| query.ascending(field))
    }

    /// Order descending by `field`, dropping ranked reordering.
    pub fn descending(self, field: &str) -> Self {
        self.natural(|query| query.descending(field))
    }

    /// Order by `field` in the given direction, dropping ranked reordering.
    pub fn order_by(self, field: &str, direction: SortDirection) -> Self {
        self.natural(|query| query.order_by(field, direction))
    }

    fn natural(
        self,
        order: impl FnOnce(Box<dyn RecordQuery<R>>) -> Box<dyn RecordQuery<R>>,
    ) -> Self {
        Self {
            query: order(self.query),
            positions: self.positions,
            mode: OrderMode::Natural,
            cache: OnceCell::new(),
        }
    }

    /// Rank position of a record; ids missing from the ranked sequence sort
    /// after every ranked id.
    fn rank_of(&self, record: &R) -> usize {
        self.positions
            .get(record.record_id().as_str())
            .copied()
            .unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::stream::{self, BoxStream, StreamExt};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use search_sync_shared::IndexDocument;

    #[derive(Debug, Clone, PartialEq)]
    struct Post {
        id: u64,
        title: String,
    }

    impl Post {
        fn new(id: u64, title: &str) -> Self {
            Self {
                id,
                title: title.to_string(),
            }
        }
    }

    impl Record for Post {
        fn record_id(&self) -> RecordId {
            RecordId::from(self.id)
        }

        fn index_document(&self) -> IndexDocument {
            let mut document = IndexDocument::new();
            document.insert("title".to_string(), json!(self.title));
            document
        }
    }

    /// In-memory store whose queries are deferred until fetch.
    struct MemoryStore {
        posts: Vec<Post>,
        /// When false, id-in queries return every post, simulating a
        /// datastore that hands back records outside the ranked sequence.
        filter_by_ids: bool,
        fetch_count: Arc<AtomicUsize>,
    }

    impl MemoryStore {
        fn new(posts: Vec<Post>) -> Self {
            Self {
                posts,
                filter_by_ids: true,
                fetch_count: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn unfiltered(posts: Vec<Post>) -> Self {
            Self {
                filter_by_ids: false,
                ..Self::new(posts)
            }
        }
    }

    impl RecordStore<Post> for MemoryStore {
        fn query_by_ids(&self, ids: &[RecordId]) -> Box<dyn RecordQuery<Post>> {
            let posts = if self.filter_by_ids {
                self.posts
                    .iter()
                    .filter(|post| ids.contains(&post.record_id()))
                    .cloned()
                    .collect()
            } else {
                self.posts.clone()
            };

            Box::new(MemoryQuery {
                posts,
                sort: None,
                fetch_count: Arc::clone(&self.fetch_count),
            })
        }

        fn all_records(&self) -> BoxStream<'_, Result<Post, StoreError>> {
            stream::iter(self.posts.clone().into_iter().map(Ok)).boxed()
        }
    }

    struct MemoryQuery {
        posts: Vec<Post>,
        sort: Option<(String, SortDirection)>,
        fetch_count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RecordQuery<Post> for MemoryQuery {
        async fn fetch(&self) -> Result<Vec<Post>, StoreError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);

            let mut posts = self.posts.clone();
            if let Some((field, direction)) = &self.sort {
                match field.as_str() {
                    "id" => posts.sort_by_key(|post| post.id),
                    "title" => posts.sort_by(|a, b| a.title.cmp(&b.title)),
                    other => return Err(StoreError::query(format!("unknown field: {other}"))),
                }
                if *direction == SortDirection::Descending {
                    posts.reverse();
                }
            }
            Ok(posts)
        }

        fn order_by(
            self: Box<Self>,
            field: &str,
            direction: SortDirection,
        ) -> Box<dyn RecordQuery<Post>> {
            Box::new(MemoryQuery {
                posts: self.posts,
                sort: Some((field.to_string(), direction)),
                fetch_count: self.fetch_count,
            })
        }
    }

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|post| post.id).collect()
    }

    fn ranked(ids: &[u64]) -> Vec<RecordId> {
        ids.iter().map(|id| RecordId::from(*id)).collect()
    }

    #[tokio::test]
    async fn test_materialize_follows_ranked_order() {
        let store = MemoryStore::new(vec![Post::new(1, "One"), Post::new(2, "Two")]);

        let records = RankedRecords::fetch(&store, &ranked(&[2, 1]));

        assert_eq!(ids(records.materialize().await.unwrap()), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_explicit_ascending_disables_ranking() {
        let store = MemoryStore::new(vec![Post::new(1, "One"), Post::new(2, "Two")]);

        let records = RankedRecords::fetch(&store, &ranked(&[2, 1])).ascending("id");

        assert_eq!(ids(records.materialize().await.unwrap()), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_order_by_descending_uses_natural_order() {
        let store = MemoryStore::new(vec![
            Post::new(1, "One"),
            Post::new(2, "Two"),
            Post::new(3, "Three"),
        ]);

        let records = RankedRecords::fetch(&store, &ranked(&[2, 1, 3]))
            .order_by("id", SortDirection::Descending);

        assert_eq!(ids(records.materialize().await.unwrap()), vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_materialize_is_idempotent_and_fetches_once() {
        let store = MemoryStore::new(vec![Post::new(1, "One"), Post::new(2, "Two")]);
        let fetch_count = Arc::clone(&store.fetch_count);

        let records = RankedRecords::fetch(&store, &ranked(&[2, 1]));

        let first = records.materialize().await.unwrap().to_vec();
        let second = records.materialize().await.unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(fetch_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_construction_does_not_execute_the_query() {
        let store = MemoryStore::new(vec![Post::new(1, "One")]);
        let fetch_count = Arc::clone(&store.fetch_count);

        let _records = RankedRecords::fetch(&store, &ranked(&[1]));

        assert_eq!(fetch_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unranked_records_sort_last_in_fetch_order() {
        // The datastore should never return records outside the ranked
        // sequence, but when it does they go to the end, stable.
        let store = MemoryStore::unfiltered(vec![
            Post::new(1, "One"),
            Post::new(2, "Two"),
            Post::new(3, "Three"),
        ]);

        let records = RankedRecords::fetch(&store, &ranked(&[3]));

        assert_eq!(ids(records.materialize().await.unwrap()), vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_duplicate_ranked_ids_first_position_wins() {
        let store = MemoryStore::new(vec![Post::new(1, "One"), Post::new(2, "Two")]);

        let records = RankedRecords::fetch(&store, &ranked(&[2, 2, 1]));

        assert_eq!(ids(records.materialize().await.unwrap()), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_empty_ranked_ids_materialize_empty() {
        let store = MemoryStore::new(vec![Post::new(1, "One")]);

        let records = RankedRecords::fetch(&store, &[]);

        assert!(records.materialize().await.unwrap().is_empty());
    }
}
