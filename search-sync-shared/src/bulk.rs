//! Bulk operation descriptors.
//!
//! A bulk batch is an ordered sequence of `BulkOperation` descriptors, each
//! pairing a record's identifier with its serialized indexable representation.
//! Batches are transient: built by the export pipeline, handed to the search
//! engine client, discarded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The serialized indexable representation of a record: a mapping of
/// field name to value, ready to be submitted to the search engine.
pub type IndexDocument = Map<String, Value>;

/// The kind of index mutation a bulk operation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    /// Insert the document, replacing any document with the same id.
    Index,
}

/// A single element of a bulk batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkOperation {
    /// The index mutation to perform.
    pub action: BulkAction,
    /// The record's identifier, stringified.
    pub id: String,
    /// The record's serialized indexable representation.
    pub document: IndexDocument,
}

impl BulkOperation {
    /// Create an index operation for the given id and document.
    pub fn index(id: impl Into<String>, document: IndexDocument) -> Self {
        Self {
            action: BulkAction::Index,
            id: id.into(),
            document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_operation_constructor() {
        let mut document = IndexDocument::new();
        document.insert("title".to_string(), json!("First post"));

        let op = BulkOperation::index("1", document.clone());

        assert_eq!(op.action, BulkAction::Index);
        assert_eq!(op.id, "1");
        assert_eq!(op.document, document);
    }

    #[test]
    fn test_action_serializes_snake_case() {
        let value = serde_json::to_value(BulkAction::Index).unwrap();

        assert_eq!(value, json!("index"));
    }
}
