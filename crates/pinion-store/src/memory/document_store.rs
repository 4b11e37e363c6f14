//! In-memory document store
//!
//! Collections are kept in a `DashMap` keyed by collection path, each holding
//! its documents ordered by id.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use pinion_core::traits::{
    Document, DocumentStore, Fields, OrderDirection, Query, RepoResult, WriteMode,
};
use pinion_core::value_objects::{CollectionPath, DocumentId, DocumentPath};

/// Document store held in process memory
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    /// Documents by collection path, then by document id
    collections: DashMap<String, BTreeMap<String, Fields>>,
}

impl MemoryDocumentStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &CollectionPath) -> usize {
        self.collections
            .get(&collection.to_string())
            .map_or(0, |docs| docs.len())
    }

    fn key(path: &DocumentPath) -> (String, String) {
        (path.parent().to_string(), path.id().to_string())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_document(
        &self,
        collection: &CollectionPath,
        fields: Fields,
    ) -> RepoResult<DocumentId> {
        let id = Uuid::new_v4().simple().to_string();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);

        tracing::debug!(collection = %collection, id = %id, "Document created");

        Ok(DocumentId::new(id))
    }

    async fn get_document(&self, path: &DocumentPath) -> RepoResult<Option<Document>> {
        let (collection, id) = Self::key(path);
        let fields = self
            .collections
            .get(&collection)
            .and_then(|docs| docs.get(&id).cloned());

        Ok(fields.map(|fields| Document::new(path.clone(), fields)))
    }

    async fn list_documents(
        &self,
        collection: &CollectionPath,
        query: &Query,
    ) -> RepoResult<Vec<Document>> {
        let mut matched: Vec<(String, Fields)> = match self.collections.get(&collection.to_string())
        {
            Some(docs) => docs
                .iter()
                .filter(|(_, fields)| query.matches(fields))
                .map(|(id, fields)| (id.clone(), fields.clone()))
                .collect(),
            None => Vec::new(),
        };

        if let Some(order) = &query.order_by {
            // Documents without the sort field are left out, as in the hosted store
            matched.retain(|(_, fields)| fields.contains_key(&order.field));
            matched.sort_by(|(_, a), (_, b)| {
                let ordering = compare_values(
                    a.get(&order.field).unwrap_or(&Value::Null),
                    b.get(&order.field).unwrap_or(&Value::Null),
                );
                match order.direction {
                    OrderDirection::Ascending => ordering,
                    OrderDirection::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }

        Ok(matched
            .into_iter()
            .map(|(id, fields)| Document::new(collection.doc(id), fields))
            .collect())
    }

    async fn update_document(
        &self,
        path: &DocumentPath,
        fields: Fields,
        mode: WriteMode,
    ) -> RepoResult<()> {
        let (collection, id) = Self::key(path);
        let mut docs = self.collections.entry(collection).or_default();

        match mode {
            WriteMode::Replace => {
                docs.insert(id, fields);
            }
            WriteMode::Merge => {
                docs.entry(id).or_default().extend(fields);
            }
        }

        tracing::debug!(path = %path, ?mode, "Document written");

        Ok(())
    }

    async fn delete_document(&self, path: &DocumentPath) -> RepoResult<()> {
        let (collection, id) = Self::key(path);
        if let Some(mut docs) = self.collections.get_mut(&collection) {
            docs.remove(&id);
        }
        Ok(())
    }
}

/// Order values the way the hosted store does across types:
/// null < booleans < numbers < strings < arrays < maps
fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
