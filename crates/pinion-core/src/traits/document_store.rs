//! Document store port
//!
//! Models the managed document database the app delegates persistence to:
//! schemaless records grouped in (possibly nested) collections, addressed by path,
//! with simple equality-filter / order / limit queries.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::repositories::RepoResult;
use crate::error::DomainError;
use crate::value_objects::{CollectionPath, DocumentId, DocumentPath};

/// Top-level fields of a document
pub type Fields = Map<String, Value>;

/// A document read from the store
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: DocumentPath,
    pub fields: Fields,
}

impl Document {
    pub fn new(path: DocumentPath, fields: Fields) -> Self {
        Self { path, fields }
    }

    pub fn id(&self) -> &DocumentId {
        self.path.id()
    }

    /// Deserialize the fields into a typed record
    pub fn decode<T: DeserializeOwned>(&self) -> RepoResult<T> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|e| {
            DomainError::MalformedDocument {
                path: self.path.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// How a write treats an existing document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the whole document, creating it if absent
    Replace,
    /// Overwrite only the given top-level fields, creating the document if absent
    Merge,
}

/// Sort direction for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    #[default]
    Ascending,
    Descending,
}

/// Equality condition on a top-level field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

/// Sort key for a query
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: OrderDirection,
}

/// Collection query: all filters must match, then order, then limit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<FieldFilter>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    /// Query matching every document
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep documents whose `field` equals `value`
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(FieldFilter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check the equality filters against a document's fields
    pub fn matches(&self, fields: &Fields) -> bool {
        self.filters
            .iter()
            .all(|filter| fields.get(&filter.field) == Some(&filter.value))
    }
}

/// Managed document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Add a document with a store-assigned id
    async fn create_document(
        &self,
        collection: &CollectionPath,
        fields: Fields,
    ) -> RepoResult<DocumentId>;

    /// Read a document, `None` if it does not exist
    async fn get_document(&self, path: &DocumentPath) -> RepoResult<Option<Document>>;

    /// Run a query over one collection
    async fn list_documents(
        &self,
        collection: &CollectionPath,
        query: &Query,
    ) -> RepoResult<Vec<Document>>;

    /// Write fields to a document at a known path
    async fn update_document(
        &self,
        path: &DocumentPath,
        fields: Fields,
        mode: WriteMode,
    ) -> RepoResult<()>;

    /// Remove a document; removing a missing document is not an error
    async fn delete_document(&self, path: &DocumentPath) -> RepoResult<()>;
}
