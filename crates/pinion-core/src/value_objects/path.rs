//! Collection and document paths in the document store
//!
//! Paths alternate collection and document segments, so a collection path always
//! has an odd number of segments (`pins`, `users/{uid}/savedPins`) and a document
//! path an even number (`pins/{id}`, `users/{uid}`).

use std::fmt;

use super::ids::{DocumentId, UserId};

/// Path to a collection (top-level or nested under a document)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath {
    segments: Vec<String>,
}

/// Path to a single document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    collection: CollectionPath,
    id: DocumentId,
}

impl CollectionPath {
    /// Top-level collection
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Document `id` inside this collection
    pub fn doc(&self, id: impl Into<DocumentId>) -> DocumentPath {
        DocumentPath {
            collection: self.clone(),
            id: id.into(),
        }
    }

    /// Last segment (the collection's own name)
    pub fn name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl DocumentPath {
    /// Sub-collection nested under this document
    pub fn collection(&self, name: impl Into<String>) -> CollectionPath {
        let mut segments = self.collection.segments.clone();
        segments.push(self.id.as_str().to_string());
        segments.push(name.into());
        CollectionPath { segments }
    }

    pub fn parent(&self) -> &CollectionPath {
        &self.collection
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// Well-known locations used by the app
pub mod paths {
    use super::{CollectionPath, DocumentId, DocumentPath, UserId};

    pub const PINS: &str = "pins";
    pub const USERS: &str = "users";
    pub const SAVED_PINS: &str = "savedPins";

    /// `pins`
    pub fn pins() -> CollectionPath {
        CollectionPath::root(PINS)
    }

    /// `pins/{id}`
    pub fn pin(id: &DocumentId) -> DocumentPath {
        pins().doc(id.clone())
    }

    /// `users`
    pub fn users() -> CollectionPath {
        CollectionPath::root(USERS)
    }

    /// `users/{uid}`
    pub fn user(user_id: &UserId) -> DocumentPath {
        users().doc(user_id)
    }

    /// `users/{uid}/savedPins`
    pub fn saved_pins(user_id: &UserId) -> CollectionPath {
        user(user_id).collection(SAVED_PINS)
    }

    /// `users/{uid}/savedPins/{pinId}`
    pub fn saved_pin(user_id: &UserId, pin_id: &DocumentId) -> DocumentPath {
        saved_pins(user_id).doc(pin_id.clone())
    }
}
