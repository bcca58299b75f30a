//! Store-native document representation.
//!
//! A [`Document`] is an unordered field-name to value mapping, the shape
//! raw records take inside the store. The domain identifier lives under the
//! reserved `id` field; fields prefixed with `_` are store-internal metadata
//! (object ids, housekeeping timestamps) and are excluded from content
//! equality so mappers and tests can ignore what the store injects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{is_meta_field, ID_FIELD};
use crate::errors::MappingError;

/// Raw document as stored in a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document carrying only the identifier field.
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.set(ID_FIELD, Value::String(id.into()));
        doc
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a field as a string slice, if present and textual.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// The domain identifier under the reserved `id` field.
    ///
    /// Fails when the field is absent, non-textual, or empty; a document
    /// without an identifier cannot be persisted or mapped.
    pub fn id(&self) -> Result<&str, MappingError> {
        match self.fields.get(ID_FIELD) {
            Some(Value::String(id)) if !id.is_empty() => Ok(id),
            Some(Value::String(_)) => Err(MappingError::malformed(ID_FIELD, "empty identifier")),
            Some(other) => Err(MappingError::malformed(
                ID_FIELD,
                format!("expected string, got {other}"),
            )),
            None => Err(MappingError::missing(ID_FIELD)),
        }
    }

    /// Iterate over all fields, metadata included.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Clone of the document with store-internal metadata stripped.
    pub fn without_metadata(&self) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|(name, _)| !is_meta_field(name))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }

    /// Content equality: compares all fields except store-internal metadata.
    pub fn content_eq(&self, other: &Document) -> bool {
        let lhs = self.fields.iter().filter(|(name, _)| !is_meta_field(name));
        let rhs = other.fields.iter().filter(|(name, _)| !is_meta_field(name));
        lhs.eq(rhs)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// View the underlying field map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.fields)
    }
}
