//! Data mappers - Entity/document conversion.
//!
//! A mapper is the only code that knows both the domain shape and the store
//! shape. It owns no data and performs no I/O; both directions must be
//! deterministic, and `to_document` must carry the identifier through
//! verbatim so the repository can key its writes.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::document::Document;
use crate::errors::MappingError;

/// Bidirectional converter between a domain entity and its raw document.
///
/// Round-trip contract: `to_domain(to_document(e))` equals `e` for every
/// valid entity, up to store-injected metadata fields (which `to_domain`
/// must ignore unless it deliberately captures them).
pub trait DataMapper<T>: Send + Sync {
    /// Decode a raw document into a domain entity.
    fn to_domain(&self, document: &Document) -> Result<T, MappingError>;

    /// Encode a domain entity into its raw document.
    fn to_document(&self, entity: &T) -> Result<Document, MappingError>;
}

/// Generic mapper for entities that already serialize to a flat JSON object
/// carrying an `id` field.
///
/// Store-internal metadata is stripped before decoding, so entities deriving
/// `Deserialize` with `deny_unknown_fields` still round-trip cleanly.
pub struct SerdeMapper<T> {
    _entity: PhantomData<fn() -> T>,
}

impl<T> SerdeMapper<T> {
    pub fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<T> Default for SerdeMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DataMapper<T> for SerdeMapper<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn to_domain(&self, document: &Document) -> Result<T, MappingError> {
        let value = Value::from(document.without_metadata());
        serde_json::from_value(value).map_err(|e| MappingError::Codec(e.to_string()))
    }

    fn to_document(&self, entity: &T) -> Result<Document, MappingError> {
        match serde_json::to_value(entity).map_err(|e| MappingError::Codec(e.to_string()))? {
            Value::Object(fields) => {
                let doc = Document::from(fields);
                // A document without an identifier cannot be keyed.
                doc.id()?;
                Ok(doc)
            }
            other => Err(MappingError::Codec(format!(
                "entity must serialize to an object, got {other}"
            ))),
        }
    }
}

/// Convenience for mappers reading required textual fields.
pub fn require_str<'d>(document: &'d Document, field: &str) -> Result<&'d str, MappingError> {
    match document.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(MappingError::malformed(
            field,
            format!("expected string, got {other}"),
        )),
        None => Err(MappingError::missing(field)),
    }
}
