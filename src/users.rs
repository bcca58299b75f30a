//! User entity and repository specialization.
//!
//! The user repository is a zero-logic binding of the generic
//! [`Repository`] to the users collection; everything it can do comes
//! from the generic CRUD set.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::MappingError;
use crate::mapper::{require_str, DataMapper};
use crate::repository::Repository;
use crate::store::Collection;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Hand-written mapper between [`User`] and its raw document.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl DataMapper<User> for UserMapper {
    fn to_domain(&self, document: &Document) -> Result<User, MappingError> {
        Ok(User {
            id: document.id()?.to_owned(),
            name: require_str(document, "name")?.to_owned(),
        })
    }

    fn to_document(&self, entity: &User) -> Result<Document, MappingError> {
        let mut document = Document::with_id(entity.id.as_str());
        document.set("name", entity.name.as_str());
        Ok(document)
    }
}

/// CRUD access to the users collection.
pub type UserRepository = Repository<User, UserMapper>;

impl UserRepository {
    /// Bind to the injected users collection handle.
    pub fn open(collection: Arc<dyn Collection>) -> Self {
        Repository::new(collection, UserMapper)
    }
}
