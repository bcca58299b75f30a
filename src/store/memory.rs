//! In-memory collection implementation.
//!
//! Thread-safe, async-aware store backing for tests and small embedded
//! deployments. Behaves like a real document store at the single-document
//! level: inserts inject `_oid` and `_created_at` metadata, replacements
//! are atomic and keep the original metadata, and same-key writes are
//! serialized by the write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures::stream;
use futures::StreamExt;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::{is_meta_field, META_CREATED_AT, META_OID};
use crate::document::Document;
use crate::filter::Filter;

use super::{Collection, DocumentStream, StoreError, StoreResult};

/// In-process collection of raw documents keyed by identifier.
#[derive(Clone)]
pub struct MemoryCollection {
    name: String,
    documents: Arc<RwLock<HashMap<String, Document>>>,
}

impl MemoryCollection {
    /// Create an empty named collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    fn stamp_metadata(document: &mut Document) {
        document.set(META_OID, Uuid::new_v4().to_string());
        document.set(META_CREATED_AT, Utc::now().to_rfc3339());
    }
}

#[async_trait]
impl Collection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Document>> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn scan(&self, filter: Filter) -> StoreResult<DocumentStream> {
        // Snapshot under the read lock; the cursor itself never blocks writers.
        let matching: Vec<Document> = self
            .documents
            .read()
            .await
            .values()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect();

        Ok(stream::iter(matching.into_iter().map(Ok)).boxed())
    }

    async fn insert(&self, id: &str, document: Document) -> StoreResult<Document> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(id) {
            return Err(StoreError::DuplicateKey(id.to_owned()));
        }

        let mut persisted = document;
        Self::stamp_metadata(&mut persisted);
        documents.insert(id.to_owned(), persisted.clone());
        Ok(persisted)
    }

    async fn replace(&self, id: &str, document: Document) -> StoreResult<Document> {
        let mut documents = self.documents.write().await;
        let existing = documents
            .get(id)
            .ok_or_else(|| StoreError::MissingDocument(id.to_owned()))?;

        // Carry the original metadata over; the caller replaces content only.
        let mut replacement = document.without_metadata();
        for (name, value) in existing.iter() {
            if is_meta_field(name) {
                replacement.set(name.clone(), value.clone());
            }
        }

        documents.insert(id.to_owned(), replacement.clone());
        Ok(replacement)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        Ok(self.documents.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;

    fn doc(id: &str, name: &str) -> Document {
        let mut d = Document::with_id(id);
        d.set("name", name);
        d
    }

    #[tokio::test]
    async fn insert_stamps_metadata_and_rejects_duplicates() {
        let coll = MemoryCollection::new("users");

        let persisted = coll.insert("u1", doc("u1", "Ann")).await.unwrap();
        assert!(persisted.get_str(META_OID).is_some());
        assert!(persisted.get_str(META_CREATED_AT).is_some());
        assert!(persisted.content_eq(&doc("u1", "Ann")));

        let err = coll.insert("u1", doc("u1", "Other")).await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey("u1".into()));

        // Original untouched after the rejected insert.
        let stored = coll.find_by_id("u1").await.unwrap().unwrap();
        assert_eq!(stored.get_str("name"), Some("Ann"));
    }

    #[tokio::test]
    async fn replace_preserves_metadata() {
        let coll = MemoryCollection::new("users");
        let persisted = coll.insert("u1", doc("u1", "Ann")).await.unwrap();
        let oid = persisted.get_str(META_OID).unwrap().to_owned();

        let replaced = coll.replace("u1", doc("u1", "Anne")).await.unwrap();
        assert_eq!(replaced.get_str("name"), Some("Anne"));
        assert_eq!(replaced.get_str(META_OID), Some(oid.as_str()));

        let err = coll.replace("u2", doc("u2", "Nobody")).await.unwrap_err();
        assert_eq!(err, StoreError::MissingDocument("u2".into()));
    }

    #[tokio::test]
    async fn scan_filters_and_restarts() {
        let coll = MemoryCollection::new("users");
        coll.insert("u1", doc("u1", "Ann")).await.unwrap();
        coll.insert("u2", doc("u2", "Bob")).await.unwrap();

        let anns: Vec<Document> = coll
            .scan(Filter::all().eq("name", "Ann"))
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(anns.len(), 1);
        assert_eq!(anns[0].get_str("id"), Some("u1"));

        // A second scan is a fresh cursor over the full match set.
        let all: Vec<Document> = coll
            .scan(Filter::all())
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn delete_reports_absence() {
        let coll = MemoryCollection::new("users");
        coll.insert("u1", doc("u1", "Ann")).await.unwrap();

        assert!(coll.delete("u1").await.unwrap());
        assert!(!coll.delete("u1").await.unwrap());
        assert!(!coll.delete("u1").await.unwrap());
    }
}
