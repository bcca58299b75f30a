//! Store driver port - Raw document access.
//!
//! The [`Collection`] trait is the seam between the repository and a concrete
//! store driver: find, scan, insert, replace, delete primitives over raw
//! documents. Drivers surface connectivity and timeout failures
//! distinguishably via [`StoreError`]; the repository translates them into
//! the crate taxonomy so callers never see driver shapes.

mod memory;

pub use memory::MemoryCollection;

use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

use crate::document::Document;
use crate::filter::Filter;

/// Driver-level failures, pre-translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    #[error("missing document `{0}`")]
    MissingDocument(String),

    #[error("store unreachable: {0}")]
    Unavailable(String),

    #[error("store-side deadline exceeded")]
    Timeout,
}

/// Result type alias for driver primitives
pub type StoreResult<T> = Result<T, StoreError>;

/// Lazy cursor over matching raw documents.
///
/// Finite; a fresh scan restarts from the beginning. Drivers may fail
/// mid-stream, so items are individually fallible.
pub type DocumentStream = BoxStream<'static, StoreResult<Document>>;

/// Connected handle to one named collection of raw documents.
///
/// Implementations hold no per-call state; concurrent use from many tasks
/// is safe. Writes to the same key are serialized by the store.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait Collection: Send + Sync {
    /// Collection name, for diagnostics only.
    fn name(&self) -> &str;

    /// Fetch the document keyed by `id`, if any.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Document>>;

    /// Open a cursor over documents matching `filter`.
    async fn scan(&self, filter: Filter) -> StoreResult<DocumentStream>;

    /// Persist a new document under `id`; fails with
    /// [`StoreError::DuplicateKey`] when that key already exists. Returns
    /// the document as persisted, including any metadata the store injected.
    async fn insert(&self, id: &str, document: Document) -> StoreResult<Document>;

    /// Atomically replace the document keyed by `id`; fails with
    /// [`StoreError::MissingDocument`] when absent. Store-internal metadata
    /// survives the replacement.
    async fn replace(&self, id: &str, document: Document) -> StoreResult<Document>;

    /// Remove the document keyed by `id`; returns whether one was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}
