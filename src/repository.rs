//! Generic repository - Identity-keyed CRUD over one collection.
//!
//! A [`Repository`] binds one collection handle to one data mapper, both
//! injected at construction. It holds no session state and only immutable
//! shared references, so one instance can serve any number of concurrent
//! tasks. It adds no locking of its own: ordering between writes to the
//! same identifier is whatever the store guarantees at single-document
//! granularity (last writer wins).

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::BoxStream;
use futures::StreamExt;
use tokio::time::timeout;

use crate::config::Settings;
use crate::errors::{RepoError, RepoResult};
use crate::filter::Filter;
use crate::mapper::DataMapper;
use crate::store::{Collection, StoreError};

/// Lazy, finite stream of mapped entities.
///
/// Restartable in the sense that a new call to
/// [`Repository::find_all`] opens a fresh cursor from the start.
pub type EntityStream<T> = BoxStream<'static, RepoResult<T>>;

/// Generic CRUD façade over one collection, mediated by one mapper.
pub struct Repository<T, M: DataMapper<T>> {
    collection: Arc<dyn Collection>,
    mapper: Arc<M>,
    op_timeout: Duration,
    _entity: PhantomData<fn() -> T>,
}

impl<T, M: DataMapper<T>> Clone for Repository<T, M> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            mapper: Arc::clone(&self.mapper),
            op_timeout: self.op_timeout,
            _entity: PhantomData,
        }
    }
}

impl<T, M> Repository<T, M>
where
    T: Send + 'static,
    M: DataMapper<T> + 'static,
{
    /// Bind a repository to an injected collection handle and mapper,
    /// using default settings.
    pub fn new(collection: Arc<dyn Collection>, mapper: M) -> Self {
        Self::with_settings(collection, mapper, &Settings::default())
    }

    /// Bind a repository with explicit settings.
    pub fn with_settings(collection: Arc<dyn Collection>, mapper: M, settings: &Settings) -> Self {
        Self {
            collection,
            mapper: Arc::new(mapper),
            op_timeout: settings.op_timeout,
            _entity: PhantomData,
        }
    }

    /// Override the per-operation deadline. Cloning a repository handle is
    /// cheap, so a caller wanting a one-off deadline clones and adjusts.
    pub fn with_op_timeout(mut self, op_timeout: Duration) -> Self {
        self.op_timeout = op_timeout;
        self
    }

    /// Name of the bound collection, for diagnostics.
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Look up an entity by identifier. Absence is `Ok(None)`, not an error.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        tracing::debug!(collection = self.collection.name(), id, "find_by_id");
        let document = self.guarded(self.collection.find_by_id(id)).await?;
        document
            .map(|doc| self.mapper.to_domain(&doc))
            .transpose()
            .map_err(Into::into)
    }

    /// Open a lazy stream over entities matching `filter`. An empty match
    /// set yields an empty stream; mapping failures surface per item.
    pub async fn find_all(&self, filter: Filter) -> RepoResult<EntityStream<T>> {
        tracing::debug!(collection = self.collection.name(), ?filter, "find_all");
        let documents = self.guarded(self.collection.scan(filter)).await?;
        let mapper = Arc::clone(&self.mapper);
        Ok(documents
            .map(move |item| match item {
                Ok(doc) => mapper.to_domain(&doc).map_err(Into::into),
                Err(err) => Err(translate(err)),
            })
            .boxed())
    }

    /// Persist a new entity. Fails with
    /// [`RepoError::DuplicateIdentifier`] when the identifier exists.
    /// Returns the entity as persisted; metadata the store injects becomes
    /// visible only if the mapper captures it.
    pub async fn insert(&self, entity: &T) -> RepoResult<T> {
        let document = self.mapper.to_document(entity)?;
        let id = document.id()?.to_owned();
        tracing::debug!(collection = self.collection.name(), id, "insert");

        let persisted = self.guarded(self.collection.insert(&id, document)).await?;
        Ok(self.mapper.to_domain(&persisted)?)
    }

    /// Replace the stored document for the entity's identifier. Fails with
    /// [`RepoError::NotFound`] when no such document exists; atomic at
    /// document granularity.
    pub async fn update(&self, entity: &T) -> RepoResult<T> {
        let document = self.mapper.to_document(entity)?;
        let id = document.id()?.to_owned();
        tracing::debug!(collection = self.collection.name(), id, "update");

        let persisted = self.guarded(self.collection.replace(&id, document)).await?;
        Ok(self.mapper.to_domain(&persisted)?)
    }

    /// Remove the document for `id`. Returns whether one was removed;
    /// an absent identifier is `Ok(false)`, never an error.
    pub async fn delete_by_id(&self, id: &str) -> RepoResult<bool> {
        tracing::debug!(collection = self.collection.name(), id, "delete_by_id");
        self.guarded(self.collection.delete(id)).await
    }

    /// Run one store call under the configured deadline, translating driver
    /// errors into the crate taxonomy. On expiry the in-flight future is
    /// dropped; abandonment beyond that is whatever the driver guarantees.
    async fn guarded<R>(
        &self,
        call: impl Future<Output = Result<R, StoreError>>,
    ) -> RepoResult<R> {
        match timeout(self.op_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                let err = translate(err);
                if err.is_transient() {
                    tracing::warn!(
                        collection = self.collection.name(),
                        error = %err,
                        "transient store failure"
                    );
                }
                Err(err)
            }
            Err(_) => {
                tracing::warn!(
                    collection = self.collection.name(),
                    deadline_ms = self.op_timeout.as_millis() as u64,
                    "store call exceeded deadline"
                );
                Err(RepoError::Timeout)
            }
        }
    }
}

/// Map driver errors into the crate taxonomy so callers never depend on
/// store-specific shapes.
fn translate(err: StoreError) -> RepoError {
    match err {
        StoreError::DuplicateKey(id) => RepoError::DuplicateIdentifier(id),
        StoreError::MissingDocument(id) => RepoError::NotFound(id),
        StoreError::Unavailable(detail) => RepoError::StoreUnavailable(detail),
        StoreError::Timeout => RepoError::Timeout,
    }
}
