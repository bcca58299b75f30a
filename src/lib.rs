//! docrepo - Generic document-store repository
//!
//! A persistence layer that decouples domain entities from a document
//! store's native representation via pluggable data mappers. The crate is
//! a library-level abstraction: it owns no wire protocol, file format, or
//! CLI, and is composed into an application by constructor injection.
//!
//! # Architecture
//!
//! - **config**: Crate settings and constants
//! - **document**: Store-native document representation
//! - **filter**: Field-equality scan filters
//! - **mapper**: Entity/document conversion contracts
//! - **store**: Store driver port and in-memory implementation
//! - **repository**: Generic identity-keyed CRUD façade
//! - **users**: User entity specialization
//! - **errors**: Centralized error taxonomy
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use docrepo::{MemoryCollection, User, UserRepository};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> docrepo::RepoResult<()> {
//! let collection = Arc::new(MemoryCollection::new("users"));
//! let users = UserRepository::open(collection);
//!
//! users.insert(&User::new("u1", "Ann")).await?;
//! assert!(users.find_by_id("u1").await?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod errors;
pub mod filter;
pub mod mapper;
pub mod repository;
pub mod store;
pub mod users;

// Re-export commonly used types at crate root
pub use config::Settings;
pub use document::Document;
pub use errors::{MappingError, OptionExt, RepoError, RepoResult};
pub use filter::Filter;
pub use mapper::{DataMapper, SerdeMapper};
pub use repository::{EntityStream, Repository};
pub use store::{Collection, DocumentStream, MemoryCollection, StoreError, StoreResult};
pub use users::{User, UserMapper, UserRepository};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use store::MockCollection;
