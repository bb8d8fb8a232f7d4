//! Indexed bibliographic record store
//!
//! This crate holds publication records in memory and keeps a secondary
//! author index in step with them:
//! - Article: one publication entry with its full field set
//! - RecordStore: the title-keyed table of articles
//! - AuthorIndex: author name to the titles they wrote, in insertion order
//! - Catalog: owns one store and one index; the only insertion path
//! - Query: exact lookups by author or by title
//! - Persistence: versioned binary files for either map
//! - Config: where the two index files live

pub mod article;
pub mod author_index;
pub mod catalog;
pub mod config;
pub mod error;
pub mod persistence;
pub mod query;
pub mod seed;
pub mod store;
pub mod validation;

pub use article::*;
pub use author_index::AuthorIndex;
pub use catalog::{Catalog, SharedCatalog};
pub use config::StorageConfig;
pub use error::{CatalogError, ConfigError, PersistenceError, Result, ValidationError};
pub use persistence::{load_index, save_index, IndexKind, PersistedIndex};
pub use query::QueryFacade;
pub use store::RecordStore;
pub use validation::validate_article;
