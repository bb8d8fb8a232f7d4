//! Error types for bibindex-core

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A caller passed a structurally invalid argument
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing an index file failed
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A thread panicked while holding the shared catalog lock
    #[error("Catalog lock poisoned")]
    LockPoisoned,
}

/// Argument checks, always raised before any mutation or I/O
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Article title is empty")]
    EmptyTitle,

    #[error("Article has no authors")]
    NoAuthors,

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Index file path is empty")]
    EmptyPath,
}

/// Index file errors
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// File does not start with the index magic
    #[error("Not an index file (bad magic {0:02x?})")]
    BadMagic([u8; 4]),

    /// Format version mismatch
    #[error("Unsupported index format version: expected {expected}, got {actual}")]
    UnsupportedVersion { expected: u32, actual: u32 },

    /// File holds a different kind of index than requested
    #[error("Wrong index kind: expected {expected}, got tag {actual}")]
    WrongKind { expected: &'static str, actual: u8 },

    /// Decoded payload violates a map invariant
    #[error("Corrupt index: {0}")]
    Corrupt(String),
}

/// Storage configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("TOML encode error: {0}")]
    Encode(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl CatalogError {
    /// The validation kind, if this is a validation failure
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            CatalogError::Validation(kind) => Some(kind),
            _ => None,
        }
    }
}
