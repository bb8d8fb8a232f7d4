//! Binary persistence for the record table and the author index
//!
//! Each map is written to its own file: a 9-byte header (see [`header`])
//! followed by the bincode encoding of the map, which is the entry count and
//! then every key followed by its value. The two files are saved
//! independently; nothing keeps them in sync across a crash.

mod header;

pub use header::{FORMAT_VERSION, HEADER_LEN, MAGIC};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::author_index::AuthorIndex;
use crate::error::{PersistenceError, Result, ValidationError};
use crate::store::RecordStore;

/// Which map an index file holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    /// Title to article
    Records,
    /// Author to titles
    AuthorIndex,
}

impl IndexKind {
    /// Tag byte stored in the file header
    pub fn tag(self) -> u8 {
        match self {
            IndexKind::Records => 1,
            IndexKind::AuthorIndex => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IndexKind::Records => "records",
            IndexKind::AuthorIndex => "author index",
        }
    }
}

/// A map that can be written to and read back from an index file
pub trait PersistedIndex: Serialize + DeserializeOwned {
    const KIND: IndexKind;

    /// Number of entries, for logging
    fn entry_count(&self) -> usize;

    /// Check invariants of a freshly decoded value
    fn check_loaded(&self) -> std::result::Result<(), PersistenceError> {
        Ok(())
    }
}

impl PersistedIndex for RecordStore {
    const KIND: IndexKind = IndexKind::Records;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn check_loaded(&self) -> std::result::Result<(), PersistenceError> {
        match self.mismatched_key() {
            Some(key) => Err(PersistenceError::Corrupt(format!(
                "record stored under {key:?} has a different title"
            ))),
            None => Ok(()),
        }
    }
}

impl PersistedIndex for AuthorIndex {
    const KIND: IndexKind = IndexKind::AuthorIndex;

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// bincode 1.x encoding shared by both index kinds: little-endian, fixed-width
/// integers, u64 length prefixes
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

/// Write `index` to `path`, truncating any existing file
///
/// Fails with [`ValidationError::EmptyPath`] before touching the filesystem
/// when `path` is empty.
pub fn save_index<T: PersistedIndex>(index: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath.into());
    }

    let file = File::create(path).map_err(PersistenceError::Io)?;
    let mut writer = BufWriter::new(file);
    header::write_header(&mut writer, T::KIND)?;
    codec()
        .serialize_into(&mut writer, index)
        .map_err(PersistenceError::Serialization)?;
    writer.flush().map_err(PersistenceError::Io)?;

    tracing::info!(
        "Saved {} index ({} entries) to {:?}",
        T::KIND.name(),
        index.entry_count(),
        path
    );
    Ok(())
}

/// Read an index previously written by [`save_index`]
///
/// Decoding is bounded by the payload size on disk, so a damaged length
/// prefix fails with [`PersistenceError::Serialization`] instead of
/// allocating whatever the prefix claims.
pub fn load_index<T: PersistedIndex>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath.into());
    }

    let file = File::open(path).map_err(PersistenceError::Io)?;
    let payload_len = file
        .metadata()
        .map_err(PersistenceError::Io)?
        .len()
        .saturating_sub(HEADER_LEN as u64);
    let mut reader = BufReader::new(file);
    header::read_header(&mut reader, T::KIND)?;
    let index: T = codec()
        .with_limit(payload_len)
        .deserialize_from(&mut reader)
        .map_err(PersistenceError::Serialization)?;
    index.check_loaded()?;

    tracing::info!(
        "Loaded {} index ({} entries) from {:?}",
        T::KIND.name(),
        index.entry_count(),
        path
    );
    Ok(index)
}
