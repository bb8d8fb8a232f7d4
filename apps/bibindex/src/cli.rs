//! Command-line arguments and storage resolution

use std::path::PathBuf;

use bibindex_core::{ConfigError, StorageConfig};
use clap::{Parser, Subcommand};

/// Index and search bibliographic records
#[derive(Debug, Parser)]
#[command(name = "bibindex", version, about)]
pub struct Cli {
    /// TOML file naming the two index files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Title-to-record index file (overrides the config file)
    #[arg(long, global = true)]
    pub records: Option<PathBuf>,

    /// Author-to-titles index file (overrides the config file)
    #[arg(long, global = true)]
    pub authors: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add the built-in sample records and save
    Seed,
    /// Add records from a JSON array of articles and save
    Import {
        /// JSON file holding an array of article objects
        file: PathBuf,
    },
    /// List every record by an author
    Author {
        /// Exact author name
        name: String,
    },
    /// Show the record with a title
    Title {
        /// Exact title
        title: String,
    },
    /// Show record and author counts
    Stats,
}

impl Cli {
    /// Storage paths: flags, then the config file, then defaults
    pub fn storage(&self) -> Result<StorageConfig, ConfigError> {
        let mut storage = match &self.config {
            Some(path) => StorageConfig::load(path)?,
            None => StorageConfig::default(),
        };

        if let Some(records) = &self.records {
            storage.records_path = records.clone();
        }
        if let Some(authors) = &self.authors {
            storage.author_index_path = authors.clone();
        }

        storage.validate()?;
        Ok(storage)
    }
}
