//! Subcommand implementations
//!
//! Each command loads the catalog from the configured files, does its work
//! and writes human-readable output to `out`. Mutating commands save both
//! files afterwards.

use std::io::Write;
use std::path::Path;

use bibindex_core::seed::seed_articles;
use bibindex_core::{Article, Catalog, StorageConfig};

use crate::cli::Command;
use crate::display::{format_author_results, format_title_result};
use crate::error::{CliError, Result};

/// Run one subcommand against the catalog at `storage`
pub fn run<W: Write>(command: &Command, storage: &StorageConfig, out: &mut W) -> Result<()> {
    match command {
        Command::Seed => seed(storage, out),
        Command::Import { file } => import(file, storage, out),
        Command::Author { name } => by_author(name, storage, out),
        Command::Title { title } => by_title(title, storage, out),
        Command::Stats => stats(storage, out),
    }
}

fn seed<W: Write>(storage: &StorageConfig, out: &mut W) -> Result<()> {
    let mut catalog = Catalog::load_or_default(storage)?;
    let count = catalog.insert_all(seed_articles())?;
    save(&catalog, storage)?;
    writeln!(out, "Seeded {count} articles")?;
    Ok(())
}

fn import<W: Write>(file: &Path, storage: &StorageConfig, out: &mut W) -> Result<()> {
    let articles = read_articles(file)?;
    let mut catalog = Catalog::load_or_default(storage)?;

    let mut imported = 0;
    let mut rejected = 0;
    for article in articles {
        let title = article.title.clone();
        match catalog.insert(article) {
            Ok(_) => imported += 1,
            Err(err) => {
                tracing::warn!("Skipping article {:?}: {}", title, err);
                rejected += 1;
            }
        }
    }

    save(&catalog, storage)?;
    writeln!(out, "Imported {imported} articles, skipped {rejected}")?;
    Ok(())
}

fn by_author<W: Write>(name: &str, storage: &StorageConfig, out: &mut W) -> Result<()> {
    let catalog = Catalog::load_or_default(storage)?;
    let found = catalog.query().search_by_author(name)?;
    write!(out, "{}", format_author_results(name, &found))?;
    Ok(())
}

fn by_title<W: Write>(title: &str, storage: &StorageConfig, out: &mut W) -> Result<()> {
    let catalog = Catalog::load_or_default(storage)?;
    let found = catalog.query().search_by_title(title)?;
    write!(out, "{}", format_title_result(title, found))?;
    Ok(())
}

fn stats<W: Write>(storage: &StorageConfig, out: &mut W) -> Result<()> {
    let catalog = Catalog::load_or_default(storage)?;
    writeln!(out, "Records: {}", catalog.records().len())?;
    writeln!(out, "Authors: {}", catalog.authors().len())?;
    Ok(())
}

fn save(catalog: &Catalog, storage: &StorageConfig) -> Result<()> {
    storage.ensure_dirs()?;
    catalog.save(storage)?;
    Ok(())
}

/// Parse a JSON array of articles; missing fields take their defaults
fn read_articles(file: &Path) -> Result<Vec<Article>> {
    let path = file.display().to_string();
    let content = std::fs::read_to_string(file).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Json { path, source })
}
