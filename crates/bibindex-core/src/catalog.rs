//! The owning context for one record store and its author index

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::article::Article;
use crate::author_index::AuthorIndex;
use crate::config::StorageConfig;
use crate::error::{CatalogError, Result};
use crate::persistence::{load_index, save_index};
use crate::query::QueryFacade;
use crate::store::RecordStore;
use crate::validation::validate_article;

/// A record store together with the author index derived from it.
///
/// [`Catalog::insert`] is the only way records get in, so both maps change
/// together. Re-inserting a title replaces the old record and moves the
/// author edges over to the new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    records: RecordStore,
    authors: AuthorIndex,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a catalog from maps loaded separately
    ///
    /// The two maps are not cross-checked; queries skip author entries whose
    /// title is missing from `records`.
    pub fn from_parts(records: RecordStore, authors: AuthorIndex) -> Self {
        Self { records, authors }
    }

    /// Validate and insert an article, returning the record it replaced.
    ///
    /// On a validation failure neither map is touched. When the title is
    /// already present, the previous record's author edges are removed
    /// before the new record's edges are appended.
    pub fn insert(&mut self, article: Article) -> Result<Option<Article>> {
        validate_article(&article)?;

        let previous = self.records.put(article.clone());
        if let Some(old) = &previous {
            self.authors.unlink(old);
            tracing::debug!("Replaced record {:?}", article.title);
        } else {
            tracing::debug!("Inserted record {:?}", article.title);
        }
        self.authors.link(&article);

        Ok(previous)
    }

    /// Insert several articles, stopping at the first invalid one
    pub fn insert_all<I>(&mut self, articles: I) -> Result<usize>
    where
        I: IntoIterator<Item = Article>,
    {
        let mut count = 0;
        for article in articles {
            self.insert(article)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn authors(&self) -> &AuthorIndex {
        &self.authors
    }

    /// Read-only lookups over this catalog
    pub fn query(&self) -> QueryFacade<'_> {
        QueryFacade::new(self)
    }

    /// Write both maps to the configured files, records first
    ///
    /// The two writes are independent; a failure between them leaves the
    /// files out of step.
    pub fn save(&self, config: &StorageConfig) -> Result<()> {
        save_index(&self.records, &config.records_path)?;
        save_index(&self.authors, &config.author_index_path)?;
        Ok(())
    }

    /// Load both maps from the configured files
    pub fn load(config: &StorageConfig) -> Result<Self> {
        let records = load_index(&config.records_path)?;
        let authors = load_index(&config.author_index_path)?;
        Ok(Self::from_parts(records, authors))
    }

    /// Load both maps, starting empty when neither file exists yet
    pub fn load_or_default(config: &StorageConfig) -> Result<Self> {
        if !exists(&config.records_path) && !exists(&config.author_index_path) {
            tracing::info!("No index files found, starting with an empty catalog");
            return Ok(Self::new());
        }
        Self::load(config)
    }
}

fn exists(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.exists()
}

/// A catalog behind a single lock, for use from several threads.
///
/// One lock covers both maps so a reader never sees a record whose author
/// edges are half written.
#[derive(Clone, Debug, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Insert under the write lock
    pub fn insert(&self, article: Article) -> Result<Option<Article>> {
        let mut catalog = self.inner.write().map_err(|_| CatalogError::LockPoisoned)?;
        catalog.insert(article)
    }

    /// Run `f` against the catalog under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> Result<R> {
        let catalog = self.inner.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(f(&catalog))
    }

    /// Save both maps while holding the read lock
    pub fn save(&self, config: &StorageConfig) -> Result<()> {
        self.read(|catalog| catalog.save(config))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn article(title: &str, authors: &[&str]) -> Article {
        Article::new("article", "k", title).with_authors(authors.iter().copied())
    }

    #[test]
    fn test_insert_links_authors() {
        let mut catalog = Catalog::new();
        let previous = catalog
            .insert(article("Meltdown", &["Moritz Lipp", "Daniel Genkin"]))
            .unwrap();

        assert!(previous.is_none());
        assert_eq!(catalog.records().len(), 1);
        assert_eq!(catalog.authors().len(), 2);
        assert_eq!(
            catalog.authors().titles_for("Daniel Genkin").unwrap(),
            ["Meltdown"]
        );
    }

    #[test]
    fn test_invalid_insert_leaves_maps_untouched() {
        let mut catalog = Catalog::new();
        catalog.insert(article("Meltdown", &["Moritz Lipp"])).unwrap();
        let before = catalog.clone();

        let err = catalog.insert(article("", &["Paul Kocher"])).unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::EmptyTitle));

        let err = catalog.insert(article("Spectre", &[])).unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::NoAuthors));

        assert_eq!(catalog, before);
    }

    #[test]
    fn test_overwrite_moves_author_edges() {
        let mut catalog = Catalog::new();
        catalog
            .insert(article("Meltdown", &["Moritz Lipp", "Paul Kocher"]))
            .unwrap();
        catalog.insert(article("Spectre", &["Paul Kocher"])).unwrap();

        let previous = catalog
            .insert(article("Meltdown", &["Moritz Lipp", "Daniel Gruss"]))
            .unwrap();
        assert_eq!(
            previous.map(|a| a.author),
            Some(vec!["Moritz Lipp".to_string(), "Paul Kocher".to_string()])
        );

        assert_eq!(catalog.records().len(), 2);
        assert_eq!(catalog.authors().titles_for("Paul Kocher").unwrap(), ["Spectre"]);
        assert_eq!(catalog.authors().titles_for("Moritz Lipp").unwrap(), ["Meltdown"]);
        assert_eq!(catalog.authors().titles_for("Daniel Gruss").unwrap(), ["Meltdown"]);
    }

    #[test]
    fn test_insert_all_stops_at_invalid() {
        let mut catalog = Catalog::new();
        let err = catalog
            .insert_all(vec![
                article("A", &["x"]),
                article("B", &[]),
                article("C", &["y"]),
            ])
            .unwrap_err();

        assert_eq!(err.validation(), Some(&ValidationError::NoAuthors));
        assert!(catalog.records().contains("A"));
        assert!(!catalog.records().contains("C"));
    }

    #[test]
    fn test_shared_catalog() {
        let shared = SharedCatalog::new(Catalog::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared
                        .insert(article(&format!("Paper {i}"), &["Daniel Genkin"]))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let titles = shared
            .read(|c| c.authors().titles_for("Daniel Genkin").map(<[String]>::len))
            .unwrap();
        assert_eq!(titles, Some(4));
        assert_eq!(shared.read(|c| c.records().len()).unwrap(), 4);
    }
}
