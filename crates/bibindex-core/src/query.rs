//! Exact-key lookups over a catalog

use crate::article::Article;
use crate::catalog::Catalog;
use crate::error::{Result, ValidationError};

/// Read-only search operations composing the record store and author index
#[derive(Clone, Copy, Debug)]
pub struct QueryFacade<'a> {
    catalog: &'a Catalog,
}

impl<'a> QueryFacade<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// All records by `name`, in the order they were indexed.
    ///
    /// An unknown author yields an empty list. Titles indexed for the author
    /// but missing from the record store are skipped.
    pub fn search_by_author(&self, name: &str) -> Result<Vec<&'a Article>> {
        if name.is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }

        let Some(titles) = self.catalog.authors().titles_for(name) else {
            return Ok(Vec::new());
        };

        let records = self.catalog.records();
        let found = titles
            .iter()
            .filter_map(|title| {
                let article = records.get(title);
                if article.is_none() {
                    tracing::debug!("Skipping {:?} indexed for {:?}: no such record", title, name);
                }
                article
            })
            .collect();
        Ok(found)
    }

    /// The record titled exactly `title`, if any
    pub fn search_by_title(&self, title: &str) -> Result<Option<&'a Article>> {
        if title.is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }
        Ok(self.catalog.records().get(title))
    }
}
