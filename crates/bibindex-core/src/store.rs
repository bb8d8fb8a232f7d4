//! Title-keyed record table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::article::Article;

/// The authoritative mapping from title to article.
///
/// Every key equals its article's `title`. Writes go through
/// [`crate::Catalog::insert`], which keeps the author index in step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: HashMap<String, Article>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup by title
    pub fn get(&self, title: &str) -> Option<&Article> {
        self.records.get(title)
    }

    /// Whether a record with this title exists
    pub fn contains(&self, title: &str) -> bool {
        self.records.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Titles in unspecified order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All records in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Article)> {
        self.records.iter().map(|(title, article)| (title.as_str(), article))
    }

    /// Set the entry for `article.title`, returning the record it replaced
    pub(crate) fn put(&mut self, article: Article) -> Option<Article> {
        self.records.insert(article.title.clone(), article)
    }

    /// First key whose record carries a different title, if any
    pub(crate) fn mismatched_key(&self) -> Option<&str> {
        self.records
            .iter()
            .find(|(title, article)| **title != article.title)
            .map(|(title, _)| title.as_str())
    }
}
