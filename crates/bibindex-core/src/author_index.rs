//! Author name to titles secondary index

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::article::Article;

/// Secondary index from author name to the titles they wrote.
///
/// Each author's titles stay in insertion order. Nothing is deduplicated: an
/// author listed twice on one article gets the title twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorIndex {
    entries: HashMap<String, Vec<String>>,
}

impl AuthorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles recorded for an author, in insertion order
    pub fn titles_for(&self, author: &str) -> Option<&[String]> {
        self.entries.get(author).map(Vec::as_slice)
    }

    /// Number of distinct authors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Author names in unspecified order
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Append the article's title under each of its authors
    pub(crate) fn link(&mut self, article: &Article) {
        for author in &article.author {
            self.entries
                .entry(author.clone())
                .or_default()
                .push(article.title.clone());
        }
    }

    /// Remove one occurrence of the article's title per author occurrence.
    ///
    /// Undoes a previous [`AuthorIndex::link`] of the same article; authors
    /// left without titles are dropped.
    pub(crate) fn unlink(&mut self, article: &Article) {
        for author in &article.author {
            let Some(titles) = self.entries.get_mut(author) else {
                continue;
            };
            if let Some(pos) = titles.iter().position(|t| *t == article.title) {
                titles.remove(pos);
            }
            if titles.is_empty() {
                self.entries.remove(author);
            }
        }
    }
}
