//! Article domain model

use serde::{Deserialize, Serialize};

/// A bibliographic entry (article, inproceedings, thesis, ...)
///
/// Unset text fields are empty strings and unset numeric fields are zero.
/// An `Article` may hold an empty title or no authors; those are rejected
/// when it is offered to a [`crate::Catalog`], not here.
///
/// Index format version 1 encodes the fields in declaration order; adding,
/// removing or reordering a field requires a new format version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub element: String,
    pub key: String,
    pub author: Vec<String>,
    pub editor: String,
    pub title: String,
    pub booktitle: String,
    pub pages: i32,
    pub year: i32,
    pub address: String,
    pub journal: String,
    pub volume: String,
    pub number: String,
    pub month: String,
    pub url: String,
    pub ee: String,
    pub cdrom: String,
    pub cite: String,
    pub publisher: String,
    pub note: String,
    pub crossref: String,
    pub isbn: String,
    pub series: String,
    pub school: String,
    pub chapter: String,
    pub publnr: String,
    pub stream: String,
    pub rel: String,
}

impl Article {
    /// Create a new article with required fields
    pub fn new(
        element: impl Into<String>,
        key: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            element: element.into(),
            key: key.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builder method to append one author
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author.push(name.into());
        self
    }

    /// Builder method to append several authors in order
    pub fn with_authors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author.extend(names.into_iter().map(Into::into));
        self
    }

    /// Builder method to set the journal
    pub fn with_journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = journal.into();
        self
    }

    /// Builder method to set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Builder method to set the electronic edition link
    pub fn with_ee(mut self, ee: impl Into<String>) -> Self {
        self.ee = ee.into();
        self
    }

    /// Builder method to set the URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder method to set the page count
    pub fn with_pages(mut self, pages: i32) -> Self {
        self.pages = pages;
        self
    }
}
