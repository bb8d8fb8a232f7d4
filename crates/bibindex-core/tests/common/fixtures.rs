//! Shared test data and scratch storage

use bibindex_core::{Article, Catalog, StorageConfig};
use tempfile::TempDir;

/// Index files inside a fresh temporary directory
///
/// Keep the returned `TempDir` alive for as long as the files are used.
pub fn temp_storage() -> (TempDir, StorageConfig) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = StorageConfig::in_dir(dir.path());
    (dir, config)
}

/// A record with every field set, so round-trips cover the whole layout
pub fn full_article() -> Article {
    Article {
        element: "inproceedings".into(),
        key: "conf/sp/KocherHFGGHHLM19".into(),
        author: vec!["Paul Kocher".into(), "Jann Horn".into(), "Anders Fogh".into()],
        editor: "Some Editor".into(),
        title: "Spectre Attacks: Exploiting Speculative Execution (S&P)".into(),
        booktitle: "2019 IEEE Symposium on Security and Privacy".into(),
        pages: 19,
        year: 2019,
        address: "San Francisco, CA".into(),
        journal: "IEEE S&P".into(),
        volume: "1".into(),
        number: "40".into(),
        month: "May".into(),
        url: "db/conf/sp/sp2019.html#KocherHFGGHHLM19".into(),
        ee: "https://doi.org/10.1109/SP.2019.00002".into(),
        cdrom: "cd/sp19".into(),
        cite: "conf/sp/LippSGPHFHMKGYH18".into(),
        publisher: "IEEE".into(),
        note: "Best paper".into(),
        crossref: "conf/sp/2019".into(),
        isbn: "978-1-5386-6660-9".into(),
        series: "SP".into(),
        school: "Graz University of Technology".into(),
        chapter: "1".into(),
        publnr: "P-19".into(),
        stream: "streams/conf/sp".into(),
        rel: "related".into(),
    }
}

/// A catalog holding the seed records plus [`full_article`]
pub fn populated_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .insert_all(bibindex_core::seed::seed_articles())
        .expect("seed articles are valid");
    catalog.insert(full_article()).expect("full article is valid");
    catalog
}
