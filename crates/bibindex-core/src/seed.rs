//! Built-in sample records
//!
//! The two 2018 speculative-execution reports, used to seed an empty
//! catalog and as shared test data.

use crate::article::Article;

const SPECTRE_AUTHORS: [&str; 9] = [
    "Paul Kocher",
    "Daniel Genkin",
    "Daniel Gruss",
    "Werner Haas",
    "Mike Hamburg",
    "Moritz Lipp",
    "Stefan Mangard",
    "Thomas Prescher",
    "Michael Schwarz",
];

const MELTDOWN_AUTHORS: [&str; 9] = [
    "Moritz Lipp",
    "Michael Schwarz",
    "Daniel Gruss",
    "Thomas Prescher",
    "Werner Haas",
    "Stefan Mangard",
    "Paul Kocher",
    "Daniel Genkin",
    "Mike Hamburg",
];

pub fn spectre() -> Article {
    Article::new(
        "article",
        "tr/meltdown/s18",
        "Spectre Attacks: Exploiting Speculative Execution",
    )
    .with_authors(SPECTRE_AUTHORS)
    .with_journal("meltdownattack.com")
    .with_year(2018)
    .with_ee("https://meltdownattack.com/spectre.pdf")
}

pub fn meltdown() -> Article {
    Article::new("article", "tr/meltdown/m18", "Meltdown")
        .with_authors(MELTDOWN_AUTHORS)
        .with_journal("meltdownattack.com")
        .with_year(2018)
        .with_ee("https://meltdownattack.com/meltdown.pdf")
}

/// Sample records in insertion order
pub fn seed_articles() -> Vec<Article> {
    vec![spectre(), meltdown()]
}
