//! Console formatting of search results

use std::fmt::Write;

use bibindex_core::Article;

/// Separator printed between records
pub const SEPARATOR: &str = "--------------------------------------";

/// Render the display fields of one record
pub fn format_article(article: &Article) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Title: {}", article.title);
    let _ = writeln!(out, "Authors: {}", article.author.join(", "));
    let _ = writeln!(out, "Journal: {}", article.journal);
    let _ = writeln!(out, "Year: {}", article.year);
    let _ = writeln!(out, "EE: {}", article.ee);
    out
}

/// Render every record found for an author
pub fn format_author_results(author: &str, articles: &[&Article]) -> String {
    if articles.is_empty() {
        return format!("No articles found for author: {author}\n");
    }
    let separator = format!("{SEPARATOR}\n");
    articles
        .iter()
        .map(|article| format_article(article))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Render the record found for a title
pub fn format_title_result(title: &str, article: Option<&Article>) -> String {
    match article {
        Some(article) => format_article(article),
        None => format!("No article found with title: {title}\n"),
    }
}
