//! Insertion checks for articles

use crate::article::Article;
use crate::error::ValidationError;

/// Check that an article may enter a catalog
///
/// The title must be non-empty and at least one author name must be
/// non-empty. The title is checked first.
pub fn validate_article(article: &Article) -> Result<(), ValidationError> {
    if article.title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if article.author.iter().all(|name| name.is_empty()) {
        return Err(ValidationError::NoAuthors);
    }

    Ok(())
}

/// Check if an article would be accepted by a catalog
pub fn is_valid(article: &Article) -> bool {
    validate_article(article).is_ok()
}
