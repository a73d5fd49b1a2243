use strsim::normalized_levenshtein;

use crate::models::Article;

/// How much of each article body is compared when looking for duplicates.
pub const CONTENT_PREFIX_CHARS: usize = 200;

pub const TITLE_WEIGHT: f64 = 0.7;
pub const CONTENT_WEIGHT: f64 = 0.3;

/// Edit-distance similarity in `[0, 1]`: `(max_len - distance) / max_len`,
/// counted in characters. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Weighted title/content similarity between two articles.
pub fn article_similarity(a: &Article, b: &Article) -> f64 {
    let title_similarity = similarity(&a.title.to_lowercase(), &b.title.to_lowercase());
    let content_similarity = similarity(&content_prefix(&a.content), &content_prefix(&b.content));

    title_similarity * TITLE_WEIGHT + content_similarity * CONTENT_WEIGHT
}

fn content_prefix(content: &str) -> String {
    content
        .chars()
        .take(CONTENT_PREFIX_CHARS)
        .collect::<String>()
        .to_lowercase()
}
