use tracing::debug;

use crate::models::Article;
use crate::similarity::article_similarity;

/// Combined similarity at or above which two articles are the same story.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Collapses near-duplicate articles, keeping the better-scored copy.
#[derive(Debug, Clone, Copy)]
pub struct Deduplicator {
    threshold: f64,
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self {
            threshold: SIMILARITY_THRESHOLD,
        }
    }
}

impl Deduplicator {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Single pass in input order. Each article is checked against the kept
    /// list and the first kept article over the threshold decides its fate:
    /// a strictly higher relevance score takes over that slot, anything else
    /// is dropped. Articles matching nothing are appended.
    pub fn dedupe(&self, articles: Vec<Article>) -> Vec<Article> {
        let mut kept: Vec<Article> = Vec::with_capacity(articles.len());

        for article in articles {
            let matched = kept
                .iter()
                .position(|existing| article_similarity(&article, existing) >= self.threshold);

            match matched {
                Some(index) if article.relevance_score > kept[index].relevance_score => {
                    debug!(
                        kept = %article.title,
                        dropped = %kept[index].title,
                        "Replacing duplicate with higher-scoring article"
                    );
                    kept[index] = article;
                }
                Some(index) => {
                    debug!(
                        kept = %kept[index].title,
                        dropped = %article.title,
                        "Removing duplicate article"
                    );
                }
                None => kept.push(article),
            }
        }

        kept
    }
}
