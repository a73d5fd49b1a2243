// Public modules
pub mod compiler;
pub mod config;
pub mod dedup;
pub mod io;
pub mod models;
pub mod processor;
pub mod profile;
pub mod render;
pub mod scorer;
pub mod sentiment;
pub mod similarity;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use compiler::MagazineCompiler;
pub use config::Config;
pub use dedup::Deduplicator;
pub use io::{load_all, load_articles};
pub use models::{Article, Category, Magazine, MagazineSection, Sentiment};
pub use processor::{ArticleProcessor, ProcessOptions, ProcessReport};
pub use profile::ScoringProfile;
pub use render::DigestRenderer;
pub use scorer::RelevanceScorer;
pub use sentiment::SentimentClassifier;
pub use similarity::similarity;

/// Score, classify, de-duplicate and rank a batch with the built-in profile.
pub fn process_articles(articles: &[Article]) -> anyhow::Result<Vec<Article>> {
    Ok(ArticleProcessor::new(&ScoringProfile::default())?.process(articles))
}

/// Compile already-processed articles into a digest titled "Daily News Digest".
pub fn compile_magazine(articles: &[Article]) -> Magazine {
    MagazineCompiler::default().compile(articles)
}
