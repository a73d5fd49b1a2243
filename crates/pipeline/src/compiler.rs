use chrono::{DateTime, Local};
use std::collections::HashMap;
use tracing::info;

use crate::models::{Article, Category, Magazine, MagazineSection, Sentiment};

pub const ARTICLES_PER_SECTION: usize = 5;
pub const MAX_SUMMARY_LENGTH: usize = 150;
pub const DEFAULT_TITLE: &str = "Daily News Digest";

/// Order sections appear in the digest. Categories not listed never get a section.
pub const SECTION_PRIORITY: [Category; 6] = [
    Category::Finance,
    Category::Markets,
    Category::Banking,
    Category::Investments,
    Category::Economics,
    Category::Corporate,
];

const TITLE_WORDS_IN_SUMMARY: usize = 8;
const EMPTY_SECTION_SUMMARY: &str = "No articles available for this section.";

/// Groups processed articles into capped, ranked, summarized sections.
#[derive(Debug, Clone)]
pub struct MagazineCompiler {
    title: String,
}

impl Default for MagazineCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl MagazineCompiler {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn compile(&self, articles: &[Article]) -> Magazine {
        self.compile_at(articles, Local::now())
    }

    /// Same as [`compile`](Self::compile) with an explicit edition date.
    pub fn compile_at(&self, articles: &[Article], date: DateTime<Local>) -> Magazine {
        info!("Starting magazine compilation");

        let mut buckets = Self::organize_by_category(articles);

        let sections: Vec<MagazineSection> = SECTION_PRIORITY
            .iter()
            .filter_map(|category| {
                let section_articles = buckets.remove(category)?;
                if section_articles.is_empty() {
                    return None;
                }
                Some(MagazineSection {
                    category: *category,
                    summary: Self::generate_section_summary(&section_articles),
                    article_count: section_articles.len(),
                    articles: section_articles,
                })
            })
            .collect();

        info!("Magazine compilation completed with {} sections", sections.len());

        Magazine {
            title: self.title.clone(),
            date: Self::format_date(date),
            total_articles: articles.len(),
            sections,
        }
    }

    /// Fills one bucket per section category in input order, silently dropping
    /// anything past the per-section cap, then ranks each bucket.
    pub fn organize_by_category(articles: &[Article]) -> HashMap<Category, Vec<Article>> {
        let mut buckets: HashMap<Category, Vec<Article>> = SECTION_PRIORITY
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        for article in articles {
            if let Some(bucket) = buckets.get_mut(&article.category) {
                if bucket.len() < ARTICLES_PER_SECTION {
                    bucket.push(article.clone());
                }
            }
        }

        for bucket in buckets.values_mut() {
            bucket.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        }

        buckets
    }

    /// Short description of a ranked section, at most [`MAX_SUMMARY_LENGTH`] characters.
    pub fn generate_section_summary(articles: &[Article]) -> String {
        let summary = match articles {
            [] => EMPTY_SECTION_SUMMARY.to_string(),
            [only] => format!("Featured story: {}.", only.title),
            _ => {
                let key_topics: Vec<String> = articles
                    .iter()
                    .take(2)
                    .map(|article| {
                        article
                            .title
                            .split_whitespace()
                            .take(TITLE_WORDS_IN_SUMMARY)
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect();

                format!(
                    "This section covers {} stories including developments in {}. {}",
                    articles.len(),
                    key_topics.join(", "),
                    Self::sentiment_clause(articles)
                )
            }
        };

        truncate_with_ellipsis(&summary, MAX_SUMMARY_LENGTH)
    }

    fn sentiment_clause(articles: &[Article]) -> &'static str {
        let count = |sentiment: Sentiment| articles.iter().filter(|a| a.sentiment == sentiment).count();
        let positive = count(Sentiment::Positive);
        let negative = count(Sentiment::Negative);

        if positive > negative {
            "Overall sentiment is positive with promising developments."
        } else if negative > positive {
            "Several challenges and concerns are highlighted."
        } else {
            "Coverage presents balanced perspectives on current events."
        }
    }

    fn format_date(date: DateTime<Local>) -> String {
        date.format("%B %-d, %Y").to_string()
    }
}

fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
