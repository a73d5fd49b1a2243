use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editorial category an article is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Finance,
    Markets,
    Banking,
    Investments,
    Economics,
    Corporate,
    /// Any label the pipeline does not know. Scores zero and never gets a section.
    Uncategorized,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Finance,
        Category::Markets,
        Category::Banking,
        Category::Investments,
        Category::Economics,
        Category::Corporate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Finance => "Finance",
            Category::Markets => "Markets",
            Category::Banking => "Banking",
            Category::Investments => "Investments",
            Category::Economics => "Economics",
            Category::Corporate => "Corporate",
            Category::Uncategorized => "Uncategorized",
        }
    }

    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .unwrap_or(Category::Uncategorized)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single news item as supplied by a source.
///
/// `relevance_score`, `sentiment` and `processed` are owned by the pipeline:
/// they only carry meaning on articles returned from
/// [`ArticleProcessor::process`](crate::processor::ArticleProcessor::process).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub source: String,
    pub publication_date: DateTime<Utc>,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub relevance_score: f64,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub processed: bool,
}

impl Article {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        source: impl Into<String>,
        publication_date: DateTime<Utc>,
        content: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            source: source.into(),
            publication_date,
            content: content.into(),
            category,
            keywords: Vec::new(),
            url: None,
            relevance_score: 0.0,
            sentiment: Sentiment::Neutral,
            processed: false,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Lowercased `"{title} {content}"`, the text every keyword scan runs over.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.content).to_lowercase()
    }

    /// Copy with the pipeline-owned fields reset, as a source would deliver it.
    pub fn reset(&self) -> Self {
        Self {
            relevance_score: 0.0,
            sentiment: Sentiment::Neutral,
            processed: false,
            ..self.clone()
        }
    }
}

/// One category's slice of the digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagazineSection {
    pub category: Category,
    pub summary: String,
    pub articles: Vec<Article>,
    pub article_count: usize,
}

/// The compiled digest. Sections are kept in section-priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magazine {
    pub title: String,
    pub date: String,
    pub total_articles: usize,
    pub sections: Vec<MagazineSection>,
}

impl Magazine {
    pub fn section(&self, category: Category) -> Option<&MagazineSection> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Number of articles that actually made it into a section.
    pub fn featured_count(&self) -> usize {
        self.sections.iter().map(|s| s.article_count).sum()
    }
}
