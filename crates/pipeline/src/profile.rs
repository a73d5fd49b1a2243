use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::Category;

/// Keywords for one category, split by how strongly they signal relevance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordTiers {
    #[serde(default)]
    pub high_priority: Vec<String>,
    #[serde(default)]
    pub medium_priority: Vec<String>,
    #[serde(default)]
    pub low_priority: Vec<String>,
}

impl KeywordTiers {
    pub fn new(high: &[&str], medium: &[&str], low: &[&str]) -> Self {
        Self {
            high_priority: word_list(high),
            medium_priority: word_list(medium),
            low_priority: word_list(low),
        }
    }

    /// Every tier paired with its weight, highest tier first.
    pub fn weighted<'a>(
        &'a self,
        weights: &TierWeights,
    ) -> impl Iterator<Item = (&'a [String], f64)> {
        [
            (self.high_priority.as_slice(), weights.high),
            (self.medium_priority.as_slice(), weights.medium),
            (self.low_priority.as_slice(), weights.low),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            high: 3.0,
            medium: 2.0,
            low: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Keyword tables and sentiment lists the scorer and classifier run against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    #[serde(default)]
    pub weights: TierWeights,
    #[serde(default = "default_title_bonus")]
    pub title_bonus: f64,
    #[serde(default)]
    pub categories: HashMap<Category, KeywordTiers>,
    #[serde(default)]
    pub sentiment: SentimentLexicon,
}

fn default_title_bonus() -> f64 {
    1.5
}

fn word_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl ScoringProfile {
    /// Load a profile from a JSON file. Missing sections fall back to empty
    /// tables, not to the built-in ones. Category keys must name a known
    /// category.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring profile: {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("Invalid scoring profile: {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(content).context(
            "Failed to parse scoring profile. Expected an object with \"categories\" and \"sentiment\".",
        )?;

        if let Some(categories) = raw.get("categories").and_then(|c| c.as_object()) {
            for label in categories.keys() {
                if Category::from_label(label) == Category::Uncategorized {
                    bail!(
                        "Unknown category in scoring profile: {}. Use one of: {}",
                        label,
                        Category::ALL.map(|c| c.label()).join(", ")
                    );
                }
            }
        }

        serde_json::from_value(raw).context("Failed to parse scoring profile")
    }

    pub fn keywords_for(&self, category: Category) -> Option<&KeywordTiers> {
        self.categories.get(&category)
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        let categories = HashMap::from([
            (
                Category::Finance,
                KeywordTiers::new(
                    &["federal reserve", "interest rates", "stock market", "cryptocurrency", "banking"],
                    &["investment", "economy", "inflation", "GDP", "earnings"],
                    &["trading", "currency", "bonds", "commodities", "financial"],
                ),
            ),
            (
                Category::Markets,
                KeywordTiers::new(
                    &["s&p 500", "all-time high", "sell-off", "market rally", "nasdaq"],
                    &["tech stocks", "dow jones", "index", "volatility", "futures"],
                    &["shares", "stocks", "investors", "trading", "gains"],
                ),
            ),
            (
                Category::Banking,
                KeywordTiers::new(
                    &["stress test", "capital requirements", "deposits", "central bank", "lending"],
                    &["dividend", "share buyback", "loan", "credit", "mortgage"],
                    &["bank", "branch", "fees", "customers", "accounts"],
                ),
            ),
            (
                Category::Investments,
                KeywordTiers::new(
                    &["private equity", "venture capital", "hedge fund", "etf", "portfolio"],
                    &["asset management", "fund", "returns", "allocation", "valuation"],
                    &["investors", "capital", "assets", "yield", "stake"],
                ),
            ),
            (
                Category::Economics,
                KeywordTiers::new(
                    &["federal reserve", "inflation", "recession", "gdp", "monetary policy"],
                    &["unemployment", "consumer spending", "interest rates", "jobs report", "tariffs"],
                    &["economy", "growth", "prices", "wages", "outlook"],
                ),
            ),
            (
                Category::Corporate,
                KeywordTiers::new(
                    &["merger", "acquisition", "ipo", "earnings report", "chief executive"],
                    &["layoffs", "restructuring", "revenue", "guidance", "board"],
                    &["company", "ceo", "quarter", "profit", "shareholders"],
                ),
            ),
        ]);

        let sentiment = SentimentLexicon {
            positive: word_list(&[
                "breakthrough", "success", "growth", "improvement", "achievement", "milestone",
                "recovery", "promising", "optimistic", "surge", "rally", "gains", "progress",
            ]),
            negative: word_list(&[
                "crisis", "decline", "collapse", "threat", "risk", "concern", "breach",
                "disruption", "volatility", "uncertainty", "headwinds", "challenges", "problems",
            ]),
        };

        Self {
            weights: TierWeights::default(),
            title_bonus: default_title_bonus(),
            categories,
            sentiment,
        }
    }
}
