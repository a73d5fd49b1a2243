use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;
use tracing::warn;

use crate::models::{Article, Category};
use crate::profile::ScoringProfile;

/// Case-insensitive whole-word matcher for a single keyword.
#[derive(Debug, Clone)]
pub(crate) struct KeywordPattern {
    keyword: String,
    regex: Regex,
}

impl KeywordPattern {
    pub(crate) fn new(keyword: &str) -> Result<Self> {
        let keyword = keyword.to_lowercase();
        let regex = Regex::new(&format!(r"\b{}\b", regex::escape(&keyword)))
            .with_context(|| format!("Failed to compile keyword pattern for '{}'", keyword))?;
        Ok(Self { keyword, regex })
    }

    /// Occurrences in already-lowercased text.
    pub(crate) fn count_in(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Plain substring test, used for the title bonus.
    pub(crate) fn appears_in(&self, text: &str) -> bool {
        text.contains(&self.keyword)
    }
}

#[derive(Debug, Clone)]
struct CompiledTier {
    weight: f64,
    patterns: Vec<KeywordPattern>,
}

/// Rates how well an article matches its category's keyword profile.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    tiers: HashMap<Category, Vec<CompiledTier>>,
    title_bonus: f64,
}

impl RelevanceScorer {
    pub fn new(profile: &ScoringProfile) -> Result<Self> {
        let mut tiers = HashMap::new();

        for (category, keywords) in &profile.categories {
            if *category == Category::Uncategorized {
                warn!("Ignoring keyword table for uncategorized articles");
                continue;
            }
            let compiled = keywords
                .weighted(&profile.weights)
                .map(|(words, weight)| {
                    let patterns = words
                        .iter()
                        .map(|w| KeywordPattern::new(w))
                        .collect::<Result<Vec<_>>>()?;
                    Ok::<_, anyhow::Error>(CompiledTier { weight, patterns })
                })
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("Invalid keyword table for {}", category))?;
            tiers.insert(*category, compiled);
        }

        Ok(Self {
            tiers,
            title_bonus: profile.title_bonus,
        })
    }

    /// Keyword-weighted score, normalized per 100 characters of content and
    /// rounded to two decimals. Categories without a table score 0.
    pub fn score(&self, article: &Article) -> f64 {
        let Some(tiers) = self.tiers.get(&article.category) else {
            return 0.0;
        };

        let text = article.search_text();
        let title = article.title.to_lowercase();
        let mut score = 0.0;

        for tier in tiers {
            for pattern in &tier.patterns {
                score += pattern.count_in(&text) as f64 * tier.weight;
            }
        }

        // Title matches are counted again on top of the occurrence score
        for tier in tiers {
            for pattern in &tier.patterns {
                if pattern.appears_in(&title) {
                    score += tier.weight * self.title_bonus;
                }
            }
        }

        let content_len = article.content.chars().count();
        if content_len > 0 {
            score /= content_len as f64 / 100.0;
        }

        (score * 100.0).round() / 100.0
    }
}
