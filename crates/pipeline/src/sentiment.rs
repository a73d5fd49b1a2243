use anyhow::{Context, Result};

use crate::models::{Article, Sentiment};
use crate::profile::SentimentLexicon;
use crate::scorer::KeywordPattern;

/// Three-way tone label from counts of positive and negative signal words.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    positive: Vec<KeywordPattern>,
    negative: Vec<KeywordPattern>,
}

impl SentimentClassifier {
    pub fn new(lexicon: &SentimentLexicon) -> Result<Self> {
        let compile = |words: &[String]| {
            words
                .iter()
                .map(|w| KeywordPattern::new(w))
                .collect::<Result<Vec<_>>>()
        };

        Ok(Self {
            positive: compile(lexicon.positive.as_slice()).context("Invalid positive sentiment list")?,
            negative: compile(lexicon.negative.as_slice()).context("Invalid negative sentiment list")?,
        })
    }

    pub fn classify(&self, article: &Article) -> Sentiment {
        let text = article.search_text();
        let positive: usize = self.positive.iter().map(|p| p.count_in(&text)).sum();
        let negative: usize = self.negative.iter().map(|p| p.count_in(&text)).sum();

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::profile::ScoringProfile;
    use chrono::{TimeZone, Utc};

    fn classifier() -> SentimentClassifier {
        SentimentClassifier::new(&ScoringProfile::default().sentiment).unwrap()
    }

    fn article(title: &str, content: &str) -> Article {
        let date = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        Article::new("1", title, "Wire", date, content, Category::Markets)
    }

    #[test]
    fn test_only_positive_words() {
        let a = article("Markets Rally", "A strong recovery and solid gains.");
        assert_eq!(classifier().classify(&a), Sentiment::Positive);
    }

    #[test]
    fn test_only_negative_words() {
        let a = article("Debt Crisis Deepens", "Volatility and uncertainty weigh on lenders.");
        assert_eq!(classifier().classify(&a), Sentiment::Negative);
    }

    #[test]
    fn test_no_matches_is_neutral() {
        let a = article("Board Meets", "Directors met on Tuesday.");
        assert_eq!(classifier().classify(&a), Sentiment::Neutral);
    }

    #[test]
    fn test_tie_is_neutral() {
        let a = article("Growth Amid Risk", "Nothing else to report.");
        assert_eq!(classifier().classify(&a), Sentiment::Neutral);
    }

    #[test]
    fn test_counts_every_occurrence() {
        let a = article("Rally, rally, rally", "One concern and one risk remain.");
        assert_eq!(classifier().classify(&a), Sentiment::Positive);
    }

    #[test]
    fn test_requires_whole_words() {
        // "risky" and "rallying" are not list words
        let a = article("Risky bets", "Shares kept rallying.");
        assert_eq!(classifier().classify(&a), Sentiment::Neutral);
    }

    #[test]
    fn test_synthetic_lexicon() {
        let lexicon = SentimentLexicon {
            positive: vec!["up".to_string()],
            negative: vec!["down".to_string()],
        };
        let classifier = SentimentClassifier::new(&lexicon).unwrap();
        assert_eq!(classifier.classify(&article("Down down up", "")), Sentiment::Negative);
    }
}
