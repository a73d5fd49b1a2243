use anyhow::Result;
use tracing::{debug, info};

use crate::dedup::Deduplicator;
use crate::models::{Article, Category};
use crate::profile::ScoringProfile;
use crate::scorer::RelevanceScorer;
use crate::sentiment::SentimentClassifier;

/// Pre-scoring filters and switches for one processing run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Keep articles whose title or body contains any of these (substring match).
    pub keywords: Vec<String>,
    pub categories: Vec<Category>,
    pub sources: Vec<String>,
    pub remove_duplicates: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            categories: Vec::new(),
            sources: Vec::new(),
            remove_duplicates: true,
        }
    }
}

/// Outcome of one processing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReport {
    /// Articles left after filtering, before duplicate removal.
    pub selected: usize,
    pub articles: Vec<Article>,
}

impl ProcessReport {
    pub fn duplicates_removed(&self) -> usize {
        self.selected.saturating_sub(self.articles.len())
    }
}

/// Scores, classifies, de-duplicates and ranks a batch of articles.
#[derive(Debug, Clone)]
pub struct ArticleProcessor {
    scorer: RelevanceScorer,
    classifier: SentimentClassifier,
    deduplicator: Deduplicator,
}

impl ArticleProcessor {
    pub fn new(profile: &ScoringProfile) -> Result<Self> {
        Ok(Self {
            scorer: RelevanceScorer::new(profile)?,
            classifier: SentimentClassifier::new(&profile.sentiment)?,
            deduplicator: Deduplicator::default(),
        })
    }

    pub fn with_deduplicator(mut self, deduplicator: Deduplicator) -> Self {
        self.deduplicator = deduplicator;
        self
    }

    pub fn process(&self, articles: &[Article]) -> Vec<Article> {
        self.process_with(articles, &ProcessOptions::default())
    }

    /// Returns scored copies; the caller's articles are left untouched.
    /// Output is sorted by relevance, highest first, ties in input order.
    pub fn process_with(&self, articles: &[Article], options: &ProcessOptions) -> Vec<Article> {
        self.run(articles, options).articles
    }

    /// Like `process_with`, also reporting how many articles passed the filters.
    pub fn run(&self, articles: &[Article], options: &ProcessOptions) -> ProcessReport {
        info!("Starting processing of {} articles", articles.len());

        let selected = Self::apply_filters(articles, options);
        let selected_count = selected.len();

        let scored: Vec<Article> = selected
            .into_iter()
            .map(|article| {
                let mut article = article.clone();
                article.relevance_score = self.scorer.score(&article);
                article.sentiment = self.classifier.classify(&article);
                article.processed = true;
                debug!(
                    id = %article.id,
                    score = article.relevance_score,
                    sentiment = %article.sentiment,
                    "Scored article"
                );
                article
            })
            .collect();

        let mut ranked = if options.remove_duplicates {
            let before = scored.len();
            let unique = self.deduplicator.dedupe(scored);
            info!(
                "After duplicate removal: {} articles ({} removed)",
                unique.len(),
                before - unique.len()
            );
            unique
        } else {
            scored
        };

        ranked.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        info!("Article processing completed");
        ProcessReport {
            selected: selected_count,
            articles: ranked,
        }
    }

    fn apply_filters<'a>(articles: &'a [Article], options: &ProcessOptions) -> Vec<&'a Article> {
        let mut selected: Vec<&Article> = articles.iter().collect();

        if !options.keywords.is_empty() {
            let keywords: Vec<String> = options.keywords.iter().map(|k| k.to_lowercase()).collect();
            selected.retain(|article| {
                let text = article.search_text();
                keywords.iter().any(|k| text.contains(k.as_str()))
            });
            info!("After keyword filtering: {} articles", selected.len());
        }

        if !options.categories.is_empty() {
            selected.retain(|article| options.categories.contains(&article.category));
            info!("After category filtering: {} articles", selected.len());
        }

        if !options.sources.is_empty() {
            selected.retain(|article| options.sources.iter().any(|s| s == &article.source));
            info!("After source filtering: {} articles", selected.len());
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use crate::test_support::{article, batch_with_two_duplicate_pairs};

    fn processor() -> ArticleProcessor {
        ArticleProcessor::new(&ScoringProfile::default()).unwrap()
    }

    // ==================== Pipeline Tests ====================

    #[test]
    fn test_process_marks_articles_processed() {
        let input = vec![article(
            "1",
            "Federal Reserve holds interest rates",
            "The Federal Reserve kept interest rates steady and noted a recovery in growth.",
            Category::Finance,
        )];

        let out = processor().process(&input);

        assert_eq!(out.len(), 1);
        assert!(out[0].processed);
        assert!(out[0].relevance_score > 0.0);
        assert_eq!(out[0].sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_process_leaves_input_untouched() {
        let input = vec![article("1", "Stock market rally", "The stock market rose.", Category::Finance)];
        let snapshot = input.clone();

        let _ = processor().process(&input);

        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_process_sorts_by_relevance_descending() {
        let input = vec![
            article("low", "Quiet session", "Few trades today.", Category::Finance),
            article("high", "Stock market and interest rates", "Stock market moves on interest rates.", Category::Finance),
        ];

        let out = processor().process(&input);

        assert_eq!(out[0].id, "high");
        assert!(out[0].relevance_score >= out[1].relevance_score);
    }

    #[test]
    fn test_process_ties_keep_input_order() {
        let input = vec![
            article("a", "Weather turns", "Rain expected later.", Category::Corporate),
            article("b", "Lunch menu", "Soup and bread.", Category::Uncategorized),
            article("c", "Garden show", "Roses were on display.", Category::Banking),
        ];

        let out = processor().process(&input);
        let ids: Vec<&str> = out.iter().map(|a| a.id.as_str()).collect();

        assert!(out.iter().all(|a| a.relevance_score == 0.0));
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_process_collapses_near_duplicates() {
        let input = vec![
            article(
                "1",
                "Fed Signals Rate Cuts",
                "The Federal Reserve signalled it could cut interest rates this year.",
                Category::Finance,
            ),
            article(
                "2",
                "Fed Signals Rate Cuts Soon",
                "The Federal Reserve signalled it could cut interest rates later this year.",
                Category::Finance,
            ),
        ];

        let out = processor().process(&input);
        let scored = processor().process_with(
            &input,
            &ProcessOptions {
                remove_duplicates: false,
                ..ProcessOptions::default()
            },
        );
        let best = scored
            .iter()
            .max_by(|a, b| a.relevance_score.total_cmp(&b.relevance_score))
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].relevance_score, best.relevance_score);
    }

    #[test]
    fn test_process_twenty_articles_with_two_duplicate_pairs() {
        let input = batch_with_two_duplicate_pairs();
        assert_eq!(input.len(), 20);

        let out = processor().process(&input);

        assert_eq!(out.len(), 18);
        assert_eq!(out.iter().filter(|a| a.id.starts_with("fed-")).count(), 1);
        assert_eq!(out.iter().filter(|a| a.id.starts_with("oil-")).count(), 1);
    }

    #[test]
    fn test_process_empty_batch() {
        assert!(processor().process(&[]).is_empty());
    }

    #[test]
    fn test_process_twice_reproduces_ranking() {
        let input = batch_with_two_duplicate_pairs();
        let processor = processor();

        let once = processor.process(&input);
        let fresh: Vec<Article> = once.iter().map(Article::reset).collect();
        let twice = processor.process(&fresh);

        let ids = |articles: &[Article]| articles.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(once, twice);
    }

    // ==================== Filter Tests ====================

    #[test]
    fn test_keyword_filter_is_case_insensitive_substring() {
        let input = vec![
            article("1", "Bitcoin jumps", "Crypto rallied.", Category::Investments),
            article("2", "Bank merger", "Two lenders combine.", Category::Banking),
        ];
        let options = ProcessOptions {
            keywords: vec!["BITCOIN".to_string()],
            ..ProcessOptions::default()
        };

        let out = processor().process_with(&input, &options);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn test_category_and_source_filters_combine() {
        let mut from_ap = article("2", "Bank merger", "Two lenders combine.", Category::Banking);
        from_ap.source = "AP".to_string();
        let input = vec![
            article("1", "Bank fees rise", "Customers pay more.", Category::Banking),
            from_ap,
            article("3", "Oil jumps", "Crude rose.", Category::Markets),
        ];
        let options = ProcessOptions {
            categories: vec![Category::Banking],
            sources: vec!["AP".to_string()],
            ..ProcessOptions::default()
        };

        let out = processor().process_with(&input, &options);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");
    }

    #[test]
    fn test_run_counts_articles_after_filtering() {
        let input = vec![
            article("1", "Bank fees rise", "Customers pay more.", Category::Banking),
            article("2", "Oil jumps", "Crude rose.", Category::Markets),
            article("3", "Merger talks", "Two firms in talks.", Category::Corporate),
        ];
        let options = ProcessOptions {
            categories: vec![Category::Banking],
            ..ProcessOptions::default()
        };

        let report = processor().run(&input, &options);

        assert_eq!(report.selected, 1);
        assert_eq!(report.articles.len(), 1);
        assert_eq!(report.duplicates_removed(), 0);
    }

    #[test]
    fn test_run_counts_duplicates_within_filtered_batch() {
        let mut input = batch_with_two_duplicate_pairs();
        input.push(article("extra", "Garden show", "Roses were on display.", Category::Uncategorized));
        let options = ProcessOptions {
            categories: Category::ALL.to_vec(),
            ..ProcessOptions::default()
        };

        let report = processor().run(&input, &options);

        assert_eq!(report.selected, 20);
        assert_eq!(report.duplicates_removed(), 2);
    }

    #[test]
    fn test_custom_deduplicator_applies_first_match() {
        let input = vec![
            article("a", "aaaaaaaaaa", "same body", Category::Finance),
            article("b", "zzzzzzzzzz", "same body", Category::Finance),
            article("c", "aaaazzzzzz", "same body", Category::Finance),
        ];

        let out = processor()
            .with_deduplicator(Deduplicator::with_threshold(0.5))
            .process(&input);
        let ids: Vec<&str> = out.iter().map(|a| a.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_keep_duplicates_switch() {
        let body = "The Federal Reserve signalled it could cut interest rates this year.";
        let input = vec![
            article("1", "Fed Signals Rate Cuts", body, Category::Finance),
            article("2", "Fed Signals Rate Cuts", body, Category::Finance),
        ];
        let options = ProcessOptions {
            remove_duplicates: false,
            ..ProcessOptions::default()
        };

        assert_eq!(processor().process_with(&input, &options).len(), 2);
    }
}
