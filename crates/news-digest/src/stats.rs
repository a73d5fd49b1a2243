use pipeline::{Article, Category, ProcessReport};
use std::collections::HashMap;
use std::fmt;

/// Per-run figures shown after processing.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub processed: usize,
    pub duplicates_removed: usize,
    pub average_score: f64,
    pub by_category: Vec<(Category, usize)>,
}

impl RunStats {
    pub fn from_report(report: &ProcessReport) -> Self {
        Self::from_run(report.selected, &report.articles)
    }

    /// `selected_count` is the batch size after filtering, so filtered-out
    /// articles are never counted as duplicates.
    pub fn from_run(selected_count: usize, processed: &[Article]) -> Self {
        let average_score = if processed.is_empty() {
            0.0
        } else {
            let total: f64 = processed.iter().map(|a| a.relevance_score).sum();
            (total / processed.len() as f64 * 100.0).round() / 100.0
        };

        let mut counts: HashMap<Category, usize> = HashMap::new();
        for article in processed {
            *counts.entry(article.category).or_default() += 1;
        }
        let mut by_category: Vec<(Category, usize)> = counts.into_iter().collect();
        by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));

        Self {
            processed: processed.len(),
            duplicates_removed: selected_count.saturating_sub(processed.len()),
            average_score,
            by_category,
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 PROCESSING STATISTICS:")?;
        writeln!(f, "   Unique articles: {}", self.processed)?;
        writeln!(f, "   Duplicates removed: {}", self.duplicates_removed)?;
        if self.processed > 0 {
            writeln!(f, "   Average relevance score: {:.2}", self.average_score)?;
            writeln!(f, "   Articles by category:")?;
            for (category, count) in &self.by_category {
                writeln!(f, "     - {}: {}", category, count)?;
            }
        }
        Ok(())
    }
}
