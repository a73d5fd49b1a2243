use anyhow::{Context, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};

use crate::models::Article;

/// How many input files are read at once.
const MAX_CONCURRENT_READS: usize = 8;

/// Parse a JSON array of articles.
pub fn parse_articles(content: &str, origin: &Path) -> Result<Vec<Article>> {
    serde_json::from_str(content).with_context(|| {
        format!(
            "Failed to parse articles from {}. Expected a JSON array of article objects.",
            origin.display()
        )
    })
}

/// Load articles from a single JSON file.
pub async fn load_articles(path: &Path) -> Result<Vec<Article>> {
    if !path.exists() {
        anyhow::bail!("Article file not found: {}", path.display());
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read article file: {}", path.display()))?;

    parse_articles(&content, path)
}

/// Load and concatenate several article files. Files are read concurrently
/// but their articles come back in argument order.
pub async fn load_all(paths: &[PathBuf]) -> Result<Vec<Article>> {
    let batches: Vec<Vec<Article>> = stream::iter(paths)
        .map(|path| load_articles(path))
        .buffered(MAX_CONCURRENT_READS)
        .try_collect()
        .await?;

    Ok(batches.into_iter().flatten().collect())
}

/// Write rendered content into `dir`, creating it when missing.
pub fn save_to_file(content: &str, dir: &Path, filename: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let filepath = dir.join(filename);
    std::fs::write(&filepath, content)
        .with_context(|| format!("Failed to write {}", filepath.display()))?;

    Ok(filepath)
}
