mod stats;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use pipeline::{
    ArticleProcessor, Category, Config, DigestRenderer, MagazineCompiler, ProcessOptions,
    ScoringProfile,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::stats::RunStats;

#[derive(Parser)]
#[command(name = "news-digest")]
#[command(about = "Score, de-duplicate and compile news articles into a daily digest")]
struct Args {
    /// JSON files holding arrays of articles
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Only keep articles in these categories (repeatable)
    #[arg(short, long = "category")]
    categories: Vec<String>,

    /// Only keep articles mentioning any of these keywords (repeatable)
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// Only keep articles from these sources (repeatable)
    #[arg(short, long = "source")]
    sources: Vec<String>,

    /// Skip near-duplicate removal
    #[arg(long)]
    keep_duplicates: bool,

    /// Digest title (overrides DIGEST_TITLE)
    #[arg(short, long)]
    title: Option<String>,

    /// JSON scoring profile (overrides DIGEST_PROFILE)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Also save an HTML edition
    #[arg(long)]
    html: bool,

    /// Directory for the HTML edition (overrides DIGEST_OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl Args {
    fn process_options(&self) -> Result<ProcessOptions> {
        let categories = self
            .categories
            .iter()
            .map(|label| match Category::from_label(label) {
                Category::Uncategorized => Err(anyhow::anyhow!(
                    "Invalid category: {}. Use one of: {}",
                    label,
                    Category::ALL.map(|c| c.label()).join(", ")
                )),
                category => Ok(category),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ProcessOptions {
            keywords: self.keywords.clone(),
            categories,
            sources: self.sources.clone(),
            remove_duplicates: !self.keep_duplicates,
        })
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::from_env();
    init_tracing();

    if let Some(title) = args.title.clone() {
        config.title = title;
    }
    if let Some(profile) = args.profile.clone() {
        config.profile_path = Some(profile);
    }
    if let Some(dir) = args.output_dir.clone() {
        config.output_dir = Some(dir);
    }
    let options = args.process_options()?;

    println!("\n📚 Loading articles from {} file(s)...", args.inputs.len());
    let articles = pipeline::load_all(&args.inputs)
        .await
        .context("Failed to load articles")?;

    if articles.is_empty() {
        println!("No articles found in the given files.");
    } else {
        println!("✓ Loaded {} articles", articles.len());
    }

    println!("\n🔄 Scoring relevance and analyzing sentiment...");
    let profile: ScoringProfile = config.load_profile()?;
    let processor = ArticleProcessor::new(&profile).context("Failed to build scoring pipeline")?;
    let report = processor.run(&articles, &options);
    let processed = &report.articles;

    println!("\n{}", RunStats::from_report(&report));

    println!("🗞  Compiling magazine...");
    let now = Local::now();
    let magazine = MagazineCompiler::new(config.title.clone()).compile_at(processed, now);
    println!(
        "✓ Organized {} articles into {} sections\n",
        magazine.featured_count(),
        magazine.sections.len()
    );

    println!("{}", DigestRenderer::generate_console(&magazine));

    if args.html {
        let html = DigestRenderer::generate_html(&magazine);
        let filepath = DigestRenderer::save(&html, &config.output_dir(), now)
            .context("Failed to save HTML digest")?;
        println!("\n✅ HTML edition saved to: {}", filepath.display());
    }

    Ok(())
}
