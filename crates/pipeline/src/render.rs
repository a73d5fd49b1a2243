use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::io::save_to_file;
use crate::models::{Article, Magazine, Sentiment};

const EXCERPT_CHARS: usize = 150;
const KEYWORDS_SHOWN: usize = 5;
const RULE_WIDTH: usize = 80;

pub struct DigestRenderer;

impl DigestRenderer {
    fn sentiment_emoji(sentiment: Sentiment) -> &'static str {
        match sentiment {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😟",
            Sentiment::Neutral => "😐",
        }
    }

    fn sentiment_title(sentiment: Sentiment) -> &'static str {
        match sentiment {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    fn excerpt(content: &str) -> String {
        content.chars().take(EXCERPT_CHARS).collect()
    }

    fn shown_keywords(article: &Article) -> &[String] {
        let end = article.keywords.len().min(KEYWORDS_SHOWN);
        &article.keywords[..end]
    }

    /// Plain-text edition for the terminal.
    pub fn generate_console(magazine: &Magazine) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = Vec::new();

        out.push(rule.clone());
        out.push(format!("📰 {}", magazine.title.to_uppercase()));
        out.push(format!("📅 {}", magazine.date));
        out.push(format!("📊 Total Articles: {}", magazine.total_articles));
        out.push(rule.clone());

        for section in &magazine.sections {
            out.push(String::new());
            out.push(format!("🔹 {}", section.category.label().to_uppercase()));
            out.push("-".repeat(40));
            out.push(format!("📝 Summary: {}", section.summary));
            out.push(String::new());

            for (i, article) in section.articles.iter().enumerate() {
                out.push(format!("{}. {}", i + 1, article.title));
                out.push(format!(
                    "   📰 Source: {} | 🎯 Relevance: {:.2} | {} {}",
                    article.source,
                    article.relevance_score,
                    Self::sentiment_emoji(article.sentiment),
                    Self::sentiment_title(article.sentiment)
                ));
                out.push(format!("   📄 {}...", Self::excerpt(&article.content)));
                let keywords = Self::shown_keywords(article);
                if !keywords.is_empty() {
                    out.push(format!("   🔑 Keywords: {}", keywords.join(", ")));
                }
                out.push(String::new());
            }
        }

        out.push(rule);
        out.join("\n")
    }

    /// Standalone HTML edition.
    pub fn generate_html(magazine: &Magazine) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!(
            "  <title>{} - {}</title>\n",
            Self::escape_html(&magazine.title),
            Self::escape_html(&magazine.date)
        ));
        html.push_str("  <style>\n");
        html.push_str("    body { font-family: Georgia, serif; line-height: 1.6; max-width: 1200px; margin: 0 auto; padding: 20px; background-color: #f8f9fa; }\n");
        html.push_str("    .header { text-align: center; border-bottom: 3px solid #2c3e50; margin-bottom: 40px; padding-bottom: 20px; }\n");
        html.push_str("    .header h1 { color: #2c3e50; font-size: 2.5em; margin-bottom: 10px; }\n");
        html.push_str("    .date { color: #7f8c8d; font-size: 1.2em; }\n");
        html.push_str("    .section { background: white; margin: 30px 0; padding: 25px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }\n");
        html.push_str("    .section-title { color: #2c3e50; font-size: 1.8em; border-bottom: 2px solid #3498db; padding-bottom: 10px; margin-bottom: 20px; }\n");
        html.push_str("    .summary { background: #ecf0f1; padding: 15px; border-left: 4px solid #3498db; margin-bottom: 25px; font-style: italic; }\n");
        html.push_str("    .article { border-bottom: 1px solid #ecf0f1; padding: 15px 0; }\n");
        html.push_str("    .article:last-child { border-bottom: none; }\n");
        html.push_str("    .article-title { color: #2c3e50; font-size: 1.3em; font-weight: bold; margin-bottom: 8px; }\n");
        html.push_str("    .article-meta { color: #7f8c8d; font-size: 0.9em; margin-bottom: 10px; }\n");
        html.push_str("    .tag { background: #3498db; color: white; padding: 2px 8px; border-radius: 12px; font-size: 0.8em; margin-right: 5px; }\n");
        html.push_str("    .relevance-score { background: #e74c3c; color: white; padding: 2px 8px; border-radius: 12px; font-size: 0.8em; float: right; }\n");
        html.push_str("    .sentiment-positive { background: #27ae60; }\n");
        html.push_str("    .sentiment-negative { background: #e74c3c; }\n");
        html.push_str("    .sentiment-neutral { background: #95a5a6; }\n");
        html.push_str("  </style>\n");
        html.push_str("</head>\n<body>\n");

        html.push_str("<div class=\"header\">\n");
        html.push_str(&format!("  <h1>📰 {}</h1>\n", Self::escape_html(&magazine.title)));
        html.push_str(&format!(
            "  <div class=\"date\">{} | Total Articles: {}</div>\n",
            Self::escape_html(&magazine.date),
            magazine.total_articles
        ));
        html.push_str("</div>\n");

        for section in &magazine.sections {
            html.push_str("<div class=\"section\">\n");
            html.push_str(&format!(
                "  <h2 class=\"section-title\">🔹 {}</h2>\n",
                section.category.label()
            ));
            html.push_str(&format!(
                "  <div class=\"summary\">{}</div>\n",
                Self::escape_html(&section.summary)
            ));

            for article in &section.articles {
                html.push_str("  <div class=\"article\">\n");
                html.push_str(&format!(
                    "    <div class=\"article-title\">{}</div>\n",
                    Self::escape_html(&article.title)
                ));
                html.push_str(&format!(
                    "    <div class=\"article-meta\">📰 {} | 📅 {}<span class=\"relevance-score\">Score: {:.2}</span></div>\n",
                    Self::escape_html(&article.source),
                    Self::format_date(article.publication_date.with_timezone(&Local)),
                    article.relevance_score
                ));
                html.push_str(&format!(
                    "    <div class=\"article-content\">{}</div>\n",
                    Self::escape_html(&article.content)
                ));

                if let Some(url) = &article.url {
                    html.push_str(&format!(
                        "    <a href=\"{}\" target=\"_blank\">Read more</a>\n",
                        Self::escape_html(url)
                    ));
                }

                // The tag strip, sentiment included, only appears for keyworded articles
                let keywords = Self::shown_keywords(article);
                if !keywords.is_empty() {
                    html.push_str("    <div class=\"tags\">\n");
                    for keyword in keywords {
                        html.push_str(&format!(
                            "      <span class=\"tag\">{}</span>\n",
                            Self::escape_html(keyword)
                        ));
                    }
                    html.push_str(&format!(
                        "      <span class=\"tag sentiment-{}\">{}</span>\n",
                        article.sentiment.label(),
                        Self::sentiment_title(article.sentiment)
                    ));
                    html.push_str("    </div>\n");
                }
                html.push_str("  </div>\n");
            }

            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>");
        html
    }

    fn format_date(date: DateTime<Local>) -> String {
        date.format("%B %-d, %Y %H:%M").to_string()
    }

    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Save an HTML edition as `news-digest-YYYY-MM-DD.html` under `dir`.
    pub fn save(content: &str, dir: &Path, date: DateTime<Local>) -> Result<PathBuf> {
        let filename = format!("news-digest-{}.html", date.format("%Y-%m-%d"));
        save_to_file(content, dir, &filename).context("Failed to save digest file")
    }
}
