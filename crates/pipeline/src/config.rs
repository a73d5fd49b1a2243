use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::compiler::DEFAULT_TITLE;
use crate::profile::ScoringProfile;

#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub profile_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            profile_path: None,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Self {
            title: non_empty("DIGEST_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            profile_path: non_empty("DIGEST_PROFILE").map(PathBuf::from),
            output_dir: non_empty("DIGEST_OUTPUT_DIR").map(PathBuf::from),
        }
    }

    /// The configured scoring profile, or the built-in tables when none is set.
    pub fn load_profile(&self) -> Result<ScoringProfile> {
        match &self.profile_path {
            Some(path) => ScoringProfile::from_path(path),
            None => Ok(ScoringProfile::default()),
        }
    }

    /// Where rendered editions go: configured dir, else Documents, else cwd.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::document_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn try_load_dotenv() {
        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/news-digest/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("news-digest").join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }

        // Nothing found is fine, the defaults cover every setting
    }
}
