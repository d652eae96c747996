use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default base every repository path fragment is joined onto.
pub const DEFAULT_API_URL: &str = "https://api.github.com/repos/";

const DEFAULT_USER_AGENT: &str = "pr-creator";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .pr-creator.toml.
/// All fields are optional; the tool works with zero config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubConfig {
    /// Fallback credential when neither the CLI nor GITHUB_TOKEN supply one.
    pub token: Option<String>,
    /// Repos endpoint base, e.g. a GitHub Enterprise host.
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
}

impl Config {
    /// Load configuration from .pr-creator.toml in the current directory.
    /// Returns default config if the file doesn't exist. PR_CREATOR_API_URL
    /// overrides the API base from the file.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(".pr-creator.toml");
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Config::default()
        };

        if let Ok(api_url) = std::env::var("PR_CREATOR_API_URL") {
            config.github.api_url = Some(api_url);
        }

        Ok(config)
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the credential: an explicit value wins, then the GITHUB_TOKEN
    /// env var, then the config file.
    pub fn github_token(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .or_else(|| self.github.token.clone())
    }

    pub fn api_url(&self) -> &str {
        self.github.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn user_agent(&self) -> &str {
        self.github.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
