use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_LIST_URL: &str = "https://www.pknu.ac.kr/main/399";
pub const DEFAULT_DB_PATH: &str = "cafeteria.db";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub fetch: FetchConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Board listing page; the newest post is read from here.
    pub list_url: Url,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout_secs: u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            list_url: Url::parse(DEFAULT_LIST_URL)
                .unwrap_or_else(|err| panic!("default list url: {err}")),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept_language: "ko,en;q=0.9".to_owned(),
            timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub list_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub db: Option<String>,
}

impl Config {
    /// Reads `path` as YAML, or starts from defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&yaml)
            .with_context(|| format!("parse config: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Checks invariants that serde cannot express.
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = &self.fetch.list_url;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("list url must be http/https: {url}");
        }
        Ok(())
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> anyhow::Result<Self> {
        if let Some(list_url) = overrides.list_url {
            self.fetch.list_url = Url::parse(&list_url).context("parse --list-url")?;
        }
        if let Some(user_agent) = overrides.user_agent {
            self.fetch.user_agent = user_agent;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.fetch.timeout_secs = timeout_secs;
        }
        if let Some(db) = overrides.db {
            self.store.path = PathBuf::from(db);
        }
        self.validate()?;
        Ok(self)
    }
}
