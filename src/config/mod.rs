use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    pub store: StoreConfig,
    pub upload: UploadConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Base URL of the document-store REST endpoint.
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Interval between polls when watching a collection over HTTP.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// URL of the media upload endpoint.
    pub endpoint: String,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Word limit for collapsed article-style previews (blog, gallery).
    #[serde(default = "default_article_preview_words")]
    pub article_preview_words: usize,
    /// Word limit for collapsed profile-style previews (member directory).
    #[serde(default = "default_profile_preview_words")]
    pub profile_preview_words: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            article_preview_words: default_article_preview_words(),
            profile_preview_words: default_profile_preview_words(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_poll_interval() -> u64 {
    5
}

fn default_max_file_size() -> usize {
    10 * 1024 * 1024
}

fn default_article_preview_words() -> usize {
    60
}

fn default_profile_preview_words() -> usize {
    70
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Are you in a Graceway site directory?",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            anyhow::bail!("site.title must not be empty");
        }
        url::Url::parse(&self.store.base_url)
            .map_err(|e| anyhow::anyhow!("store.base_url is not a valid URL: {}", e))?;
        url::Url::parse(&self.upload.endpoint)
            .map_err(|e| anyhow::anyhow!("upload.endpoint is not a valid URL: {}", e))?;
        if self.store.request_timeout_secs == 0 {
            anyhow::bail!("store.request_timeout_secs must be greater than 0");
        }
        if self.store.poll_interval_secs == 0 {
            anyhow::bail!("store.poll_interval_secs must be greater than 0");
        }
        if self.upload.max_file_size == 0 {
            anyhow::bail!("upload.max_file_size must be greater than 0");
        }
        if self.content.article_preview_words == 0 {
            anyhow::bail!("content.article_preview_words must be greater than 0");
        }
        if self.content.profile_preview_words == 0 {
            anyhow::bail!("content.profile_preview_words must be greater than 0");
        }
        Ok(())
    }
}
