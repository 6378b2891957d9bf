use crate::config::cli::Args;
use crate::domain::PLACEHOLDER_PHOTO;
use crate::error::Result;
use crate::services::urls::{DEFAULT_BASE_URL, DEFAULT_WIDGET_URL};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod cli;

/// Where to fetch pages from and what to show when a player has no photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    pub widget_url: String,
    pub placeholder_photo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            widget_url: DEFAULT_WIDGET_URL.to_string(),
            placeholder_photo: PLACEHOLDER_PHOTO.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }
}

pub struct Config {
    pub args: Args,
    pub site: SiteConfig,
    pub http_client: Client,
}

impl Config {
    /// File settings first, then flags and environment variables on top.
    pub fn from_args(args: Args) -> Result<Self> {
        let mut site = match &args.config_file {
            Some(path) => {
                info!("Loading site config from {}", path.display());
                SiteConfig::load(path)?
            }
            None => SiteConfig::default(),
        };
        if let Some(base_url) = &args.base_url {
            site.base_url = base_url.clone();
        }
        if let Some(widget_url) = &args.widget_url {
            site.widget_url = widget_url.clone();
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            site,
            http_client,
        })
    }
}
