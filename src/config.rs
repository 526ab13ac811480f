//! Run configuration.
//!
//! [`Config`] is built once at startup from the parsed CLI arguments and
//! passed explicitly into the resolver, dispatcher, and runner. Nothing
//! reads the environment after this point.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::cli::Cli;
use crate::storefront::regions::DEFAULT_REGIONS;

/// Identifier watched when `APP_IDS` is unset (WeChat).
pub const FALLBACK_APP_ID: &str = "414478124";

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Delivery method name, matched case-insensitively at dispatch time.
    pub method: String,
    pub bark_key: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    /// Application identifiers, in check order.
    pub app_ids: Vec<String>,
    /// Region priority list.
    pub regions: Vec<String>,
    /// Optional prefix truncation of the region list.
    pub region_limit: Option<usize>,
    pub cache_file: PathBuf,
    /// Bound on every storefront and push request.
    pub timeout: Duration,
    pub lookup_url: String,
    pub bark_url: String,
    pub telegram_url: String,
}

impl Config {
    /// Resolve CLI arguments into a run configuration.
    ///
    /// An empty application list falls back to [`FALLBACK_APP_ID`] with a
    /// warning; an empty region list falls back to the curated default
    /// priority list.
    pub fn from_cli(cli: Cli) -> Self {
        let mut app_ids = normalize_list(&cli.apps);
        if app_ids.is_empty() {
            warn!(
                "APP_IDS is not set, watching test application {} only",
                FALLBACK_APP_ID
            );
            app_ids.push(FALLBACK_APP_ID.to_string());
        }

        let mut regions = normalize_list(&cli.regions);
        if regions.is_empty() {
            regions = DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect();
        }

        Self {
            method: cli.method,
            bark_key: cli.bark_key,
            telegram_bot_token: cli.telegram_bot_token,
            telegram_chat_id: cli.telegram_chat_id,
            app_ids,
            regions,
            region_limit: cli.region_limit,
            cache_file: cli.cache_file,
            timeout: Duration::from_secs(cli.timeout_secs),
            lookup_url: cli.lookup_url,
            bark_url: cli.bark_url,
            telegram_url: cli.telegram_url,
        }
    }

    /// Regions to query this run, honoring the configured prefix limit.
    pub fn search_regions(&self) -> &[String] {
        match self.region_limit {
            Some(limit) if limit < self.regions.len() => &self.regions[..limit],
            _ => &self.regions,
        }
    }
}

/// Trim entries and drop empties from a comma-split list.
fn normalize_list(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
