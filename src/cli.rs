//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! Every option doubles as an environment variable so a scheduler can
//! configure the job without flags. The main entry point is the [`Cli`]
//! struct; see [`crate::config::Config`] for the resolved form passed into
//! the rest of the program.

use clap::Parser;
use std::path::PathBuf;

/// Storewatch - App Store update watcher.
#[derive(Debug, Parser)]
#[command(name = "storewatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Push delivery method (bark or telegram)
    #[arg(long, env = "PUSH_METHOD", default_value = "bark")]
    pub method: String,

    /// Bark device key
    #[arg(long, env = "BARK_KEY")]
    pub bark_key: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN")]
    pub telegram_bot_token: Option<String>,

    /// Telegram destination chat id
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: Option<String>,

    /// App Store application ids to watch (comma-separated)
    #[arg(long, env = "APP_IDS", value_delimiter = ',')]
    pub apps: Vec<String>,

    /// Storefront region codes to try, in priority order (comma-separated)
    #[arg(long, env = "REGIONS", value_delimiter = ',')]
    pub regions: Vec<String>,

    /// Only query the first N regions of the priority list
    #[arg(long, env = "REGION_LIMIT")]
    pub region_limit: Option<usize>,

    /// Path to the version cache file
    #[arg(long, default_value = "version_cache.json")]
    pub cache_file: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// iTunes lookup endpoint
    #[arg(
        long,
        env = "LOOKUP_URL",
        default_value = "https://itunes.apple.com/lookup"
    )]
    pub lookup_url: String,

    /// Bark server base URL (point at your own for self-hosted servers)
    #[arg(long, env = "BARK_URL", default_value = "https://api.day.app")]
    pub bark_url: String,

    /// Telegram Bot API base URL
    #[arg(
        long,
        env = "TELEGRAM_URL",
        default_value = "https://api.telegram.org/bot"
    )]
    pub telegram_url: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
