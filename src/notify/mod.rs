//! Notification composition and push delivery.
//!
//! Exactly one backend is active per run, selected by configuration. A
//! backend with missing credentials, or an unrecognized backend name,
//! degrades to a skipped dispatch rather than an error so the rest of the
//! run (most importantly the cache save) still happens.

pub mod bark;
pub mod compose;
pub mod telegram;

pub use bark::BarkClient;
pub use compose::{compose, Notification};
pub use telegram::TelegramClient;

use tracing::warn;

use crate::config::Config;

/// Result of a dispatch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The transport accepted the notification. This is "accepted by
    /// transport", not a guarantee of remote display.
    Delivered,
    /// The transport was attempted and did not accept the notification.
    Failed(String),
    /// Dispatch was not attempted (missing credentials or unknown method).
    Skipped(String),
}

impl DispatchOutcome {
    /// Whether the notification was accepted by the transport.
    pub fn delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered)
    }
}

/// Routes notifications to the configured delivery backend.
pub struct Dispatcher<'a> {
    config: &'a Config,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Send through the configured backend.
    pub fn dispatch(&self, notification: &Notification) -> DispatchOutcome {
        match self.config.method.to_lowercase().as_str() {
            "bark" => self.dispatch_bark(notification),
            "telegram" => self.dispatch_telegram(notification),
            other => {
                let reason =
                    format!("Unknown push method '{other}', expected 'bark' or 'telegram'");
                warn!("{reason}");
                DispatchOutcome::Skipped(reason)
            }
        }
    }

    fn dispatch_bark(&self, notification: &Notification) -> DispatchOutcome {
        let Some(key) = self.config.bark_key.as_deref().filter(|k| !k.is_empty()) else {
            warn!("BARK_KEY is not set, skipping dispatch");
            return DispatchOutcome::Skipped("BARK_KEY is not set".to_string());
        };

        BarkClient::new(&self.config.bark_url, self.config.timeout).send(key, notification)
    }

    fn dispatch_telegram(&self, notification: &Notification) -> DispatchOutcome {
        let token = self
            .config
            .telegram_bot_token
            .as_deref()
            .filter(|t| !t.is_empty());
        let chat_id = self
            .config
            .telegram_chat_id
            .as_deref()
            .filter(|c| !c.is_empty());
        let (Some(token), Some(chat_id)) = (token, chat_id) else {
            warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is not set, skipping dispatch");
            return DispatchOutcome::Skipped(
                "TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is not set".to_string(),
            );
        };

        TelegramClient::new(&self.config.telegram_url, self.config.timeout).send(
            token,
            chat_id,
            notification,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn config(method: &str) -> Config {
        Config {
            method: method.to_string(),
            bark_key: None,
            telegram_bot_token: None,
            telegram_chat_id: None,
            app_ids: vec!["1".to_string()],
            regions: vec!["us".to_string()],
            region_limit: None,
            cache_file: PathBuf::from("version_cache.json"),
            timeout: Duration::from_secs(5),
            lookup_url: "http://127.0.0.1:1/lookup".to_string(),
            bark_url: "http://127.0.0.1:1".to_string(),
            telegram_url: "http://127.0.0.1:1/bot".to_string(),
        }
    }

    fn notification() -> Notification {
        Notification {
            title: "title".to_string(),
            body: "body".to_string(),
            link: None,
            icon: None,
        }
    }

    #[test]
    fn unknown_method_is_skipped() {
        let outcome = Dispatcher::new(&config("pigeon")).dispatch(&notification());

        let DispatchOutcome::Skipped(reason) = outcome else {
            panic!("expected Skipped");
        };
        assert!(reason.contains("pigeon"));
    }

    #[test]
    fn method_name_is_case_insensitive() {
        // No key configured, so a recognized method skips on credentials,
        // not on the method name.
        let outcome = Dispatcher::new(&config("Bark")).dispatch(&notification());

        let DispatchOutcome::Skipped(reason) = outcome else {
            panic!("expected Skipped");
        };
        assert!(reason.contains("BARK_KEY"));
    }

    #[test]
    fn bark_without_key_skips_without_network_call() {
        // bark_url points at a closed port; a skip must not try to reach it.
        let outcome = Dispatcher::new(&config("bark")).dispatch(&notification());

        assert!(matches!(outcome, DispatchOutcome::Skipped(_)));
        assert!(!outcome.delivered());
    }

    #[test]
    fn telegram_with_partial_credentials_skips() {
        let mut config = config("telegram");
        config.telegram_bot_token = Some("123:abc".to_string());

        let outcome = Dispatcher::new(&config).dispatch(&notification());

        assert!(matches!(outcome, DispatchOutcome::Skipped(_)));
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let mut config = config("bark");
        config.bark_key = Some(String::new());

        let outcome = Dispatcher::new(&config).dispatch(&notification());

        assert!(matches!(outcome, DispatchOutcome::Skipped(_)));
    }

    #[test]
    fn delivered_is_the_only_successful_outcome() {
        assert!(DispatchOutcome::Delivered.delivered());
        assert!(!DispatchOutcome::Failed("HTTP 500".into()).delivered());
        assert!(!DispatchOutcome::Skipped("no key".into()).delivered());
    }
}
