//! Bark push delivery.
//!
//! One form-encoded POST to `<base>/<device key>`. Bark answers 200 when
//! the notification is accepted.

use std::time::Duration;

use super::{DispatchOutcome, Notification};

/// Notification group shown in the Bark app.
const GROUP: &str = "App Store Updates";
/// Alert sound requested from the Bark app.
const SOUND: &str = "bell";

/// Client for a Bark push server.
pub struct BarkClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl BarkClient {
    /// Create a client against a Bark server.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("storewatch")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Deliver a notification to one device key.
    pub fn send(&self, device_key: &str, notification: &Notification) -> DispatchOutcome {
        let mut form: Vec<(&str, &str)> = vec![
            ("title", notification.title.as_str()),
            ("body", notification.body.as_str()),
            ("group", GROUP),
            ("sound", SOUND),
            ("isArchive", "1"),
        ];
        if let Some(link) = &notification.link {
            form.push(("url", link));
        }
        if let Some(icon) = &notification.icon {
            form.push(("icon", icon));
        }

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), device_key);
        let response = match self.client.post(&url).form(&form).send() {
            Ok(response) => response,
            Err(e) => return DispatchOutcome::Failed(e.to_string()),
        };

        if response.status().is_success() {
            DispatchOutcome::Delivered
        } else {
            DispatchOutcome::Failed(format!("HTTP {}", response.status()))
        }
    }
}
