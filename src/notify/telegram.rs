//! Telegram Bot push delivery.
//!
//! The Bot API has no dedicated link or icon slot, so the notification is
//! rendered into one Markdown message with the link appended as an inline
//! hyperlink. Delivery succeeds when the response body carries `ok: true`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{DispatchOutcome, Notification};

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: String,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    ok: bool,
    description: Option<String>,
}

/// Client for the Telegram Bot API.
pub struct TelegramClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TelegramClient {
    /// Create a client against a Bot API base URL (token gets appended).
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

    /// Render the notification into one Markdown message.
    fn render(notification: &Notification) -> String {
        let mut text = format!("*{}*\n\n{}", notification.title, notification.body);
        if let Some(link) = &notification.link {
            text.push_str(&format!("\n\n[View in the App Store]({link})"));
        }
        text
    }

    /// Deliver a notification to one chat.
    pub fn send(
        &self,
        bot_token: &str,
        chat_id: &str,
        notification: &Notification,
    ) -> DispatchOutcome {
        let url = format!("{}{}/sendMessage", self.base_url, bot_token);
        let request = SendMessageRequest {
            chat_id,
            text: Self::render(notification),
            parse_mode: "Markdown",
            disable_web_page_preview: false,
        };

        let response = match self.client.post(&url).json(&request).send() {
            Ok(response) => response,
            Err(e) => return DispatchOutcome::Failed(e.to_string()),
        };

        let body: SendMessageResponse = match response.json() {
            Ok(body) => body,
            Err(e) => return DispatchOutcome::Failed(e.to_string()),
        };

        if body.ok {
            DispatchOutcome::Delivered
        } else {
            DispatchOutcome::Failed(
                body.description
                    .unwrap_or_else(|| "Telegram rejected the message".to_string()),
            )
        }
    }
}
