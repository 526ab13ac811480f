//! iTunes lookup API client.
//!
//! One blocking GET per `(app id, region)` pair against the lookup
//! endpoint. Transport problems are reported as an outcome variant rather
//! than an error so the resolver can treat them as a miss for that region
//! only.

use std::time::Duration;

use serde::Deserialize;

use super::AppRecord;

/// Result of one region-scoped lookup request.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The catalog returned a matching application.
    Found(AppRecord),
    /// The catalog answered but has no entry for this id in this region.
    NotFound,
    /// The request failed before a usable answer arrived.
    Transport(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    #[serde(default)]
    result_count: u32,
    #[serde(default)]
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResult {
    #[serde(default)]
    track_name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    release_notes: String,
    #[serde(default)]
    track_view_url: String,
    artwork_url100: Option<String>,
    current_version_release_date: Option<String>,
}

/// Client for the storefront lookup endpoint.
pub struct LookupClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl LookupClient {
    /// Create a client against a lookup endpoint.
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

    /// Look up an application in one regional catalog.
    ///
    /// Only the first element of `results` is used when the catalog
    /// reports a match.
    pub fn lookup(&self, app_id: &str, region: &str) -> LookupOutcome {
        let response = match self
            .client
            .get(&self.base_url)
            .query(&[("id", app_id), ("country", region)])
            .send()
        {
            Ok(response) => response,
            Err(e) => return LookupOutcome::Transport(e.to_string()),
        };

        if !response.status().is_success() {
            return LookupOutcome::Transport(format!("HTTP {}", response.status()));
        }

        let body: LookupResponse = match response.json() {
            Ok(body) => body,
            Err(e) => return LookupOutcome::Transport(e.to_string()),
        };

        if body.result_count == 0 {
            return LookupOutcome::NotFound;
        }

        match body.results.into_iter().next() {
            Some(first) => LookupOutcome::Found(AppRecord {
                app_id: app_id.to_string(),
                name: first.track_name,
                version: first.version,
                release_notes: first.release_notes,
                store_url: first.track_view_url,
                icon_url: first.artwork_url100,
                released_at: first.current_version_release_date,
                region: region.to_string(),
            }),
            None => LookupOutcome::NotFound,
        }
    }
}
