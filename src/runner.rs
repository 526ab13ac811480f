//! Run orchestration.
//!
//! One pass: load the cache, resolve and classify every configured
//! application in order, push at most one consolidated notification, and
//! persist the cache only when something changed. No failure past the
//! initial configuration check aborts the pass.

use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::classify::{classify, Classification};
use crate::config::Config;
use crate::error::{Result, WatchError};
use crate::notify::{compose, DispatchOutcome, Dispatcher};
use crate::storefront::{LookupClient, RegionResolver};

/// Summary of one completed pass.
#[derive(Debug)]
pub struct RunReport {
    /// Identifiers attempted.
    pub checked: usize,
    /// Identifiers that resolved in some region.
    pub resolved: usize,
    pub unseen: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Dispatch outcome, when a notification was composed.
    pub dispatch: Option<DispatchOutcome>,
    /// Whether the cache file was rewritten.
    pub cache_saved: bool,
}

impl RunReport {
    /// A run succeeds unless a dispatch was warranted and not delivered.
    pub fn succeeded(&self) -> bool {
        match &self.dispatch {
            Some(outcome) => outcome.delivered(),
            None => true,
        }
    }
}

/// Execute one watch pass.
pub fn run(config: &Config) -> Result<RunReport> {
    if config.app_ids.is_empty() {
        return Err(WatchError::NoAppsConfigured);
    }

    info!(
        method = config.method.as_str(),
        apps = config.app_ids.len(),
        "Checking for application updates"
    );

    let store = CacheStore::new(&config.cache_file);
    let mut cache = store.load();
    let cold_start = cache.is_empty();

    let client = LookupClient::new(&config.lookup_url, config.timeout);
    let resolver = RegionResolver::new(&client, config.search_regions());

    let mut results = Vec::new();
    for app_id in &config.app_ids {
        let Some(record) = resolver.resolve(app_id) else {
            warn!(
                app_id = app_id.as_str(),
                "Not found in any region, skipping"
            );
            continue;
        };

        let classification = classify(record, &mut cache);
        match &classification {
            Classification::Unseen(r) => {
                info!(
                    app = r.name.as_str(),
                    version = r.version.as_str(),
                    "Tracking new application"
                );
            }
            Classification::Unchanged(r) => {
                info!(app = r.name.as_str(), version = r.version.as_str(), "No update");
            }
            Classification::Updated {
                record,
                old_version,
            } => {
                info!(
                    app = record.name.as_str(),
                    old = old_version.as_str(),
                    new = record.version.as_str(),
                    "Update detected"
                );
            }
        }
        results.push(classification);
    }

    let mut report = RunReport {
        checked: config.app_ids.len(),
        resolved: results.len(),
        unseen: results
            .iter()
            .filter(|c| matches!(c, Classification::Unseen(_)))
            .count(),
        updated: results
            .iter()
            .filter(|c| matches!(c, Classification::Updated { .. }))
            .count(),
        unchanged: results
            .iter()
            .filter(|c| matches!(c, Classification::Unchanged(_)))
            .count(),
        dispatch: None,
        cache_saved: false,
    };

    // No notification means no observed change, so the cache stays as-is.
    let Some(notification) = compose(&results, cold_start) else {
        info!("Nothing to report");
        return Ok(report);
    };

    let outcome = Dispatcher::new(config).dispatch(&notification);
    match &outcome {
        DispatchOutcome::Delivered => {
            info!(title = notification.title.as_str(), "Notification delivered");
        }
        DispatchOutcome::Failed(reason) => warn!(%reason, "Notification dispatch failed"),
        DispatchOutcome::Skipped(reason) => warn!(%reason, "Notification dispatch skipped"),
    }
    report.dispatch = Some(outcome);

    match store.save(&cache) {
        Ok(()) => {
            info!(path = %store.path().display(), "Version cache updated");
            report.cache_saved = true;
        }
        Err(e) => warn!(error = %e, "Failed to save version cache, continuing"),
    }

    Ok(report)
}
