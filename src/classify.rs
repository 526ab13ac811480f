//! Update classification against the version cache.

use crate::cache::{CacheEntry, CacheMap};
use crate::storefront::AppRecord;

/// How a freshly resolved application compares to the cache.
///
/// Derived per run, never persisted.
#[derive(Debug, Clone)]
pub enum Classification {
    /// No cache entry existed for this application.
    Unseen(AppRecord),
    /// The observed version equals the cached version.
    Unchanged(AppRecord),
    /// The observed version differs from the cached version.
    Updated {
        record: AppRecord,
        old_version: String,
    },
}

impl Classification {
    /// The record this classification was derived from.
    pub fn record(&self) -> &AppRecord {
        match self {
            Classification::Unseen(record) | Classification::Unchanged(record) => record,
            Classification::Updated { record, .. } => record,
        }
    }
}

/// Classify a resolved application and update the working cache map.
///
/// Versions are compared as opaque strings, so "1.0" and "1.0.0" count as
/// different. `Unseen` and `Updated` write a fresh entry into the map
/// immediately; `Unchanged` leaves the map untouched. Persisting the map
/// is the caller's decision.
pub fn classify(record: AppRecord, cache: &mut CacheMap) -> Classification {
    let old_version = cache.get(&record.app_id).map(|e| e.version.clone());

    match old_version {
        None => {
            cache.insert(record.app_id.clone(), CacheEntry::from_record(&record));
            Classification::Unseen(record)
        }
        Some(old) if old == record.version => Classification::Unchanged(record),
        Some(old) => {
            cache.insert(record.app_id.clone(), CacheEntry::from_record(&record));
            Classification::Updated {
                record,
                old_version: old,
            }
        }
    }
}
