//! Cache entry type.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::storefront::AppRecord;

/// Last-observed metadata for one application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Version string seen at the last write.
    pub version: String,
    /// Display name at the last write.
    pub app_name: String,
    /// Region whose catalog matched at the last write.
    pub region: String,
    /// Icon URL, when the storefront provided one.
    #[serde(default)]
    pub icon: Option<String>,
    /// When this entry was written.
    pub updated_at: DateTime<Local>,
}

impl CacheEntry {
    /// Build an entry from freshly resolved metadata, stamped now.
    pub fn from_record(record: &AppRecord) -> Self {
        Self {
            version: record.version.clone(),
            app_name: record.name.clone(),
            region: record.region.clone(),
            icon: record.icon_url.clone(),
            updated_at: Local::now(),
        }
    }
}
