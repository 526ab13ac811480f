//! Region-fallback resolution.

use tracing::{debug, warn};

use super::{AppRecord, LookupClient, LookupOutcome};

/// Resolves applications by trying regional catalogs in priority order.
pub struct RegionResolver<'a> {
    client: &'a LookupClient,
    regions: &'a [String],
}

impl<'a> RegionResolver<'a> {
    pub fn new(client: &'a LookupClient, regions: &'a [String]) -> Self {
        Self { client, regions }
    }

    /// Resolve an application against the region priority list.
    ///
    /// Returns the record from the first region whose catalog matches and
    /// stops querying there. A transport failure counts as a miss for that
    /// region only. `None` means every configured region missed.
    pub fn resolve(&self, app_id: &str) -> Option<AppRecord> {
        for region in self.regions {
            match self.client.lookup(app_id, region) {
                LookupOutcome::Found(record) => {
                    debug!(app_id, region = region.as_str(), "Resolved application");
                    return Some(record);
                }
                LookupOutcome::NotFound => {
                    debug!(app_id, region = region.as_str(), "No match in region");
                }
                LookupOutcome::Transport(reason) => {
                    warn!(
                        app_id,
                        region = region.as_str(),
                        %reason,
                        "Lookup failed, trying next region"
                    );
                }
            }
        }
        None
    }
}
