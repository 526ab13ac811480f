//! Storefront metadata resolution.
//!
//! The App Store partitions its catalog by region, and an application is
//! only visible in the regions it ships in. This module provides the
//! lookup client for one region-scoped query and the resolver that walks
//! a region priority list until one matches.

pub mod client;
pub mod regions;
pub mod resolver;

pub use client::{LookupClient, LookupOutcome};
pub use resolver::RegionResolver;

/// Application metadata as resolved from one regional catalog.
///
/// Transient: produced by the resolver, consumed by classification and
/// notification composition within the same run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRecord {
    /// Storefront identifier the record was resolved for.
    pub app_id: String,
    /// Display name.
    pub name: String,
    /// Version string, compared for equality only.
    pub version: String,
    /// Release notes for the current version, possibly empty.
    pub release_notes: String,
    /// Product page URL.
    pub store_url: String,
    /// Artwork URL, when the storefront provides one.
    pub icon_url: Option<String>,
    /// Release timestamp of the current version, as reported.
    pub released_at: Option<String>,
    /// Region code whose catalog matched.
    pub region: String,
}
