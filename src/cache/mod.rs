//! Version cache persistence.
//!
//! The cache is a single JSON object mapping application id to the
//! last-observed metadata for that app. It is loaded once at the start of
//! a run and rewritten at most once at the end, and only when something
//! changed.

pub mod entry;
pub mod store;

pub use entry::CacheEntry;
pub use store::{CacheMap, CacheStore};
