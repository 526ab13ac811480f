//! Notification composition.
//!
//! One run composes at most one notification. Cold-start runs announce
//! every newly tracked application; incremental runs announce updated
//! applications only.

use crate::classify::Classification;
use crate::storefront::regions::region_name;
use crate::storefront::AppRecord;

/// Release-notes excerpt length for a single-update notification.
const NOTES_LIMIT_SINGLE: usize = 200;
/// Release-notes excerpt length per entry in a multi-update notification.
const NOTES_LIMIT_MULTI: usize = 80;

/// A composed push notification.
///
/// Link and icon come from the first qualifying result; most backends
/// accept only one of each per message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub icon: Option<String>,
}

/// Compose the run's notification, or `None` when nothing qualifies.
pub fn compose(results: &[Classification], cold_start: bool) -> Option<Notification> {
    if cold_start {
        let unseen: Vec<&AppRecord> = results
            .iter()
            .filter_map(|c| match c {
                Classification::Unseen(record) => Some(record),
                _ => None,
            })
            .collect();
        compose_cold_start(&unseen)
    } else {
        let updated: Vec<(&AppRecord, &str)> = results
            .iter()
            .filter_map(|c| match c {
                Classification::Updated {
                    record,
                    old_version,
                } => Some((record, old_version.as_str())),
                _ => None,
            })
            .collect();
        compose_updates(&updated)
    }
}

fn compose_cold_start(unseen: &[&AppRecord]) -> Option<Notification> {
    let first = unseen.first()?;

    let body = unseen
        .iter()
        .map(|record| {
            format!(
                "{} v{} ({})",
                record.name,
                record.version,
                region_name(&record.region)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(Notification {
        title: format!("Started tracking {} apps", unseen.len()),
        body,
        link: link_of(first),
        icon: first.icon_url.clone(),
    })
}

fn compose_updates(updated: &[(&AppRecord, &str)]) -> Option<Notification> {
    let (first, _) = updated.first()?;

    let notification = if let [(record, old_version)] = updated {
        let mut body = format!(
            "{} → {}\nRegion: {}",
            old_version,
            record.version,
            region_name(&record.region)
        );
        if let Some(released_at) = &record.released_at {
            body.push_str(&format!("\nReleased: {released_at}"));
        }
        let notes = truncate_notes(&record.release_notes, NOTES_LIMIT_SINGLE);
        if !notes.is_empty() {
            body.push_str("\n\n");
            body.push_str(&notes);
        }

        Notification {
            title: format!("{} updated to v{}", record.name, record.version),
            body,
            link: link_of(record),
            icon: record.icon_url.clone(),
        }
    } else {
        let body = updated
            .iter()
            .enumerate()
            .map(|(i, (record, _))| {
                let mut line = format!(
                    "{}. {} v{} ({})",
                    i + 1,
                    record.name,
                    record.version,
                    region_name(&record.region)
                );
                let notes = truncate_notes(&record.release_notes, NOTES_LIMIT_MULTI);
                if !notes.is_empty() {
                    line.push_str("\n   ");
                    line.push_str(&notes);
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n");

        Notification {
            title: format!("{} apps updated", updated.len()),
            body,
            link: link_of(first),
            icon: first.icon_url.clone(),
        }
    };

    Some(notification)
}

fn link_of(record: &AppRecord) -> Option<String> {
    Some(record.store_url.clone()).filter(|url| !url.is_empty())
}

/// Truncate release notes for display, marking the cut with an ellipsis.
///
/// Counted in characters, not bytes.
fn truncate_notes(notes: &str, limit: usize) -> String {
    let trimmed = notes.trim();
    if trimmed.chars().count() <= limit {
        trimmed.to_string()
    } else {
        let mut cut: String = trimmed.chars().take(limit).collect();
        cut.push('…');
        cut
    }
}
