//! Waitlist helpers: notification templates and board partitioning

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{NotificationMethod, NotifyRequest, WaitlistEntry, WaitlistStatus};

/// Message sent when the operator does not type one
pub fn default_notify_message(entry: &WaitlistEntry) -> String {
    format!(
        "Hello {}! Your table for {} is ready. Please proceed to the host stand. Quote: {}",
        entry.customer_name, entry.party_size, entry.quote_number
    )
}

impl NotifyRequest {
    /// Build the notify payload for `entry`
    ///
    /// A non-blank `custom_message` replaces the default template (trimmed).
    pub fn build(
        entry: &WaitlistEntry,
        method: NotificationMethod,
        custom_message: Option<&str>,
    ) -> Self {
        let message = match custom_message.map(str::trim) {
            Some(custom) if !custom.is_empty() => custom.to_string(),
            _ => default_notify_message(entry),
        };
        Self { method, message }
    }
}

/// Split a fetched list into per-status columns
///
/// Every status gets a key, in queue order (oldest `created_at` first;
/// entries without a timestamp go last, by id).
pub fn partition_by_status(
    entries: &[WaitlistEntry],
) -> HashMap<WaitlistStatus, Vec<WaitlistEntry>> {
    let mut columns: HashMap<WaitlistStatus, Vec<WaitlistEntry>> = WaitlistStatus::ALL
        .iter()
        .map(|s| (*s, Vec::new()))
        .collect();
    for entry in entries {
        columns.entry(entry.status).or_default().push(entry.clone());
    }
    for column in columns.values_mut() {
        sort_queue_order(column);
    }
    columns
}

/// Oldest first; undated entries last, ordered by id
pub fn sort_queue_order(entries: &mut [WaitlistEntry]) {
    entries.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(x), Some(y)) => x.cmp(&y).then(a.id.cmp(&b.id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    });
}

/// Minutes the party has been waiting at `now`
///
/// Closed entries stop counting at the moment they were seated or notified.
pub fn wait_minutes(entry: &WaitlistEntry, now: DateTime<Utc>) -> Option<i64> {
    let created = entry.created_at?;
    let until = match entry.status {
        WaitlistStatus::Seated => entry.seated_at.unwrap_or(now),
        WaitlistStatus::Notified => entry.notified_at.unwrap_or(now),
        _ => now,
    };
    Some((until - created).num_minutes().max(0))
}
