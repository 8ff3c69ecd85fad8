use chrono::{DateTime, Duration, Utc};

/// Age in hours at which fetched metadata is due for a refresh.
pub const REFRESH_INTERVAL_HOURS: i64 = 24;

/// Metadata is stale when it was never fetched or is at least a day old.
pub fn is_stale(last_fetched_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_fetched_at {
        None => true,
        Some(fetched) => {
            now.signed_duration_since(fetched) >= Duration::hours(REFRESH_INTERVAL_HOURS)
        }
    }
}

/// Whether an item should be sent back through the fetch pipeline.
/// Items without a link have nothing to fetch.
pub fn should_refresh(
    link: Option<&str>,
    last_fetched_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    match link {
        Some(link) if !link.trim().is_empty() => is_stale(last_fetched_at, now),
        _ => false,
    }
}
