//! Best-effort parallel rating lookups.
//!
//! Rating data is decorative: a failed lookup must never abort or delay a
//! catalog view. The fan-out waits for every member to settle and drops
//! individual failures, so the resulting map may be partial or empty.

use std::collections::HashMap;

use futures::future::join_all;

use utsav_core::ItemKind;

use crate::client::MarketClient;

/// Fetches average ratings for a set of catalog items in parallel.
///
/// Failed lookups are logged at `warn` and omitted from the map; callers
/// treat missing entries as "no rating data" (sort key `0.0`). A single
/// slow or failed fetch does not abort its siblings.
pub async fn fetch_ratings_map(
    client: &MarketClient,
    kind: ItemKind,
    ids: &[i64],
) -> HashMap<i64, f64> {
    let lookups = ids.iter().map(|&id| async move {
        match client.get_rating(kind, id).await {
            Ok(summary) => Some((id, summary.average)),
            Err(error) => {
                tracing::warn!(%kind, id, %error, "rating fetch failed; treating as unrated");
                None
            }
        }
    });

    join_all(lookups).await.into_iter().flatten().collect()
}
