//! Recent-observation feed resolution: live eBird, local snapshot, or empty

use std::path::PathBuf;
use tracing::{info, warn};
use wingit_core::{RecentObservation, TargetFilters};
use wingit_ebird::{EbirdClient, RecentQuery};

use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct RecentFeed {
    client: Option<EbirdClient>,
    snapshot: Option<PathBuf>,
}

impl RecentFeed {
    pub fn new(client: Option<EbirdClient>, snapshot: Option<PathBuf>) -> Self {
        Self { client, snapshot }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let client = settings.ebird_token.as_ref().map(|token| {
            let client = EbirdClient::new(token.as_str());
            match &settings.ebird_base_url {
                Some(url) => client.with_base_url(url.as_str()),
                None => client,
            }
        });
        Self::new(client, settings.recent_json.clone())
    }

    /// Observations for `filters`. Failures degrade to an empty feed.
    ///
    /// A live fetch is attempted when a token is configured and the location
    /// is literally `lat,lng`; otherwise the snapshot file, if any, is used.
    pub async fn recent_for(&self, filters: &TargetFilters) -> Vec<RecentObservation> {
        let filters = filters.clone().normalized();

        if let (Some(client), Some((lat, lng))) =
            (&self.client, parse_coordinates(&filters.location))
        {
            let query = RecentQuery {
                lat,
                lng,
                dist_km: filters.radius_km,
                back_days: filters.days_back,
                max_results: 0,
            };
            return match client.recent_nearby(&query).await {
                Ok(rows) => {
                    info!(rows = rows.len(), "fetched recent nearby observations");
                    rows
                }
                Err(e) => {
                    warn!(error = %e, "live fetch failed; continuing with empty recent");
                    Vec::new()
                }
            };
        }

        match &self.snapshot {
            Some(path) => match wingit_ebird::load_recent_nearby(path) {
                Ok(rows) => rows,
                Err(e) => {
                    warn!(error = %e, "snapshot load failed; continuing with empty recent");
                    Vec::new()
                }
            },
            None => {
                info!("no recent-observation source configured; continuing with empty recent");
                Vec::new()
            }
        }
    }
}

/// `"35.6870,-105.9378"` -> `(35.687, -105.9378)`. Place names are not geocoded.
pub fn parse_coordinates(location: &str) -> Option<(f64, f64)> {
    let (lat, lng) = location.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;

    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        Some((lat, lng))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            parse_coordinates("35.6870,-105.9378"),
            Some((35.687, -105.9378))
        );
        assert_eq!(parse_coordinates(" 40 , -105 "), Some((40.0, -105.0)));
        assert_eq!(parse_coordinates("Santa Fe, NM"), None);
        assert_eq!(parse_coordinates("95,10"), None);
        assert_eq!(parse_coordinates("NaN,10"), None);
        assert_eq!(parse_coordinates("35.6"), None);
    }

    #[tokio::test]
    async fn test_snapshot_feed() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("recent.json");
        std::fs::write(&path, r#"[{"speciesCode": "lewo"}]"#).unwrap();

        let feed = RecentFeed::new(None, Some(path));
        let rows = feed.recent_for(&TargetFilters::new("Santa Fe, NM")).await;
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_broken_snapshot_degrades_to_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let feed = RecentFeed::new(None, Some(temp.path().join("missing.json")));
        assert!(feed
            .recent_for(&TargetFilters::new("Santa Fe, NM"))
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_place_name_with_token_uses_snapshot() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("recent.json");
        std::fs::write(&path, r#"[{"speciesCode": "lewo"}, {"speciesCode": "pinsis"}]"#).unwrap();

        // unroutable base URL: a live attempt would fail and yield nothing
        let client = EbirdClient::new("token").with_base_url("http://127.0.0.1:9");
        let feed = RecentFeed::new(Some(client), Some(path));
        let rows = feed.recent_for(&TargetFilters::new("Santa Fe, NM")).await;
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_live_fetch_degrades_to_empty() {
        let client = EbirdClient::new("token").with_base_url("not a url");
        let feed = RecentFeed::new(Some(client), None);
        assert!(feed
            .recent_for(&TargetFilters::new("35.6870,-105.9378"))
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_no_source_is_empty() {
        let feed = RecentFeed::new(None, None);
        assert!(feed.recent_for(&TargetFilters::new("x")).await.is_empty());
    }
}
