//! Core types for target recommendation

use crate::config::TargetFilters;
use serde::{Deserialize, Serialize};

/// A recent nearby sighting (subset of the eBird recent-observations shape)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentObservation {
    pub species_code: String,
    #[serde(rename = "comName")]
    pub common_name: String,
    pub sci_name: String,
    pub loc_name: String,
    pub loc_id: String,
    /// `YYYY-MM-DD`, optionally followed by a time
    pub obs_dt: String,
    /// Heard only, no visual confirmation
    #[serde(rename = "howr", skip_serializing_if = "std::ops::Not::not")]
    pub heard_only: bool,
}

/// A candidate lifer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRow {
    pub species_code: String,
    pub common_name: String,
    pub sci_name: String,
    pub recent_frequency: f64,
    pub last_seen_nearby: String,
}

/// Ranked, capped recommendation plus bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetResult {
    pub targets: Vec<TargetRow>,
    /// Effective (normalized) filters
    pub filters: TargetFilters,
    pub excluded_because_already_seen: usize,
}

impl TargetResult {
    /// Short human-readable line for host UIs
    pub fn summary(&self) -> String {
        match self.targets.first() {
            Some(top) => format!(
                "{} candidate lifers; top: {}",
                self.targets.len(),
                top.common_name
            ),
            None => "WingIt: no candidate lifers".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, name: &str) -> TargetRow {
        TargetRow {
            species_code: code.to_string(),
            common_name: name.to_string(),
            sci_name: String::new(),
            recent_frequency: 0.2,
            last_seen_nearby: "2025-10-06".to_string(),
        }
    }

    #[test]
    fn test_recent_observation_wire_names() {
        let json = r#"{
            "speciesCode": "amecro",
            "comName": "American Crow",
            "sciName": "Corvus brachyrhynchos",
            "locName": "Somewhere Nice",
            "locId": "L123",
            "obsDt": "2025-12-15 08:00",
            "howr": true,
            "howMany": 3
        }"#;
        let obs: RecentObservation = serde_json::from_str(json).unwrap();

        assert_eq!(obs.species_code, "amecro");
        assert_eq!(obs.common_name, "American Crow");
        assert_eq!(obs.loc_id, "L123");
        assert_eq!(obs.obs_dt, "2025-12-15 08:00");
        assert!(obs.heard_only);
    }

    #[test]
    fn test_heard_only_defaults_false_and_is_omitted() {
        let obs: RecentObservation =
            serde_json::from_str(r#"{"speciesCode": "lewo", "comName": "Lewis's Woodpecker"}"#)
                .unwrap();
        assert!(!obs.heard_only);

        let json = serde_json::to_string(&obs).unwrap();
        assert!(!json.contains("howr"));
    }

    #[test]
    fn test_summary_with_targets() {
        let result = TargetResult {
            targets: vec![row("lewo", "Lewis's Woodpecker"), row("pinsis", "Pine Siskin")],
            filters: TargetFilters::new("Santa Fe, NM"),
            excluded_because_already_seen: 1,
        };
        assert_eq!(result.summary(), "2 candidate lifers; top: Lewis's Woodpecker");
    }

    #[test]
    fn test_summary_empty() {
        let result = TargetResult {
            targets: vec![],
            filters: TargetFilters::new("Santa Fe, NM"),
            excluded_because_already_seen: 0,
        };
        assert_eq!(result.summary(), "WingIt: no candidate lifers");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = TargetResult {
            targets: vec![row("lewo", "Lewis's Woodpecker")],
            filters: TargetFilters::new("Santa Fe, NM"),
            excluded_because_already_seen: 2,
        };
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["excludedBecauseAlreadySeen"], 2);
        assert_eq!(value["targets"][0]["speciesCode"], "lewo");
        assert_eq!(value["targets"][0]["lastSeenNearby"], "2025-10-06");
        assert_eq!(value["filters"]["maxSpecies"], 40);
    }
}
