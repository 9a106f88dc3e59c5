//! Target-species engine: filter, score, rank, cap

use crate::config::TargetFilters;
use crate::error::EngineError;
use crate::frequency::{clamp_score, FrequencySource, PlaceholderFrequency};
use crate::seen::SeenIndex;
use crate::types::{RecentObservation, TargetResult, TargetRow};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct TargetEngine<F = PlaceholderFrequency> {
    frequency: F,
}

impl TargetEngine {
    pub fn new() -> Self {
        Self {
            frequency: PlaceholderFrequency,
        }
    }
}

impl<F: FrequencySource> TargetEngine<F> {
    pub fn with_frequency(frequency: F) -> Self {
        Self { frequency }
    }

    /// Rank likely lifers from `recent`, skipping species already in `seen`.
    ///
    /// Per record, in input order:
    /// 1. already seen: counted in `excluded_because_already_seen`, skipped
    /// 2. heard-only while not included: skipped
    /// 3. frequency below `min_frequency`: skipped
    ///
    /// Survivors are ordered by frequency (desc), observation time (desc,
    /// unparseable last), then input order, and capped at `max_species`.
    pub fn build_target_checklist(
        &self,
        filters: TargetFilters,
        seen: &SeenIndex,
        recent: &[RecentObservation],
    ) -> Result<TargetResult, EngineError> {
        filters.validate()?;
        let filters = filters.normalized();

        let mut excluded_because_already_seen = 0;
        let mut rows: Vec<(TargetRow, Option<NaiveDateTime>)> = Vec::with_capacity(recent.len());

        for obs in recent {
            if seen.contains(&obs.species_code) {
                excluded_because_already_seen += 1;
                continue;
            }
            if obs.heard_only && !filters.include_heard_only {
                continue;
            }

            let freq = clamp_score(self.frequency.recent_frequency(&obs.species_code));
            if freq < filters.min_frequency {
                continue;
            }

            rows.push((
                TargetRow {
                    species_code: obs.species_code.clone(),
                    common_name: obs.common_name.clone(),
                    sci_name: obs.sci_name.clone(),
                    recent_frequency: freq,
                    last_seen_nearby: obs.obs_dt.clone(),
                },
                parse_obs_time(&obs.obs_dt),
            ));
        }

        let candidates = rows.len();

        // Stable: equal keys keep input order
        rows.sort_by(|a, b| {
            b.0.recent_frequency
                .total_cmp(&a.0.recent_frequency)
                .then_with(|| b.1.cmp(&a.1))
        });
        rows.truncate(filters.result_cap());

        debug!(
            recent = recent.len(),
            candidates,
            returned = rows.len(),
            excluded_because_already_seen,
            "built target checklist"
        );

        Ok(TargetResult {
            targets: rows.into_iter().map(|(row, _)| row).collect(),
            filters,
            excluded_because_already_seen,
        })
    }
}

/// Engine call with the placeholder frequency source
pub fn build_target_checklist(
    filters: TargetFilters,
    seen: &SeenIndex,
    recent: &[RecentObservation],
) -> Result<TargetResult, EngineError> {
    TargetEngine::new().build_target_checklist(filters, seen, recent)
}

const OBS_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse `YYYY-MM-DD` plus an optional time suffix.
///
/// Unrecognized suffixes fall back to the leading date at midnight. `None`
/// (no leading calendar date) sorts as oldest.
fn parse_obs_time(obs_dt: &str) -> Option<NaiveDateTime> {
    let obs_dt = obs_dt.trim();
    if obs_dt.is_empty() {
        return None;
    }
    OBS_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(obs_dt, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_and_remainder(obs_dt, "%Y-%m-%d")
                .ok()
                .and_then(|(d, _)| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(code: &str, name: &str, obs_dt: &str, heard_only: bool) -> RecentObservation {
        RecentObservation {
            species_code: code.to_string(),
            common_name: name.to_string(),
            sci_name: String::new(),
            loc_name: String::new(),
            loc_id: String::new(),
            obs_dt: obs_dt.to_string(),
            heard_only,
        }
    }

    fn codes(result: &TargetResult) -> Vec<&str> {
        result
            .targets
            .iter()
            .map(|t| t.species_code.as_str())
            .collect()
    }

    #[test]
    fn test_filters_seen_and_heard_only() {
        let mut filters = TargetFilters::new("35.6870,-105.9378");
        filters.max_species = 10;
        let seen: SeenIndex = ["clanut"].into_iter().collect();
        let recent = vec![
            obs("clanut", "Clark's Nutcracker", "2025-10-06", false),
            obs("lewo", "Lewis's Woodpecker", "2025-10-06", false),
            obs("caltow", "Canyon Towhee", "2025-10-06", true),
        ];

        let result = build_target_checklist(filters.clone(), &seen, &recent).unwrap();

        assert_eq!(
            result.targets,
            vec![TargetRow {
                species_code: "lewo".to_string(),
                common_name: "Lewis's Woodpecker".to_string(),
                sci_name: String::new(),
                recent_frequency: 0.20,
                last_seen_nearby: "2025-10-06".to_string(),
            }]
        );
        assert_eq!(result.excluded_because_already_seen, 1);
        assert_eq!(result.filters, filters);
    }

    #[test]
    fn test_cap_preserves_input_order_on_ties() {
        let mut filters = TargetFilters::new("Santa Fe, NM");
        filters.min_frequency = 0.0;
        filters.max_species = 2;
        let recent = vec![
            obs("lewo", "Lewis's Woodpecker", "2025-10-06", false),
            obs("clanut", "Clark's Nutcracker", "2025-10-06", false),
            obs("pinsis", "Pine Siskin", "2025-10-06", false),
        ];

        let result = build_target_checklist(filters, &SeenIndex::new(), &recent).unwrap();
        assert_eq!(codes(&result), vec!["lewo", "clanut"]);
    }

    #[test]
    fn test_empty_location_is_invalid_input() {
        let seen: SeenIndex = ["clanut"].into_iter().collect();
        let recent = vec![obs("clanut", "Clark's Nutcracker", "2025-10-06", false)];

        let err = build_target_checklist(TargetFilters::new(""), &seen, &recent).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));

        let err = build_target_checklist(TargetFilters::new("  "), &seen, &recent).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_heard_only_included_when_enabled() {
        let mut filters = TargetFilters::new("x");
        filters.include_heard_only = true;
        let recent = vec![obs("caltow", "Canyon Towhee", "2025-10-06", true)];

        let result = build_target_checklist(filters, &SeenIndex::new(), &recent).unwrap();
        assert_eq!(codes(&result), vec!["caltow"]);
    }

    #[test]
    fn test_seen_takes_priority_over_heard_only() {
        let seen: SeenIndex = ["caltow"].into_iter().collect();
        let recent = vec![
            obs("caltow", "Canyon Towhee", "2025-10-06", true),
            obs("caltow", "Canyon Towhee", "2025-10-05", true),
        ];

        let result = build_target_checklist(TargetFilters::new("x"), &seen, &recent).unwrap();
        assert!(result.targets.is_empty());
        assert_eq!(result.excluded_because_already_seen, 2);
    }

    #[test]
    fn test_min_frequency_skips_silently() {
        let mut filters = TargetFilters::new("x");
        filters.min_frequency = 0.5;
        let recent = vec![obs("lewo", "Lewis's Woodpecker", "2025-10-06", false)];

        let result = build_target_checklist(filters, &SeenIndex::new(), &recent).unwrap();
        assert!(result.targets.is_empty());
        assert_eq!(result.excluded_because_already_seen, 0);
    }

    #[test]
    fn test_ranks_by_frequency_then_recency() {
        let engine = TargetEngine::with_frequency(|code: &str| match code {
            "rare" => 0.1,
            _ => 0.6,
        });
        let mut filters = TargetFilters::new("x");
        filters.min_frequency = 0.0;
        let recent = vec![
            obs("rare", "Rare Bird", "2025-10-09", false),
            obs("older", "Older Bird", "2025-10-01", false),
            obs("undated", "Undated Bird", "sometime last week", false),
            obs("newer", "Newer Bird", "2025-10-08 07:15", false),
            obs("morning", "Morning Bird", "2025-10-08 06:00", false),
        ];

        let result = engine
            .build_target_checklist(filters, &SeenIndex::new(), &recent)
            .unwrap();
        assert_eq!(
            codes(&result),
            vec!["newer", "morning", "older", "undated", "rare"]
        );
        assert_eq!(result.targets[4].recent_frequency, 0.1);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let engine = TargetEngine::with_frequency(|_: &str| 3.0);
        let result = engine
            .build_target_checklist(
                TargetFilters::new("x"),
                &SeenIndex::new(),
                &[obs("lewo", "Lewis's Woodpecker", "2025-10-06", false)],
            )
            .unwrap();
        assert_eq!(result.targets[0].recent_frequency, 1.0);
    }

    #[test]
    fn test_filters_echo_is_normalized() {
        let mut filters = TargetFilters::new("x");
        filters.radius_km = 0.0;
        filters.days_back = -1;
        filters.max_species = 0;
        filters.min_frequency = -2.0;

        let result = build_target_checklist(filters, &SeenIndex::new(), &[]).unwrap();
        assert_eq!(result.filters.radius_km, 20.0);
        assert_eq!(result.filters.days_back, 7);
        assert_eq!(result.filters.max_species, 40);
        assert_eq!(result.filters.min_frequency, 0.0);
    }

    #[test]
    fn test_default_cap_applies() {
        let recent: Vec<_> = (0..60)
            .map(|i| obs(&format!("sp{}", i), "Bird", "2025-10-06", false))
            .collect();

        let result =
            build_target_checklist(TargetFilters::new("x"), &SeenIndex::new(), &recent).unwrap();
        assert_eq!(result.targets.len(), 40);
        assert_eq!(result.targets[0].species_code, "sp0");
        assert_eq!(result.targets[39].species_code, "sp39");
    }

    #[test]
    fn test_parse_obs_time() {
        assert!(parse_obs_time("2025-10-06").is_some());
        assert!(parse_obs_time("2017-08-23 20:05").is_some());
        assert!(parse_obs_time("2017-08-23 20:05:11").is_some());
        assert!(parse_obs_time("").is_none());
        assert!(parse_obs_time("10/06/2025").is_none());
        assert!(parse_obs_time("2017-08-23 20:05") > parse_obs_time("2017-08-23"));
    }

    #[test]
    fn test_parse_obs_time_other_suffixes() {
        assert_eq!(
            parse_obs_time("2025-10-08T07:15"),
            NaiveDate::from_ymd_opt(2025, 10, 8).and_then(|d| d.and_hms_opt(7, 15, 0))
        );
        assert_eq!(
            parse_obs_time("2025-10-09 7:15 AM"),
            NaiveDate::from_ymd_opt(2025, 10, 9).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert!(parse_obs_time("Oct 9 2025").is_none());
    }

    #[test]
    fn test_ranks_free_form_suffixes_by_date() {
        let recent = vec![
            obs("older", "Older", "2025-10-01", false),
            obs("iso", "Iso", "2025-10-08T07:15", false),
            obs("ampm", "Ampm", "2025-10-09 7:15 AM", false),
            obs("junk", "Junk", "sometime", false),
        ];
        let result = build_target_checklist(
            TargetFilters::new("Santa Fe, NM"),
            &SeenIndex::new(),
            &recent,
        )
        .unwrap();
        assert_eq!(codes(&result), vec!["ampm", "iso", "older", "junk"]);
    }
}
