//! Personal eBird checklist export (normalized JSON form)

use serde::{Deserialize, Serialize};

/// Export metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChecklistMeta {
    pub owner: String,
    pub source: String,
    pub generated_at: String,
    pub total_observations: usize,
    pub total_species: usize,
    pub first_checklist_date: String,
}

/// One raw sighting row from the export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalSighting {
    pub species_code: String,
    pub common_name: String,
    pub sci_name: String,
    pub obs_dt: String,
    pub loc_name: String,
    pub loc_id: String,
    pub county_code: String,
    pub lat: f64,
    pub lng: f64,
    pub count: i64,
    pub obs_valid: bool,
    pub obs_reviewed: bool,
    pub media: bool,
    pub entered_as_heard_only: bool,
    pub checklist_id: String,
}

/// Precomputed per-species summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeciesSummary {
    pub species_code: String,
    pub common_name: String,
    pub sci_name: String,
    pub first_seen: String,
    pub last_seen: String,
    pub total_checklists: usize,
    pub total_count: i64,
    pub locations: Vec<String>,
}

/// A user's personal checklist record.
///
/// Either `species_index` or `sightings` (or both) may be populated. When the
/// summary is non-empty it is authoritative; see [`crate::SeenIndex`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalChecklist {
    pub meta: ChecklistMeta,
    pub sightings: Vec<PersonalSighting>,
    pub species_index: Vec<SpeciesSummary>,
}
