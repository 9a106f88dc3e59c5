//! Target-species recommendation: personal history vs. recent nearby sightings

mod checklist;
mod config;
mod engine;
mod error;
mod frequency;
mod prompt;
mod seen;
mod types;

pub use checklist::{ChecklistMeta, PersonalChecklist, PersonalSighting, SpeciesSummary};
pub use config::{
    TargetFilters, DEFAULT_DAYS_BACK, DEFAULT_MAX_SPECIES, DEFAULT_MIN_FREQUENCY,
    DEFAULT_RADIUS_KM,
};
pub use engine::{build_target_checklist, TargetEngine};
pub use error::EngineError;
pub use frequency::{FrequencySource, PlaceholderFrequency, PLACEHOLDER_FREQUENCY};
pub use prompt::field_checklist_prompt;
pub use seen::SeenIndex;
pub use types::{RecentObservation, TargetResult, TargetRow};
