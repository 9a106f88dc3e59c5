//! Filter configuration for target recommendation

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS_KM: f64 = 20.0;
pub const DEFAULT_DAYS_BACK: i64 = 7;
pub const DEFAULT_MAX_SPECIES: i64 = 40;
pub const DEFAULT_MIN_FREQUENCY: f64 = 0.05;

fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

fn default_days_back() -> i64 {
    DEFAULT_DAYS_BACK
}

fn default_min_frequency() -> f64 {
    DEFAULT_MIN_FREQUENCY
}

fn default_max_species() -> i64 {
    DEFAULT_MAX_SPECIES
}

/// Caller-supplied filters.
///
/// Omitted wire fields take the documented defaults. Explicit out-of-range
/// values are accepted here and repaired by [`TargetFilters::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetFilters {
    /// Free-form place descriptor or `lat,lng`
    #[serde(default)]
    pub location: String,

    /// Search radius in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Lookback window in days
    #[serde(default = "default_days_back")]
    pub days_back: i64,

    /// Keep heard-only detections
    #[serde(default)]
    pub include_heard_only: bool,

    /// Minimum recent frequency (0..1)
    #[serde(default = "default_min_frequency")]
    pub min_frequency: f64,

    /// Result cap
    #[serde(default = "default_max_species")]
    pub max_species: i64,
}

impl TargetFilters {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            radius_km: DEFAULT_RADIUS_KM,
            days_back: DEFAULT_DAYS_BACK,
            include_heard_only: false,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            max_species: DEFAULT_MAX_SPECIES,
        }
    }

    /// Location must be non-empty after trimming
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.location.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "location is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace non-positive numbers with defaults and clamp the frequency.
    /// Idempotent; never fails.
    pub fn normalized(mut self) -> Self {
        if self.radius_km.is_nan() || self.radius_km <= 0.0 {
            self.radius_km = DEFAULT_RADIUS_KM;
        }
        if self.days_back <= 0 {
            self.days_back = DEFAULT_DAYS_BACK;
        }
        if self.max_species <= 0 {
            self.max_species = DEFAULT_MAX_SPECIES;
        }
        self.min_frequency = if self.min_frequency.is_nan() {
            0.0
        } else {
            self.min_frequency.clamp(0.0, 1.0)
        };
        self
    }

    /// Cap as a length; only meaningful after normalization
    pub fn result_cap(&self) -> usize {
        usize::try_from(self.max_species).unwrap_or(DEFAULT_MAX_SPECIES as usize)
    }
}

impl Default for TargetFilters {
    fn default() -> Self {
        Self::new("")
    }
}
