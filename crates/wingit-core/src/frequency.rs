//! Recent-frequency scoring

/// Score returned by [`PlaceholderFrequency`] for every species
pub const PLACEHOLDER_FREQUENCY: f64 = 0.20;

/// Source of a species' recent reporting frequency near the search area.
///
/// Scores are expected in `0.0..=1.0`; the engine clamps anything else.
pub trait FrequencySource {
    fn recent_frequency(&self, species_code: &str) -> f64;
}

/// Constant score until real bar-chart statistics are wired in
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFrequency;

impl FrequencySource for PlaceholderFrequency {
    fn recent_frequency(&self, _species_code: &str) -> f64 {
        PLACEHOLDER_FREQUENCY
    }
}

impl<F> FrequencySource for F
where
    F: Fn(&str) -> f64,
{
    fn recent_frequency(&self, species_code: &str) -> f64 {
        self(species_code)
    }
}

/// Clamp into `0.0..=1.0`, mapping NaN to zero
pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}
