//! Generator configuration.

use crate::aspect::{ALL_ASPECTS, Aspect};
use crate::lucky::LUCKY_NUMBER_MAX;

/// Configurable parameters for report generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeConfig {
    /// Aspects to predict, in report order. Default: all five.
    pub aspects: Vec<Aspect>,
    /// Upper bound of the lucky number draw, inclusive. Default: 100.
    pub lucky_number_max: u32,
}

impl Default for HoroscopeConfig {
    fn default() -> Self {
        Self {
            aspects: ALL_ASPECTS.to_vec(),
            lucky_number_max: LUCKY_NUMBER_MAX,
        }
    }
}

impl HoroscopeConfig {
    /// Default config restricted to `aspects`. An empty list keeps all five.
    pub fn with_aspects(aspects: Vec<Aspect>) -> Self {
        if aspects.is_empty() {
            return Self::default();
        }
        Self {
            aspects,
            ..Self::default()
        }
    }
}
