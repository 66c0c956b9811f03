//! Structured horoscope report.
//!
//! A report holds every value the rendered text shows, already resolved.
//! It carries no presentation; see [`crate::render`] for that.

use chrono::NaiveDate;

use crate::aspect::Aspect;
use crate::celestial::{CelestialBody, Planet};
use crate::zodiac::Sign;

/// Prediction for one aspect.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectPrediction {
    pub aspect: Aspect,
    pub text: String,
}

/// A body and the wheel sign it falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub planet: Planet,
    /// Sign at `floor(degrees / 30)` in table order.
    pub sign: Sign,
    pub degrees: f64,
}

impl From<&CelestialBody> for Placement {
    fn from(body: &CelestialBody) -> Self {
        Self {
            planet: body.planet,
            sign: body.wheel_sign(),
            degrees: body.degrees,
        }
    }
}

/// Everything one horoscope shows, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Sun sign, shown in the header.
    pub sign: Sign,
    /// Date the horoscope is for.
    pub date: NaiveDate,
    pub predictions: Vec<AspectPrediction>,
    pub lucky_number: u32,
    pub lucky_color: &'static str,
    pub ascendant: Sign,
    pub moon: Sign,
    pub placements: Vec<Placement>,
    /// Sun/moon compatibility in [0, 1].
    pub compatibility: f64,
    pub advice: String,
}

impl Report {
    /// Compatibility as `NN.NN%`.
    pub fn compatibility_percent(&self) -> String {
        format!("{:.2}%", self.compatibility * 100.0)
    }
}
