//! Horoscope generation: birth date in, [`Report`] out.

use chrono::NaiveDate;
use rand::Rng;

use crate::chart::Chart;
use crate::compatibility::compatibility;
use crate::config::HoroscopeConfig;
use crate::lucky::{lucky_color, lucky_number};
use crate::prediction::{PredictionBank, daily_advice};
use crate::report::{AspectPrediction, Placement, Report};

/// Owns the prediction bank and config for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct HoroscopeGenerator {
    bank: PredictionBank,
    config: HoroscopeConfig,
}

impl HoroscopeGenerator {
    pub fn new(config: HoroscopeConfig) -> Self {
        Self {
            bank: PredictionBank::new(),
            config,
        }
    }

    pub fn config(&self) -> &HoroscopeConfig {
        &self.config
    }

    pub fn bank(&self) -> &PredictionBank {
        &self.bank
    }

    /// Generate a chart for `birth` and turn it into a report dated `today`.
    pub fn generate<R: Rng>(&self, birth: NaiveDate, today: NaiveDate, rng: &mut R) -> Report {
        let chart = Chart::generate(birth, rng);
        self.report_for(&chart, today, rng)
    }

    /// Build the report for an existing chart.
    ///
    /// Draw order: one prediction per aspect, lucky number, compatibility,
    /// advice.
    pub fn report_for<R: Rng>(&self, chart: &Chart, today: NaiveDate, rng: &mut R) -> Report {
        let sign = chart.sun;
        let predictions = self
            .config
            .aspects
            .iter()
            .map(|&aspect| AspectPrediction {
                aspect,
                text: self.bank.pick(sign, aspect, rng).to_string(),
            })
            .collect();
        let lucky_number = lucky_number(rng, self.config.lucky_number_max);
        let placements = chart.planets.iter().map(Placement::from).collect();
        let compatibility = compatibility(sign, chart.moon, rng);
        let advice = daily_advice(sign, rng);

        Report {
            sign,
            date: today,
            predictions,
            lucky_number,
            lucky_color: lucky_color(sign),
            ascendant: chart.ascendant,
            moon: chart.moon,
            placements,
            compatibility,
            advice,
        }
    }
}

impl Default for HoroscopeGenerator {
    fn default() -> Self {
        Self::new(HoroscopeConfig::default())
    }
}
