//! Zodiac tables and pseudo-random horoscope generation.
//!
//! This crate provides:
//! - Sign, body and aspect lookup tables with their Russian wording
//! - Sun sign resolution from a birth date and the 30-degree sign wheel
//! - A precomputed prediction bank and daily advice
//! - Random chart generation and sign compatibility scoring
//! - A structured report and its colored or plain text rendering
//!
//! All randomness comes from an RNG passed in by the caller.

pub mod aspect;
pub mod celestial;
pub mod chart;
pub mod compatibility;
pub mod config;
pub mod date;
pub mod error;
pub mod generator;
pub mod lucky;
pub mod prediction;
pub mod render;
pub mod report;
pub mod zodiac;

pub use aspect::{ALL_ASPECTS, ASPECT_COUNT, Aspect};
pub use celestial::{ALL_PLANETS, CelestialBody, Planet, sign_ruler};
pub use chart::{BODY_COUNT, Chart, random_sign};
pub use compatibility::{affinity_bonus, compatibility};
pub use config::HoroscopeConfig;
pub use date::{DATE_FORMAT, DATE_FORMAT_HINT, format_date, parse_date};
pub use error::HoroError;
pub use generator::HoroscopeGenerator;
pub use lucky::{LUCKY_NUMBER_MAX, lucky_color, lucky_number};
pub use prediction::{
    CANDIDATES_PER_ENTRY, Candidates, PredictionBank, advice_candidates, daily_advice,
};
pub use render::{Painter, render};
pub use report::{AspectPrediction, Placement, Report};
pub use zodiac::{
    ALL_SIGNS, Element, MonthDay, Quality, SIGN_COUNT, Sign, find_sign_for, sign_for_date,
    sign_from_degrees, wheel_index,
};
