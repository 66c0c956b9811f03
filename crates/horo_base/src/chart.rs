//! Astrological chart for a birth date.
//!
//! The sun sign comes from the birth date. Ascendant, moon sign and the
//! longitudes of the ten bodies are drawn from the injected RNG; they are
//! flavor, not ephemeris output.

use chrono::NaiveDate;
use rand::Rng;

use crate::celestial::{ALL_PLANETS, CelestialBody};
use crate::zodiac::{ALL_SIGNS, Sign, sign_for_date};

/// Number of bodies in every chart.
pub const BODY_COUNT: usize = ALL_PLANETS.len();

/// A generated chart. Discarded once its report is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Sign resolved from the birth date.
    pub sun: Sign,
    pub ascendant: Sign,
    pub moon: Sign,
    /// Bodies in `ALL_PLANETS` order.
    pub planets: [CelestialBody; BODY_COUNT],
}

impl Chart {
    /// Build a chart for `birth`.
    ///
    /// Ascendant and moon sign are independent draws with replacement, so
    /// they may equal the sun sign or each other.
    pub fn generate<R: Rng>(birth: NaiveDate, rng: &mut R) -> Self {
        let sun = sign_for_date(birth);
        let ascendant = random_sign(rng);
        let moon = random_sign(rng);
        let planets = std::array::from_fn(|i| {
            CelestialBody::new(ALL_PLANETS[i], rng.random_range(0.0..360.0))
        });
        tracing::debug!(
            %birth,
            sun = sun.western_name(),
            ascendant = ascendant.western_name(),
            moon = moon.western_name(),
            "chart generated"
        );
        Self {
            sun,
            ascendant,
            moon,
            planets,
        }
    }
}

/// Uniform draw from the twelve signs.
pub fn random_sign<R: Rng>(rng: &mut R) -> Sign {
    ALL_SIGNS[rng.random_range(0..ALL_SIGNS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn chart_has_ten_bodies_in_order() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        let chart = Chart::generate(date(1990, 7, 4), &mut rng);
        assert_eq!(chart.planets.len(), 10);
        for (body, planet) in chart.planets.iter().zip(ALL_PLANETS) {
            assert_eq!(body.planet, planet);
        }
    }

    #[test]
    fn degrees_in_range() {
        let mut rng = ChaChaRng::seed_from_u64(3);
        for _ in 0..500 {
            let chart = Chart::generate(date(2001, 1, 1), &mut rng);
            for body in &chart.planets {
                assert!((0.0..360.0).contains(&body.degrees), "{}", body.degrees);
            }
        }
    }

    #[test]
    fn sun_sign_follows_birth_date() {
        let mut rng = ChaChaRng::seed_from_u64(0);
        assert_eq!(Chart::generate(date(1990, 7, 4), &mut rng).sun, Sign::Cancer);
        assert_eq!(Chart::generate(date(1985, 1, 1), &mut rng).sun, Sign::Capricorn);
        assert_eq!(Chart::generate(date(2000, 3, 21), &mut rng).sun, Sign::Aries);
    }

    #[test]
    fn same_seed_same_chart() {
        let a = Chart::generate(date(1977, 5, 25), &mut ChaChaRng::seed_from_u64(11));
        let b = Chart::generate(date(1977, 5, 25), &mut ChaChaRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn random_sign_covers_table() {
        let mut rng = ChaChaRng::seed_from_u64(8);
        let mut seen = [false; 12];
        for _ in 0..1_000 {
            seen[random_sign(&mut rng).index() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
