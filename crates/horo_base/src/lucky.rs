//! Lucky color per sign and the lucky number draw.

use rand::Rng;

use crate::zodiac::Sign;

/// Largest lucky number drawn by default.
pub const LUCKY_NUMBER_MAX: u32 = 100;

/// Lucky color of a sign. Fixed per sign.
pub const fn lucky_color(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => "красный",
        Sign::Taurus => "зеленый",
        Sign::Gemini => "желтый",
        Sign::Cancer => "серебряный",
        Sign::Leo => "золотой",
        Sign::Virgo => "коричневый",
        Sign::Libra => "розовый",
        Sign::Scorpio => "темно-красный",
        Sign::Sagittarius => "фиолетовый",
        Sign::Capricorn => "черный",
        Sign::Aquarius => "синий",
        Sign::Pisces => "бирюзовый",
    }
}

/// Uniform integer in `[1, max]`. A `max` of 0 is treated as 1.
pub fn lucky_number<R: Rng>(rng: &mut R, max: u32) -> u32 {
    rng.random_range(1..=max.max(1))
}
