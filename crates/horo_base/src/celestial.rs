//! Celestial bodies of the chart and sign rulership.
//!
//! Ten bodies take part in a chart: the two luminaries and the eight
//! planets from Mercury to Pluto. Every sign is ruled by one of them,
//! using the modern western assignment (Scorpio/Pluto, Aquarius/Uranus,
//! Pisces/Neptune).

use crate::zodiac::{Sign, sign_from_degrees};

/// The 10 chart bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 10 bodies in chart order.
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Planet {
    /// Russian name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Солнце",
            Self::Moon => "Луна",
            Self::Mercury => "Меркурий",
            Self::Venus => "Венера",
            Self::Mars => "Марс",
            Self::Jupiter => "Юпитер",
            Self::Saturn => "Сатурн",
            Self::Uranus => "Уран",
            Self::Neptune => "Нептун",
            Self::Pluto => "Плутон",
        }
    }

    /// Genitive form, as in "влияние Марса".
    pub const fn genitive(self) -> &'static str {
        match self {
            Self::Sun => "Солнца",
            Self::Moon => "Луны",
            Self::Mercury => "Меркурия",
            Self::Venus => "Венеры",
            Self::Mars => "Марса",
            Self::Jupiter => "Юпитера",
            Self::Saturn => "Сатурна",
            Self::Uranus => "Урана",
            Self::Neptune => "Нептуна",
            Self::Pluto => "Плутона",
        }
    }

    /// Astronomical glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
            Self::Pluto => "♇",
        }
    }

    /// 0-based index into ALL_PLANETS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }
}

/// Get the ruling planet of a sign.
///
/// - Aries → Mars
/// - Taurus/Libra → Venus
/// - Gemini/Virgo → Mercury
/// - Cancer → Moon
/// - Leo → Sun
/// - Scorpio → Pluto
/// - Sagittarius → Jupiter
/// - Capricorn → Saturn
/// - Aquarius → Uranus
/// - Pisces → Neptune
pub const fn sign_ruler(sign: Sign) -> Planet {
    match sign {
        Sign::Aries => Planet::Mars,
        Sign::Taurus => Planet::Venus,
        Sign::Gemini => Planet::Mercury,
        Sign::Cancer => Planet::Moon,
        Sign::Leo => Planet::Sun,
        Sign::Virgo => Planet::Mercury,
        Sign::Libra => Planet::Venus,
        Sign::Scorpio => Planet::Pluto,
        Sign::Sagittarius => Planet::Jupiter,
        Sign::Capricorn => Planet::Saturn,
        Sign::Aquarius => Planet::Uranus,
        Sign::Pisces => Planet::Neptune,
    }
}

/// A body placed at a longitude on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub planet: Planet,
    /// Longitude in degrees, [0, 360).
    pub degrees: f64,
}

impl CelestialBody {
    pub fn new(planet: Planet, degrees: f64) -> Self {
        Self { planet, degrees }
    }

    pub fn name(&self) -> &'static str {
        self.planet.name()
    }

    pub fn symbol(&self) -> &'static str {
        self.planet.symbol()
    }

    /// Sign this body occupies on the 30-degree wheel.
    pub fn wheel_sign(&self) -> Sign {
        sign_from_degrees(self.degrees)
    }
}
