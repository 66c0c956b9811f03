//! Zodiac signs, their calendar ranges and the 30-degree wheel.
//!
//! The twelve signs are kept in a fixed table order starting from Aries.
//! Each sign owns a contiguous month/day range of the calendar year and the
//! twelve ranges partition the year; Capricorn wraps from December into
//! January. The same table order doubles as a zodiac wheel of 30 degrees per
//! sign, which is used to place the chart's bodies.

use chrono::{Datelike, NaiveDate};

use crate::celestial::{Planet, sign_ruler};

/// A year-agnostic calendar position: `(month, day)`.
pub type MonthDay = (u32, u32);

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in table order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Number of signs in the table.
pub const SIGN_COUNT: usize = ALL_SIGNS.len();

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Огонь",
            Self::Earth => "Земля",
            Self::Air => "Воздух",
            Self::Water => "Вода",
        }
    }

    /// Genitive form, as in "энергия Огня".
    pub const fn genitive(self) -> &'static str {
        match self {
            Self::Fire => "Огня",
            Self::Earth => "Земли",
            Self::Air => "Воздуха",
            Self::Water => "Воды",
        }
    }
}

/// Modality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Кардинальный",
            Self::Fixed => "Фиксированный",
            Self::Mutable => "Мутабельный",
        }
    }

    /// Lower-case neuter adjective, as in "ваше кардинальное качество".
    pub const fn trait_adjective(self) -> &'static str {
        match self {
            Self::Cardinal => "кардинальное",
            Self::Fixed => "фиксированное",
            Self::Mutable => "мутабельное",
        }
    }
}

impl Sign {
    /// Russian name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Овен",
            Self::Taurus => "Телец",
            Self::Gemini => "Близнецы",
            Self::Cancer => "Рак",
            Self::Leo => "Лев",
            Self::Virgo => "Дева",
            Self::Libra => "Весы",
            Self::Scorpio => "Скорпион",
            Self::Sagittarius => "Стрелец",
            Self::Capricorn => "Козерог",
            Self::Aquarius => "Водолей",
            Self::Pisces => "Рыбы",
        }
    }

    /// Dative form of the name, as in "звезды советуют Раку".
    pub const fn dative(self) -> &'static str {
        match self {
            Self::Aries => "Овну",
            Self::Taurus => "Тельцу",
            Self::Gemini => "Близнецам",
            Self::Cancer => "Раку",
            Self::Leo => "Льву",
            Self::Virgo => "Деве",
            Self::Libra => "Весам",
            Self::Scorpio => "Скорпиону",
            Self::Sagittarius => "Стрельцу",
            Self::Capricorn => "Козерогу",
            Self::Aquarius => "Водолею",
            Self::Pisces => "Рыбам",
        }
    }

    /// Western (English) name of the sign.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode zodiac glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// First day of the sign's range, inclusive.
    pub const fn start(self) -> MonthDay {
        match self {
            Self::Aries => (3, 21),
            Self::Taurus => (4, 20),
            Self::Gemini => (5, 21),
            Self::Cancer => (6, 21),
            Self::Leo => (7, 23),
            Self::Virgo => (8, 23),
            Self::Libra => (9, 23),
            Self::Scorpio => (10, 23),
            Self::Sagittarius => (11, 22),
            Self::Capricorn => (12, 22),
            Self::Aquarius => (1, 20),
            Self::Pisces => (2, 19),
        }
    }

    /// Last day of the sign's range, inclusive.
    pub const fn end(self) -> MonthDay {
        match self {
            Self::Aries => (4, 19),
            Self::Taurus => (5, 20),
            Self::Gemini => (6, 20),
            Self::Cancer => (7, 22),
            Self::Leo => (8, 22),
            Self::Virgo => (9, 22),
            Self::Libra => (10, 22),
            Self::Scorpio => (11, 21),
            Self::Sagittarius => (12, 21),
            Self::Capricorn => (1, 19),
            Self::Aquarius => (2, 18),
            Self::Pisces => (3, 20),
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    pub const fn quality(self) -> Quality {
        match self {
            Self::Aries | Self::Cancer | Self::Libra | Self::Capricorn => Quality::Cardinal,
            Self::Taurus | Self::Leo | Self::Scorpio | Self::Aquarius => Quality::Fixed,
            Self::Gemini | Self::Virgo | Self::Sagittarius | Self::Pisces => Quality::Mutable,
        }
    }

    /// Ruling planet of the sign. See [`sign_ruler`].
    pub const fn ruling_planet(self) -> Planet {
        sign_ruler(self)
    }

    /// Whether `(month, day)` falls inside this sign's range.
    ///
    /// A range whose start lies later in the year than its end wraps across
    /// New Year and matches on either side of it.
    pub fn contains(self, month: u32, day: u32) -> bool {
        let md = (month, day);
        let (start, end) = (self.start(), self.end());
        if start <= end {
            start <= md && md <= end
        } else {
            md >= start || md <= end
        }
    }
}

/// First sign in table order whose range contains `(month, day)`.
pub fn find_sign_for(month: u32, day: u32) -> Option<Sign> {
    ALL_SIGNS.iter().copied().find(|s| s.contains(month, day))
}

/// Sun sign for a birth date. The year is ignored.
///
/// The ranges partition the year, so the fallback to the last sign in table
/// order never fires for a real calendar date.
pub fn sign_for_date(date: NaiveDate) -> Sign {
    find_sign_for(date.month(), date.day()).unwrap_or(ALL_SIGNS[SIGN_COUNT - 1])
}

/// Table index of the 30-degree slice holding `degrees`, after wrapping the
/// value onto one turn. 0 = Aries, 11 = Pisces.
pub fn wheel_index(degrees: f64) -> usize {
    let turn = degrees.rem_euclid(360.0);
    // A tiny negative input wraps to exactly 360.0; that slice is Pisces.
    ((turn / 30.0) as usize).min(SIGN_COUNT - 1)
}

/// Sign at `floor(degrees / 30)` in table order: Aries = [0, 30), Taurus =
/// [30, 60), and so on up to Pisces = [330, 360).
pub fn sign_from_degrees(degrees: f64) -> Sign {
    ALL_SIGNS[wheel_index(degrees)]
}
