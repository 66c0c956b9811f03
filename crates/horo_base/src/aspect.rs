//! Life aspects a horoscope makes predictions for.

/// A life domain covered by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Love,
    Career,
    Health,
    Finance,
    Growth,
}

/// All 5 aspects in report order.
pub const ALL_ASPECTS: [Aspect; 5] = [
    Aspect::Love,
    Aspect::Career,
    Aspect::Health,
    Aspect::Finance,
    Aspect::Growth,
];

/// Number of aspects in the table.
pub const ASPECT_COUNT: usize = ALL_ASPECTS.len();

impl Aspect {
    /// Label shown in the report.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Love => "Любовь",
            Self::Career => "Карьера",
            Self::Health => "Здоровье",
            Self::Finance => "Финансы",
            Self::Growth => "Личностный рост",
        }
    }

    /// "в сфере ..."
    pub const fn genitive(self) -> &'static str {
        match self {
            Self::Love => "любви",
            Self::Career => "карьеры",
            Self::Health => "здоровья",
            Self::Finance => "финансов",
            Self::Growth => "личностного роста",
        }
    }

    /// "в ..."
    pub const fn prepositional(self) -> &'static str {
        match self {
            Self::Love => "любви",
            Self::Career => "карьере",
            Self::Health => "здоровье",
            Self::Finance => "финансах",
            Self::Growth => "личностном росте",
        }
    }

    /// "обратить внимание на ..."
    pub const fn accusative(self) -> &'static str {
        match self {
            Self::Love => "любовь",
            Self::Career => "карьеру",
            Self::Health => "здоровье",
            Self::Finance => "финансы",
            Self::Growth => "личностный рост",
        }
    }

    /// Short English key, used on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::Health => "health",
            Self::Finance => "finance",
            Self::Growth => "growth",
        }
    }

    /// 0-based index into ALL_ASPECTS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Love => 0,
            Self::Career => 1,
            Self::Health => 2,
            Self::Finance => 3,
            Self::Growth => 4,
        }
    }

    /// Look up an aspect by English key or Russian label, ignoring case.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        ALL_ASPECTS
            .iter()
            .copied()
            .find(|a| a.key() == s || a.name().to_lowercase() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_indices_sequential() {
        for (i, a) in ALL_ASPECTS.iter().enumerate() {
            assert_eq!(a.index() as usize, i);
        }
    }

    #[test]
    fn from_name_accepts_key_and_label() {
        assert_eq!(Aspect::from_name("career"), Some(Aspect::Career));
        assert_eq!(Aspect::from_name(" Finance "), Some(Aspect::Finance));
        assert_eq!(Aspect::from_name("Любовь"), Some(Aspect::Love));
        assert_eq!(Aspect::from_name("личностный рост"), Some(Aspect::Growth));
        assert_eq!(Aspect::from_name("weather"), None);
    }
}
