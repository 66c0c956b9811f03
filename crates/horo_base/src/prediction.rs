//! Prediction bank and daily advice.
//!
//! The bank holds five sentences for every (sign, aspect) pair, 300 strings
//! in total. It is built eagerly from fixed-size arrays, so every pair is
//! present before the first lookup and the bank never changes afterwards.
//! Sentences interpolate the sign's ruling planet, element, quality and name.

use rand::Rng;

use crate::aspect::{ALL_ASPECTS, ASPECT_COUNT, Aspect};
use crate::zodiac::{ALL_SIGNS, SIGN_COUNT, Sign};

/// Candidate sentences per (sign, aspect) pair.
pub const CANDIDATES_PER_ENTRY: usize = 5;

/// The candidate sentences for one (sign, aspect) pair.
pub type Candidates = [String; CANDIDATES_PER_ENTRY];

/// Precomputed predictions, indexed by sign then aspect.
#[derive(Debug, Clone)]
pub struct PredictionBank {
    entries: [[Candidates; ASPECT_COUNT]; SIGN_COUNT],
}

impl PredictionBank {
    pub fn new() -> Self {
        let entries = std::array::from_fn(|s| {
            std::array::from_fn(|a| prediction_templates(ALL_SIGNS[s], ALL_ASPECTS[a]))
        });
        tracing::trace!(
            entries = SIGN_COUNT * ASPECT_COUNT,
            per_entry = CANDIDATES_PER_ENTRY,
            "prediction bank built"
        );
        Self { entries }
    }

    /// Number of (sign, aspect) entries.
    pub fn len(&self) -> usize {
        SIGN_COUNT * ASPECT_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn candidates(&self, sign: Sign, aspect: Aspect) -> &Candidates {
        &self.entries[sign.index() as usize][aspect.index() as usize]
    }

    /// One candidate for the pair, drawn uniformly.
    pub fn pick<R: Rng>(&self, sign: Sign, aspect: Aspect, rng: &mut R) -> &str {
        let candidates = self.candidates(sign, aspect);
        &candidates[rng.random_range(0..candidates.len())]
    }

    /// All entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Sign, Aspect, &Candidates)> + '_ {
        ALL_SIGNS.iter().flat_map(move |&sign| {
            ALL_ASPECTS
                .iter()
                .map(move |&aspect| (sign, aspect, self.candidates(sign, aspect)))
        })
    }
}

impl Default for PredictionBank {
    fn default() -> Self {
        Self::new()
    }
}

fn prediction_templates(sign: Sign, aspect: Aspect) -> Candidates {
    let planet = sign.ruling_planet().genitive();
    let element = sign.element().genitive();
    let quality = sign.quality().trait_adjective();
    [
        format!(
            "Влияние {planet} усилит ваши способности в сфере {}.",
            aspect.genitive()
        ),
        format!(
            "Энергия {element} поможет вам преодолеть трудности в {}.",
            aspect.prepositional()
        ),
        format!(
            "Ваше {quality} качество проявится наиболее ярко в {}.",
            aspect.prepositional()
        ),
        format!(
            "Сегодня {} может ожидать неожиданных поворотов в {}.",
            sign.name(),
            aspect.prepositional()
        ),
        format!(
            "Звезды советуют {} обратить особое внимание на {}.",
            sign.dative(),
            aspect.accusative()
        ),
    ]
}

/// The five pieces of daily advice for a sign.
pub fn advice_candidates(sign: Sign) -> [String; 5] {
    [
        format!(
            "Сегодня энергия {} особенно сильна. Используйте это для достижения своих целей.",
            sign.element().genitive()
        ),
        format!(
            "Ваше {} качество поможет вам справиться с неожиданными ситуациями.",
            sign.quality().trait_adjective()
        ),
        format!(
            "Прислушайтесь к влиянию {} и доверьтесь своей интуиции.",
            sign.ruling_planet().genitive()
        ),
        "Сегодня хороший день для медитации и самопознания.".to_string(),
        "Будьте открыты новым возможностям, они могут прийти с неожиданной стороны.".to_string(),
    ]
}

/// One piece of daily advice, drawn uniformly.
pub fn daily_advice<R: Rng>(sign: Sign, rng: &mut R) -> String {
    let [a, b, c, d, e] = advice_candidates(sign);
    match rng.random_range(0..5) {
        0 => a,
        1 => b,
        2 => c,
        3 => d,
        _ => e,
    }
}
