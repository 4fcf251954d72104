//! Candidate scoring against the accumulated restrictions.
//!
//! Every catalog entry gets a score per attribute in `[0, 1]` plus a
//! weighted composite. The HP model is a Gaussian centered on the known
//! range (a locked range approaches a delta function, a wide range stays
//! permissive); count attributes blend exact-match, forbidden-value, and
//! closeness terms.

use crate::catalog::Boss;
use crate::feedback::Attribute;
use crate::restrictions::{CountRestriction, RangeRestriction, Restrictions};
use serde::{Deserialize, Serialize};

/// Relative weight of each attribute in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeWeights {
    pub hp: f64,
    pub weapons: f64,
    pub resistance: f64,
    pub weakness: f64,
    pub immunity: f64,
    pub optional: f64,
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self {
            hp: 0.28,
            weapons: 0.16,
            resistance: 0.14,
            weakness: 0.18,
            immunity: 0.16,
            optional: 0.08,
        }
    }
}

impl AttributeWeights {
    pub fn get(&self, attr: Attribute) -> f64 {
        match attr {
            Attribute::Hp => self.hp,
            Attribute::Weapons => self.weapons,
            Attribute::Resistance => self.resistance,
            Attribute::Weakness => self.weakness,
            Attribute::Immunity => self.immunity,
            Attribute::Optional => self.optional,
        }
    }

    pub fn sum(&self) -> f64 {
        Attribute::ALL.iter().map(|&a| self.get(a)).sum()
    }
}

/// Tunable scoring parameters. The defaults match the live game bot;
/// `display_scale` only stretches the composite for display and never
/// affects relative order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    pub weights: AttributeWeights,
    /// Decay width for HP values violating a one-sided bound.
    pub hp_penalty_scale: f64,
    /// Decay width around a close-target count.
    pub close_decay: f64,
    /// Composite scaling factor.
    pub display_scale: f64,
    /// Weight of the exact-match term in a count score.
    pub exact_weight: f64,
    /// Weight of the forbidden-value term in a count score.
    pub not_weight: f64,
    /// Weight of the closeness term in a count score.
    pub close_weight: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            weights: AttributeWeights::default(),
            hp_penalty_scale: 500.0,
            close_decay: 1.5,
            display_scale: 15.0,
            exact_weight: 0.45,
            not_weight: 0.25,
            close_weight: 0.30,
        }
    }
}

impl ScoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound of the composite score under this configuration.
    pub fn max_scale(&self) -> f64 {
        self.weights.sum() * self.display_scale
    }

    pub fn with_weights(mut self, weights: AttributeWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_display_scale(mut self, scale: f64) -> Self {
        self.display_scale = scale;
        self
    }
}

/// Per-attribute score components, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub hp: f64,
    pub weapons: f64,
    pub resistance: f64,
    pub weakness: f64,
    pub immunity: f64,
    pub optional: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, attr: Attribute) -> f64 {
        match attr {
            Attribute::Hp => self.hp,
            Attribute::Weapons => self.weapons,
            Attribute::Resistance => self.resistance,
            Attribute::Weakness => self.weakness,
            Attribute::Immunity => self.immunity,
            Attribute::Optional => self.optional,
        }
    }
}

/// Composite score plus its per-attribute breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossScore {
    pub composite: f64,
    pub breakdown: ScoreBreakdown,
}

/// Score an HP value against the known range.
pub fn score_hp(hp: u32, range: &RangeRestriction, config: &ScoreConfig) -> f64 {
    let hp = f64::from(hp);
    match (range.min, range.max) {
        (Some(min), Some(max)) => {
            // Gaussian around the range center; a locked range is a
            // near-delta, a wide range decays slowly.
            let (min, max) = (min as f64, max as f64);
            let center = (min + max) / 2.0;
            let half = ((max - min) / 2.0).max(1.0);
            let z = (hp - center) / half;
            (-z * z).exp()
        }
        (Some(min), None) => {
            let min = min as f64;
            if hp >= min {
                1.0
            } else {
                let z = (min - hp) / config.hp_penalty_scale;
                (-z * z).exp()
            }
        }
        (None, Some(max)) => {
            let max = max as f64;
            if hp <= max {
                1.0
            } else {
                let z = (hp - max) / config.hp_penalty_scale;
                (-z * z).exp()
            }
        }
        (None, None) => 0.5,
    }
}

/// Score a count value against a count restriction: a weighted blend of
/// exact-match, forbidden-value, and closeness terms, each in `[0, 1]`.
pub fn score_count(count: usize, restriction: &CountRestriction, config: &ScoreConfig) -> f64 {
    let count = count as i64;

    let exact = match restriction.exact {
        Some(target) if count == target => 1.0,
        Some(_) => 0.0,
        None => 0.5,
    };

    let not = if restriction.forbidden.contains(&count) {
        0.0
    } else {
        1.0
    };

    let close = match restriction.close {
        Some(target) => {
            let z = (count - target) as f64 / config.close_decay;
            (-z * z).exp()
        }
        None => 0.5,
    };

    config.exact_weight * exact + config.not_weight * not + config.close_weight * close
}

/// Score a boss against the full restriction state.
pub fn score_boss(boss: &Boss, restrictions: &Restrictions, config: &ScoreConfig) -> BossScore {
    let breakdown = ScoreBreakdown {
        hp: score_hp(boss.hp, &restrictions.hp, config),
        weapons: score_count(boss.weapon_count(), &restrictions.weapons, config),
        resistance: score_count(boss.resistance_count(), &restrictions.resistance, config),
        weakness: score_count(boss.weakness_count(), &restrictions.weakness, config),
        immunity: score_count(boss.immunity_count(), &restrictions.immunity, config),
        optional: match restrictions.optional.exact {
            None => 1.0,
            Some(flag) => {
                if boss.is_optional() == flag {
                    1.0
                } else {
                    0.0
                }
            }
        },
    };

    let w = &config.weights;
    let total = w.hp * breakdown.hp
        + w.weapons * breakdown.weapons
        + w.resistance * breakdown.resistance
        + w.weakness * breakdown.weakness
        + w.immunity * breakdown.immunity
        + w.optional * breakdown.optional;

    BossScore {
        composite: total * config.display_scale,
        breakdown,
    }
}
