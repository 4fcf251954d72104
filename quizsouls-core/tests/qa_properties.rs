//! QA tests for scoring and restriction invariants.
//!
//! These check the algebraic properties the ranking relies on: score
//! bounds, self-consistency of EQUAL feedback, monotonic narrowing,
//! idempotent interpretation, and deterministic ordering.

use quizsouls_core::restrictions::{CountRestriction, RangeRestriction};
use quizsouls_core::scoring::{score_count, score_hp};
use quizsouls_core::testing::sample_catalog;
use quizsouls_core::{
    rank, score_boss, Attribute, Boss, Feedback, Optionality, Restrictions, ScoreConfig, Signal,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn boss(name: &str, hp: u32, counts: [usize; 4], optional: bool) -> Boss {
    Boss {
        name: name.to_string(),
        slug: name.to_lowercase(),
        hp,
        weapons: vec!["w".to_string(); counts[0]],
        resistance: vec!["r".to_string(); counts[1]],
        weakness: vec!["k".to_string(); counts[2]],
        immunity: vec!["i".to_string(); counts[3]],
        optional: if optional {
            Optionality::Optional
        } else {
            Optionality::Required
        },
    }
}

fn random_restrictions(rng: &mut StdRng) -> Restrictions {
    let mut state = Restrictions::new();
    if rng.gen_bool(0.5) {
        let min = rng.gen_range(0..3000);
        state.hp.min = Some(min);
        if rng.gen_bool(0.5) {
            state.hp.max = Some(min + rng.gen_range(0..2000));
        }
    } else if rng.gen_bool(0.5) {
        state.hp.max = Some(rng.gen_range(0..3000));
    }
    for counts in [
        &mut state.weapons,
        &mut state.resistance,
        &mut state.weakness,
        &mut state.immunity,
    ] {
        match rng.gen_range(0..4) {
            0 => counts.exact = Some(rng.gen_range(0..5)),
            1 => counts.close = Some(rng.gen_range(0..5)),
            2 => {
                counts.forbidden.insert(rng.gen_range(0..5));
                counts.forbidden.insert(rng.gen_range(0..5));
            }
            _ => {}
        }
    }
    if rng.gen_bool(0.3) {
        state.optional.exact = Some(rng.gen_bool(0.5));
    }
    state
}

// ============================================================================
// Score bounds
// ============================================================================

#[test]
fn composite_scores_stay_in_display_range() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let config = ScoreConfig::default();
    let max = config.max_scale();
    let catalog = sample_catalog();
    for _ in 0..200 {
        let state = random_restrictions(&mut rng);
        for target in &catalog {
            let score = score_boss(target, &state, &config);
            assert!(
                score.composite >= 0.0 && score.composite <= max,
                "composite {} out of [0, {max}] for {}",
                score.composite,
                target.name
            );
            for attr in Attribute::ALL {
                let part = score.breakdown.get(attr);
                assert!(
                    (0.0..=1.0).contains(&part),
                    "{attr:?} score {part} out of [0, 1]"
                );
            }
        }
    }
}

#[test]
fn hp_inside_locked_range_scores_one_at_center() {
    let range = RangeRestriction {
        min: Some(1200),
        max: Some(1200),
    };
    assert_eq!(score_hp(1200, &range, &ScoreConfig::default()), 1.0);
}

#[test]
fn hp_one_sided_bound_is_flat_inside_and_decays_outside() {
    let config = ScoreConfig::default();
    let range = RangeRestriction {
        min: Some(1001),
        max: None,
    };
    assert_eq!(score_hp(1001, &range, &config), 1.0);
    assert_eq!(score_hp(2500, &range, &config), 1.0);
    let below = score_hp(999, &range, &config);
    assert!(below < 1.0 && below > 0.0);
    // further away scores lower
    assert!(score_hp(200, &range, &config) < below);
}

#[test]
fn exact_count_match_scores_highest() {
    let config = ScoreConfig::default();
    let restriction = CountRestriction {
        exact: Some(2),
        close: None,
        forbidden: Default::default(),
    };
    let hit = score_count(2, &restriction, &config);
    let miss = score_count(4, &restriction, &config);
    // 0.45 exact + 0.25 not-forbidden + 0.30 * 0.5 unknown-close
    assert!((hit - 0.85).abs() < 1e-12);
    assert!(miss < hit);
}

#[test]
fn forbidden_count_scores_below_unknown() {
    let config = ScoreConfig::default();
    let mut restriction = CountRestriction::default();
    let unknown = score_count(3, &restriction, &config);
    restriction.forbidden.insert(3);
    let forbidden = score_count(3, &restriction, &config);
    assert!(forbidden < unknown);
}

#[test]
fn close_target_rewards_neighbors() {
    let config = ScoreConfig::default();
    let restriction = CountRestriction {
        exact: None,
        close: Some(3),
        forbidden: Default::default(),
    };
    let at = score_count(3, &restriction, &config);
    let near = score_count(4, &restriction, &config);
    let far = score_count(7, &restriction, &config);
    assert!(at > near);
    assert!(near > far);
}

// ============================================================================
// Self-consistency: EQUAL feedback makes the guess dominate the ranking
// ============================================================================

#[test]
fn all_equal_feedback_puts_the_guess_first() {
    let config = ScoreConfig::default();
    let catalog = sample_catalog();
    for target in &catalog {
        let state = Restrictions::new().apply(&Feedback::all_equal(), target);
        let ranking = rank(&catalog, &state, &config, None);
        assert_eq!(
            ranking[0].boss.name, target.name,
            "{} did not top its own all-equal ranking",
            target.name
        );
        let own = score_boss(target, &state, &config);
        assert_eq!(own.breakdown.hp, 1.0);
        for other in ranking.iter().skip(1) {
            assert!(other.score <= own.composite);
        }
    }
}

// ============================================================================
// Interpreter properties
// ============================================================================

#[test]
fn interpretation_is_idempotent() {
    let guess = boss("guess", 1100, [1, 2, 0, 1], true);
    let feedback = Feedback::new()
        .with(Attribute::Hp, Signal::Greater)
        .with(Attribute::Weapons, Signal::Equal)
        .with(Attribute::Resistance, Signal::Close)
        .with(Attribute::Weakness, Signal::Different)
        .with(Attribute::Immunity, Signal::Less)
        .with(Attribute::Optional, Signal::Different);
    let once = Restrictions::new().apply(&feedback, &guess);
    let twice = once.apply(&feedback, &guess);
    assert_eq!(once, twice);
}

#[test]
fn narrowing_never_widens_hp_bounds() {
    let mut rng = StdRng::seed_from_u64(0xca7a);
    let mut state = Restrictions::new();
    let signals = [Signal::Greater, Signal::Less];
    for _ in 0..100 {
        let hp = rng.gen_range(1..3000u32);
        let signal = signals[rng.gen_range(0..signals.len())];
        let guess = boss("guess", hp, [0; 4], false);
        let before = state.hp.clone();
        state = state.apply(&Feedback::new().with(Attribute::Hp, signal), &guess);
        if let (Some(old), Some(new)) = (before.min, state.hp.min) {
            assert!(new >= old, "min widened from {old} to {new}");
        }
        if let (Some(old), Some(new)) = (before.max, state.hp.max) {
            assert!(new <= old, "max widened from {old} to {new}");
        }
        if let (Some(min), Some(max)) = (state.hp.min, state.hp.max) {
            assert!(min <= max, "bounds crossed: {min} > {max}");
        }
    }
}

#[test]
fn hp_lock_freezes_the_range() {
    let state = Restrictions::new()
        .apply(
            &Feedback::new().with(Attribute::Hp, Signal::Equal),
            &boss("guess", 1500, [0; 4], false),
        )
        .apply(
            &Feedback::new().with(Attribute::Hp, Signal::Greater),
            &boss("later", 2000, [0; 4], false),
        )
        .apply(
            &Feedback::new().with(Attribute::Hp, Signal::Less),
            &boss("even-later", 800, [0; 4], false),
        );
    assert_eq!(state.hp.min, Some(1500));
    assert_eq!(state.hp.max, Some(1500));
}

#[test]
fn exact_lock_survives_later_signals() {
    let guess = boss("guess", 500, [2, 1, 1, 0], false);
    let locked = Restrictions::new().apply(
        &Feedback::new().with(Attribute::Resistance, Signal::Equal),
        &guess,
    );
    assert_eq!(locked.resistance.exact, Some(1));

    // subsequent CLOSE and DIFFERENT observations do not unseat the lock
    let later = locked
        .apply(
            &Feedback::new().with(Attribute::Resistance, Signal::Close),
            &boss("other", 500, [2, 4, 1, 0], false),
        )
        .apply(
            &Feedback::new().with(Attribute::Resistance, Signal::Different),
            &boss("third", 500, [2, 3, 1, 0], false),
        );
    assert_eq!(later.resistance.exact, Some(1));
}

#[test]
fn unknown_signals_change_nothing() {
    let guess = boss("guess", 900, [1, 1, 1, 1], true);
    let state = Restrictions::new().apply(&Feedback::new(), &guess);
    assert_eq!(state, Restrictions::new());
}

// ============================================================================
// Ranking determinism
// ============================================================================

#[test]
fn ranking_is_deterministic_across_runs() {
    let catalog = sample_catalog();
    let guess = catalog[0].clone();
    let state = Restrictions::new().apply(
        &Feedback::new()
            .with(Attribute::Hp, Signal::Greater)
            .with(Attribute::Immunity, Signal::Close),
        &guess,
    );
    let config = ScoreConfig::default();
    let first = rank(&catalog, &state, &config, None);
    for _ in 0..10 {
        let again = rank(&catalog, &state, &config, None);
        let names: Vec<&str> = again.iter().map(|e| e.boss.name.as_str()).collect();
        let expected: Vec<&str> = first.iter().map(|e| e.boss.name.as_str()).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn ranking_orders_descending_ties_keep_catalog_order() {
    let catalog = sample_catalog();
    let ranking = rank(&catalog, &Restrictions::new(), &ScoreConfig::default(), None);
    for pair in ranking.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // with no restrictions every score ties, so catalog order survives
    let names: Vec<&str> = ranking.iter().map(|e| e.boss.name.as_str()).collect();
    let expected: Vec<&str> = catalog.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn empty_whitelist_yields_empty_ranking() {
    let catalog = sample_catalog();
    let whitelist = std::collections::HashSet::new();
    let ranking = rank(
        &catalog,
        &Restrictions::new(),
        &ScoreConfig::default(),
        Some(&whitelist),
    );
    assert!(ranking.is_empty());
}
