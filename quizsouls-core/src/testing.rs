//! Test support for driving sessions without a live game.
//!
//! [`FeedbackOracle`] stands in for the real quiz: given a fixed hidden
//! target it produces the signal map a truthful game would return for
//! any guess. Together with [`sample_catalog`] this makes the whole
//! engine testable (and the CLI runnable) fully offline.

use crate::catalog::{Boss, Optionality};
use crate::feedback::{Feedback, Signal};

/// Signal for a count attribute: the live game reports exact matches in
/// green, off-by-one in orange ("close"), everything else in red.
fn count_signal(guess: usize, target: usize) -> Signal {
    if guess == target {
        Signal::Equal
    } else if guess.abs_diff(target) == 1 {
        Signal::Close
    } else {
        Signal::Different
    }
}

/// Produces the feedback a truthful game would give for each guess
/// against a fixed hidden target.
#[derive(Debug, Clone)]
pub struct FeedbackOracle {
    target: Boss,
}

impl FeedbackOracle {
    pub fn new(target: Boss) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Boss {
        &self.target
    }

    /// The signal map for one guess. `Greater`/`Less` describe the
    /// target relative to the guess; Weapons and Optional only ever
    /// report equal or different, matching the live game.
    pub fn feedback_for(&self, guess: &Boss) -> Feedback {
        use std::cmp::Ordering;

        Feedback {
            hp: match self.target.hp.cmp(&guess.hp) {
                Ordering::Equal => Signal::Equal,
                Ordering::Greater => Signal::Greater,
                Ordering::Less => Signal::Less,
            },
            weapons: if guess.weapon_count() == self.target.weapon_count() {
                Signal::Equal
            } else {
                Signal::Different
            },
            resistance: count_signal(guess.resistance_count(), self.target.resistance_count()),
            weakness: count_signal(guess.weakness_count(), self.target.weakness_count()),
            immunity: count_signal(guess.immunity_count(), self.target.immunity_count()),
            optional: if guess.optional == self.target.optional {
                Signal::Equal
            } else {
                Signal::Different
            },
        }
    }
}

fn boss(
    name: &str,
    slug: &str,
    hp: u32,
    weapons: &[&str],
    resistance: &[&str],
    weakness: &[&str],
    immunity: &[&str],
    optional: Optionality,
) -> Boss {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Boss {
        name: name.to_string(),
        slug: slug.to_string(),
        hp,
        weapons: strings(weapons),
        resistance: strings(resistance),
        weakness: strings(weakness),
        immunity: strings(immunity),
        optional,
    }
}

/// A small built-in catalog so the tools run with no data file.
pub fn sample_catalog() -> Vec<Boss> {
    use Optionality::{Optional, Required};
    vec![
        boss(
            "Asylum Demon",
            "asylum-demon",
            826,
            &["Great Hammer"],
            &[],
            &["Fire"],
            &[],
            Required,
        ),
        boss(
            "Taurus Demon",
            "taurus-demon",
            1215,
            &["Greataxe"],
            &["Fire"],
            &["Magic"],
            &[],
            Required,
        ),
        boss(
            "Bell Gargoyles",
            "bell-gargoyles",
            999,
            &["Halberd"],
            &["Fire"],
            &["Lightning"],
            &[],
            Required,
        ),
        boss(
            "Moonlight Butterfly",
            "moonlight-butterfly",
            735,
            &[],
            &["Magic", "Soul"],
            &[],
            &["Toxic"],
            Optional,
        ),
        boss(
            "Ornstein and Smough",
            "ornstein-and-smough",
            1642,
            &["Spear"],
            &["Lightning"],
            &[],
            &[],
            Required,
        ),
        boss(
            "Great Grey Wolf Sif",
            "great-grey-wolf-sif",
            1862,
            &["Greatsword"],
            &[],
            &[],
            &[],
            Optional,
        ),
        boss(
            "Gravelord Nito",
            "gravelord-nito",
            1920,
            &["Gravelord Sword"],
            &["Fire", "Dark"],
            &["Holy"],
            &["Toxic", "Poison"],
            Required,
        ),
    ]
}
