//! Accumulated restrictions inferred from guess feedback.
//!
//! One [`Restrictions`] value exists per session. [`Restrictions::apply`]
//! is the feedback interpreter: a pure function from the prior state, a
//! feedback map, and the guessed boss to the next state. Constraints only
//! ever tighten within a session; an exact lock wins over every later
//! signal on the same attribute.

use crate::catalog::Boss;
use crate::feedback::{Feedback, Signal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Inclusive bounds on a continuous numeric attribute (HP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RangeRestriction {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl RangeRestriction {
    /// An EQUAL observation pinned the range to a single value.
    pub fn is_locked(&self) -> bool {
        self.min.is_some() && self.min == self.max
    }

    /// Raise the lower bound. Ignored if it would cross the upper bound,
    /// which keeps `min <= max` under conflicting feedback.
    fn raise_min(&mut self, value: i64) {
        let raised = self.min.map_or(value, |m| m.max(value));
        if self.max.map_or(true, |max| raised <= max) {
            self.min = Some(raised);
        }
    }

    /// Lower the upper bound; same conflict rule as [`raise_min`].
    fn lower_max(&mut self, value: i64) {
        let lowered = self.max.map_or(value, |m| m.min(value));
        if self.min.map_or(true, |min| min <= lowered) {
            self.max = Some(lowered);
        }
    }

    fn lock(&mut self, value: i64) {
        self.min = Some(value);
        self.max = Some(value);
    }
}

/// Constraints on a count attribute (Weapons, Resistance, Weakness,
/// Immunity). `exact`, once set, overrides `close` and `forbidden`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CountRestriction {
    pub exact: Option<i64>,
    pub close: Option<i64>,
    pub forbidden: BTreeSet<i64>,
}

impl CountRestriction {
    pub fn is_locked(&self) -> bool {
        self.exact.is_some()
    }

    fn observe(&mut self, signal: Signal, observed: i64) {
        if self.is_locked() {
            return;
        }
        match signal {
            Signal::Equal => self.exact = Some(observed),
            Signal::Close => self.close = Some(observed),
            Signal::Different => {
                self.forbidden.insert(observed);
            }
            _ => {}
        }
    }
}

/// Constraint on the binary Optional attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FlagRestriction {
    pub exact: Option<bool>,
}

impl FlagRestriction {
    pub fn is_locked(&self) -> bool {
        self.exact.is_some()
    }
}

/// The full restriction state for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Restrictions {
    pub hp: RangeRestriction,
    pub weapons: CountRestriction,
    pub resistance: CountRestriction,
    pub weakness: CountRestriction,
    pub immunity: CountRestriction,
    pub optional: FlagRestriction,
}

impl Restrictions {
    /// The empty state: nothing is known about the hidden boss yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one attempt's feedback into the state, reading the observed
    /// values off the guessed boss. Returns the complete next state;
    /// unknown or absent signals leave their attribute untouched, so the
    /// function is total and never fails.
    #[must_use]
    pub fn apply(&self, feedback: &Feedback, guess: &Boss) -> Restrictions {
        let mut next = self.clone();

        if !next.hp.is_locked() {
            let hp = i64::from(guess.hp);
            match feedback.hp {
                Signal::Equal => next.hp.lock(hp),
                Signal::Greater => next.hp.raise_min(hp + 1),
                Signal::Less => next.hp.lower_max(hp - 1),
                _ => {}
            }
        }

        // Weapons: the game only distinguishes presence from absence.
        // DIFFERENT against a guess with weapons means the target has
        // none; against a zero-weapon guess it tells us nothing.
        if !next.weapons.is_locked() {
            let count = guess.weapon_count() as i64;
            match feedback.weapons {
                Signal::Equal => next.weapons.exact = Some(count),
                Signal::Different if count > 0 => next.weapons.exact = Some(0),
                Signal::Different => {}
                Signal::Close => next.weapons.close = Some(count),
                _ => {}
            }
        }

        next.resistance
            .observe(feedback.resistance, guess.resistance_count() as i64);
        next.weakness
            .observe(feedback.weakness, guess.weakness_count() as i64);
        next.immunity
            .observe(feedback.immunity, guess.immunity_count() as i64);

        if !next.optional.is_locked() {
            let observed = guess.is_optional();
            match feedback.optional {
                Signal::Equal => next.optional.exact = Some(observed),
                // Binary attribute: "different" fully determines it.
                Signal::Different => next.optional.exact = Some(!observed),
                _ => {}
            }
        }

        next
    }
}

fn fmt_opt(value: Option<i64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| v.to_string())
}

impl fmt::Display for Restrictions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "HP: min={}, max={}",
            fmt_opt(self.hp.min),
            fmt_opt(self.hp.max)
        )?;
        for (name, r) in [
            ("Weapons", &self.weapons),
            ("Resistance", &self.resistance),
            ("Weakness", &self.weakness),
            ("Immunity", &self.immunity),
        ] {
            let forbidden: Vec<String> = r.forbidden.iter().map(|v| v.to_string()).collect();
            writeln!(
                f,
                "{name}: exact={} | close={} | not=[{}]",
                fmt_opt(r.exact),
                fmt_opt(r.close),
                forbidden.join(", ")
            )?;
        }
        let optional = match self.optional.exact {
            None => "n/a",
            Some(true) => "optional",
            Some(false) => "required",
        };
        write!(f, "Optional: {optional}")
    }
}
