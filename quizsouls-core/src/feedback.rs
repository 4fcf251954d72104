//! Feedback signals returned by the game for a submitted guess.
//!
//! After each guess the game reports, per attribute, how the guess
//! compares to the hidden boss. The signal set is closed: whatever the
//! collaborator scraped or the player typed, anything unrecognized
//! becomes [`Signal::Unknown`] and is ignored by the interpreter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One scored attribute of a boss encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Hp,
    Weapons,
    Resistance,
    Weakness,
    Immunity,
    Optional,
}

impl Attribute {
    /// All attributes in the order the game displays them.
    pub const ALL: [Attribute; 6] = [
        Attribute::Hp,
        Attribute::Weapons,
        Attribute::Resistance,
        Attribute::Weakness,
        Attribute::Immunity,
        Attribute::Optional,
    ];

    /// Parse an attribute name as used in feedback maps. Unrecognized
    /// names yield `None` (the corresponding signal is dropped).
    pub fn from_name(name: &str) -> Option<Attribute> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hp" => Some(Attribute::Hp),
            "weapons" => Some(Attribute::Weapons),
            "resistance" => Some(Attribute::Resistance),
            "weakness" => Some(Attribute::Weakness),
            "immunity" => Some(Attribute::Immunity),
            "optional" => Some(Attribute::Optional),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Hp => "HP",
            Attribute::Weapons => "Weapons",
            Attribute::Resistance => "Resistance",
            Attribute::Weakness => "Weakness",
            Attribute::Immunity => "Immunity",
            Attribute::Optional => "Optional",
        };
        write!(f, "{name}")
    }
}

/// Per-attribute comparison signal reported by the game.
///
/// `Greater`/`Less` are how the hidden boss compares to the guess and
/// only ever appear on HP; `Close` only appears on count attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Signal {
    Greater,
    Less,
    Equal,
    Close,
    Different,
    #[default]
    Unknown,
}

impl Signal {
    /// Lenient symbol parsing: accepts the canonical names plus the
    /// shorthand the CLI uses. Anything else is `Unknown`.
    pub fn from_symbol(symbol: &str) -> Signal {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "GREATER" | ">" | "UP" => Signal::Greater,
            "LESS" | "<" | "DOWN" => Signal::Less,
            "EQUAL" | "=" => Signal::Equal,
            "CLOSE" | "~" => Signal::Close,
            "DIFFERENT" | "X" => Signal::Different,
            _ => Signal::Unknown,
        }
    }

    pub fn is_known(self) -> bool {
        self != Signal::Unknown
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Signal::Greater => "GREATER",
            Signal::Less => "LESS",
            Signal::Equal => "EQUAL",
            Signal::Close => "CLOSE",
            Signal::Different => "DIFFERENT",
            Signal::Unknown => "—",
        };
        write!(f, "{symbol}")
    }
}

/// Feedback for one attempt: a signal per attribute.
///
/// Defaults to all-`Unknown`, which the interpreter treats as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Feedback {
    pub hp: Signal,
    pub weapons: Signal,
    pub resistance: Signal,
    pub weakness: Signal,
    pub immunity: Signal,
    pub optional: Signal,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feedback with every attribute reported equal (a solved guess).
    pub fn all_equal() -> Self {
        let mut fb = Feedback::new();
        for attr in Attribute::ALL {
            fb.set(attr, Signal::Equal);
        }
        fb
    }

    pub fn get(&self, attr: Attribute) -> Signal {
        match attr {
            Attribute::Hp => self.hp,
            Attribute::Weapons => self.weapons,
            Attribute::Resistance => self.resistance,
            Attribute::Weakness => self.weakness,
            Attribute::Immunity => self.immunity,
            Attribute::Optional => self.optional,
        }
    }

    pub fn set(&mut self, attr: Attribute, signal: Signal) {
        let slot = match attr {
            Attribute::Hp => &mut self.hp,
            Attribute::Weapons => &mut self.weapons,
            Attribute::Resistance => &mut self.resistance,
            Attribute::Weakness => &mut self.weakness,
            Attribute::Immunity => &mut self.immunity,
            Attribute::Optional => &mut self.optional,
        };
        *slot = signal;
    }

    /// Builder-style setter.
    pub fn with(mut self, attr: Attribute, signal: Signal) -> Self {
        self.set(attr, signal);
        self
    }

    /// Fold a `(attribute name, signal symbol)` entry in. Unknown
    /// attribute names are ignored, unknown symbols become `Unknown`.
    pub fn insert_symbol(&mut self, attr_name: &str, symbol: &str) {
        if let Some(attr) = Attribute::from_name(attr_name) {
            self.set(attr, Signal::from_symbol(symbol));
        }
    }

    /// True when every attribute was reported equal: the guess is the
    /// hidden boss (or indistinguishable from it).
    pub fn is_all_equal(&self) -> bool {
        Attribute::ALL.iter().all(|&a| self.get(a) == Signal::Equal)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for attr in Attribute::ALL {
            if !first {
                write!(f, " | ")?;
            }
            first = false;
            write!(f, "{attr}: {}", self.get(attr))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_parsing() {
        assert_eq!(Signal::from_symbol("GREATER"), Signal::Greater);
        assert_eq!(Signal::from_symbol("greater"), Signal::Greater);
        assert_eq!(Signal::from_symbol(">"), Signal::Greater);
        assert_eq!(Signal::from_symbol("="), Signal::Equal);
        assert_eq!(Signal::from_symbol("~"), Signal::Close);
        assert_eq!(Signal::from_symbol("x"), Signal::Different);
        assert_eq!(Signal::from_symbol("<"), Signal::Less);
    }

    #[test]
    fn test_unrecognized_symbol_is_unknown() {
        assert_eq!(Signal::from_symbol("MAYBE"), Signal::Unknown);
        assert_eq!(Signal::from_symbol(""), Signal::Unknown);
        assert_eq!(Signal::from_symbol("—"), Signal::Unknown);
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(Attribute::from_name("HP"), Some(Attribute::Hp));
        assert_eq!(Attribute::from_name("weapons"), Some(Attribute::Weapons));
        assert_eq!(Attribute::from_name("Boss Name"), None);
    }

    #[test]
    fn test_default_is_all_unknown() {
        let fb = Feedback::new();
        for attr in Attribute::ALL {
            assert_eq!(fb.get(attr), Signal::Unknown);
        }
        assert!(!fb.is_all_equal());
    }

    #[test]
    fn test_all_equal() {
        assert!(Feedback::all_equal().is_all_equal());

        let almost = Feedback::all_equal().with(Attribute::Hp, Signal::Greater);
        assert!(!almost.is_all_equal());
    }

    #[test]
    fn test_insert_symbol() {
        let mut fb = Feedback::new();
        fb.insert_symbol("HP", "GREATER");
        fb.insert_symbol("Resistance", "CLOSE");
        fb.insert_symbol("Boss Name", "EQUAL"); // ignored
        assert_eq!(fb.hp, Signal::Greater);
        assert_eq!(fb.resistance, Signal::Close);
        assert_eq!(fb.weapons, Signal::Unknown);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut fb = Feedback::new();
        fb.set(Attribute::Immunity, Signal::Different);
        assert_eq!(fb.get(Attribute::Immunity), Signal::Different);
        assert_eq!(fb.immunity, Signal::Different);
    }
}
