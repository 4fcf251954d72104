//! Boss catalog loading and normalization.
//!
//! The catalog is a read-only list of boss encounters loaded from a JSON
//! file. Records in the wild are inconsistent, so every field has a
//! default and a record is never rejected: a missing name falls back to
//! the slug, missing category lists are empty, missing HP is zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors from catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether an encounter must be fought to finish the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Optionality {
    #[default]
    Required,
    Optional,
}

impl Optionality {
    /// Parse the dataset's `"required"`/`"optional"` strings; anything
    /// unrecognized counts as required.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("optional") {
            Optionality::Optional
        } else {
            Optionality::Required
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Optionality::Optional)
    }
}

impl fmt::Display for Optionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optionality::Required => write!(f, "required"),
            Optionality::Optional => write!(f, "optional"),
        }
    }
}

/// A boss encounter. Identity is the slug (or name); the category lists
/// matter only by their cardinality as far as the game's feedback goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub slug: String,
    pub hp: u32,
    pub weapons: Vec<String>,
    pub resistance: Vec<String>,
    pub weakness: Vec<String>,
    pub immunity: Vec<String>,
    pub optional: Optionality,
}

impl Boss {
    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn resistance_count(&self) -> usize {
        self.resistance.len()
    }

    pub fn weakness_count(&self) -> usize {
        self.weakness.len()
    }

    pub fn immunity_count(&self) -> usize {
        self.immunity.len()
    }

    pub fn is_optional(&self) -> bool {
        self.optional.is_optional()
    }
}

impl fmt::Display for Boss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HP {} | Wep {} | Res {} | Weak {} | Imm {} | {})",
            self.name,
            self.hp,
            self.weapon_count(),
            self.resistance_count(),
            self.weakness_count(),
            self.immunity_count(),
            self.optional
        )
    }
}

/// Raw catalog record as it appears on disk. Every field is optional;
/// normalization happens in the conversion to [`Boss`].
#[derive(Debug, Clone, Deserialize)]
pub struct BossRecord {
    #[serde(default)]
    pub slug: String,
    /// Some datasets use `"boss"` instead of `"name"`.
    #[serde(default, alias = "boss")]
    pub name: String,
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub weapons: Vec<String>,
    #[serde(default)]
    pub resistance: Vec<String>,
    #[serde(default)]
    pub weakness: Vec<String>,
    #[serde(default)]
    pub immunity: Vec<String>,
    /// `"required"` or `"optional"`; any other value means required.
    #[serde(default)]
    pub optional: String,
}

impl From<BossRecord> for Boss {
    fn from(record: BossRecord) -> Self {
        let name = if !record.name.is_empty() {
            record.name
        } else if !record.slug.is_empty() {
            record.slug.clone()
        } else {
            "Unknown".to_string()
        };

        Boss {
            name,
            slug: record.slug,
            hp: record.hp,
            weapons: record.weapons,
            resistance: record.resistance,
            weakness: record.weakness,
            immunity: record.immunity,
            optional: Optionality::from_label(&record.optional),
        }
    }
}

/// Catalog files come in two shapes: a plain array of records, or an
/// object keyed by slug (the indexed dataset).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<BossRecord>),
    Map(BTreeMap<String, BossRecord>),
}

/// Parse a catalog from JSON text.
pub fn bosses_from_json(data: &str) -> Result<Vec<Boss>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(data)?;
    let records = match file {
        CatalogFile::List(records) => records,
        CatalogFile::Map(map) => map.into_values().collect(),
    };
    Ok(records.into_iter().map(Boss::from).collect())
}

/// Load a catalog from a JSON file on disk.
pub fn load_bosses(path: impl AsRef<Path>) -> Result<Vec<Boss>, CatalogError> {
    let data = std::fs::read_to_string(path)?;
    bosses_from_json(&data)
}
