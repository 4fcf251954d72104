//! Deterministic candidate ranking.
//!
//! A ranking is a full snapshot: every attempt rescoring starts from the
//! whole catalog, so the result is always a pure function of the current
//! restriction state (never incrementally patched).

use crate::catalog::Boss;
use crate::restrictions::Restrictions;
use crate::scoring::{score_boss, ScoreBreakdown, ScoreConfig};
use std::collections::HashSet;

/// One entry of a ranking snapshot.
#[derive(Debug, Clone)]
pub struct RankedBoss {
    pub boss: Boss,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Score and order the catalog against the current restrictions.
///
/// When a whitelist is supplied, bosses whose names are not in it are
/// dropped before scoring — an empty whitelist therefore yields an empty
/// ranking, as does an empty catalog. The sort is stable and descending
/// by composite score, so ties keep catalog order and identical inputs
/// always produce identical output.
pub fn rank(
    catalog: &[Boss],
    restrictions: &Restrictions,
    config: &ScoreConfig,
    whitelist: Option<&HashSet<String>>,
) -> Vec<RankedBoss> {
    let mut entries: Vec<RankedBoss> = catalog
        .iter()
        .filter(|boss| whitelist.map_or(true, |names| names.contains(&boss.name)))
        .map(|boss| {
            let score = score_boss(boss, restrictions, config);
            RankedBoss {
                boss: boss.clone(),
                score: score.composite,
                breakdown: score.breakdown,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries
}
