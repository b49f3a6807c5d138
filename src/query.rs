//! Search-query construction from a card fingerprint.
//!
//! A caller retries a failed/empty search with progressively looser terms by
//! walking [`QueryLevel::cascade`]: try the precise query first, broaden on
//! zero accepted matches, stop at the first level that yields one. Each level
//! is a strict token-superset of the next-broader level, in the fixed order
//! player, year, set, parallel, auto flag, grade, numbering. Tokens are
//! joined with single spaces and never quoted or escaped; query-string
//! encoding belongs to the receiving search capability.

use serde::{Deserialize, Serialize};

use crate::models::Fingerprint;

// ---------------------------------------------------------------------------
// QueryLevel
// ---------------------------------------------------------------------------

/// Specificity level of a marketplace search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryLevel {
    /// All details: parallel, auto flag, grade, serial numbering.
    Precise,
    /// Set-level: drops grade and numbering, keeps the parallel.
    SetLevel,
    /// Broad: player, year and set only.
    Broad,
}

impl QueryLevel {
    /// Levels in retry order, most precise first.
    pub fn cascade() -> [QueryLevel; 3] {
        [QueryLevel::Precise, QueryLevel::SetLevel, QueryLevel::Broad]
    }

    /// Numeric level (1 = most precise, 3 = broadest).
    pub fn as_number(self) -> u8 {
        match self {
            QueryLevel::Precise => 1,
            QueryLevel::SetLevel => 2,
            QueryLevel::Broad => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Query construction
// ---------------------------------------------------------------------------

/// Build a marketplace search string for the fingerprint at the given level.
///
/// Absent/empty fields are skipped, never emitted as empty tokens; the
/// `"Base"` parallel and `"Raw"` grade sentinels are likewise never emitted.
pub fn build_query(fingerprint: &Fingerprint, level: QueryLevel) -> String {
    let mut parts: Vec<String> = vec![fingerprint.player.clone()];

    if let Some(year) = fingerprint.year {
        parts.push(year.to_string());
    }

    if !fingerprint.set_name.is_empty() {
        parts.push(fingerprint.set_name.clone());
    }

    if level != QueryLevel::Broad && fingerprint.wants_parallel() {
        parts.push(fingerprint.parallel.clone());
    }

    if level == QueryLevel::Precise {
        if fingerprint.is_autograph {
            parts.push("auto".to_string());
        }
        if fingerprint.wants_grade() {
            parts.push(fingerprint.grade.clone());
        }
        if let Some(numbered) = fingerprint.numbered_to {
            parts.push(format!("/{}", numbered));
        }
    }

    parts.join(" ")
}

/// Player-only query for search backends that index by subject and filter
/// client-side.
pub fn player_query(fingerprint: &Fingerprint) -> String {
    fingerprint.player.clone()
}
