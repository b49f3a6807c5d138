//! Free-text listing-title parsing.
//!
//! Extracts structured card fields from one marketplace title via the
//! ordered dictionaries and regexes in [`vocab`](crate::vocab). Matching is
//! case-insensitive throughout. Every field degrades to "not detected"
//! rather than a default guess, and malformed input never errors, so the
//! same title always yields the same parse.

use crate::models::ParsedTitle;
use crate::vocab::{
    title_case, AUTO_KEYWORDS, GRADE_PATTERNS, MANUFACTURERS, NUMBERED_RE, PARALLELS_BY_LENGTH,
    ROOKIE_KEYWORDS, SETS_BY_LENGTH, YEAR_RE,
};

/// Parse a listing title into structured card fields.
///
/// `player_name_hint` is attached verbatim: the player name is supplied by
/// the caller, not extracted from text. An empty title yields an all-empty
/// result (with the hint still attached).
pub fn parse_title(title: &str, player_name_hint: Option<&str>) -> ParsedTitle {
    let mut result = ParsedTitle {
        raw_title: title.to_string(),
        player_name: player_name_hint.map(|p| p.to_string()),
        ..ParsedTitle::default()
    };

    if title.is_empty() {
        return result;
    }

    let title_lower = title.to_lowercase();

    // Year: first 4-digit group only; a season range like "2024-25" still
    // yields 2024, and any later year tokens are ignored.
    if let Some(caps) = YEAR_RE.captures(title) {
        result.card_year = caps[1].parse().ok();
    }

    // Manufacturer: fixed declaration order, first substring match wins.
    for mfr in MANUFACTURERS {
        if title_lower.contains(mfr) {
            result.manufacturer = Some(title_case(mfr));
            break;
        }
    }

    // Set name: longest first, so "national treasures" is preferred over a
    // shorter set it happens to contain.
    for set in SETS_BY_LENGTH.iter() {
        if title_lower.contains(set) {
            result.set_name = Some(title_case(set));
            break;
        }
    }

    // Parallel: longest first; "base" is never scanned for, its absence is
    // the caller's evidence of a base card.
    for parallel in PARALLELS_BY_LENGTH.iter() {
        if title_lower.contains(parallel) {
            result.parallel = Some(title_case(parallel));
            break;
        }
    }

    // Serial numbering denominator ("/25", "#25", "numbered 25").
    if let Some(caps) = NUMBERED_RE.captures(title) {
        if let Ok(to) = caps[1].parse() {
            result.is_numbered = true;
            result.numbered_to = Some(to);
        }
    }

    if AUTO_KEYWORDS.iter().any(|kw| title_lower.contains(kw)) {
        result.is_autograph = true;
    }

    if ROOKIE_KEYWORDS.iter().any(|kw| title_lower.contains(kw)) {
        result.is_rookie = true;
    }

    // Grade: priority order, first pattern match wins.
    for (pattern, label) in GRADE_PATTERNS.iter() {
        if pattern.is_match(&title_lower) {
            result.grade = Some((*label).to_string());
            break;
        }
    }

    result
}
