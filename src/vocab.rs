//! Static vocabulary tables for listing-title parsing and matching.
//!
//! The dictionaries are scanned as case-insensitive substrings. Scan order
//! matters: manufacturers use fixed declaration order, while sets and
//! parallels are re-sorted longest-first so a longer, more specific name
//! ("national treasures") wins over a shorter one it contains. Grade patterns
//! are checked in declaration order; the 9.5 variants must precede the bare-9
//! patterns.

use std::cmp::Reverse;

use once_cell::sync::Lazy;
use regex::Regex;

/// Known card brands, in scan priority order.
pub const MANUFACTURERS: &[&str] = &[
    "panini",
    "topps",
    "leaf",
    "donruss",
    "bowman",
    "upper deck",
    "hoops",
    "fleer",
    "sage",
    "press pass",
    "sp authentic",
    "immaculate",
    "national treasures",
];

/// Known product lines.
pub const SETS: &[&str] = &[
    "prizm",
    "contenders",
    "crown royale",
    "mosaic",
    "select",
    "optic",
    "chronicles",
    "donruss",
    "elite",
    "absolute",
    "spectra",
    "flawless",
    "immaculate",
    "national treasures",
    "noir",
    "one and one",
    "court kings",
    "revolution",
    "status",
    "recon",
    "origins",
    "obsidian",
    "certified",
    "hoops",
    "prestige",
    "score",
    "playoff",
    "luminance",
    "illusions",
    "flux",
    "zenith",
    "clearly donruss",
    "clearly rated",
];

/// Known parallel/finish variants. `"base"` is present for completeness but
/// excluded from every scan: the absence of any other parallel keyword is what
/// identifies a base card.
pub const PARALLELS: &[&str] = &[
    "base",
    "silver",
    "gold",
    "red",
    "blue",
    "green",
    "orange",
    "purple",
    "pink",
    "black",
    "white",
    "yellow",
    "bronze",
    "platinum",
    "emerald",
    "ruby",
    "sapphire",
    "teal",
    "neon green",
    "neon orange",
    "neon pink",
    "pink shimmer",
    "cracked ice",
    "mojo",
    "hyper",
    "holo",
    "ice",
    "camo",
    "tie-dye",
    "tiger stripe",
    "snakeskin",
    "peacock",
    "disco",
    "fast break",
    "choice",
    "scope",
    "wave",
    "laser",
    "no huddle",
    "press proof",
    "rated rookie",
    "downtown",
];

pub const AUTO_KEYWORDS: &[&str] = &["auto", "autograph", "autographed", "on card auto", "on-card auto"];

pub const ROOKIE_KEYWORDS: &[&str] = &["rc", "rookie", "rookie card"];

/// Grading patterns paired with their canonical label, in priority order.
/// The bare-9 patterns use `(?:$|[^.])` after the digit so they cannot claim
/// the leading 9 of a "9.5"; "gem mint" is treated as PSA 10.
pub static GRADE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"psa\s*10", "PSA 10"),
        (r"psa\s*9", "PSA 9"),
        (r"psa\s*8", "PSA 8"),
        (r"psa\s*7", "PSA 7"),
        (r"bgs\s*10", "BGS 10"),
        (r"bgs\s*9\.?5", "BGS 9.5"),
        (r"bgs\s*9(?:$|[^.])", "BGS 9"),
        (r"sgc\s*10", "SGC 10"),
        (r"sgc\s*9\.?5", "SGC 9.5"),
        (r"sgc\s*9(?:$|[^.])", "SGC 9"),
        (r"gem\s*mint", "PSA 10"),
    ]
    .iter()
    .map(|(pat, label)| (Regex::new(pat).unwrap(), *label))
    .collect()
});

/// First 4-digit year 2000-2099, optionally in season-range form ("2024-25").
pub static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(20\d{2})(?:-\d{2})?\b").unwrap());

/// Serial numbering denominator: "/25", "#25" or "numbered 25".
pub static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:/|#|numbered\s*)(\d+)").unwrap());

/// Season-range year notation ("2024-25"); the capture is the two-digit tail.
pub static SEASON_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}-(\d{2})\b").unwrap());

/// Sets sorted longest-first for the parser scan. The sort is stable, so
/// equal-length entries keep their declaration order.
pub static SETS_BY_LENGTH: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut sets = SETS.to_vec();
    sets.sort_by_key(|s| Reverse(s.len()));
    sets
});

/// Non-base parallels sorted longest-first for the parser scan.
pub static PARALLELS_BY_LENGTH: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut parallels: Vec<&str> = PARALLELS.iter().copied().filter(|p| *p != "base").collect();
    parallels.sort_by_key(|p| Reverse(p.len()));
    parallels
});

/// Whether any non-base parallel keyword appears in the (lowercased) text.
pub fn has_parallel_keyword(text_lower: &str) -> bool {
    PARALLELS
        .iter()
        .any(|p| *p != "base" && text_lower.contains(p))
}

/// Per-word capitalization: the first letter of every word (a run following
/// any non-letter) is uppercased, the rest lowercased. "tie-dye" becomes
/// "Tie-Dye", "upper deck" becomes "Upper Deck".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
