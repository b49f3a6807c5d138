//! Listing-title match scoring against a card fingerprint.
//!
//! Produces a soft weighted confidence in [0.0, 1.0] rather than a hard
//! filter: no single failing component disqualifies a match, and callers
//! apply their own acceptance threshold (0.5 in the reference pipeline).
//! An ambiguous listing surfaces as a low score, not an error.

use crate::models::Fingerprint;
use crate::vocab::{has_parallel_keyword, AUTO_KEYWORDS, GRADE_PATTERNS, SEASON_RANGE_RE};

// ---------------------------------------------------------------------------
// MatchWeights
// ---------------------------------------------------------------------------

/// Per-component weights of the match score. The defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub player: f64,
    pub year: f64,
    pub set: f64,
    pub parallel: f64,
    pub autograph: f64,
    pub grade: f64,
    pub numbered: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            player: 0.30,
            year: 0.15,
            set: 0.20,
            parallel: 0.15,
            autograph: 0.10,
            grade: 0.05,
            numbered: 0.05,
        }
    }
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// Configurable title/fingerprint match scorer.
///
/// The fuzzy floor (0.6) is a reference constant: downstream learned-title
/// data is calibrated against it, so override it only deliberately.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: MatchWeights,
    fuzzy_floor: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            fuzzy_floor: 0.6,
        }
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the component weights.
    pub fn weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the similarity ratio below which a fuzzy comparison contributes
    /// nothing.
    pub fn fuzzy_floor(mut self, floor: f64) -> Self {
        self.fuzzy_floor = floor;
        self
    }

    /// Score 0.0-1.0 how well a listing title matches a card fingerprint.
    pub fn score(&self, title: &str, fingerprint: &Fingerprint) -> f64 {
        if title.is_empty() {
            return 0.0;
        }

        let title_lower = title.to_lowercase();
        let w = &self.weights;
        let mut score = 0.0;

        // Player name
        if !fingerprint.player.is_empty() {
            score += w.player * self.fuzzy_match(&fingerprint.player, title);
        }

        // Year: exact digits, or season-range notation ("2024-25") whose
        // two-digit tail matches the year.
        if let Some(year) = fingerprint.year {
            if title.contains(&year.to_string()) {
                score += w.year;
            } else {
                let short_year = format!("{:02}", year.rem_euclid(100));
                let range_hit = SEASON_RANGE_RE
                    .captures_iter(title)
                    .any(|caps| caps[1] == short_year);
                if range_hit {
                    score += w.year;
                }
            }
        }

        // Set name
        if !fingerprint.set_name.is_empty() {
            score += w.set * self.fuzzy_match(&fingerprint.set_name, title);
        }

        // Parallel: a wanted variant is fuzzy-matched. For a base card the
        // absence of any parallel keyword is weak positive evidence, while a
        // present one is active evidence of a different variant.
        if fingerprint.wants_parallel() {
            score += w.parallel * self.fuzzy_match(&fingerprint.parallel, title);
        } else if has_parallel_keyword(&title_lower) {
            score -= w.parallel * 0.5;
        } else {
            score += w.parallel * 0.5;
        }

        // Autograph: contrary evidence in either direction is subtracted,
        // not just withheld.
        let has_auto = AUTO_KEYWORDS.iter().any(|kw| title_lower.contains(kw));
        if fingerprint.is_autograph == has_auto {
            if has_auto {
                score += w.autograph;
            }
        } else {
            score -= w.autograph * 0.5;
        }

        // Grade: exact substring, or 80% credit ignoring spacing
        // ("PSA10" vs "PSA 10"). A graded title against a raw fingerprint is
        // a different asset and is penalized.
        if fingerprint.wants_grade() {
            let grade_lower = fingerprint.grade.to_lowercase();
            if title_lower.contains(&grade_lower) {
                score += w.grade;
            } else if title_lower
                .replace(' ', "")
                .contains(&grade_lower.replace(' ', ""))
            {
                score += w.grade * 0.8;
            }
        } else if GRADE_PATTERNS.iter().any(|(pat, _)| pat.is_match(&title_lower)) {
            score -= w.grade * 0.5;
        }

        // Numbering: "/25" or "#25" verbatim is a strong signal; bare digits
        // anywhere could be coincidental and earn half.
        if let Some(numbered) = fingerprint.numbered_to {
            if title.contains(&format!("/{}", numbered)) || title.contains(&format!("#{}", numbered))
            {
                score += w.numbered;
            } else if title.contains(&numbered.to_string()) {
                score += w.numbered * 0.5;
            }
        }

        // The autograph penalty can push the sum slightly negative.
        score.clamp(0.0, 1.0)
    }

    /// Three-tier fuzzy presence check of `needle` in `haystack`:
    /// literal substring (1.0), every word of a multi-word needle present
    /// (0.9, handles reordering/abbreviation), else the sequence similarity
    /// ratio when it clears the floor.
    fn fuzzy_match(&self, needle: &str, haystack: &str) -> f64 {
        let needle_lower = needle.to_lowercase();
        let needle_lower = needle_lower.trim();
        let haystack_lower = haystack.to_lowercase();

        if haystack_lower.contains(needle_lower) {
            return 1.0;
        }

        let words: Vec<&str> = needle_lower.split_whitespace().collect();
        if words.len() > 1 && words.iter().all(|word| haystack_lower.contains(word)) {
            return 0.9;
        }

        let ratio = sequence_ratio(needle_lower, &haystack_lower);
        if ratio > self.fuzzy_floor {
            ratio
        } else {
            0.0
        }
    }
}

/// Score a title against a fingerprint with the default weights and floor.
pub fn score_title_match(title: &str, fingerprint: &Fingerprint) -> f64 {
    Matcher::default().score(title, fingerprint)
}

// ---------------------------------------------------------------------------
// Sequence similarity
// ---------------------------------------------------------------------------

/// Normalized sequence similarity `2 * lcs(a, b) / (|a| + |b|)` over chars.
fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 0.0;
    }

    // LCS length, two-row DP.
    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut curr = vec![0usize; b_chars.len() + 1];
    for &ca in &a_chars {
        for (j, &cb) in b_chars.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    2.0 * prev[b_chars.len()] as f64 / total as f64
}
