use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CardwatchError, Result};

/// Sentinel meaning "no special parallel/color variant".
pub const BASE_PARALLEL: &str = "Base";

/// Sentinel meaning "ungraded".
pub const RAW_GRADE: &str = "Raw";

// ---------------------------------------------------------------------------
// CardRecord — Portfolio card row as consumed from the external store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CardRecord {
    pub id: i64,
    pub player_name: String,
    pub card_year: Option<i32>,
    pub manufacturer: Option<String>,
    pub set_name: Option<String>,
    pub card_number: Option<String>,
    pub parallel: Option<String>,
    pub serial_number: Option<u32>,
    pub numbered_to: Option<u32>,
    #[serde(default)]
    pub is_autograph: bool,
    #[serde(default)]
    pub is_rookie: bool,
    pub grade: Option<String>,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
}

impl CardRecord {
    /// Human-readable one-line description of the card, e.g.
    /// `"2024 Panini Prizm Silver #125 3/25 Auto RC PSA 10"`.
    pub fn description(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(year) = self.card_year {
            parts.push(year.to_string());
        }
        if let Some(mfr) = self.manufacturer.as_deref().filter(|m| !m.is_empty()) {
            parts.push(mfr.to_string());
        }
        if let Some(set) = self.set_name.as_deref().filter(|s| !s.is_empty()) {
            parts.push(set.to_string());
        }
        if let Some(par) = self.parallel.as_deref() {
            if !par.is_empty() && par != BASE_PARALLEL {
                parts.push(par.to_string());
            }
        }
        if let Some(num) = self.card_number.as_deref().filter(|n| !n.is_empty()) {
            parts.push(format!("#{}", num));
        }
        if let Some(to) = self.numbered_to {
            match self.serial_number {
                Some(serial) => parts.push(format!("{}/{}", serial, to)),
                None => parts.push(format!("?/{}", to)),
            }
        }
        if self.is_autograph {
            parts.push("Auto".to_string());
        }
        if self.is_rookie {
            parts.push("RC".to_string());
        }
        if let Some(grade) = self.grade.as_deref() {
            if !grade.is_empty() && grade != RAW_GRADE {
                parts.push(grade.to_string());
            }
        }

        if parts.is_empty() {
            "Unknown Card".to_string()
        } else {
            parts.join(" ")
        }
    }
}

// ---------------------------------------------------------------------------
// Fingerprint — Canonical identity of one physical card variant
// ---------------------------------------------------------------------------

/// Canonical, comparable identity of a specific card variant.
///
/// `parallel` and `grade` are never empty: they carry the `"Base"` / `"Raw"`
/// sentinels when the card has no variant or no grade, so "no variant" stays
/// distinguishable from "unknown". Immutable value object, built on demand
/// from a stored [`CardRecord`] right before a search/match operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Fingerprint {
    pub player: String,
    pub year: Option<i32>,
    pub manufacturer: String,
    pub set_name: String,
    pub parallel: String,
    pub numbered_to: Option<u32>,
    pub is_autograph: bool,
    pub is_rookie: bool,
    pub grade: String,
}

impl Fingerprint {
    /// Build a fingerprint from a stored card record.
    ///
    /// Errors with [`CardwatchError::InvalidArgument`] when the record has an
    /// empty player name; every other missing field degrades to its neutral
    /// value or sentinel.
    pub fn from_record(card: &CardRecord) -> Result<Self> {
        let player = card.player_name.trim();
        if player.is_empty() {
            return Err(CardwatchError::InvalidArgument(format!(
                "card {} has no player name",
                card.id
            )));
        }

        Ok(Self {
            player: player.to_string(),
            year: card.card_year,
            manufacturer: card.manufacturer.clone().unwrap_or_default(),
            set_name: card.set_name.clone().unwrap_or_default(),
            parallel: card
                .parallel
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| BASE_PARALLEL.to_string()),
            numbered_to: card.numbered_to,
            is_autograph: card.is_autograph,
            is_rookie: card.is_rookie,
            grade: card
                .grade
                .clone()
                .filter(|g| !g.is_empty())
                .unwrap_or_else(|| RAW_GRADE.to_string()),
        })
    }

    /// Whether the fingerprint names a specific (non-base) parallel.
    pub fn wants_parallel(&self) -> bool {
        self.parallel != BASE_PARALLEL
    }

    /// Whether the fingerprint names a grade (not raw).
    pub fn wants_grade(&self) -> bool {
        self.grade != RAW_GRADE
    }
}
