use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing — One marketplace hit as returned by a listing source
// ---------------------------------------------------------------------------

/// A single marketplace listing returned by a [`ListingSource`](crate::pipeline::ListingSource).
///
/// A listing without a price is skippable evidence, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Listing {
    pub title: String,
    pub price: Option<f64>,
    pub sale_type: Option<String>,
    pub date_sold: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// ParsedTitle — Structured fields extracted from one listing title
// ---------------------------------------------------------------------------

/// The fields the parser could extract from one free-text listing title.
///
/// Every field is evidence, not ground truth: `None` means "not detected",
/// never a default guess. `raw_title` is the natural dedup key when the
/// parse is persisted to a title-learning cache. `player_name` is a
/// caller-supplied hint; titles rarely carry reliable player-name boundaries,
/// so it is not parsed from text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ParsedTitle {
    pub raw_title: String,
    pub player_name: Option<String>,
    pub card_year: Option<i32>,
    pub manufacturer: Option<String>,
    pub set_name: Option<String>,
    pub parallel: Option<String>,
    #[serde(default)]
    pub is_numbered: bool,
    pub numbered_to: Option<u32>,
    #[serde(default)]
    pub is_autograph: bool,
    #[serde(default)]
    pub is_rookie: bool,
    pub grade: Option<String>,
}

impl ParsedTitle {
    /// Non-destructive upsert merge, the semantics the title-learning sink
    /// applies: fill absent fields from `other`, OR the boolean flags, and
    /// never overwrite a previously-known field with `None`.
    pub fn merge(&mut self, other: &ParsedTitle) {
        fn fill<T: Clone>(slot: &mut Option<T>, incoming: &Option<T>) {
            if slot.is_none() {
                if let Some(v) = incoming {
                    *slot = Some(v.clone());
                }
            }
        }

        fill(&mut self.player_name, &other.player_name);
        fill(&mut self.card_year, &other.card_year);
        fill(&mut self.manufacturer, &other.manufacturer);
        fill(&mut self.set_name, &other.set_name);
        fill(&mut self.parallel, &other.parallel);
        fill(&mut self.numbered_to, &other.numbered_to);
        fill(&mut self.grade, &other.grade);
        self.is_numbered |= other.is_numbered;
        self.is_autograph |= other.is_autograph;
        self.is_rookie |= other.is_rookie;
    }
}
