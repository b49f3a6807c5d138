use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceObservation — Single accepted price point for a portfolio card
// ---------------------------------------------------------------------------

/// One accepted price point. Immutable once created; the ordered per-card
/// sequence is the input to the trend engine (append-only history).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceObservation {
    pub price: f64,
    pub source: String,
    pub recorded_date: NaiveDate,
    pub sale_type: Option<String>,
    pub title: Option<String>,
    #[serde(default = "default_confidence")]
    pub match_confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

impl PriceObservation {
    /// A manually-entered or pre-verified observation (confidence 1.0).
    pub fn new(price: f64, source: impl Into<String>, recorded_date: NaiveDate) -> Self {
        Self {
            price,
            source: source.into(),
            recorded_date,
            sale_type: None,
            title: None,
            match_confidence: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Momentum / Signal
// ---------------------------------------------------------------------------

/// Short-window vs long-window moving-average divergence direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Momentum {
    InsufficientData,
    Rising,
    Falling,
    Stable,
}

/// Trading signal for an existing holding. There is deliberately no BUY at
/// this layer: a holding already exists by definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Hold,
    Sell,
}

// ---------------------------------------------------------------------------
// TrendResult — Derived trend/signal snapshot, never persisted
// ---------------------------------------------------------------------------

/// Output of the trend engine: recomputed on every query from the full price
/// history plus the purchase price/date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TrendResult {
    pub current_price: Option<f64>,
    pub ma_7: Option<f64>,
    pub ma_30: Option<f64>,
    pub momentum: Momentum,
    pub signal: Signal,
    pub signal_reason: String,
    pub gain_loss: Option<f64>,
    pub gain_loss_pct: Option<f64>,
    pub price_count: usize,
}
