//! Aggregate portfolio valuation across holdings.

use serde::{Deserialize, Serialize};

use crate::models::{Signal, TrendResult};

// ---------------------------------------------------------------------------
// PortfolioSummary
// ---------------------------------------------------------------------------

/// Portfolio-level totals consumed by the reporting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PortfolioSummary {
    pub total_cards: usize,
    pub total_invested: f64,
    pub total_current: f64,
    pub unrealized_gain_loss: f64,
    pub unrealized_pct: f64,
    pub hold_count: usize,
    pub sell_count: usize,
}

impl PortfolioSummary {
    /// Summarize holdings as `(purchase_price, trends)` pairs.
    ///
    /// A holding with no current market price is valued at its purchase
    /// price, so unpriced cards do not read as total losses.
    pub fn from_holdings<'a, I>(holdings: I) -> Self
    where
        I: IntoIterator<Item = (Option<f64>, &'a TrendResult)>,
    {
        let mut total_cards = 0;
        let mut total_invested = 0.0;
        let mut total_current = 0.0;
        let mut hold_count = 0;
        let mut sell_count = 0;

        for (purchase_price, trends) in holdings {
            total_cards += 1;
            let purchase = purchase_price.unwrap_or(0.0);
            let current = trends.current_price.unwrap_or(purchase);
            total_invested += purchase;
            total_current += current;
            match trends.signal {
                Signal::Hold => hold_count += 1,
                Signal::Sell => sell_count += 1,
            }
        }

        let unrealized = total_current - total_invested;
        let unrealized_pct = if total_invested > 0.0 {
            round1(unrealized / total_invested * 100.0)
        } else {
            0.0
        };

        Self {
            total_cards,
            total_invested: round2(total_invested),
            total_current: round2(total_current),
            unrealized_gain_loss: round2(unrealized),
            unrealized_pct,
            hold_count,
            sell_count,
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
