//! Price trend analysis and HOLD/SELL signals for portfolio cards.
//!
//! A long-horizon collectible-asset heuristic, not a trading algorithm: the
//! 30-day minimum hold and the falling-but-profitable override guard against
//! reacting to short-term noise, and there is no BUY signal because a
//! holding already exists. "Now" is always caller-supplied; nothing here
//! reads the clock.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Momentum, PriceObservation, Signal, TrendResult};

// ---------------------------------------------------------------------------
// TrendConfig
// ---------------------------------------------------------------------------

/// Thresholds of the trend engine. The defaults are the reference behavior;
/// downstream consumers are calibrated against them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendConfig {
    /// Momentum divergence beyond which the trend counts as rising/falling.
    pub momentum_band: f64,
    /// Minimum holding period before any non-HOLD signal.
    pub min_hold_days: i64,
    /// Multiple of the purchase price above which a falling trend still
    /// triggers a profit-protecting SELL.
    pub profit_lock: f64,
    /// Minimum daily points before any non-HOLD signal.
    pub min_signal_points: usize,
    /// Short moving-average window (daily points).
    pub short_window: usize,
    /// Long moving-average window (daily points).
    pub long_window: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            momentum_band: 0.10,
            min_hold_days: 30,
            profit_lock: 1.3,
            min_signal_points: 3,
            short_window: 7,
            long_window: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// TrendEngine
// ---------------------------------------------------------------------------

/// Computes a [`TrendResult`] from a card's full price history.
#[derive(Debug, Clone, Default)]
pub struct TrendEngine {
    config: TrendConfig,
}

impl TrendEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: TrendConfig) -> Self {
        self.config = config;
        self
    }

    /// Calculate moving averages, momentum and the trading signal.
    ///
    /// Observations are grouped by calendar day and averaged within a day to
    /// smooth multiple same-day listings. Sparse history degrades gracefully:
    /// partial windows for the reported averages, a first-vs-last comparison
    /// for momentum when the 7/30-point windows are not fully populated, and
    /// HOLD whenever there is not enough evidence to say anything else.
    pub fn calculate(
        &self,
        history: &[PriceObservation],
        purchase_price: Option<f64>,
        purchase_date: Option<NaiveDate>,
        now: NaiveDate,
    ) -> TrendResult {
        let cfg = &self.config;

        if history.is_empty() {
            return TrendResult {
                current_price: None,
                ma_7: None,
                ma_30: None,
                momentum: Momentum::InsufficientData,
                signal: Signal::Hold,
                signal_reason: "No price data yet".to_string(),
                gain_loss: None,
                gain_loss_pct: None,
                price_count: 0,
            };
        }

        // One point per calendar day: the mean of that day's observations.
        let mut by_day: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
        for obs in history {
            by_day.entry(obs.recorded_date).or_default().push(obs.price);
        }
        let daily_avgs: Vec<f64> = by_day
            .values()
            .map(|prices| prices.iter().sum::<f64>() / prices.len() as f64)
            .collect();

        let current_price = daily_avgs.last().copied();

        let ma_7 = trailing_mean(&daily_avgs, cfg.short_window);
        let ma_30 = trailing_mean(&daily_avgs, cfg.long_window);

        let momentum = self.classify_momentum(&daily_avgs);

        let purchase = purchase_price.filter(|p| *p > 0.0);
        let days_held = purchase_date
            .map(|pd| (now - pd).num_days())
            .unwrap_or(0);

        let (signal, signal_reason) = if daily_avgs.len() < cfg.min_signal_points {
            (Signal::Hold, "Insufficient price data".to_string())
        } else if days_held < cfg.min_hold_days {
            (
                Signal::Hold,
                format!("Held {} days, too early to signal", days_held),
            )
        } else {
            match momentum {
                Momentum::Falling => match (current_price, purchase) {
                    (Some(current), Some(bought)) if current < bought => (
                        Signal::Sell,
                        "Falling price below purchase, cut losses".to_string(),
                    ),
                    (Some(current), Some(bought)) if current > bought * cfg.profit_lock => (
                        Signal::Sell,
                        "Falling price, still profitable, lock in gains".to_string(),
                    ),
                    _ => (
                        Signal::Hold,
                        "Falling but near purchase price, monitor".to_string(),
                    ),
                },
                Momentum::Rising => (Signal::Hold, "Rising trend, hold for gains".to_string()),
                _ => (Signal::Hold, "Stable price, no urgency".to_string()),
            }
        };

        let (gain_loss, gain_loss_pct) = match (current_price, purchase) {
            (Some(current), Some(bought)) => {
                let diff = current - bought;
                (Some(round2(diff)), Some(round1(diff / bought * 100.0)))
            }
            _ => (None, None),
        };

        TrendResult {
            current_price,
            ma_7: ma_7.map(round2),
            ma_30: ma_30.map(round2),
            momentum,
            signal,
            signal_reason,
            gain_loss,
            gain_loss_pct,
            price_count: history.len(),
        }
    }

    /// Momentum from short-vs-long MA divergence when both windows are fully
    /// populated; otherwise first-vs-last over whatever daily points exist
    /// (at least two, with a positive baseline).
    fn classify_momentum(&self, daily_avgs: &[f64]) -> Momentum {
        let cfg = &self.config;

        let ma_short = full_window_mean(daily_avgs, cfg.short_window);
        let ma_long = full_window_mean(daily_avgs, cfg.long_window);

        if let (Some(short), Some(long)) = (ma_short, ma_long) {
            if long > 0.0 {
                return self.band((short - long) / long);
            }
        }

        if daily_avgs.len() >= 2 {
            let first = daily_avgs[0];
            let last = daily_avgs[daily_avgs.len() - 1];
            if first > 0.0 {
                return self.band((last - first) / first);
            }
        }

        Momentum::InsufficientData
    }

    fn band(&self, pct_diff: f64) -> Momentum {
        if pct_diff > self.config.momentum_band {
            Momentum::Rising
        } else if pct_diff < -self.config.momentum_band {
            Momentum::Falling
        } else {
            Momentum::Stable
        }
    }
}

/// Calculate trends with the default thresholds.
pub fn calculate_trends(
    history: &[PriceObservation],
    purchase_price: Option<f64>,
    purchase_date: Option<NaiveDate>,
    now: NaiveDate,
) -> TrendResult {
    TrendEngine::default().calculate(history, purchase_price, purchase_date, now)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Mean of the last `n` points, or of however many exist if fewer.
fn trailing_mean(points: &[f64], n: usize) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let start = points.len().saturating_sub(n);
    let window = &points[start..];
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// Mean of the last `n` points only when at least `n` exist.
fn full_window_mean(points: &[f64], n: usize) -> Option<f64> {
    if points.len() < n {
        return None;
    }
    trailing_mean(points, n)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
