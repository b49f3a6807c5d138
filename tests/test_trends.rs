//! Unit tests for the price trend engine.

mod common;

use cardwatch::{calculate_trends, Momentum, Signal};
use common::{d, history};

// ---------------------------------------------------------------------------
// Empty and sparse history
// ---------------------------------------------------------------------------

#[test]
fn empty_history_yields_hold_with_no_data() {
    let result = calculate_trends(&[], Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));

    assert_eq!(result.current_price, None);
    assert_eq!(result.ma_7, None);
    assert_eq!(result.ma_30, None);
    assert_eq!(result.momentum, Momentum::InsufficientData);
    assert_eq!(result.signal, Signal::Hold);
    assert_eq!(result.signal_reason, "No price data yet");
    assert_eq!(result.gain_loss, None);
    assert_eq!(result.gain_loss_pct, None);
    assert_eq!(result.price_count, 0);
}

#[test]
fn single_point_reports_price_but_insufficient_momentum() {
    let hist = history(&[("2026-08-01", 12.0)]);
    let result = calculate_trends(&hist, None, None, d("2026-08-07"));

    assert_eq!(result.current_price, Some(12.0));
    assert_eq!(result.ma_7, Some(12.0));
    assert_eq!(result.ma_30, Some(12.0));
    assert_eq!(result.momentum, Momentum::InsufficientData);
    assert_eq!(result.signal, Signal::Hold);
}

#[test]
fn two_points_fall_back_to_first_vs_last_momentum() {
    let hist = history(&[("2026-08-01", 10.0), ("2026-08-02", 12.0)]);
    let result = calculate_trends(&hist, None, None, d("2026-08-07"));

    // A 20% move over two daily points reads as rising even though the
    // 7/30-point windows are not populated.
    assert_eq!(result.momentum, Momentum::Rising);
    assert_eq!(result.signal, Signal::Hold);
    assert_eq!(result.signal_reason, "Insufficient price data");
}

#[test]
fn same_day_observations_average_into_one_daily_point() {
    let hist = history(&[
        ("2026-08-01", 10.0),
        ("2026-08-01", 20.0),
        ("2026-08-02", 18.0),
    ]);
    let result = calculate_trends(&hist, None, None, d("2026-08-07"));

    // Day one aggregates to 15.0; two daily points total.
    assert_eq!(result.current_price, Some(18.0));
    assert_eq!(result.ma_7, Some(16.5));
    assert_eq!(result.price_count, 3);
    assert_eq!(result.momentum, Momentum::Rising);
}

#[test]
fn partial_windows_average_whatever_exists() {
    let hist = history(&[
        ("2026-08-01", 10.0),
        ("2026-08-02", 20.0),
        ("2026-08-03", 30.0),
    ]);
    let result = calculate_trends(&hist, None, None, d("2026-08-07"));

    assert_eq!(result.ma_7, Some(20.0));
    assert_eq!(result.ma_30, Some(20.0));
}

// ---------------------------------------------------------------------------
// Momentum classification
// ---------------------------------------------------------------------------

#[test]
fn small_moves_classify_as_stable() {
    let hist = history(&[
        ("2026-08-01", 10.0),
        ("2026-08-02", 10.2),
        ("2026-08-03", 10.5),
    ]);
    let result = calculate_trends(&hist, None, None, d("2026-08-07"));
    assert_eq!(result.momentum, Momentum::Stable);
}

#[test]
fn zero_baseline_cannot_classify_momentum() {
    let hist = history(&[("2026-08-01", 0.0), ("2026-08-02", 5.0)]);
    let result = calculate_trends(&hist, None, None, d("2026-08-07"));
    assert_eq!(result.momentum, Momentum::InsufficientData);
}

#[test]
fn full_windows_use_moving_average_divergence_over_endpoints() {
    // 30 daily points: a cheap first day, a long plateau at 20, then a final
    // week at 14. The endpoints say rising (5 -> 14); the 7-point average
    // sitting far below the 30-point average says falling. The averages win.
    let mut points: Vec<(String, f64)> = Vec::new();
    points.push(("2026-07-01".to_string(), 5.0));
    for day in 2..=23 {
        points.push((format!("2026-07-{:02}", day), 20.0));
    }
    for day in 24..=30 {
        points.push((format!("2026-07-{:02}", day), 14.0));
    }
    let pairs: Vec<(&str, f64)> = points.iter().map(|(s, p)| (s.as_str(), *p)).collect();
    let hist = history(&pairs);

    let result = calculate_trends(&hist, None, None, d("2026-08-07"));
    assert_eq!(result.momentum, Momentum::Falling);
    assert_eq!(result.ma_7, Some(14.0));
}

// ---------------------------------------------------------------------------
// Signal ladder
// ---------------------------------------------------------------------------

#[test]
fn minimum_hold_period_forces_hold_regardless_of_momentum() {
    // Purchased 5 days before "now", clearly falling prices.
    let hist = history(&[
        ("2026-08-01", 20.0),
        ("2026-08-02", 14.0),
        ("2026-08-03", 8.0),
    ]);
    let result = calculate_trends(&hist, Some(25.0), Some(d("2026-08-02")), d("2026-08-07"));

    assert_eq!(result.momentum, Momentum::Falling);
    assert_eq!(result.signal, Signal::Hold);
    assert_eq!(result.signal_reason, "Held 5 days, too early to signal");
}

#[test]
fn missing_purchase_date_counts_as_zero_days_held() {
    let hist = history(&[
        ("2026-08-01", 10.0),
        ("2026-08-02", 11.0),
        ("2026-08-03", 13.0),
    ]);
    let result = calculate_trends(&hist, Some(10.0), None, d("2026-08-07"));

    assert_eq!(result.signal, Signal::Hold);
    assert_eq!(result.signal_reason, "Held 0 days, too early to signal");
}

#[test]
fn falling_below_purchase_signals_sell_to_cut_losses() {
    let hist = history(&[
        ("2026-08-01", 12.0),
        ("2026-08-02", 10.0),
        ("2026-08-03", 8.0),
    ]);
    let result = calculate_trends(&hist, Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));

    assert_eq!(result.momentum, Momentum::Falling);
    assert_eq!(result.signal, Signal::Sell);
    assert!(result.signal_reason.contains("cut losses"));
}

#[test]
fn falling_but_well_in_profit_signals_sell_to_lock_gains() {
    // Purchase 10.00, current 14.00 (1.4x): the profit-protection override.
    let hist = history(&[
        ("2026-08-01", 20.0),
        ("2026-08-02", 16.0),
        ("2026-08-03", 14.0),
    ]);
    let result = calculate_trends(&hist, Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));

    assert_eq!(result.momentum, Momentum::Falling);
    assert_eq!(result.signal, Signal::Sell);
    assert!(result.signal_reason.contains("lock in gains"));
    assert!(!result.signal_reason.contains("cut losses"));
}

#[test]
fn falling_near_purchase_price_holds_to_monitor() {
    // Current 11.00 on a 10.00 purchase: above water but under the 1.3x lock.
    let hist = history(&[
        ("2026-08-01", 14.0),
        ("2026-08-02", 12.5),
        ("2026-08-03", 11.0),
    ]);
    let result = calculate_trends(&hist, Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));

    assert_eq!(result.momentum, Momentum::Falling);
    assert_eq!(result.signal, Signal::Hold);
    assert!(result.signal_reason.contains("monitor"));
}

#[test]
fn rising_momentum_never_sells() {
    let hist = history(&[
        ("2026-08-01", 10.0),
        ("2026-08-02", 11.0),
        ("2026-08-03", 13.0),
    ]);
    let result = calculate_trends(&hist, Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));

    assert_eq!(result.momentum, Momentum::Rising);
    assert_eq!(result.signal, Signal::Hold);
    assert!(result.signal_reason.contains("hold for gains"));
}

#[test]
fn stable_momentum_holds_with_no_urgency() {
    let hist = history(&[
        ("2026-08-01", 10.0),
        ("2026-08-02", 10.2),
        ("2026-08-03", 10.5),
    ]);
    let result = calculate_trends(&hist, Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));

    assert_eq!(result.signal, Signal::Hold);
    assert!(result.signal_reason.contains("no urgency"));
}

// ---------------------------------------------------------------------------
// Gain/loss
// ---------------------------------------------------------------------------

#[test]
fn gain_loss_computed_from_current_vs_purchase() {
    let hist = history(&[
        ("2026-08-01", 20.0),
        ("2026-08-02", 16.0),
        ("2026-08-03", 14.0),
    ]);
    let result = calculate_trends(&hist, Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));

    assert_eq!(result.gain_loss, Some(4.0));
    assert_eq!(result.gain_loss_pct, Some(40.0));
}

#[test]
fn gain_loss_unset_without_a_purchase_price() {
    let hist = history(&[("2026-08-01", 20.0)]);
    let result = calculate_trends(&hist, None, None, d("2026-08-07"));

    assert_eq!(result.gain_loss, None);
    assert_eq!(result.gain_loss_pct, None);
}

#[test]
fn zero_purchase_price_is_treated_as_unknown() {
    let hist = history(&[("2026-08-01", 20.0)]);
    let result = calculate_trends(&hist, Some(0.0), None, d("2026-08-07"));

    assert_eq!(result.gain_loss, None);
    assert_eq!(result.gain_loss_pct, None);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn identical_inputs_yield_identical_results() {
    let hist = history(&[
        ("2026-08-01", 10.0),
        ("2026-08-02", 11.0),
        ("2026-08-03", 13.0),
    ]);
    let a = calculate_trends(&hist, Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));
    let b = calculate_trends(&hist, Some(10.0), Some(d("2026-01-01")), d("2026-08-07"));

    assert_eq!(a.signal, b.signal);
    assert_eq!(a.momentum, b.momentum);
    assert_eq!(a.current_price, b.current_price);
    assert_eq!(a.ma_7, b.ma_7);
    assert_eq!(a.signal_reason, b.signal_reason);
}
