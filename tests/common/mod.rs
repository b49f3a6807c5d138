//! Shared fixtures for the cardwatch integration tests.

#![allow(dead_code)]

use cardwatch::{CardRecord, Fingerprint, PriceObservation};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date literal.
pub fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// The rookie-autograph fingerprint used by the end-to-end scenarios.
pub fn jane_doe_fingerprint() -> Fingerprint {
    Fingerprint {
        player: "Jane Doe".to_string(),
        year: Some(2024),
        manufacturer: "Panini".to_string(),
        set_name: "Prizm".to_string(),
        parallel: "Base".to_string(),
        numbered_to: None,
        is_autograph: true,
        is_rookie: true,
        grade: "Raw".to_string(),
    }
}

/// A portfolio card record matching [`jane_doe_fingerprint`].
pub fn jane_doe_record() -> CardRecord {
    CardRecord {
        id: 7,
        player_name: "Jane Doe".to_string(),
        card_year: Some(2024),
        manufacturer: Some("Panini".to_string()),
        set_name: Some("Prizm".to_string()),
        is_autograph: true,
        is_rookie: true,
        purchase_price: Some(10.0),
        purchase_date: Some(d("2026-01-01")),
        ..CardRecord::default()
    }
}

/// Build a price history of one observation per `(date, price)` pair.
pub fn history(points: &[(&str, f64)]) -> Vec<PriceObservation> {
    points
        .iter()
        .map(|(date, price)| PriceObservation::new(*price, "test", d(date)))
        .collect()
}
