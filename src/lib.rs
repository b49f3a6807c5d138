//! Cardwatch — sports-card portfolio tracking core.
//!
//! Matches noisy marketplace listing titles against canonical card
//! identities and turns accepted prices into trading signals:
//!
//! - [`Fingerprint`]: canonical identity of one physical card variant,
//!   built from a stored [`CardRecord`].
//! - [`build_query`]: a cascade of progressively broader search strings for
//!   external marketplace search.
//! - [`parse_title`]: free-text listing title to structured card fields.
//! - [`score_title_match`]: weighted 0.0-1.0 confidence that a title refers
//!   to a fingerprinted card.
//! - [`calculate_trends`]: moving averages, momentum and a HOLD/SELL signal
//!   from a card's price history.
//! - [`price_check_card`](pipeline::price_check_card): the cascade pipeline
//!   wiring the above to injected source/sink capabilities.
//!
//! # Quick start
//!
//! ```rust
//! use cardwatch::{score_title_match, Fingerprint};
//!
//! let fp = Fingerprint {
//!     player: "Jane Doe".to_string(),
//!     year: Some(2024),
//!     manufacturer: "Panini".to_string(),
//!     set_name: "Prizm".to_string(),
//!     parallel: "Base".to_string(),
//!     numbered_to: None,
//!     is_autograph: true,
//!     is_rookie: true,
//!     grade: "Raw".to_string(),
//! };
//!
//! let score = score_title_match("2024 Panini Prizm Jane Doe Auto RC #125", &fp);
//! assert!(score > 0.5);
//! ```
//!
//! The core is pure, synchronous and free of shared mutable state: the same
//! inputs always produce the same outputs, and every function is safe to
//! call concurrently. All I/O lives behind the [`pipeline`] traits.

pub mod error;
pub mod matcher;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod portfolio;
pub mod query;
pub mod tiers;
pub mod trends;
pub mod vocab;

pub use error::{CardwatchError, Result};
pub use matcher::{score_title_match, MatchWeights, Matcher};
pub use models::{
    CardRecord, Fingerprint, Listing, Momentum, ParsedTitle, PriceObservation, Signal, TrendResult,
};
pub use parser::parse_title;
pub use pipeline::{
    price_check_card, LevelOutcome, LevelStatus, ListingSource, PriceCheckConfig, PriceCheckReport,
    PriceSink, TitleSink,
};
pub use portfolio::PortfolioSummary;
pub use query::{build_query, player_query, QueryLevel};
pub use tiers::{calculate_tier, Tier};
pub use trends::{calculate_trends, TrendConfig, TrendEngine};
