//! Price-check pipeline: drive the query cascade against a listing source
//! and store accepted matches.
//!
//! The capabilities at the boundary are dependency-injected trait objects,
//! not singletons: a [`ListingSource`] yields marketplace hits for a query
//! string, a [`PriceSink`] persists accepted price observations, and a
//! [`TitleSink`] collects parsed titles for the learning cache. A source
//! failure at one query level is recorded, logged and skipped; the cascade
//! proceeds to the next broader level, so nothing here is fatal to a batch
//! run over many cards.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::matcher::Matcher;
use crate::models::{CardRecord, Fingerprint, Listing, ParsedTitle, PriceObservation};
use crate::parser::parse_title;
use crate::query::{build_query, QueryLevel};

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// A marketplace/search capability that returns listings for a query string.
///
/// Implementations own their I/O concerns (auth, rate limiting, timeouts);
/// the pipeline only sees titles and prices.
pub trait ListingSource {
    /// Channel tag stored with each accepted observation (e.g. `"ebay_active"`).
    fn label(&self) -> &str;

    /// Search listings for the query, returning at most `limit` hits.
    fn search(&mut self, query: &str, limit: usize) -> Result<Vec<Listing>>;
}

/// Sink for accepted price observations (the per-card price history).
pub trait PriceSink {
    fn record_price(&mut self, card_id: i64, observation: &PriceObservation) -> Result<()>;
}

/// Sink for parsed titles (the title-learning cache). Implementations apply
/// [`ParsedTitle::merge`] upsert semantics keyed by the raw title.
pub trait TitleSink {
    fn learn_title(&mut self, source: &str, parsed: &ParsedTitle) -> Result<()>;
}

// ---------------------------------------------------------------------------
// PriceCheckConfig
// ---------------------------------------------------------------------------

/// Acceptance thresholds of the pipeline. The 0.5 confidence threshold is the
/// reference constant the learned-title data is calibrated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceCheckConfig {
    /// Minimum match score for a listing to be stored.
    pub min_confidence: f64,
    /// Listings priced below this are ignored (junk/typo filter).
    pub min_price: f64,
    /// Maximum listings requested per query level.
    pub limit: usize,
}

impl Default for PriceCheckConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            min_price: 0.5,
            limit: 50,
        }
    }
}

// ---------------------------------------------------------------------------
// Level outcomes
// ---------------------------------------------------------------------------

/// What happened at one query level of the cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelOutcome {
    pub level: QueryLevel,
    pub query: String,
    pub status: LevelStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LevelStatus {
    /// Listings cleared the confidence threshold and were stored.
    Matched(usize),
    /// The search ran but nothing cleared the threshold.
    NoMatches,
    /// The source failed; the cascade moved on to the next broader level.
    SourceError(String),
}

/// Result of one price check: how many observations were stored, and what
/// happened at each attempted level. Levels after the first success are not
/// attempted and carry no outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCheckReport {
    pub stored: usize,
    pub levels: Vec<LevelOutcome>,
}

// ---------------------------------------------------------------------------
// price_check_card
// ---------------------------------------------------------------------------

/// Look up current listing prices for one portfolio card.
///
/// Walks the query cascade from precise to broad, scores every returned
/// title against the card's fingerprint, stores observations for titles
/// clearing `min_confidence`, and feeds each accepted title's parse to the
/// learning sink. Stops at the first level that stores at least one
/// observation. Source failures are skipped per level; learning-sink
/// failures are logged and swallowed. Only fingerprint construction and
/// price-sink failures surface as `Err`.
pub fn price_check_card(
    card: &CardRecord,
    source: &mut dyn ListingSource,
    prices: &mut dyn PriceSink,
    titles: &mut dyn TitleSink,
    matcher: &Matcher,
    config: &PriceCheckConfig,
    today: NaiveDate,
) -> Result<PriceCheckReport> {
    let fingerprint = Fingerprint::from_record(card)?;
    let label = source.label().to_string();

    let mut stored = 0;
    let mut levels = Vec::new();

    for level in QueryLevel::cascade() {
        let query = build_query(&fingerprint, level);

        let listings = match source.search(&query, config.limit) {
            Ok(listings) => listings,
            Err(err) => {
                warn!(
                    source = %label,
                    level = level.as_number(),
                    %query,
                    error = %err,
                    "listing search failed, trying broader level"
                );
                levels.push(LevelOutcome {
                    level,
                    query,
                    status: LevelStatus::SourceError(err.to_string()),
                });
                continue;
            }
        };

        let mut matched_at_level = 0;
        for listing in &listings {
            if let Some(observation) = accept_listing(listing, &fingerprint, matcher, config, &label, today)
            {
                prices.record_price(card.id, &observation)?;
                matched_at_level += 1;

                let parsed = parse_title(&listing.title, Some(&card.player_name));
                if let Err(err) = titles.learn_title(&label, &parsed) {
                    warn!(title = %listing.title, error = %err, "title learning failed");
                }
            }
        }

        stored += matched_at_level;
        levels.push(LevelOutcome {
            level,
            query,
            status: if matched_at_level > 0 {
                LevelStatus::Matched(matched_at_level)
            } else {
                LevelStatus::NoMatches
            },
        });

        if stored > 0 {
            break;
        }
    }

    info!(
        card_id = card.id,
        source = %label,
        stored,
        "price check complete"
    );

    Ok(PriceCheckReport { stored, levels })
}

/// Score one listing and build the observation to store when it clears the
/// threshold. Listings without a usable price or title are skipped.
fn accept_listing(
    listing: &Listing,
    fingerprint: &Fingerprint,
    matcher: &Matcher,
    config: &PriceCheckConfig,
    label: &str,
    today: NaiveDate,
) -> Option<PriceObservation> {
    let price = listing.price?;
    if price < config.min_price || listing.title.is_empty() {
        return None;
    }

    let score = matcher.score(&listing.title, fingerprint);
    debug!(title = %listing.title, score, "scored listing");
    if score < config.min_confidence {
        return None;
    }

    Some(PriceObservation {
        price,
        source: label.to_string(),
        recorded_date: listing.date_sold.unwrap_or(today),
        sale_type: listing.sale_type.clone(),
        title: Some(listing.title.clone()),
        match_confidence: score,
    })
}
