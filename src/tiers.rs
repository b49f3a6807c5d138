//! Prospect tier classification from consensus draft rankings.

use serde::{Deserialize, Serialize};

/// Prospect tier by consensus draft rank.
///
/// A: ranks 1-5 (lottery picks). B: 6-12 (first round). C: 13-24 (second
/// round). D: 25+ or fringe/developmental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
    D,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a player from their average consensus rank.
///
/// Requires at least two ranking sources to avoid single-source bias;
/// returns `None` when there is not enough data for a reliable tier.
pub fn calculate_tier(avg_rank: Option<f64>, num_sources: usize) -> Option<Tier> {
    if num_sources < 2 {
        return None;
    }
    let avg_rank = avg_rank?;

    Some(if avg_rank <= 5.0 {
        Tier::A
    } else if avg_rank <= 12.0 {
        Tier::B
    } else if avg_rank <= 24.0 {
        Tier::C
    } else {
        Tier::D
    })
}
