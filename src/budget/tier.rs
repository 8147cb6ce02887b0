//! Colour tiers of the health bar

use serde::Serialize;
use std::fmt;

use crate::constants::budget::{GREEN_THRESHOLD, ORANGE_THRESHOLD};

/// Colour of the health bar for a given fill fraction
///
/// Tiers are half-open: a value sitting exactly on a threshold belongs to
/// the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    /// `percent < 0.5`
    Red,
    /// `0.5 <= percent < 0.75`
    Orange,
    /// `percent >= 0.75`
    Green,
}

impl ColorTier {
    /// Tier for a health bar fill fraction
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent < ORANGE_THRESHOLD {
            Self::Red
        } else if percent < GREEN_THRESHOLD {
            Self::Orange
        } else {
            Self::Green
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
