//! Wind strength tiers.
//!
//! The tier's intensity is the only number the classifier consumes; speed
//! ranges and descriptions are for display next to the picker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Wind intensity tier, ordered weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    #[default]
    Moderate,
    Strong,
    Storm,
}

const INTENSITY: [f64; 4] = [0.4, 0.6, 0.8, 1.0];

const DISPLAY_NAMES: [&str; 4] = ["Weak", "Moderate", "Strong", "Storm"];

const TAGS: [&str; 4] = ["weak", "moderate", "strong", "storm"];

const SPEED_RANGES: [&str; 4] = ["1-3 m/s", "4-7 m/s", "8-14 m/s", "15+ m/s"];

const DESCRIPTIONS: [&str; 4] = [
    "Leaves rustle, slight ripples on water",
    "Small branches move, small waves form",
    "Large branches sway, whitecaps appear",
    "Whole trees move, foam on waves",
];

impl Strength {
    pub const ALL: [Strength; 4] = [
        Strength::Weak,
        Strength::Moderate,
        Strength::Strong,
        Strength::Storm,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Normalized zone intensity in `(0, 1]`, used as a multiplier on
    /// sector weights.
    pub fn intensity(self) -> f64 {
        INTENSITY[self.index()]
    }

    pub fn display_name(self) -> &'static str {
        DISPLAY_NAMES[self.index()]
    }

    /// Serialized tag ("weak", "moderate", ...).
    pub fn tag(self) -> &'static str {
        TAGS[self.index()]
    }

    /// Approximate wind speed band, e.g. "8-14 m/s".
    pub fn speed_range(self) -> &'static str {
        SPEED_RANGES[self.index()]
    }

    /// What the wind looks like on shore and water at this tier.
    pub fn description(self) -> &'static str {
        DESCRIPTIONS[self.index()]
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Strength {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Strength::ALL
            .iter()
            .copied()
            .find(|st| st.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseError::Strength(s.to_string()))
    }
}
