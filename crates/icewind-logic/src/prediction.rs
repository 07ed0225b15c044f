//! Prediction text and the per-calculation result bundle.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::shape::Shape;
use crate::strength::Strength;
use crate::zones::{classify_zones, ZoneMap};

/// One-sentence feeding prediction for wind blowing from `direction`.
pub fn describe(direction: Direction) -> String {
    format!(
        "Fish will be feeding near the {} shore. Wind pushes plankton there.",
        direction.opposite().display_name().to_lowercase()
    )
}

/// Everything a presentation layer needs to show one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direction: Direction,
    pub strength: Strength,
    /// Selects the outline to draw; does not influence `zones`.
    pub shape: Shape,
    pub zones: ZoneMap,
    pub description: String,
}

pub fn predict(direction: Direction, strength: Strength, shape: Shape) -> Prediction {
    Prediction {
        direction,
        strength,
        shape,
        zones: classify_zones(direction, strength),
        description: describe(direction),
    }
}
