//! Compass directions: the 8-point rose the wind is read from.
//!
//! Every derived property (bearing, opposite, neighbours, names) is a lookup
//! into a constant table indexed by the variant's discriminant. The tables
//! follow the order of [`Direction::ALL`].
//!
//! ```text
//!            N (0°)
//!     NW (315°)   NE (45°)
//!   W (270°)   ·   E (90°)
//!     SW (225°)   SE (135°)
//!           S (180°)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One of the 8 compass points a wind can blow from.
///
/// Serialized as its short code (`"N"`, `"NE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

use Direction::*;

/// Angle between neighbouring compass points.
pub const STEP_DEGREES: f64 = 45.0;

const DEGREES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

const OPPOSITE: [Direction; 8] = [
    South, SouthWest, West, NorthWest, North, NorthEast, East, SouthEast,
];

/// Counter-clockwise neighbour first, then clockwise.
const ADJACENT: [[Direction; 2]; 8] = [
    [NorthWest, NorthEast],
    [North, East],
    [NorthEast, SouthEast],
    [East, South],
    [SouthEast, SouthWest],
    [South, West],
    [SouthWest, NorthWest],
    [West, North],
];

const DISPLAY_NAMES: [&str; 8] = [
    "North",
    "Northeast",
    "East",
    "Southeast",
    "South",
    "Southwest",
    "West",
    "Northwest",
];

const SHORT_NAMES: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Compass bearing in degrees, clockwise from north.
    pub fn degrees(self) -> f64 {
        DEGREES[self.index()]
    }

    /// The direction rotated by 180°.
    pub fn opposite(self) -> Direction {
        OPPOSITE[self.index()]
    }

    /// The two directions 45° away.
    pub fn adjacent(self) -> [Direction; 2] {
        ADJACENT[self.index()]
    }

    /// "North", "Northeast", ...
    pub fn display_name(self) -> &'static str {
        DISPLAY_NAMES[self.index()]
    }

    /// "N", "NE", ...
    pub fn short_name(self) -> &'static str {
        SHORT_NAMES[self.index()]
    }

    /// Smallest angle between this direction and `other`, in `[0, 180]`.
    pub fn angle_to(self, other: Direction) -> f64 {
        angular_distance(self.degrees(), other.degrees())
    }
}

/// Smallest unsigned angle between two bearings, in `[0, 180]`.
///
/// Bearings outside `[0, 360)` are normalized first.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Parses a short code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.short_name().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseError::Direction(s.to_string()))
    }
}
