//! Pure feeding-zone prediction logic for IceWind.
//!
//! This crate contains the domain models and the rule-based classifier that
//! turns a wind reading into qualitative fishing zones. Functions take plain
//! values and return results; nothing here touches storage, clocks, or a UI,
//! so every rule is unit-testable in isolation.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`direction`] | 8 compass directions with degree/opposite/adjacent tables |
//! | [`strength`] | 4 wind tiers with normalized zone intensity |
//! | [`shape`] | 5 water-body categories (descriptive only) |
//! | [`zones`] | Sector classification: High downwind, Medium flanks, Low windward |
//! | [`prediction`] | Human-readable prediction text and per-calculation bundle |
//! | [`error`] | Parse errors for the closed model sets |
//!
//! # Usage
//!
//! ```
//! use icewind_logic::direction::Direction;
//! use icewind_logic::strength::Strength;
//! use icewind_logic::zones::{classify_zones, ActivityTier};
//!
//! let zones = classify_zones(Direction::North, Strength::Strong);
//! assert_eq!(zones.high().center, Direction::South);
//! assert_eq!(zones.tier_at(180.0), Some(ActivityTier::High));
//! ```

pub mod direction;
pub mod error;
pub mod prediction;
pub mod shape;
pub mod strength;
pub mod zones;

pub use direction::Direction;
pub use error::ParseError;
pub use prediction::{describe, predict, Prediction};
pub use shape::Shape;
pub use strength::Strength;
pub use zones::{
    classify_zones, classify_zones_with, ActivityTier, Sector, WeightsError, ZoneMap, ZoneWeights,
};
