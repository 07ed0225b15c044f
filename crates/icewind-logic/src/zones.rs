//! Feeding zone classification.
//!
//! Wind-driven surface drift piles plankton and warmer water against the
//! downwind shore, so that is where fish feed. The classifier marks four
//! angular sectors of the water body:
//!
//! | Tier | Center | Half width |
//! |------|--------|------------|
//! | High | downwind (`opposite(direction)`) | 45° |
//! | Medium | each neighbour of downwind | 35° |
//! | Low | windward (`direction`) | 45° |
//!
//! Sector weights scale with wind intensity. The per-tier multipliers are
//! display tuning, so they live in [`ZoneWeights`]; only their ordering
//! (High > Medium > Low) is part of the contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::{angular_distance, Direction};
use crate::strength::Strength;

/// Half width of the downwind sector.
pub const HIGH_HALF_WIDTH: f64 = 45.0;
/// Half width of each transitional sector beside downwind.
pub const MEDIUM_HALF_WIDTH: f64 = 35.0;
/// Half width of the windward sector.
pub const LOW_HALF_WIDTH: f64 = 45.0;

/// Qualitative fish activity in a sector.
///
/// Declared low-to-high so the derived ordering ranks `High` above `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTier {
    Low,
    Medium,
    High,
}

/// Per-tier weight multipliers, applied on top of wind intensity.
///
/// Always satisfies `0 < low < medium < high <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneWeights {
    high: f64,
    medium: f64,
    low: f64,
}

impl Default for ZoneWeights {
    fn default() -> Self {
        Self {
            high: 0.6,
            medium: 0.4,
            low: 0.3,
        }
    }
}

impl ZoneWeights {
    /// Build a weight set, rejecting values that break the tier ordering.
    pub fn new(high: f64, medium: f64, low: f64) -> Result<Self, WeightsError> {
        for w in [high, medium, low] {
            if !(w > 0.0 && w <= 1.0) {
                return Err(WeightsError::OutOfRange(w));
            }
        }
        if !(high > medium && medium > low) {
            return Err(WeightsError::NotDescending { high, medium, low });
        }
        Ok(Self { high, medium, low })
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn medium(&self) -> f64 {
        self.medium
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn for_tier(&self, tier: ActivityTier) -> f64 {
        match tier {
            ActivityTier::High => self.high,
            ActivityTier::Medium => self.medium,
            ActivityTier::Low => self.low,
        }
    }
}

/// Rejected [`ZoneWeights`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightsError {
    /// A weight outside `(0, 1]` (NaN included).
    OutOfRange(f64),
    NotDescending { high: f64, medium: f64, low: f64 },
}

impl fmt::Display for WeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightsError::OutOfRange(w) => write!(f, "zone weight {w} is outside (0, 1]"),
            WeightsError::NotDescending { high, medium, low } => write!(
                f,
                "zone weights must satisfy high > medium > low, got {high} / {medium} / {low}"
            ),
        }
    }
}

impl std::error::Error for WeightsError {}

/// An angular wedge of the water body with an activity tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub center: Direction,
    /// Degrees either side of `center`.
    pub half_width: f64,
    pub tier: ActivityTier,
    /// Intensity-scaled weight (opacity for a renderer).
    pub weight: f64,
}

impl Sector {
    /// Leading edge bearing, `center - half_width`. May be negative.
    pub fn start_degrees(&self) -> f64 {
        self.center.degrees() - self.half_width
    }

    /// Trailing edge bearing, `center + half_width`.
    pub fn end_degrees(&self) -> f64 {
        self.center.degrees() + self.half_width
    }

    /// Whether `bearing` falls inside the wedge (edges included).
    pub fn contains(&self, bearing: f64) -> bool {
        angular_distance(self.center.degrees(), bearing) <= self.half_width + 1e-9
    }
}

/// The four sectors for one wind reading.
///
/// Order is fixed: High, Medium (counter-clockwise of downwind), Medium
/// (clockwise of downwind), Low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneMap {
    sectors: [Sector; 4],
}

impl ZoneMap {
    pub fn sectors(&self) -> &[Sector; 4] {
        &self.sectors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sector> {
        self.sectors.iter()
    }

    pub fn high(&self) -> &Sector {
        &self.sectors[0]
    }

    pub fn medium(&self) -> &[Sector] {
        &self.sectors[1..3]
    }

    pub fn low(&self) -> &Sector {
        &self.sectors[3]
    }

    /// Strongest tier whose sector covers `bearing`, if any.
    ///
    /// The side sectors between the Medium flanks and the windward wedge
    /// are unclassified.
    pub fn tier_at(&self, bearing: f64) -> Option<ActivityTier> {
        self.sectors
            .iter()
            .filter(|s| s.contains(bearing))
            .map(|s| s.tier)
            .max()
    }
}

impl<'a> IntoIterator for &'a ZoneMap {
    type Item = &'a Sector;
    type IntoIter = std::slice::Iter<'a, Sector>;

    fn into_iter(self) -> Self::IntoIter {
        self.sectors.iter()
    }
}

/// Classify feeding zones with the default [`ZoneWeights`].
pub fn classify_zones(direction: Direction, strength: Strength) -> ZoneMap {
    classify_zones_with(direction, strength, &ZoneWeights::default())
}

/// Classify feeding zones for wind blowing from `direction`.
pub fn classify_zones_with(
    direction: Direction,
    strength: Strength,
    weights: &ZoneWeights,
) -> ZoneMap {
    let intensity = strength.intensity();
    let downwind = direction.opposite();
    let [ccw, cw] = downwind.adjacent();

    let sector = |center: Direction, half_width: f64, tier: ActivityTier| Sector {
        center,
        half_width,
        tier,
        weight: intensity * weights.for_tier(tier),
    };

    ZoneMap {
        sectors: [
            sector(downwind, HIGH_HALF_WIDTH, ActivityTier::High),
            sector(ccw, MEDIUM_HALF_WIDTH, ActivityTier::Medium),
            sector(cw, MEDIUM_HALF_WIDTH, ActivityTier::Medium),
            sector(direction, LOW_HALF_WIDTH, ActivityTier::Low),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_north_wind_layout() {
        let zones = classify_zones(Direction::North, Strength::Moderate);
        assert_eq!(zones.high().center, Direction::South);
        let medium: Vec<Direction> = zones.medium().iter().map(|s| s.center).collect();
        assert_eq!(medium, vec![Direction::SouthEast, Direction::SouthWest]);
        assert_eq!(zones.low().center, Direction::North);
    }

    #[test]
    fn test_half_widths() {
        let zones = classify_zones(Direction::East, Strength::Weak);
        assert_eq!(zones.high().half_width, 45.0);
        assert!(zones.medium().iter().all(|s| s.half_width == 35.0));
        assert_eq!(zones.low().half_width, 45.0);
    }

    #[test]
    fn test_default_weights_scale_with_intensity() {
        let zones = classify_zones(Direction::West, Strength::Strong);
        assert!(approx(zones.high().weight, 0.8 * 0.6));
        assert!(approx(zones.medium()[0].weight, 0.8 * 0.4));
        assert!(approx(zones.low().weight, 0.8 * 0.3));
    }

    #[test]
    fn test_tier_weight_ordering() {
        for d in Direction::ALL {
            for s in Strength::ALL {
                let z = classify_zones(d, s);
                assert!(z.high().weight > z.medium()[0].weight);
                assert!(z.medium()[1].weight > z.low().weight);
            }
        }
    }

    #[test]
    fn test_sector_edges() {
        let zones = classify_zones(Direction::South, Strength::Storm);
        let high = zones.high();
        assert_eq!(high.center, Direction::North);
        assert_eq!(high.start_degrees(), -45.0);
        assert_eq!(high.end_degrees(), 45.0);
        assert!(high.contains(350.0));
        assert!(high.contains(45.0));
        assert!(!high.contains(46.0));
    }

    #[test]
    fn test_tier_at() {
        let zones = classify_zones(Direction::North, Strength::Moderate);
        assert_eq!(zones.tier_at(180.0), Some(ActivityTier::High));
        // Overlap between High and a flank resolves to High.
        assert_eq!(zones.tier_at(150.0), Some(ActivityTier::High));
        assert_eq!(zones.tier_at(110.0), Some(ActivityTier::Medium));
        assert_eq!(zones.tier_at(0.0), Some(ActivityTier::Low));
        assert_eq!(zones.tier_at(90.0), None);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ZoneWeights::new(1.0, 0.5, 0.25).unwrap();
        let zones = classify_zones_with(Direction::North, Strength::Storm, &weights);
        assert!(approx(zones.high().weight, 1.0));
        assert!(approx(zones.low().weight, 0.25));
    }

    #[test]
    fn test_weights_validation() {
        assert_eq!(
            ZoneWeights::new(0.4, 0.6, 0.3),
            Err(WeightsError::NotDescending {
                high: 0.4,
                medium: 0.6,
                low: 0.3
            })
        );
        assert_eq!(ZoneWeights::new(1.2, 0.6, 0.3), Err(WeightsError::OutOfRange(1.2)));
        assert!(ZoneWeights::new(0.6, 0.4, 0.0).is_err());
        assert!(ZoneWeights::new(f64::NAN, 0.4, 0.3).is_err());
    }

    #[test]
    fn test_default_weights_are_valid() {
        let d = ZoneWeights::default();
        assert_eq!(ZoneWeights::new(d.high(), d.medium(), d.low()), Ok(d));
    }

    #[test]
    fn test_tier_ordering() {
        assert!(ActivityTier::High > ActivityTier::Medium);
        assert!(ActivityTier::Medium > ActivityTier::Low);
    }
}
