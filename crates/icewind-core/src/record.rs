//! One saved calculation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use icewind_logic::{describe, predict, Direction, Prediction, Shape, Strength};

/// The inputs of one "calculate" request, stamped with identity and time.
///
/// Records are immutable once built; the history store only ever inserts
/// or drops whole records.
///
/// JSON form:
/// `{"id":"…","timestamp":"2026-01-14T07:30:00Z","direction":"NE","strength":"storm","shape":"river"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    id: Uuid,
    timestamp: DateTime<Utc>,
    direction: Direction,
    strength: Strength,
    shape: Shape,
}

impl CalculationRecord {
    /// New record with a random v4 id, stamped now.
    pub fn new(direction: Direction, strength: Strength, shape: Shape) -> Self {
        Self::with_id_and_time(Uuid::new_v4(), Utc::now(), direction, strength, shape)
    }

    pub fn with_id_and_time(
        id: Uuid,
        timestamp: DateTime<Utc>,
        direction: Direction,
        strength: Strength,
        shape: Shape,
    ) -> Self {
        Self {
            id,
            timestamp,
            direction,
            strength,
            shape,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn feeding_zone_description(&self) -> String {
        describe(self.direction)
    }

    /// Recompute the prediction for the stored inputs.
    pub fn prediction(&self) -> Prediction {
        predict(self.direction, self.strength, self.shape)
    }
}
