//! IceWind Core - calculation history and session state
//!
//! Wraps the pure prediction logic from `icewind-logic` with the stateful
//! pieces an app shell needs:
//! - **Records**: one saved calculation (id, timestamp, wind and shape inputs)
//! - **History**: a bounded, newest-first log of records behind a pluggable
//!   key-value backend
//! - **Session**: the current selection and result, driven by commands
//!
//! # Example
//!
//! ```rust
//! use icewind_core::prelude::*;
//!
//! let store = HistoryStore::new(MemoryBackend::new());
//! let mut session = Session::new(store);
//!
//! session.select_direction(Direction::West);
//! session.select_strength(Strength::Strong);
//! session.calculate_and_save().unwrap();
//!
//! assert_eq!(session.history().len(), 1);
//! assert_eq!(
//!     session.feeding_zone_description(),
//!     "Fish will be feeding near the east shore. Wind pushes plankton there."
//! );
//! ```

pub mod backend;
pub mod error;
pub mod history;
pub mod record;
pub mod session;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::backend::{FileBackend, HistoryBackend, MemoryBackend};
    pub use crate::error::HistoryError;
    pub use crate::history::{HistoryConfig, HistoryFormat, HistoryStore};
    pub use crate::record::CalculationRecord;
    pub use crate::session::{Selection, Session};
    pub use icewind_logic::{ActivityTier, Direction, Prediction, Shape, Strength, ZoneMap};
}
