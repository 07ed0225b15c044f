//! Session state - the selection, the current result and the history list
//!
//! A front-end drives a [`Session`] through commands (select, calculate,
//! delete, pick a past record) and re-reads whatever it displays through
//! the query methods afterwards. The session never redraws anything itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use icewind_logic::{describe, predict, Direction, Prediction, Shape, Strength};

use crate::backend::HistoryBackend;
use crate::error::HistoryError;
use crate::history::HistoryStore;
use crate::record::CalculationRecord;

/// Inputs currently picked in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub direction: Direction,
    pub strength: Strength,
    pub shape: Shape,
}

impl Selection {
    pub fn prediction(&self) -> Prediction {
        predict(self.direction, self.strength, self.shape)
    }
}

impl From<&CalculationRecord> for Selection {
    fn from(record: &CalculationRecord) -> Self {
        Self {
            direction: record.direction(),
            strength: record.strength(),
            shape: record.shape(),
        }
    }
}

pub struct Session<B: HistoryBackend> {
    store: HistoryStore<B>,
    selection: Selection,
    /// Cached copy of the store, refreshed after every mutation.
    history: Vec<CalculationRecord>,
    current: Option<CalculationRecord>,
}

impl<B: HistoryBackend> Session<B> {
    /// Start a session over an already-constructed store.
    pub fn new(store: HistoryStore<B>) -> Self {
        let history = store.load_all();
        Self {
            store,
            selection: Selection::default(),
            history,
            current: None,
        }
    }

    pub fn select_direction(&mut self, direction: Direction) {
        self.selection.direction = direction;
    }

    pub fn select_strength(&mut self, strength: Strength) {
        self.selection.strength = strength;
    }

    pub fn select_shape(&mut self, shape: Shape) {
        self.selection.shape = shape;
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Record the current selection, save it, and make it the current result.
    ///
    /// The record becomes current even if saving fails; the error reports
    /// that history did not update.
    pub fn calculate_and_save(&mut self) -> Result<&CalculationRecord, HistoryError> {
        let Selection {
            direction,
            strength,
            shape,
        } = self.selection;
        let record = CalculationRecord::new(direction, strength, shape);

        let saved = self.store.append(record.clone());
        if let Err(e) = &saved {
            log::warn!("Calculation {} not saved: {}", record.id(), e);
        }
        self.reload_history();

        let current = self.current.insert(record);
        saved?;
        Ok(current)
    }

    /// Delete a stored record. Clears the current result if it was that record.
    pub fn delete_record(&mut self, id: Uuid) -> Result<(), HistoryError> {
        self.store.remove(id)?;
        if self.current.as_ref().is_some_and(|r| r.id() == id) {
            self.current = None;
        }
        self.reload_history();
        Ok(())
    }

    /// Show a past record: it becomes current and its inputs become the
    /// selection. Returns `false` if no record has `id`.
    pub fn select_history_record(&mut self, id: Uuid) -> bool {
        let Some(record) = self.history.iter().find(|r| r.id() == id).cloned() else {
            return false;
        };
        self.selection = Selection::from(&record);
        self.current = Some(record);
        true
    }

    pub fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.store.clear()?;
        self.reload_history();
        Ok(())
    }

    pub fn reload_history(&mut self) {
        self.history = self.store.load_all();
    }

    /// Prediction text for the current record, falling back to the selection.
    pub fn feeding_zone_description(&self) -> String {
        match &self.current {
            Some(record) => record.feeding_zone_description(),
            None => describe(self.selection.direction),
        }
    }

    /// Full prediction for the current record, falling back to the selection.
    pub fn prediction(&self) -> Prediction {
        match &self.current {
            Some(record) => record.prediction(),
            None => self.selection.prediction(),
        }
    }

    pub fn history(&self) -> &[CalculationRecord] {
        &self.history
    }

    pub fn current(&self) -> Option<&CalculationRecord> {
        self.current.as_ref()
    }

    pub fn store(&self) -> &HistoryStore<B> {
        &self.store
    }
}
