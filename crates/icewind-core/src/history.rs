//! Bounded, newest-first log of calculation records.
//!
//! The whole history lives as one serialized value under one backend key.
//! Every mutation is a read-modify-write of that value; the store assumes a
//! single writer (`&mut self` enforces that within a process).
//!
//! Reads are forgiving: a missing, unreadable, or undecodable value is
//! reported as empty history. Writes are not: encode and backend failures
//! come back as [`HistoryError`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::HistoryBackend;
use crate::error::HistoryError;
use crate::record::CalculationRecord;

/// Key the history value is stored under by default.
pub const DEFAULT_KEY: &str = "calculation_history";

/// Records kept by default; older entries fall off the tail.
pub const DEFAULT_CAPACITY: usize = 50;

/// Encoding of the persisted record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HistoryFormat {
    #[default]
    Json,
    /// Compact binary; not readable by JSON tooling.
    Bincode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub key: String,
    pub capacity: usize,
    pub format: HistoryFormat,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            capacity: DEFAULT_CAPACITY,
            format: HistoryFormat::Json,
        }
    }
}

pub struct HistoryStore<B: HistoryBackend> {
    backend: B,
    config: HistoryConfig,
}

impl<B: HistoryBackend> HistoryStore<B> {
    /// Store with the default key, capacity and format.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: HistoryConfig::default(),
        }
    }

    pub fn with_config(backend: B, config: HistoryConfig) -> Result<Self, HistoryError> {
        if config.capacity == 0 {
            return Err(HistoryError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if config.key.is_empty() {
            return Err(HistoryError::InvalidConfig(
                "key must not be empty".to_string(),
            ));
        }
        Ok(Self { backend, config })
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// All stored records, newest first. Never fails.
    pub fn load_all(&self) -> Vec<CalculationRecord> {
        let bytes = match self.backend.load(&self.config.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("History read failed, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match self.decode(&bytes) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "History value under {:?} did not decode ({} bytes), treating as empty: {}",
                    self.config.key,
                    bytes.len(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Insert `record` at the head, dropping the oldest entries beyond
    /// capacity. A stored record with the same id is replaced.
    pub fn append(&mut self, record: CalculationRecord) -> Result<(), HistoryError> {
        let mut history = self.load_all();
        history.retain(|r| r.id() != record.id());
        history.insert(0, record);

        let evicted = history.len().saturating_sub(self.config.capacity);
        history.truncate(self.config.capacity);

        self.persist(&history)?;
        log::debug!(
            "Appended record {} ({} stored, {} evicted)",
            history[0].id(),
            history.len(),
            evicted
        );
        Ok(())
    }

    /// Remove every record with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: Uuid) -> Result<(), HistoryError> {
        let mut history = self.load_all();
        let before = history.len();
        history.retain(|r| r.id() != id);

        if history.len() == before {
            return Ok(());
        }

        self.persist(&history)?;
        log::debug!(
            "Removed record {} ({} stored)",
            id,
            history.len().min(self.config.capacity)
        );
        Ok(())
    }

    /// Drop the persisted value entirely.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.backend.delete(&self.config.key)?;
        log::info!("History cleared");
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<CalculationRecord> {
        self.load_all().into_iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.load_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encode and save at most `capacity` records from the head of `records`.
    fn persist(&mut self, records: &[CalculationRecord]) -> Result<(), HistoryError> {
        let kept = &records[..records.len().min(self.config.capacity)];
        let bytes = self.encode(kept)?;
        self.backend.save(&self.config.key, &bytes)
    }

    fn encode(&self, records: &[CalculationRecord]) -> Result<Vec<u8>, HistoryError> {
        Ok(match self.config.format {
            HistoryFormat::Json => serde_json::to_vec(records)?,
            HistoryFormat::Bincode => bincode::serialize(records)?,
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<CalculationRecord>, HistoryError> {
        Ok(match self.config.format {
            HistoryFormat::Json => serde_json::from_slice(bytes)?,
            HistoryFormat::Bincode => bincode::deserialize(bytes)?,
        })
    }
}
