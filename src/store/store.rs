use chrono::{DateTime, Local};
use indexmap::IndexMap;

use super::medium::StorageMedium;
use crate::errors::{AppError, AppResult};
use crate::forms::draft::DRAFT_TTL_HOURS;
use crate::models::kind::RecordKind;
use crate::models::record::Record;
use crate::ui::messages::warning;
use crate::utils::clock::{Clock, SystemClock};

const DRAFT_KEY_PREFIX: &str = "autosave:";
const DRAFT_TIMESTAMP_SUFFIX: &str = "_timestamp";

/// Result of a single `add`. The mirror write happens before the in-memory
/// append, so `succeeded == false` means the collection is unchanged and
/// `error` carries the write failure.
pub struct AddOutcome {
    pub succeeded: bool,
    pub record: Record,
    pub error: Option<AppError>,
}

pub struct SearchResults {
    pub measurements: Vec<Record>,
    pub appointments: Vec<Record>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.measurements.len() + self.appointments.len()
    }
}

pub struct StoreStats {
    pub total_measurements: usize,
    pub total_appointments: usize,
    /// Last 5 per kind, insertion order preserved.
    pub recent_measurements: Vec<Record>,
    pub recent_appointments: Vec<Record>,
    /// Most recent record across both kinds by timestamp.
    pub latest: Option<Record>,
}

/// Owns the two record collections and mirrors them to the storage medium.
/// One instance per process; `reload` is the explicit staleness control.
pub struct PersistenceStore<M: StorageMedium> {
    medium: M,
    clock: Box<dyn Clock>,
    measurements: Vec<Record>,
    appointments: Vec<Record>,
}

impl<M: StorageMedium> PersistenceStore<M> {
    pub fn open(medium: M) -> Self {
        Self::with_clock(medium, Box::new(SystemClock))
    }

    pub fn with_clock(medium: M, clock: Box<dyn Clock>) -> Self {
        let measurements = Self::load_collection(&medium, RecordKind::Measurements);
        let appointments = Self::load_collection(&medium, RecordKind::Appointments);
        Self {
            medium,
            clock,
            measurements,
            appointments,
        }
    }

    /// Decode one mirror key. Absent or malformed data degrades to an empty
    /// collection with a warning; it is never an error for the caller.
    fn load_collection(medium: &M, kind: RecordKind) -> Vec<Record> {
        let raw = match medium.get(kind.storage_key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warning(format!("Could not read {}: {}", kind.as_str(), e));
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warning(format!(
                    "Stored {} are malformed ({}); starting empty",
                    kind.as_str(),
                    e
                ));
                Vec::new()
            }
        }
    }

    /// Re-read both collections from the mirror, discarding the in-memory
    /// view. Used when another process may have written since `open`.
    pub fn reload(&mut self) {
        self.measurements = Self::load_collection(&self.medium, RecordKind::Measurements);
        self.appointments = Self::load_collection(&self.medium, RecordKind::Appointments);
    }

    pub fn records(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::Measurements => &self.measurements,
            RecordKind::Appointments => &self.appointments,
        }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    pub fn medium_mut(&mut self) -> &mut M {
        &mut self.medium
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// Append a record built from `fields`. The updated collection is
    /// mirrored first; only a successful write mutates memory.
    pub fn add(&mut self, kind: RecordKind, fields: IndexMap<String, String>) -> AddOutcome {
        let record = Record::new(kind, fields, self.clock.now());

        let collection = match kind {
            RecordKind::Measurements => &mut self.measurements,
            RecordKind::Appointments => &mut self.appointments,
        };
        collection.push(record.clone());
        let encoded = serde_json::to_string(collection);

        let mirrored = match encoded {
            Ok(json) => self.medium.set(kind.storage_key(), &json),
            Err(e) => Err(AppError::from(e)),
        };

        match mirrored {
            Ok(()) => AddOutcome {
                succeeded: true,
                record,
                error: None,
            },
            Err(e) => {
                // Roll back so memory never runs ahead of the mirror.
                match kind {
                    RecordKind::Measurements => self.measurements.pop(),
                    RecordKind::Appointments => self.appointments.pop(),
                };
                AddOutcome {
                    succeeded: false,
                    record,
                    error: Some(e),
                }
            }
        }
    }

    /// Linear case-insensitive substring scan over every field value.
    pub fn search(&self, query: &str, kind: Option<RecordKind>) -> SearchResults {
        let needle = query.to_lowercase();
        let scan = |records: &[Record]| -> Vec<Record> {
            records
                .iter()
                .filter(|r| r.matches(&needle))
                .cloned()
                .collect()
        };
        SearchResults {
            measurements: match kind {
                None | Some(RecordKind::Measurements) => scan(&self.measurements),
                _ => Vec::new(),
            },
            appointments: match kind {
                None | Some(RecordKind::Appointments) => scan(&self.appointments),
                _ => Vec::new(),
            },
        }
    }

    /// Totals, the last `recent_limit` records per kind in insertion order,
    /// and the single most recent record across both kinds by timestamp.
    pub fn stats(&self, recent_limit: usize) -> StoreStats {
        let recent = |records: &[Record]| -> Vec<Record> {
            let skip = records.len().saturating_sub(recent_limit);
            records[skip..].to_vec()
        };

        let mut all: Vec<&Record> = self
            .measurements
            .iter()
            .chain(self.appointments.iter())
            .collect();
        // Compare parsed instants so records written under different UTC
        // offsets order correctly; fall back to the raw string when a
        // stored timestamp does not parse.
        all.sort_by(|a, b| match (a.created_at(), b.created_at()) {
            (Some(x), Some(y)) => y.cmp(&x),
            _ => b.timestamp.cmp(&a.timestamp),
        });

        StoreStats {
            total_measurements: self.measurements.len(),
            total_appointments: self.appointments.len(),
            recent_measurements: recent(&self.measurements),
            recent_appointments: recent(&self.appointments),
            latest: all.first().map(|r| (*r).clone()),
        }
    }

    /// Remove expired autosave drafts. A draft is expired when its paired
    /// timestamp is older than the TTL; a draft with a missing or unparsable
    /// timestamp has no recoverable age and is removed as well.
    pub fn cleanup_drafts(&mut self, now: DateTime<Local>) -> AppResult<usize> {
        let draft_keys: Vec<String> = self
            .medium
            .keys()?
            .into_iter()
            .filter(|k| k.starts_with(DRAFT_KEY_PREFIX) && !k.ends_with(DRAFT_TIMESTAMP_SUFFIX))
            .collect();

        let ttl_millis = DRAFT_TTL_HOURS * 60 * 60 * 1000;
        let mut removed = 0;

        for key in draft_keys {
            let ts_key = format!("{key}{DRAFT_TIMESTAMP_SUFFIX}");
            let expired = match self.medium.get(&ts_key)? {
                Some(raw) => match raw.parse::<i64>() {
                    Ok(saved_ms) => now.timestamp_millis() - saved_ms > ttl_millis,
                    Err(_) => true,
                },
                None => true,
            };
            if expired {
                self.medium.remove(&key)?;
                self.medium.remove(&ts_key)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
