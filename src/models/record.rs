use chrono::{DateTime, FixedOffset, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::kind::{RecordKind, RecordStatus};
use crate::utils::id::mint_id;

/// One submitted measurement or appointment. System fields are assigned at
/// creation and never change; the domain fields come straight from the form
/// and keep their insertion order (the CSV header depends on it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    /// Creation instant, RFC3339.
    pub timestamp: String,
    pub status: RecordStatus,
    /// Appointments only. Forward-compatibility field, initialized false;
    /// nothing in this crate flips it.
    #[serde(rename = "reminderSent", skip_serializing_if = "Option::is_none")]
    pub reminder_sent: Option<bool>,
    #[serde(flatten)]
    pub fields: IndexMap<String, String>,
}

impl Record {
    /// Build a fresh record for `kind`. Assigns id, timestamp and
    /// status=pending; appointments additionally get reminderSent=false.
    pub fn new(kind: RecordKind, fields: IndexMap<String, String>, now: DateTime<Local>) -> Self {
        Self {
            id: mint_id(),
            timestamp: now.to_rfc3339(),
            status: RecordStatus::Pending,
            reminder_sent: match kind {
                RecordKind::Appointments => Some(false),
                RecordKind::Measurements => None,
            },
            fields,
        }
    }

    /// Column names in serialization order: system fields first, then the
    /// domain fields as the form supplied them.
    pub fn columns(&self) -> Vec<String> {
        let mut cols = vec!["id".to_string(), "timestamp".to_string(), "status".to_string()];
        if self.reminder_sent.is_some() {
            cols.push("reminderSent".to_string());
        }
        cols.extend(self.fields.keys().cloned());
        cols
    }

    /// String value for a column; empty when the record has no such field.
    pub fn value_of(&self, column: &str) -> String {
        match column {
            "id" => self.id.clone(),
            "timestamp" => self.timestamp.clone(),
            "status" => self.status.as_str().to_string(),
            "reminderSent" => self
                .reminder_sent
                .map(|b| b.to_string())
                .unwrap_or_default(),
            other => self.fields.get(other).cloned().unwrap_or_default(),
        }
    }

    /// Case-insensitive substring match over every field value, system
    /// fields included.
    pub fn matches(&self, needle_lower: &str) -> bool {
        for col in self.columns() {
            if self.value_of(&col).to_lowercase().contains(needle_lower) {
                return true;
            }
        }
        false
    }

    /// Parsed creation instant; None when the stored string is malformed.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}
