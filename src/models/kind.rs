use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Record category. Each kind owns one mirror key holding the full
/// JSON-serialized collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Measurements,
    Appointments,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Measurements => "measurements",
            RecordKind::Appointments => "appointments",
        }
    }

    /// Mirror key in the key-value namespace.
    pub fn storage_key(&self) -> &'static str {
        self.as_str()
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Measurements => "Measurements",
            RecordKind::Appointments => "Appointments",
        }
    }

    pub fn all() -> [RecordKind; 2] {
        [RecordKind::Measurements, RecordKind::Appointments]
    }
}

/// Lifecycle state of a record. Every record is created `pending`; the
/// other states exist so data written by newer versions still decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Confirmed => "confirmed",
            RecordStatus::Cancelled => "cancelled",
        }
    }
}
