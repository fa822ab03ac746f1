mod backup;
mod csv;
mod json;

pub use backup::BackupLogic;

use std::path::Path;

use clap::ValueEnum;

use crate::errors::AppResult;
use crate::models::kind::RecordKind;
use crate::store::medium::StorageMedium;
use crate::store::store::PersistenceStore;
use crate::ui::messages::success;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole collection for `kind`. Returns Ok(false) when the
    /// collection is empty and there is nothing to write; the caller is
    /// expected to surface that to the user.
    pub fn export<M: StorageMedium>(
        store: &PersistenceStore<M>,
        kind: RecordKind,
        format: &ExportFormat,
        path: &Path,
    ) -> AppResult<bool> {
        let records = store.records(kind);
        if records.is_empty() {
            return Ok(false);
        }
        match format {
            ExportFormat::Json => json::write_json(records, path)?,
            ExportFormat::Csv => csv::write_csv(records, path)?,
        }
        Ok(true)
    }
}
