use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::record::Record;
use crate::ui::messages::info;

/// Export CSV. The header comes from the first record's columns in their
/// insertion order; records missing a column emit an empty cell. Quoting is
/// RFC4180 (fields with commas or quotes are quoted, embedded quotes
/// doubled), which the csv writer applies as needed.
pub(crate) fn write_csv(records: &[Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    let header = match records.first() {
        Some(first) => first.columns(),
        None => return Err(AppError::Export("nothing to export".into())),
    };
    wtr.write_record(&header)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for record in records {
        let row: Vec<String> = header.iter().map(|col| record.value_of(col)).collect();
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
