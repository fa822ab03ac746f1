use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::errors::AppResult;
use crate::models::kind::RecordKind;
use crate::models::record::Record;
use crate::store::medium::StorageMedium;
use crate::store::store::PersistenceStore;

#[derive(Serialize)]
struct BackupPayload<'a> {
    measurements: &'a [Record],
    appointments: &'a [Record],
    #[serde(rename = "backupDate")]
    backup_date: String,
    version: &'static str,
}

pub struct BackupLogic;

impl BackupLogic {
    /// Write a combined backup of both collections as pretty JSON. With
    /// `compress`, the JSON file is zipped and the plain copy removed.
    /// An existing destination requires confirmation unless `force` is set.
    pub fn backup<M: StorageMedium>(
        store: &PersistenceStore<M>,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = Path::new(dest_file);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force {
            println!(
                "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
                dest.display()
            );

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();

            stdin().read_line(&mut answer)?;
            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                println!("❌ Backup cancelled by user.");
                return Ok(None);
            }
            println!();
        }

        let payload = BackupPayload {
            measurements: store.records(RecordKind::Measurements),
            appointments: store.records(RecordKind::Appointments),
            backup_date: store.now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
        };

        let json = serde_json::to_string_pretty(&payload)?;
        fs::write(dest, json)?;
        println!("✅ Backup created: {}", dest.display());

        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        Ok(Some(final_path))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(path.file_name().unwrap().to_string_lossy(), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
