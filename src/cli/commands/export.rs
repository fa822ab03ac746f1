use std::fs;
use std::path::PathBuf;

use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Export { kind, format, file } = cmd {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => {
                fs::create_dir_all(&ctx.cfg.export_dir)?;
                let stamp = ctx.store.now().format("%Y%m%d");
                PathBuf::from(&ctx.cfg.export_dir).join(format!(
                    "{}_{}.{}",
                    kind.as_str(),
                    stamp,
                    format.as_str()
                ))
            }
        };

        let exported = ExportLogic::export(&ctx.store, *kind, format, &path)?;
        if !exported {
            warning(format!("No {} to export", kind.as_str()));
        }
    }
    Ok(())
}
