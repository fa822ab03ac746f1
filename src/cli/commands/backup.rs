use std::fs;
use std::path::PathBuf;

use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::BackupLogic;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = match file {
            Some(f) => f.clone(),
            None => {
                fs::create_dir_all(&ctx.cfg.export_dir)?;
                let stamp = ctx.store.now().format("%Y%m%d");
                PathBuf::from(&ctx.cfg.export_dir)
                    .join(format!("backup_{stamp}.json"))
                    .to_string_lossy()
                    .to_string()
            }
        };

        BackupLogic::backup(&ctx.store, &dest, *compress, *force)?;
    }
    Ok(())
}
