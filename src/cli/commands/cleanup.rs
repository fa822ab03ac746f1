use crate::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(ctx: &mut AppContext) -> AppResult<()> {
    let now = ctx.store.now();
    let removed = ctx.store.cleanup_drafts(now)?;
    if removed == 0 {
        info("No expired drafts.");
    } else {
        success(format!("Removed {removed} expired draft(s)."));
    }
    Ok(())
}
