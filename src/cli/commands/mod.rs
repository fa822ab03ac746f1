pub mod backup;
pub mod book;
pub mod cleanup;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod measure;
pub mod search;
pub mod stats;

use indexmap::IndexMap;

use crate::AppContext;
use crate::errors::{AppError, AppResult};
use crate::forms::draft::DraftAutosave;
use crate::forms::submit::{SubmissionController, SubmitOutcome};
use crate::models::form::FormType;
use crate::ui::feedback::CliFeedback;
use crate::ui::messages::{info, warning};

/// Shared submit path for the `measure` and `book` commands.
///
/// Fields not given on the command line are prefilled from the form's saved
/// draft (a draft never overwrites a provided value). A submission rejected
/// by validation keeps the entered values as a draft for the next attempt.
pub(crate) fn submit_form(
    ctx: &mut AppContext,
    form: FormType,
    mut values: IndexMap<String, String>,
    skip_draft: bool,
) -> AppResult<()> {
    let autosave = DraftAutosave::new(form, ctx.cfg.autosave_quiet_secs);

    if !skip_draft {
        // Loading consumes the draft; on rejection it is saved back below.
        if let Some(draft) = autosave.load(ctx.store.medium_mut())? {
            DraftAutosave::apply_to(&draft, &mut values);
            info("Recovered saved draft values for fields you left empty.");
        }
    }

    let mut controller = SubmissionController::new(form);
    let mut feedback = CliFeedback::new();

    match controller.submit(&values, &mut ctx.store, &autosave, &mut feedback) {
        SubmitOutcome::Saved(record) => {
            info(format!("Record id: {}", record.id));
            Ok(())
        }
        SubmitOutcome::Rejected(errors) => {
            let has_input = values.values().any(|v| !v.trim().is_empty());
            if has_input {
                let now = ctx.store.now();
                if let Err(e) = autosave.save_now(ctx.store.medium_mut(), &values, now) {
                    warning(format!("Could not save draft: {e}"));
                } else {
                    info("Your entries were kept as a draft for the next attempt.");
                }
            }
            Err(AppError::Validation(format!(
                "{} field(s) need attention",
                errors.len()
            )))
        }
        SubmitOutcome::Failed(message) => Err(AppError::Storage(message)),
    }
}

/// Build a field map from optional CLI flags, keeping document order.
pub(crate) fn field_map(pairs: &[(&str, &Option<String>)]) -> IndexMap<String, String> {
    let mut values = IndexMap::new();
    for &(field, value) in pairs {
        values.insert(field.to_string(), value.clone().unwrap_or_default());
    }
    values
}
