use indexmap::IndexMap;

use super::draft::DraftAutosave;
use super::sanitize::sanitize;
use super::validator::{FieldState, FieldValidator};
use crate::errors::AppError;
use crate::models::form::FormType;
use crate::models::record::Record;
use crate::store::medium::StorageMedium;
use crate::store::store::PersistenceStore;
use crate::ui::messages::warning;

/// How long the UI should keep the outcome message on screen.
pub const SUCCESS_CLEAR_SECS: u64 = 5;
pub const ERROR_CLEAR_SECS: u64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Submitting,
    Persisting,
}

pub enum SubmitOutcome {
    /// Record persisted and mirrored; draft cleared.
    Saved(Record),
    /// Validation failed; nothing persisted, draft untouched.
    Rejected(Vec<(String, String)>),
    /// Validation passed but the mirror write failed.
    Failed(String),
}

/// Presentation seam. The controller reports validity, focus, busy state and
/// outcome messages through this trait; the CLI renders them.
pub trait FormFeedback {
    fn set_busy(&mut self, busy: bool);
    fn field_valid(&mut self, field: &str);
    fn field_invalid(&mut self, field: &str, message: &str);
    fn focus_field(&mut self, field: &str);
    fn show_success(&mut self, message: &str, clear_after_secs: u64);
    fn show_error(&mut self, message: &str, clear_after_secs: u64);
}

/// Orchestrates one form submission: validate, collect and sanitize,
/// persist, render feedback.
pub struct SubmissionController {
    form: FormType,
    phase: SubmitPhase,
}

impl SubmissionController {
    pub fn new(form: FormType) -> Self {
        Self {
            form,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn submit<M: StorageMedium>(
        &mut self,
        raw: &IndexMap<String, String>,
        store: &mut PersistenceStore<M>,
        autosave: &DraftAutosave,
        feedback: &mut dyn FormFeedback,
    ) -> SubmitOutcome {
        self.phase = SubmitPhase::Validating;
        let mut validator = FieldValidator::new(self.form, store.now().date_naive());
        let all_valid = validator.validate_all(raw);

        for &field in self.form.fields() {
            match validator.state(field) {
                FieldState::Valid => feedback.field_valid(field),
                FieldState::Invalid(msg) => feedback.field_invalid(field, msg),
                FieldState::Untouched => {}
            }
        }

        if !all_valid {
            let errors = validator.errors();
            if let Some((first, _)) = errors.first() {
                feedback.focus_field(first);
            }
            self.phase = SubmitPhase::Idle;
            return SubmitOutcome::Rejected(errors);
        }

        // Collecting only the form's own fields drops the form-type marker.
        self.phase = SubmitPhase::Submitting;
        feedback.set_busy(true);
        let mut fields = IndexMap::new();
        for &field in self.form.fields() {
            if let Some(value) = raw.get(field) {
                let clean = sanitize(value);
                if !clean.is_empty() {
                    fields.insert(field.to_string(), clean);
                }
            }
        }

        self.phase = SubmitPhase::Persisting;
        let outcome = store.add(self.form.kind(), fields);

        // Busy is released before any outcome is rendered, on every path.
        feedback.set_busy(false);
        self.phase = SubmitPhase::Idle;

        if outcome.succeeded {
            if let Err(e) = autosave.clear(store.medium_mut()) {
                warning(format!("Could not clear draft: {e}"));
            }
            feedback.show_success(
                "Submission saved. Use `stitchbook export` to download your records.",
                SUCCESS_CLEAR_SECS,
            );
            SubmitOutcome::Saved(outcome.record)
        } else {
            let message = match outcome.error {
                Some(AppError::QuotaExceeded) => {
                    "Local storage is full. Export and clear old records, then try again."
                }
                _ => "Could not save your submission. Please try again.",
            };
            feedback.show_error(message, ERROR_CLEAR_SECS);
            SubmitOutcome::Failed(message.to_string())
        }
    }
}
