use chrono::{DateTime, Duration, Local};
use indexmap::IndexMap;

use crate::errors::AppResult;
use crate::models::form::FormType;
use crate::store::medium::StorageMedium;

/// Drafts older than this are removed by cleanup.
pub const DRAFT_TTL_HOURS: i64 = 24;

/// Internal marker key; never persisted as part of a draft.
const FORM_TYPE_MARKER: &str = "formType";

struct Pending {
    values: IndexMap<String, String>,
    changed_at: DateTime<Local>,
}

/// Crash/navigation-resilient draft recovery, one slot per form type.
///
/// Field changes are recorded with `note_change` and written out by `flush`
/// once the quiet period has elapsed (trailing debounce: a newer change
/// supersedes the pending one). A draft is strictly single-use: `load`
/// clears it whether or not the caller applies it.
pub struct DraftAutosave {
    form: FormType,
    quiet_period: Duration,
    pending: Option<Pending>,
}

impl DraftAutosave {
    pub fn new(form: FormType, quiet_secs: u64) -> Self {
        Self {
            form,
            quiet_period: Duration::seconds(quiet_secs as i64),
            pending: None,
        }
    }

    pub fn form(&self) -> FormType {
        self.form
    }

    /// Record the current field values; the quiet period restarts.
    pub fn note_change(&mut self, values: IndexMap<String, String>, now: DateTime<Local>) {
        self.pending = Some(Pending {
            values,
            changed_at: now,
        });
    }

    /// Write the pending draft if the quiet period has elapsed. Returns
    /// whether a write happened.
    pub fn flush<M: StorageMedium>(&mut self, medium: &mut M, now: DateTime<Local>) -> AppResult<bool> {
        match self.pending.take() {
            Some(p) if now - p.changed_at >= self.quiet_period => {
                self.save_now(medium, &p.values, now)?;
                Ok(true)
            }
            Some(p) => {
                self.pending = Some(p);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Write a draft immediately, bypassing the debounce window.
    pub fn save_now<M: StorageMedium>(
        &self,
        medium: &mut M,
        values: &IndexMap<String, String>,
        now: DateTime<Local>,
    ) -> AppResult<()> {
        let to_save: IndexMap<&String, &String> = values
            .iter()
            .filter(|(k, _)| k.as_str() != FORM_TYPE_MARKER)
            .collect();
        let json = serde_json::to_string(&to_save)?;
        medium.set(&self.form.draft_key(), &json)?;
        medium.set(
            &self.form.draft_timestamp_key(),
            &now.timestamp_millis().to_string(),
        )?;
        Ok(())
    }

    /// Read the draft for this form, then clear it. A malformed draft reads
    /// as None and is still cleared.
    pub fn load<M: StorageMedium>(
        &self,
        medium: &mut M,
    ) -> AppResult<Option<IndexMap<String, String>>> {
        let raw = medium.get(&self.form.draft_key())?;
        let draft = raw.and_then(|json| serde_json::from_str(&json).ok());
        self.clear(medium)?;
        Ok(draft)
    }

    /// Fill empty fields from a loaded draft. A field the user already
    /// filled in this session is never overwritten.
    pub fn apply_to(draft: &IndexMap<String, String>, values: &mut IndexMap<String, String>) {
        for (field, saved) in draft {
            let current = values.get(field).map(String::as_str).unwrap_or("");
            if current.trim().is_empty() && !saved.trim().is_empty() {
                values.insert(field.clone(), saved.clone());
            }
        }
    }

    /// Remove the draft and its timestamp key.
    pub fn clear<M: StorageMedium>(&self, medium: &mut M) -> AppResult<()> {
        medium.remove(&self.form.draft_key())?;
        medium.remove(&self.form.draft_timestamp_key())?;
        Ok(())
    }
}
