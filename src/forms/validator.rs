use chrono::NaiveDate;
use indexmap::IndexMap;

use super::rules::{Rule, rules_for};
use crate::models::form::FormType;

/// Per-field validation state. A field starts untouched and moves to
/// valid/invalid on first evaluation; re-validation re-enters either state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Binds the rule table to one form and tracks per-field state in the order
/// fields were last evaluated.
pub struct FieldValidator {
    form: FormType,
    today: NaiveDate,
    states: IndexMap<String, FieldState>,
}

impl FieldValidator {
    pub fn new(form: FormType, today: NaiveDate) -> Self {
        Self {
            form,
            today,
            states: IndexMap::new(),
        }
    }

    pub fn state(&self, field: &str) -> &FieldState {
        self.states.get(field).unwrap_or(&FieldState::Untouched)
    }

    /// Evaluate one field. The first failing rule supplies the single error
    /// message; an unchanged value always re-yields the same state.
    pub fn validate_field(&mut self, field: &str, value: &str) -> &FieldState {
        let mut rules: Vec<Rule> = rules_for(field).to_vec();
        if rules.is_empty() && self.form.required_fields().contains(&field) {
            rules.push(Rule::Required);
        }

        let state = rules
            .iter()
            .find_map(|rule| rule.check(value, self.today).err())
            .map(FieldState::Invalid)
            .unwrap_or(FieldState::Valid);

        // Move the field to the end so `errors()` reflects evaluation order.
        self.states.shift_remove(field);
        self.states.insert(field.to_string(), state);
        &self.states[field]
    }

    /// Validate every form field in document order: required fields always,
    /// optional fields only when they carry a value. Returns whether all
    /// evaluated fields passed.
    pub fn validate_all(&mut self, values: &IndexMap<String, String>) -> bool {
        let mut all_valid = true;
        for &field in self.form.fields() {
            let value = values.get(field).map(String::as_str).unwrap_or("");
            let required = self.form.required_fields().contains(&field);
            if !required && value.trim().is_empty() {
                continue;
            }
            if let FieldState::Invalid(_) = self.validate_field(field, value) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Invalid fields with their messages, in last-evaluated order.
    pub fn errors(&self) -> Vec<(String, String)> {
        self.states
            .iter()
            .filter_map(|(field, state)| {
                state
                    .message()
                    .map(|msg| (field.clone(), msg.to_string()))
            })
            .collect()
    }
}
