//! Form state controller
//!
//! Holds the current values, the per-field error slots and the flags that
//! decide whether the submit control is enabled. Every transition is
//! synchronous: a value change re-validates that field only, then recomputes
//! overall validity.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::submission::SubmissionOutcome;
use crate::validation;

/// Raw values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub description: String,
    pub repo_url: String,
    pub level: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Description => &self.description,
            Field::RepoUrl => &self.repo_url,
            Field::Level => &self.level,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Description => &mut self.description,
            Field::RepoUrl => &mut self.repo_url,
            Field::Level => &mut self.level,
        }
    }

    /// Copy with every value trimmed
    pub fn trimmed(&self) -> FormValues {
        FormValues {
            name: validation::trim_input(&self.name).to_string(),
            email: validation::trim_input(&self.email).to_string(),
            description: validation::trim_input(&self.description).to_string(),
            repo_url: validation::trim_input(&self.repo_url).to_string(),
            level: validation::trim_input(&self.level).to_string(),
        }
    }

    /// True when every field passes its validator
    pub fn is_valid(&self) -> bool {
        Field::ALL
            .iter()
            .all(|field| validation::validate(*field, self.get(*field)).is_ok())
    }
}

/// One optional error message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub level: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::RepoUrl => self.repo_url.as_deref(),
            Field::Level => self.level.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Description => &mut self.description,
            Field::RepoUrl => &mut self.repo_url,
            Field::Level => &mut self.level,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// `(field, message)` pairs for every populated slot, in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|msg| (field, msg)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    dirty: bool,
    valid: bool,
    submitting: bool,
    submit_errors: Vec<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Messages from the last rejected submission
    pub fn submit_errors(&self) -> &[String] {
        &self.submit_errors
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.dirty && self.valid && !self.submitting
    }

    /// Change one field: store the value, re-validate that field, recompute validity.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.dirty = true;
        }

        *self.errors.slot_mut(field) = validation::message(field, &value);
        *self.values.slot_mut(field) = value;
        self.valid = self.values.is_valid();

        tracing::debug!(
            field = field.wire_key(),
            dirty = self.dirty,
            valid = self.valid,
            "form field updated"
        );
    }

    /// Enter the submitting state and hand out the trimmed values.
    ///
    /// Returns `None` while the control is disabled, which also rejects a
    /// second click while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<FormValues> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        Some(self.values.trimmed())
    }

    /// Leave the submitting state, recording the outcome's messages.
    pub fn finish_submit(&mut self, outcome: &SubmissionOutcome) {
        self.submitting = false;
        match outcome {
            SubmissionOutcome::Accepted(_) => self.submit_errors.clear(),
            SubmissionOutcome::Rejected(messages) => self.submit_errors = messages.clone(),
        }
    }
}
