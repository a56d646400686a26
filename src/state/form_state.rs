//! ProfileFormState - Editable Form with Validation and Submit Gating
//!
//! Every mutating method re-runs `validate`, so `validation()` always matches
//! the current values. Inline errors are only shown for fields the user has
//! touched, while aggregate validity covers every field.

use ahash::AHashSet;
use tracing::debug;

use crate::domain::form::{FormSnapshot, FormState};
use crate::domain::hobbies::{AppendOutcome, FirstEntryPolicy, HobbyEntry, HobbyId};
use crate::domain::submission::{SubmissionOutcome, SubmissionState};
use crate::domain::validation::{validate, FieldError, FieldPath, ValidationResult};
use crate::error::Result;

/// Field identity that survives hobby reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TouchedField {
    Username,
    Email,
    Password,
    Hobby(HobbyId),
}

/// State for the profile form
#[derive(Debug, Clone)]
pub struct ProfileFormState {
    form: FormState,
    validation: ValidationResult,
    submission: SubmissionState,
    last_outcome: Option<SubmissionOutcome>,
    touched: AHashSet<TouchedField>,
}

impl ProfileFormState {
    /// Create an empty form
    pub fn new(policy: FirstEntryPolicy) -> Self {
        let form = FormState::new(policy);
        let validation = validate(&form);
        Self {
            form,
            validation,
            submission: SubmissionState::Idle,
            last_outcome: None,
            touched: AHashSet::new(),
        }
    }

    // ==================== Getters ====================

    /// Current values
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Validation of the current values
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Submission lifecycle state
    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// How the last submission ended
    pub fn last_outcome(&self) -> Option<&SubmissionOutcome> {
        self.last_outcome.as_ref()
    }

    /// Error to render under a field, hidden until the field is edited
    pub fn visible_error(&self, path: FieldPath) -> Option<&FieldError> {
        let touched = match path {
            FieldPath::Username => TouchedField::Username,
            FieldPath::Email => TouchedField::Email,
            FieldPath::Password => TouchedField::Password,
            FieldPath::HobbyName(index) => TouchedField::Hobby(self.form.hobbies.get(index)?.id()),
        };
        if self.touched.contains(&touched) {
            self.validation.error(path)
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        self.validation.is_valid() && !self.submission.is_submitting()
    }

    pub fn can_append_hobby(&self) -> bool {
        self.form.hobbies.can_append()
    }

    pub fn can_remove_hobby(&self, index: usize) -> bool {
        self.form.hobbies.can_remove(index)
    }

    /// Translation key for the submit button label
    pub fn submit_label_key(&self) -> &'static str {
        self.submission.label_key()
    }

    // ==================== Mutations ====================

    fn revalidate(&mut self) {
        self.validation = validate(&self.form);
        debug!(
            errors = self.validation.error_count(),
            valid = self.validation.is_valid(),
            "Form revalidated"
        );
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.form.username = value.into();
        self.touched.insert(TouchedField::Username);
        self.revalidate();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.touched.insert(TouchedField::Email);
        self.revalidate();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
        self.touched.insert(TouchedField::Password);
        self.revalidate();
    }

    /// Rename the hobby with `id`
    pub fn set_hobby_name(&mut self, id: HobbyId, value: impl Into<String>) -> Result<()> {
        self.form.hobbies.set_name_by_id(id, value)?;
        self.touched.insert(TouchedField::Hobby(id));
        self.revalidate();
        Ok(())
    }

    /// Append a blank hobby unless one is already blank
    pub fn append_hobby(&mut self) -> AppendOutcome {
        let outcome = self.form.hobbies.append();
        if matches!(outcome, AppendOutcome::Appended(_)) {
            self.revalidate();
        }
        outcome
    }

    /// Remove the hobby at `index`
    pub fn remove_hobby(&mut self, index: usize) -> Result<HobbyEntry> {
        let removed = self.form.hobbies.remove(index)?;
        self.touched.remove(&TouchedField::Hobby(removed.id()));
        self.revalidate();
        Ok(removed)
    }

    /// Change the first-entry removal policy; returns whether it changed
    pub fn set_first_entry_policy(&mut self, policy: FirstEntryPolicy) -> bool {
        if self.form.hobbies.policy() == policy {
            return false;
        }
        debug!(?policy, "First entry policy changed");
        self.form.hobbies.set_policy(policy);
        true
    }

    /// Move to `Submitting` and hand out the payload, or refuse
    pub fn begin_submit(&mut self) -> Option<FormSnapshot> {
        if !self.can_submit() {
            debug!(
                submitting = self.submission.is_submitting(),
                "Submit refused"
            );
            return None;
        }
        self.submission = SubmissionState::Submitting;
        self.last_outcome = None;
        Some(self.form.snapshot())
    }

    /// Return to `Idle` and record how the submission ended
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) {
        self.submission = SubmissionState::Idle;
        self.last_outcome = Some(outcome);
    }
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self::new(FirstEntryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::validation::ValidationErrorKind;
    use crate::services::{FormSubmitter, SimulatedSubmitter};

    fn filled_state() -> ProfileFormState {
        let mut state = ProfileFormState::default();
        state.set_username("ab");
        state.set_email("a@b.com");
        state.set_password("12345678");
        let id = state.form().hobbies.ids()[0];
        state.set_hobby_name(id, "chess").expect("set hobby");
        state
    }

    #[test]
    fn test_default_state_is_invalid_and_idle() {
        let state = ProfileFormState::default();
        assert!(!state.validation().is_valid());
        assert!(!state.can_submit());
        assert_eq!(state.submission(), SubmissionState::Idle);
        assert!(!state.can_append_hobby());
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut state = ProfileFormState::default();
        assert!(state.validation().error(FieldPath::Username).is_some());
        assert!(state.visible_error(FieldPath::Username).is_none());

        state.set_username("a");
        assert_eq!(
            state.visible_error(FieldPath::Username).map(|e| e.kind),
            Some(ValidationErrorKind::MinLength { min: 2 })
        );
        assert!(state.visible_error(FieldPath::Email).is_none());
    }

    #[test]
    fn test_filled_form_enables_submit() {
        let state = filled_state();
        assert!(state.validation().is_valid());
        assert!(state.can_submit());
        assert_eq!(state.submit_label_key(), "action-submit");
    }

    #[test]
    fn test_short_username_disables_submit() {
        let mut state = filled_state();
        state.set_username("a");
        assert!(!state.validation().is_valid());
        assert!(!state.can_submit());

        let mut refused = state.clone();
        assert!(refused.begin_submit().is_none());
        assert_eq!(refused.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_append_revalidates() {
        let mut state = filled_state();
        assert!(matches!(state.append_hobby(), AppendOutcome::Appended(_)));
        assert_eq!(state.form().hobbies.len(), 2);
        assert!(!state.can_submit());
        assert!(state.validation().error(FieldPath::HobbyName(1)).is_some());
        assert_eq!(state.append_hobby(), AppendOutcome::Ignored);
        assert_eq!(state.form().hobbies.len(), 2);
    }

    #[test]
    fn test_remove_revalidates_and_forgets_touch() {
        let mut state = filled_state();
        let AppendOutcome::Appended(id) = state.append_hobby() else {
            panic!("append should succeed");
        };
        state.set_hobby_name(id, "").expect("set hobby");
        assert!(state.visible_error(FieldPath::HobbyName(1)).is_some());

        let removed = state.remove_hobby(1).expect("remove");
        assert_eq!(removed.id(), id);
        assert!(state.can_submit());
        assert!(state.remove_hobby(0).is_err());
    }

    #[test]
    fn test_begin_submit_blocks_second_submit() {
        let mut state = filled_state();
        let snapshot = state.begin_submit().expect("first submit");
        assert_eq!(snapshot.username, "ab");
        assert_eq!(state.submission(), SubmissionState::Submitting);
        assert_eq!(state.submit_label_key(), "action-submitting");
        assert!(!state.can_submit());
        assert!(state.begin_submit().is_none());

        state.finish_submit(SubmissionOutcome::Succeeded);
        assert_eq!(state.submission(), SubmissionState::Idle);
        assert!(state.can_submit());
        assert_eq!(state.last_outcome(), Some(&SubmissionOutcome::Succeeded));
        assert_eq!(state.form().username, "ab");
    }

    #[test]
    fn test_failed_submit_returns_to_idle_and_keeps_values() {
        let mut state = filled_state();
        state.begin_submit().expect("submit");
        state.finish_submit(SubmissionOutcome::Failed {
            message: "boom".into(),
        });
        assert_eq!(state.submission(), SubmissionState::Idle);
        assert!(!state.last_outcome().expect("outcome").is_success());
        assert_eq!(state.form().email, "a@b.com");
    }

    #[test]
    fn test_policy_change_allows_first_removal() {
        let mut state = filled_state();
        state.append_hobby();
        assert!(!state.can_remove_hobby(0));
        assert!(!state.set_first_entry_policy(FirstEntryPolicy::Pinned));
        assert!(state.set_first_entry_policy(FirstEntryPolicy::Removable));
        assert!(state.can_remove_hobby(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_lifecycle_with_delay() {
        let mut state = filled_state();
        let submitter = SimulatedSubmitter::new(Duration::from_millis(2000));

        let snapshot = state.begin_submit().expect("submit enabled");
        assert_eq!(state.submission(), SubmissionState::Submitting);

        let started = tokio::time::Instant::now();
        let result = submitter.submit(snapshot).await;
        assert!(started.elapsed() >= Duration::from_millis(2000));

        state.finish_submit(result.into());
        assert_eq!(state.submission(), SubmissionState::Idle);
        assert_eq!(state.last_outcome(), Some(&SubmissionOutcome::Succeeded));
    }
}
