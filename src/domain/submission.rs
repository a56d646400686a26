//! Submission - Lifecycle of the Submit Action

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Translation key for the submit button label
    pub fn label_key(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "action-submit",
            SubmissionState::Submitting => "action-submitting",
        }
    }
}

/// How the last submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed { message: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded)
    }

    /// Translation key for the result line under the submit button
    pub fn message_key(&self) -> &'static str {
        match self {
            SubmissionOutcome::Succeeded => "submit-succeeded",
            SubmissionOutcome::Failed { .. } => "submit-failed",
        }
    }
}

impl<E: std::fmt::Display> From<Result<(), E>> for SubmissionOutcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Succeeded,
            Err(e) => SubmissionOutcome::Failed {
                message: e.to_string(),
            },
        }
    }
}
