use datatown_store::WriteError;

/// Error type for draft submission.
///
/// Validation variants are user-correctable and reported one at a time,
/// in the order the rules are checked. `Write` failures leave the draft
/// intact so the user can retry.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The survey has no title.
    #[error("Please enter a survey title")]
    EmptyTitle,

    /// The reward is not a positive whole number of coins.
    #[error("Please enter a valid payment amount")]
    InvalidReward,

    /// The survey has no questions.
    #[error("Please add at least one question")]
    NoQuestions,

    /// A question has no prompt text.
    #[error("All questions must have text")]
    EmptyQuestionText {
        /// Zero-based position of the offending question.
        index: usize,
    },

    /// A multiple-choice question has fewer than two options.
    #[error("Multiple choice questions must have at least 2 options")]
    TooFewOptions {
        /// Zero-based position of the offending question.
        index: usize,
    },

    /// No identity was available at submission time.
    #[error("You must be logged in to create surveys")]
    NotAuthenticated,

    /// The persistence collaborator rejected a write.
    #[error("Failed to create survey")]
    Write(#[from] WriteError),
}

impl SubmitError {
    /// Check if this error is a user-correctable validation defect.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTitle
                | Self::InvalidReward
                | Self::NoQuestions
                | Self::EmptyQuestionText { .. }
                | Self::TooFewOptions { .. }
        )
    }
}
