/// Error type for the survey-taking wizard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// The survey has no questions to walk through.
    #[error("survey has no questions")]
    EmptySurvey,

    /// A choice question carries fewer than two options.
    #[error("question {index} has fewer than 2 options")]
    MalformedQuestion {
        /// Zero-based position of the offending question.
        index: usize,
    },

    /// The current question has no (non-empty) answer yet.
    #[error("the current question is not answered")]
    NotAnswered,

    /// Already at the first question; cannot go back.
    #[error("already at the first question")]
    AtFirstQuestion,

    /// Already at the last question; cannot advance further.
    #[error("already at the last question")]
    AtLastQuestion,

    /// Submission is only permitted at the last question.
    #[error("not at the last question")]
    NotAtEnd,

    /// The answer shape does not match the question kind.
    #[error("answer shape does not match the question kind")]
    WrongAnswerShape,

    /// The chosen option is not one of the question's options.
    #[error("option is not offered by this question")]
    UnknownOption,

    /// The run has already been submitted.
    #[error("survey already completed")]
    AlreadyComplete,
}
