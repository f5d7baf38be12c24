use datatown_types::{QuestionKind, SurveyId, UserId};

/// A survey header to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSurvey {
    /// The buyer who authored the survey.
    pub owner: UserId,

    /// Survey title.
    pub title: String,

    /// Coins paid out per completed response.
    pub reward: u32,
}

/// A persisted survey header, as returned by store accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSurvey {
    /// Store-assigned identity.
    pub id: SurveyId,

    /// The buyer who authored the survey.
    pub owner: UserId,

    /// Survey title.
    pub title: String,

    /// Coins paid out per completed response.
    pub reward: u32,
}

/// One question row of a survey, tagged with its parent and position.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    /// The survey this question belongs to.
    pub survey_id: SurveyId,

    /// The prompt text.
    pub text: String,

    /// The question kind; options travel inside choice kinds.
    pub kind: QuestionKind,

    /// Zero-based position within the survey.
    pub order_index: u32,
}

/// An onboarding questionnaire response; its existence for a user is what
/// gates the onboarding-dependent views.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireRecord {
    /// The user who completed the questionnaire.
    pub user: UserId,
}
