use datatown_types::{SurveyId, UserId};

use crate::{NewSurvey, QueryError, QuestionRecord, QuestionnaireRecord, WriteError};

/// Trait for persistence collaborators.
///
/// Any relational or object store with these three operations suffices.
/// Implementations are expected to be non-blocking from the UI thread's
/// point of view; the in-process [`MemoryStore`](crate::MemoryStore)
/// resolves immediately.
pub trait Store {
    /// Insert a survey header and return the generated id.
    fn insert_survey(&self, survey: NewSurvey) -> Result<SurveyId, WriteError>;

    /// Insert a batch of question rows.
    ///
    /// No partial-write guarantee: on failure, the caller cannot assume
    /// which rows landed. The authoring flow surfaces the failure and
    /// leaves the already-inserted header in place.
    fn insert_questions(&self, questions: Vec<QuestionRecord>) -> Result<(), WriteError>;

    /// Look up the onboarding questionnaire response for a user.
    ///
    /// `Ok(None)` means no record exists; an `Err` is a real read failure
    /// and must not be conflated with absence.
    fn find_questionnaire_response(
        &self,
        user: &UserId,
    ) -> Result<Option<QuestionnaireRecord>, QueryError>;
}
