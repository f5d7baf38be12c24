use serde::{Deserialize, Serialize};

use crate::{Question, SurveyId};

/// The top-level structure describing one survey: a title, a coin reward,
/// and an ordered list of questions.
///
/// A definition is presentation-agnostic. The authoring flow builds one
/// incrementally, the taking flow walks a finished one step by step.
/// Invariants (reward > 0, at least one question, choice questions carry
/// at least two options) are enforced at the flow boundaries, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDefinition {
    /// Persistence identity; absent until the survey has been stored.
    #[serde(default)]
    id: Option<SurveyId>,

    /// Title shown to respondents.
    title: String,

    /// Coins credited to the respondent on completion.
    reward: u32,

    /// All questions, in presentation order.
    questions: Vec<Question>,
}

impl SurveyDefinition {
    /// Create a new, not-yet-persisted definition.
    pub fn new(title: impl Into<String>, reward: u32, questions: Vec<Question>) -> Self {
        Self {
            id: None,
            title: title.into(),
            reward,
            questions,
        }
    }

    /// Attach a persistence identity.
    pub fn with_id(mut self, id: SurveyId) -> Self {
        self.id = Some(id);
        self
    }

    /// Get the persistence identity, if any.
    pub fn id(&self) -> Option<SurveyId> {
        self.id
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the coin reward.
    pub fn reward(&self) -> u32 {
        self.reward
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
