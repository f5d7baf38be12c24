use datatown_store::{AuthProvider, NewSurvey, QuestionRecord, Store};
use datatown_types::{QuestionId, QuestionKind, SurveyId};
use tracing::info;

use crate::SubmitError;

/// The kind a question can take while being authored.
///
/// Buyers author single-pick choice questions only; multi-select kinds
/// exist solely in the built-in sponsor catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftKind {
    /// Single-line free text.
    #[default]
    ShortAnswer,
    /// Multi-line free text.
    LongAnswer,
    /// Pick one of a list of options.
    MultiChoice,
}

/// A question being edited in a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftQuestion {
    id: QuestionId,
    text: String,
    kind: DraftKind,
    options: Option<Vec<String>>,
}

impl DraftQuestion {
    fn new() -> Self {
        Self {
            id: QuestionId::new(),
            text: String::new(),
            kind: DraftKind::default(),
            options: None,
        }
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the kind.
    pub fn kind(&self) -> DraftKind {
        self.kind
    }

    /// Get the options list (present only for multiple choice).
    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    fn to_persisted_kind(&self) -> QuestionKind {
        match self.kind {
            DraftKind::ShortAnswer => QuestionKind::ShortAnswer,
            DraftKind::LongAnswer => QuestionKind::LongAnswer,
            DraftKind::MultiChoice => QuestionKind::MultiChoice {
                options: self.options.clone().unwrap_or_default(),
            },
        }
    }
}

/// An in-memory survey draft, built up field by field.
///
/// The reward is kept as the raw input string and parsed at submission,
/// so invalid input is representable and rejected with a user-facing
/// message instead of being silently coerced.
#[derive(Debug, Clone, Default)]
pub struct SurveyDraft {
    title: String,
    reward_input: String,
    questions: Vec<DraftQuestion>,
}

impl SurveyDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the raw reward input.
    pub fn reward_input(&self) -> &str {
        &self.reward_input
    }

    /// Get the questions in authoring order.
    pub fn questions(&self) -> &[DraftQuestion] {
        &self.questions
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the reward input.
    pub fn set_reward(&mut self, input: impl Into<String>) {
        self.reward_input = input.into();
    }

    /// Append a blank short-answer question and return its id.
    pub fn add_question(&mut self) -> QuestionId {
        let question = DraftQuestion::new();
        let id = question.id;
        self.questions.push(question);
        id
    }

    /// Set a question's prompt text; no-op on an unknown id.
    pub fn set_question_text(&mut self, id: QuestionId, text: impl Into<String>) {
        if let Some(question) = self.question_mut(id) {
            question.text = text.into();
        }
    }

    /// Change a question's kind; no-op on an unknown id.
    ///
    /// Switching into multiple choice seeds two blank option slots;
    /// switching out clears the options list.
    pub fn set_question_kind(&mut self, id: QuestionId, kind: DraftKind) {
        if let Some(question) = self.question_mut(id) {
            question.kind = kind;
            question.options = match kind {
                DraftKind::MultiChoice => Some(vec![String::new(), String::new()]),
                DraftKind::ShortAnswer | DraftKind::LongAnswer => None,
            };
        }
    }

    /// Append a blank option to a multiple-choice question.
    pub fn add_option(&mut self, id: QuestionId) {
        if let Some(options) = self.options_mut(id) {
            options.push(String::new());
        }
    }

    /// Set the option text at `index`; no-op when out of range.
    pub fn set_option(&mut self, id: QuestionId, index: usize, value: impl Into<String>) {
        if let Some(options) = self.options_mut(id) {
            if let Some(slot) = options.get_mut(index) {
                *slot = value.into();
            }
        }
    }

    /// Remove the option at `index`; no-op when out of range.
    ///
    /// Dropping below two options is allowed here and caught at
    /// submission.
    pub fn remove_option(&mut self, id: QuestionId, index: usize) {
        if let Some(options) = self.options_mut(id) {
            if index < options.len() {
                options.remove(index);
            }
        }
    }

    /// Delete a question by id.
    pub fn remove_question(&mut self, id: QuestionId) {
        self.questions.retain(|q| q.id != id);
    }

    /// Validate and persist the draft.
    ///
    /// Validation runs rule by rule; the first failure aborts with zero
    /// writes. Persistence is two-phase: the header insert yields the
    /// survey id, then all question rows are inserted in one batch tagged
    /// with that id and their authoring position. A batch failure leaves
    /// the header in place and is surfaced to the caller; the draft is
    /// preserved in both failure cases so the user can retry. On success
    /// the draft resets to empty.
    pub fn submit<A, S>(&mut self, auth: &A, store: &S) -> Result<SurveyId, SubmitError>
    where
        A: AuthProvider + ?Sized,
        S: Store + ?Sized,
    {
        let reward = self.validate()?;

        let owner = auth.current_identity().ok_or(SubmitError::NotAuthenticated)?;

        let survey_id = store.insert_survey(NewSurvey {
            owner,
            title: self.title.clone(),
            reward,
        })?;

        let records = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionRecord {
                survey_id,
                text: question.text.clone(),
                kind: question.to_persisted_kind(),
                order_index: index as u32,
            })
            .collect();

        // Issued only after the header result is observed; on failure the
        // header record remains (no compensating delete).
        store.insert_questions(records)?;

        info!(%survey_id, questions = self.questions.len(), "survey created");

        self.title.clear();
        self.reward_input.clear();
        self.questions.clear();

        Ok(survey_id)
    }

    fn validate(&self) -> Result<u32, SubmitError> {
        if self.title.trim().is_empty() {
            return Err(SubmitError::EmptyTitle);
        }

        let reward = self
            .reward_input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|r| *r > 0)
            .ok_or(SubmitError::InvalidReward)?;

        if self.questions.is_empty() {
            return Err(SubmitError::NoQuestions);
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(SubmitError::EmptyQuestionText { index });
            }
            if question.kind == DraftKind::MultiChoice
                && question.options.as_ref().is_none_or(|o| o.len() < 2)
            {
                return Err(SubmitError::TooFewOptions { index });
            }
        }

        Ok(reward)
    }

    fn question_mut(&mut self, id: QuestionId) -> Option<&mut DraftQuestion> {
        self.questions.iter_mut().find(|q| q.id == id)
    }

    fn options_mut(&mut self, id: QuestionId) -> Option<&mut Vec<String>> {
        self.question_mut(id).and_then(|q| q.options.as_mut())
    }
}
