use datatown_types::{AnswerSet, Question, QuestionKind, SurveyDefinition};
use tracing::info;

use crate::WizardError;

/// A single respondent's walk through one survey.
///
/// The run starts at question 0 and moves strictly one step at a time.
/// `next` is gated on the current question being answered, so by the time
/// the last question is reached every earlier one has a stored answer.
/// Answers survive backwards navigation.
#[derive(Debug, Clone)]
pub struct SurveyRun {
    survey: SurveyDefinition,
    current: usize,
    answers: AnswerSet,
    complete: bool,
}

impl SurveyRun {
    /// Start a run at the first question.
    ///
    /// Rejects surveys with no questions and choice questions with fewer
    /// than two options.
    pub fn new(survey: SurveyDefinition) -> Result<Self, WizardError> {
        if survey.is_empty() {
            return Err(WizardError::EmptySurvey);
        }
        for (index, question) in survey.questions().iter().enumerate() {
            if let Some(options) = question.kind().options() {
                if options.len() < 2 {
                    return Err(WizardError::MalformedQuestion { index });
                }
            }
        }
        Ok(Self {
            survey,
            current: 0,
            answers: AnswerSet::new(),
            complete: false,
        })
    }

    /// Get the survey being taken.
    pub fn survey(&self) -> &SurveyDefinition {
        &self.survey
    }

    /// Get the zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Get the current question.
    pub fn current_question(&self) -> &Question {
        &self.survey.questions()[self.current]
    }

    /// Get the answers collected so far.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Fraction of the survey reached, in (0, 1]. Purely derived.
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.survey.len() as f32
    }

    /// Check if the current question has a non-empty answer.
    pub fn is_answered(&self) -> bool {
        self.answers.answered(self.current)
    }

    /// Check if the run has been submitted.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Store a free-text answer for the current question.
    pub fn answer_text(&mut self, text: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_active()?;
        match self.current_question().kind() {
            QuestionKind::ShortAnswer | QuestionKind::LongAnswer => {
                self.answers.set(self.current, text.into());
                Ok(())
            }
            QuestionKind::MultiChoice { .. } | QuestionKind::MultiSelect { .. } => {
                Err(WizardError::WrongAnswerShape)
            }
        }
    }

    /// Choose the single option for the current multiple-choice question,
    /// replacing any previous choice.
    pub fn choose(&mut self, option: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_active()?;
        let option = option.into();
        match self.current_question().kind() {
            QuestionKind::MultiChoice { options } => {
                if !options.contains(&option) {
                    return Err(WizardError::UnknownOption);
                }
                self.answers.set(self.current, option);
                Ok(())
            }
            _ => Err(WizardError::WrongAnswerShape),
        }
    }

    /// Toggle an option in the current multi-select question: selecting it
    /// if absent, deselecting it if present.
    pub fn toggle(&mut self, option: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_active()?;
        let option = option.into();
        match self.current_question().kind() {
            QuestionKind::MultiSelect { options } => {
                if !options.contains(&option) {
                    return Err(WizardError::UnknownOption);
                }
                self.answers.toggle(self.current, option);
                Ok(())
            }
            _ => Err(WizardError::WrongAnswerShape),
        }
    }

    /// Advance to the next question.
    ///
    /// Fails without state change when the current question is
    /// unanswered or already the last one.
    pub fn next(&mut self) -> Result<(), WizardError> {
        self.ensure_active()?;
        if !self.is_answered() {
            return Err(WizardError::NotAnswered);
        }
        if self.current + 1 >= self.survey.len() {
            return Err(WizardError::AtLastQuestion);
        }
        self.current += 1;
        Ok(())
    }

    /// Go back to the previous question, keeping the answer being left.
    pub fn previous(&mut self) -> Result<(), WizardError> {
        self.ensure_active()?;
        if self.current == 0 {
            return Err(WizardError::AtFirstQuestion);
        }
        self.current -= 1;
        Ok(())
    }

    /// Submit the run and collect the reward.
    ///
    /// Permitted only at the last question with a non-empty answer.
    /// Succeeds at most once per run.
    pub fn submit(&mut self) -> Result<u32, WizardError> {
        self.ensure_active()?;
        if self.current + 1 != self.survey.len() {
            return Err(WizardError::NotAtEnd);
        }
        if !self.is_answered() {
            return Err(WizardError::NotAnswered);
        }
        self.complete = true;
        let reward = self.survey.reward();
        info!(title = self.survey.title(), reward, "survey completed");
        Ok(reward)
    }

    fn ensure_active(&self) -> Result<(), WizardError> {
        if self.complete {
            return Err(WizardError::AlreadyComplete);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use datatown_types::Question;

    use super::*;

    fn radio(text: &str, options: &[&str]) -> Question {
        Question::new(
            text,
            QuestionKind::MultiChoice {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    fn checkbox(text: &str, options: &[&str]) -> Question {
        Question::new(
            text,
            QuestionKind::MultiSelect {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    fn sample_survey() -> SurveyDefinition {
        SurveyDefinition::new(
            "TechCorp Survey",
            50,
            vec![
                radio("How often?", &["Daily", "Rarely", "Never"]),
                checkbox("Which devices?", &["Smartphone", "Tablet", "Laptop"]),
                Question::new("Anything else?", QuestionKind::ShortAnswer),
            ],
        )
    }

    #[test]
    fn empty_survey_rejected() {
        let survey = SurveyDefinition::new("empty", 10, Vec::new());
        assert_eq!(SurveyRun::new(survey).unwrap_err(), WizardError::EmptySurvey);
    }

    #[test]
    fn choice_question_with_one_option_rejected() {
        let survey = SurveyDefinition::new("bad", 10, vec![radio("Pick", &["Only"])]);
        assert_eq!(
            SurveyRun::new(survey).unwrap_err(),
            WizardError::MalformedQuestion { index: 0 }
        );
    }

    #[test]
    fn next_is_a_no_op_when_unanswered() {
        let mut run = SurveyRun::new(sample_survey()).unwrap();
        assert_eq!(run.next().unwrap_err(), WizardError::NotAnswered);
        assert_eq!(run.current_index(), 0);
    }

    #[test]
    fn answered_step_advances_and_progress_tracks() {
        let mut run = SurveyRun::new(sample_survey()).unwrap();
        assert!((run.progress() - 1.0 / 3.0).abs() < f32::EPSILON);

        run.choose("Daily").unwrap();
        run.next().unwrap();
        assert_eq!(run.current_index(), 1);
        assert!((run.progress() - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn previous_keeps_the_answer_left_behind() {
        let mut run = SurveyRun::new(sample_survey()).unwrap();
        run.choose("Rarely").unwrap();
        run.next().unwrap();
        run.previous().unwrap();
        assert_eq!(run.current_index(), 0);
        assert!(run.is_answered());
    }

    #[test]
    fn previous_disabled_at_first_question() {
        let mut run = SurveyRun::new(sample_survey()).unwrap();
        assert_eq!(run.previous().unwrap_err(), WizardError::AtFirstQuestion);
    }

    #[test]
    fn toggle_pair_returns_to_unanswered() {
        let mut run = SurveyRun::new(sample_survey()).unwrap();
        run.choose("Daily").unwrap();
        run.next().unwrap();

        run.toggle("Tablet").unwrap();
        assert!(run.is_answered());
        run.toggle("Tablet").unwrap();
        assert!(!run.is_answered());
    }

    #[test]
    fn answer_shapes_are_enforced() {
        let mut run = SurveyRun::new(sample_survey()).unwrap();
        assert_eq!(
            run.answer_text("free text").unwrap_err(),
            WizardError::WrongAnswerShape
        );
        assert_eq!(run.toggle("Daily").unwrap_err(), WizardError::WrongAnswerShape);
        assert_eq!(run.choose("Hourly").unwrap_err(), WizardError::UnknownOption);
    }

    #[test]
    fn submit_only_at_the_answered_last_question() {
        let mut run = SurveyRun::new(sample_survey()).unwrap();
        run.choose("Daily").unwrap();
        assert_eq!(run.submit().unwrap_err(), WizardError::NotAtEnd);

        run.next().unwrap();
        run.toggle("Smartphone").unwrap();
        run.next().unwrap();
        assert_eq!(run.submit().unwrap_err(), WizardError::NotAnswered);

        run.answer_text("No, thanks").unwrap();
        assert_eq!(run.submit().unwrap(), 50);
        assert!(run.is_complete());
    }

    #[test]
    fn reward_is_yielded_exactly_once() {
        let mut run = SurveyRun::new(SurveyDefinition::new(
            "one step",
            90,
            vec![Question::new("Say hi", QuestionKind::ShortAnswer)],
        ))
        .unwrap();
        run.answer_text("hi").unwrap();
        assert_eq!(run.submit().unwrap(), 90);
        assert_eq!(run.submit().unwrap_err(), WizardError::AlreadyComplete);
        assert_eq!(run.next().unwrap_err(), WizardError::AlreadyComplete);
    }

    #[test]
    fn blank_text_does_not_unlock_next() {
        let mut run = SurveyRun::new(SurveyDefinition::new(
            "text only",
            10,
            vec![
                Question::new("First", QuestionKind::ShortAnswer),
                Question::new("Second", QuestionKind::LongAnswer),
            ],
        ))
        .unwrap();
        run.answer_text("   ").unwrap();
        assert_eq!(run.next().unwrap_err(), WizardError::NotAnswered);

        run.answer_text("an answer").unwrap();
        run.next().unwrap();
        assert_eq!(run.current_index(), 1);
    }
}
