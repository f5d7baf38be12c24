use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identity, preserved from authoring through persistence.
    #[serde(default)]
    id: QuestionId,

    /// The prompt text shown to the respondent.
    text: String,

    /// The kind of question (determines the answer shape).
    #[serde(flatten)]
    kind: QuestionKind,
}

impl Question {
    /// Create a new question with a fresh id.
    pub fn new(text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: QuestionId::new(),
            text: text.into(),
            kind,
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

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }
}

/// The kind of question, determining how the respondent answers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Single-line free text.
    ShortAnswer,

    /// Multi-line free text.
    LongAnswer,

    /// Pick exactly one of the listed options.
    MultiChoice { options: Vec<String> },

    /// Pick any subset of the listed options.
    MultiSelect { options: Vec<String> },
}

impl QuestionKind {
    /// Get the options list, if this kind has one.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::ShortAnswer | Self::LongAnswer => None,
            Self::MultiChoice { options } | Self::MultiSelect { options } => Some(options),
        }
    }

    /// Check if this kind presents a fixed options list.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::MultiChoice { .. } | Self::MultiSelect { .. })
    }

    /// Check if this kind collects a set of values rather than a single one.
    pub fn expects_multiple(&self) -> bool {
        matches!(self, Self::MultiSelect { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_kinds_expose_options() {
        let kind = QuestionKind::MultiChoice {
            options: vec!["Yes".to_string(), "No".to_string()],
        };
        assert!(kind.is_choice());
        assert!(!kind.expects_multiple());
        assert_eq!(kind.options().unwrap().len(), 2);
    }

    #[test]
    fn text_kinds_have_no_options() {
        assert!(QuestionKind::ShortAnswer.options().is_none());
        assert!(QuestionKind::LongAnswer.options().is_none());
    }

    #[test]
    fn kind_serializes_with_snake_case_tag() {
        let kind = QuestionKind::MultiSelect {
            options: vec!["Steps".to_string(), "Sleep".to_string()],
        };
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(json["type"], "multi_select");
        assert_eq!(json["options"][1], "Sleep");
    }
}
