use std::collections::HashMap;

/// A single answer collected from a respondent.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// Free text or a single chosen option.
    Text(String),

    /// The chosen options of a multi-select question, in selection order.
    Selections(Vec<String>),
}

impl AnswerValue {
    /// Check if this answer counts as unanswered: blank text or an empty
    /// selection set.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Selections(selections) => selections.is_empty(),
        }
    }

    /// Try to get this answer as a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Selections(_) => None,
        }
    }

    /// Try to get this answer as a selection set.
    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::Selections(selections) => Some(selections),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(selections: Vec<String>) -> Self {
        Self::Selections(selections)
    }
}

/// Answers collected during a survey run, keyed by question index.
///
/// Entries are sparse: a respondent may navigate back and forth, so only
/// visited questions have entries. The taking flow enforces completeness
/// step by step, not here.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    values: HashMap<usize, AnswerValue>,
}

impl AnswerSet {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Store an answer for the given question index, replacing any
    /// previous answer.
    pub fn set(&mut self, index: usize, value: impl Into<AnswerValue>) {
        self.values.insert(index, value.into());
    }

    /// Get the answer for the given question index.
    pub fn get(&self, index: usize) -> Option<&AnswerValue> {
        self.values.get(&index)
    }

    /// Toggle an option in the selection set at the given index: absent
    /// options are appended, present ones removed. A non-selection answer
    /// at that index is replaced by a fresh selection set.
    pub fn toggle(&mut self, index: usize, option: impl Into<String>) {
        let option = option.into();
        let slot = self
            .values
            .entry(index)
            .or_insert_with(|| AnswerValue::Selections(Vec::new()));
        match slot {
            AnswerValue::Selections(selections) => {
                if let Some(position) = selections.iter().position(|s| *s == option) {
                    selections.remove(position);
                } else {
                    selections.push(option);
                }
            }
            AnswerValue::Text(_) => {
                *slot = AnswerValue::Selections(vec![option]);
            }
        }
    }

    /// Check if the given question index has a non-empty answer.
    pub fn answered(&self, index: usize) -> bool {
        self.values.get(&index).is_some_and(|v| !v.is_empty())
    }

    /// Remove the answer at the given index.
    pub fn remove(&mut self, index: usize) -> Option<AnswerValue> {
        self.values.remove(&index)
    }

    /// Get the number of stored answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no stored answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an iterator over all index-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AnswerValue)> {
        self.values.iter().map(|(index, value)| (*index, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_counts_as_unanswered() {
        let mut answers = AnswerSet::new();
        answers.set(0, "   ");
        assert!(!answers.answered(0));

        answers.set(0, "Smartphone");
        assert!(answers.answered(0));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut answers = AnswerSet::new();
        answers.toggle(2, "Laptop");
        answers.toggle(2, "Tablet");
        assert_eq!(
            answers.get(2).unwrap().as_selections().unwrap(),
            ["Laptop".to_string(), "Tablet".to_string()]
        );

        answers.toggle(2, "Laptop");
        assert_eq!(
            answers.get(2).unwrap().as_selections().unwrap(),
            ["Tablet".to_string()]
        );
    }

    #[test]
    fn toggle_pair_restores_prior_state() {
        let mut answers = AnswerSet::new();
        answers.toggle(0, "Sleep");
        let before = answers.get(0).cloned();

        answers.toggle(0, "Steps");
        answers.toggle(0, "Steps");
        assert_eq!(answers.get(0).cloned(), before);
    }

    #[test]
    fn toggle_replaces_text_answer() {
        let mut answers = AnswerSet::new();
        answers.set(1, "free text");
        answers.toggle(1, "Daily");
        assert_eq!(
            answers.get(1).unwrap().as_selections().unwrap(),
            ["Daily".to_string()]
        );
    }

    #[test]
    fn entries_may_be_sparse() {
        let mut answers = AnswerSet::new();
        answers.set(4, "only the last one");
        assert!(!answers.answered(0));
        assert!(answers.answered(4));
        assert_eq!(answers.len(), 1);
    }
}
