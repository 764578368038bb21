//! Multiple-choice question types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the multiple-choice list.
///
/// The service reports generation problems inline as `{"error": "..."}`
/// entries, so every consumer has to handle both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum McqItem {
    /// An inline error report. Tried first: any object with `error` is one.
    Error(ErrorItem),
    /// A question with options.
    Question(Question),
}

impl McqItem {
    /// The question, if this item is one.
    pub fn as_question(&self) -> Option<&Question> {
        match self {
            McqItem::Question(q) => Some(q),
            McqItem::Error(_) => None,
        }
    }

    /// Check if this item is an error report.
    pub fn is_error(&self) -> bool {
        matches!(self, McqItem::Error(_))
    }
}

/// An error reported in place of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// Error description
    pub error: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text
    pub question: String,

    /// Options keyed by letter, in the order the service sent them
    pub options: IndexMap<String, String>,

    /// Key of the correct option
    pub answer: String,

    /// Why the answer is correct
    #[serde(default)]
    pub explanation: String,
}

/// Outcome of answering a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    /// The chosen option is the answer.
    Correct,
    /// The chosen option is wrong; `answer` is the right key.
    Incorrect {
        /// Key of the correct option
        answer: String,
    },
}

impl Grade {
    /// Check if the grade is correct.
    pub fn is_correct(&self) -> bool {
        matches!(self, Grade::Correct)
    }
}

impl Question {
    /// Create a question from `(key, text)` option pairs.
    pub fn new<K, V>(
        question: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            question: question.into(),
            options: options
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Resolve user input to an option key (trimmed, case-insensitive).
    pub fn resolve_choice(&self, choice: &str) -> Option<&str> {
        let choice = choice.trim();
        self.options
            .keys()
            .find(|key| key.eq_ignore_ascii_case(choice))
            .map(String::as_str)
    }

    /// Check if the input names one of the options.
    pub fn is_valid_choice(&self, choice: &str) -> bool {
        self.resolve_choice(choice).is_some()
    }

    /// Grade a choice against the answer key.
    pub fn grade(&self, choice: &str) -> Grade {
        match self.resolve_choice(choice) {
            Some(key) if key == self.answer => Grade::Correct,
            _ => Grade::Incorrect {
                answer: self.answer.clone(),
            },
        }
    }

    /// Display label for an option, e.g. `"A. Mitochondria"`.
    pub fn option_label(&self, key: &str) -> Option<String> {
        self.options
            .get(key)
            .map(|text| format!("{}. {}", key, text))
    }

    /// Text of the correct option, if the answer key is among the options.
    pub fn answer_text(&self) -> Option<&str> {
        self.options.get(&self.answer).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "Which organelle produces ATP?",
            [("A", "Nucleus"), ("B", "Mitochondria"), ("C", "Ribosome"), ("D", "Golgi")],
            "B",
            "Mitochondria run cellular respiration.",
        )
    }

    #[test]
    fn test_grade() {
        let q = sample();
        assert_eq!(q.grade("B"), Grade::Correct);
        assert_eq!(q.grade(" b "), Grade::Correct);
        assert_eq!(
            q.grade("A"),
            Grade::Incorrect {
                answer: "B".to_string()
            }
        );
        assert!(!q.grade("Z").is_correct());
    }

    #[test]
    fn test_option_labels_keep_order() {
        let q = sample();
        let keys: Vec<_> = q.options.keys().cloned().collect();
        assert_eq!(keys, vec!["A", "B", "C", "D"]);
        assert_eq!(q.option_label("B").as_deref(), Some("B. Mitochondria"));
        assert_eq!(q.option_label("E"), None);
        assert_eq!(q.answer_text(), Some("Mitochondria"));
    }

    #[test]
    fn test_valid_choice() {
        let q = sample();
        assert!(q.is_valid_choice("c"));
        assert!(!q.is_valid_choice("E"));
        assert!(!q.is_valid_choice(""));
    }

    #[test]
    fn test_deserialize_mixed_items() {
        let json = r#"[
            {"question": "Q?", "options": {"D": "d", "A": "a"}, "answer": "A", "explanation": "because"},
            {"error": "Gemini returned an empty response for MCQs."}
        ]"#;
        let items: Vec<McqItem> = serde_json::from_str(json).unwrap();

        let q = items[0].as_question().unwrap();
        let keys: Vec<_> = q.options.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["D", "A"]);
        assert!(items[1].is_error());
    }

    #[test]
    fn test_error_field_wins() {
        let json = r#"{"error": "bad", "question": "Q?", "options": {}, "answer": "A"}"#;
        let item: McqItem = serde_json::from_str(json).unwrap();
        assert_eq!(
            item,
            McqItem::Error(ErrorItem {
                error: "bad".to_string()
            })
        );
    }

    #[test]
    fn test_missing_explanation_defaults() {
        let json = r#"{"question": "Q?", "options": {"A": "a"}, "answer": "A"}"#;
        let item: McqItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.as_question().unwrap().explanation, "");
    }
}
