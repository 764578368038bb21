//! Summary, snippet, and study-plan content.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Bullet-point summary plus a sentence snippet of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Key points, each introduced by `"* "`
    pub summary: String,

    /// Informative sentences from the document
    pub text_snippet: String,
}

impl Summary {
    /// Create a new summary.
    pub fn new(summary: impl Into<String>, text_snippet: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            text_snippet: text_snippet.into(),
        }
    }

    /// Split the summary into its key points.
    ///
    /// Pieces are separated by `"* "`; blank pieces are dropped, and any
    /// leftover leading asterisks (from `"** bold"` style bullets) are removed.
    pub fn key_points(&self) -> Vec<String> {
        self.summary
            .split("* ")
            .filter(|piece| !piece.trim().is_empty())
            .map(|piece| piece.trim_start_matches('*').trim().to_string())
            .filter(|point| !point.is_empty())
            .collect()
    }

    /// Split the snippet into sentences, each ending in terminal punctuation.
    pub fn snippet_sentences(&self) -> Vec<String> {
        sentence_break()
            .split(&self.text_snippet)
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| {
                if sentence.ends_with(['.', '!', '?']) {
                    sentence.to_string()
                } else {
                    format!("{}.", sentence)
                }
            })
            .collect()
    }
}

fn sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\. +").unwrap())
}

/// A multi-day study plan as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyPlan(pub String);

impl StudyPlan {
    /// Create a new study plan.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Raw plan text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Plan text with every emphasis asterisk removed.
    pub fn plain_text(&self) -> String {
        self.0.replace('*', "").trim().to_string()
    }

    /// Check if the plan is blank.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}
