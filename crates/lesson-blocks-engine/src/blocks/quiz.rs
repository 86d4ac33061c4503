use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Payload of a `quiz` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizContent {
    pub question: String,
    /// Quiz flavor discriminator (serialized as `type`, defaulting to
    /// `multiple-choice` when the author leaves it out).
    #[serde(rename = "type", default)]
    pub kind: QuizKind,
    pub options: Vec<QuizOption>,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// `multiple-choice` is single-select: picking an option replaces the
/// current pick. A true multi-select quiz would be a distinct kind with its
/// own renderer registration, not a mode of this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizKind {
    #[default]
    MultipleChoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Authoring mistakes that make a quiz unanswerable.
///
/// These are surfaced before any interaction so the renderer can fail closed
/// with an error state instead of grading against a broken answer key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizContentError {
    #[error("quiz has no options")]
    NoOptions,
    #[error("no option is marked correct")]
    NoCorrectOption,
    #[error("duplicate option id '{0}'")]
    DuplicateOptionId(String),
}

impl QuizContent {
    pub fn validate(&self) -> Result<(), QuizContentError> {
        if self.options.is_empty() {
            return Err(QuizContentError::NoOptions);
        }
        let mut seen = BTreeSet::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                return Err(QuizContentError::DuplicateOptionId(option.id.clone()));
            }
        }
        if !self.options.iter().any(|option| option.correct) {
            return Err(QuizContentError::NoCorrectOption);
        }
        Ok(())
    }

    /// The set of option ids flagged correct.
    pub fn correctness_set(&self) -> BTreeSet<&str> {
        self.options
            .iter()
            .filter(|option| option.correct)
            .map(|option| option.id.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Unanswered,
    Selected,
    Submitted,
}

/// Ephemeral per-render quiz state: `Unanswered → Selected → Submitted`.
///
/// A session belongs to one renderer instance and dies with it: it knows
/// the current selection and whether it was submitted, nothing more.
/// Attempt counting, retry gating, and hint reveal live in the calling
/// lesson layer; a fresh render instance always starts from `Unanswered`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    selected: BTreeSet<String>,
    submitted: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.submitted {
            QuizPhase::Submitted
        } else if self.selected.is_empty() {
            QuizPhase::Unanswered
        } else {
            QuizPhase::Selected
        }
    }

    /// Pick an option. Single-select: the pick replaces any previous one.
    /// Ignored once the session is submitted.
    pub fn select(&mut self, option_id: &str) {
        if self.submitted {
            return;
        }
        self.selected.clear();
        self.selected.insert(option_id.to_string());
    }

    /// Lock in the current selection. Requires at least one pick; submitting
    /// twice changes nothing. Returns whether the transition happened.
    pub fn submit(&mut self) -> bool {
        if self.submitted || self.selected.is_empty() {
            return false;
        }
        self.submitted = true;
        true
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_selected(&self, option_id: &str) -> bool {
        self.selected.contains(option_id)
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Exact set equality between the selection and the correctness set.
    /// A proper subset, a superset, or any incorrect pick grades false.
    pub fn is_correct(&self, quiz: &QuizContent) -> bool {
        let picked: BTreeSet<&str> = self.selected.iter().map(String::as_str).collect();
        picked == quiz.correctness_set()
    }
}
