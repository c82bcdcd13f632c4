//! User input and interaction handling.
//! The `Prompter` trait is the seam between the question pipeline and the
//! terminal; the dialoguer implementation is the interactive path, the auto
//! implementation answers everything with defaults for `--non-interactive`.

use crate::config::Question;
use crate::error::Result;
use crate::parser::QuestionType;
use dialoguer::{Confirm, Input, Select};

/// Trait for asking the user questions.
pub trait Prompter {
    /// Asks a single question and returns the raw answer.
    ///
    /// # Arguments
    /// * `question_type` - Kind of prompt to present
    /// * `default_value` - Pre-computed default (a choice index for
    ///   single-choice questions, the value itself otherwise)
    /// * `help` - Rendered prompt text
    /// * `question` - The full question definition (for choices)
    fn answer(
        &self,
        question_type: QuestionType,
        default_value: serde_json::Value,
        help: String,
        question: &Question,
    ) -> Result<serde_json::Value>;

    /// Asks a standalone yes/no confirmation.
    fn confirm(&self, message: String, default: bool) -> Result<bool>;

    /// Whether a rejected answer can be asked again.
    fn interactive(&self) -> bool {
        true
    }
}

/// Interactive prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn answer(
        &self,
        question_type: QuestionType,
        default_value: serde_json::Value,
        help: String,
        question: &Question,
    ) -> Result<serde_json::Value> {
        match question_type {
            QuestionType::SingleChoice => {
                let default_index = default_value.as_u64().unwrap_or(0) as usize;
                let selection = Select::new()
                    .with_prompt(help)
                    .default(default_index)
                    .items(&question.choices)
                    .interact()?;
                Ok(serde_json::Value::String(question.choices[selection].clone()))
            }
            QuestionType::Text => {
                let default_text = default_value.as_str().unwrap_or_default().to_string();
                let input: String =
                    Input::new().with_prompt(help).default(default_text).interact_text()?;
                Ok(serde_json::Value::String(input))
            }
            QuestionType::YesNo => {
                let default = default_value.as_bool().unwrap_or(false);
                let result = Confirm::new().with_prompt(help).default(default).interact()?;
                Ok(serde_json::Value::Bool(result))
            }
        }
    }

    fn confirm(&self, message: String, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(message).default(default).interact()?)
    }
}

/// Prompter for non-interactive runs: every question and every confirmation
/// takes its default.
pub struct AutoPrompter;

impl AutoPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AutoPrompter {
    fn default() -> Self {
        AutoPrompter::new()
    }
}

impl Prompter for AutoPrompter {
    fn answer(
        &self,
        question_type: QuestionType,
        default_value: serde_json::Value,
        _help: String,
        question: &Question,
    ) -> Result<serde_json::Value> {
        match question_type {
            QuestionType::SingleChoice => {
                // The default is a choice index; resolve it to the choice.
                let index = default_value.as_u64().unwrap_or(0) as usize;
                let choice = question.choices.get(index).cloned().unwrap_or_default();
                Ok(serde_json::Value::String(choice))
            }
            _ => Ok(default_value),
        }
    }

    fn confirm(&self, _message: String, default: bool) -> Result<bool> {
        Ok(default)
    }

    fn interactive(&self) -> bool {
        false
    }
}
