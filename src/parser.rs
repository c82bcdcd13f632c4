//! The question pipeline.
//! Walks the template's questions in declaration order, resolves each answer
//! from a forced value, a preloaded answers file or the prompt, and runs the
//! suggestion and post-answer hooks around it.

use crate::config::{Question, ValueType};
use crate::context::Configurator;
use crate::error::{Error, Result};
use crate::hooks::{self, Outcome};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use indexmap::IndexMap;
use std::path::Path;

#[derive(Clone, Copy)]
pub enum QuestionType {
    SingleChoice,
    Text,
    YesNo,
}

/// Where an answer came from. Only answers typed at the prompt are asked
/// again after a recoverable validation failure.
#[derive(Debug, PartialEq)]
enum AnswerSource {
    Forced,
    Preloaded,
    Prompt,
}

/// Retrieves the default value of single choice
pub fn get_single_choice_default(question: &Question) -> serde_json::Value {
    let default_value = if let Some(default_value) = &question.default {
        if let Some(default_str) = default_value.as_str() {
            question.choices.iter().position(|choice| choice == default_str).unwrap_or(0)
        } else {
            0
        }
    } else {
        0
    };

    serde_json::Value::Number(default_value.into())
}

pub fn get_text_default(
    question: &Question,
    current_context: &serde_json::Value,
    engine: &dyn TemplateRenderer,
) -> serde_json::Value {
    let default_value = if let Some(default_value) = &question.default {
        if let Some(s) = default_value.as_str() {
            engine.render(s, current_context).unwrap_or_default()
        } else {
            String::new()
        }
    } else {
        String::new()
    };

    serde_json::Value::String(default_value)
}

pub fn get_yes_no_default(question: &Question) -> serde_json::Value {
    let default_value = if let Some(default_value) = &question.default {
        default_value.as_bool().unwrap_or(false)
    } else {
        false
    };

    serde_json::Value::Bool(default_value)
}

/// Loads preloaded answers from a file, trying JSON first and YAML second.
/// Returns `Null` when no file was given.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::ConfigError` if neither parse succeeds
pub fn get_answers_from(answers_file: Option<&Path>) -> Result<serde_json::Value> {
    let Some(path) = answers_file else {
        return Ok(serde_json::Value::Null);
    };

    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    serde_json::from_str(&content)
        .or_else(|_| serde_yaml::from_str(&content))
        .map_err(|e| Error::ConfigError(format!("Invalid answers file format: {}", e)))
}

/// Asks every question and stores the accepted answers in the configurator.
///
/// Answers an earlier hook forced into the configurator and answers from the
/// preloaded file skip the prompt but still run the question's post hook, so
/// free-text booleans normalize and cascades fire on non-interactive runs
/// too. A post hook that rejects the answer aborts the whole run.
pub fn get_answers(
    engine: &dyn TemplateRenderer,
    prompt: &dyn Prompter,
    configurator: &mut Configurator,
    questions: IndexMap<String, Question>,
    preloaded_answers: serde_json::Value,
) -> Result<()> {
    for (key, mut question) in questions {
        let current_context = configurator.render_context();

        let forced = configurator.contains(&key);
        let preloaded_answer =
            if forced { None } else { preloaded_answers.get(&key).cloned() };
        let prompted = !forced && preloaded_answer.is_none();

        if prompted {
            if let Some(hook) = question.suggest {
                hooks::apply_suggest(hook, configurator, &mut question)?;
            }
        }

        let (question_type, default_value) = match question.value_type {
            ValueType::Str => {
                if !question.choices.is_empty() {
                    let default_value = get_single_choice_default(&question);
                    (QuestionType::SingleChoice, default_value)
                } else {
                    let default_value =
                        get_text_default(&question, &current_context, engine);
                    (QuestionType::Text, default_value)
                }
            }
            ValueType::Bool => {
                let default_value = get_yes_no_default(&question);
                (QuestionType::YesNo, default_value)
            }
        };

        // Sometimes "help" contains template strings referring to earlier
        // answers; render it before presenting the question.
        let help_rendered = engine
            .render(&question.help, &current_context)
            .unwrap_or(question.help.clone());

        let (mut answer, source) = if forced {
            let value = configurator.get(&key).cloned().unwrap_or_default();
            (value, AnswerSource::Forced)
        } else if let Some(value) = preloaded_answer {
            (value, AnswerSource::Preloaded)
        } else {
            let value = prompt.answer(
                question_type,
                default_value.clone(),
                help_rendered.clone(),
                &question,
            )?;
            (value, AnswerSource::Prompt)
        };

        let accepted = loop {
            let outcome = match question.post {
                Some(hook) => hooks::apply_answer_hook(hook, configurator, &answer, prompt),
                None => Ok(Outcome::Accepted(answer.clone())),
            };

            match outcome {
                Ok(Outcome::Accepted(value)) => break value,
                Ok(Outcome::Rejected) => return Err(Error::Aborted),
                Err(Error::ValidationError(message))
                    if source == AnswerSource::Prompt && prompt.interactive() =>
                {
                    log::warn!("{}", message);
                    answer = prompt.answer(
                        question_type,
                        default_value.clone(),
                        help_rendered.clone(),
                        &question,
                    )?;
                }
                Err(err) => return Err(err),
            }
        };

        configurator.set(&key, accepted);
    }

    Ok(())
}
