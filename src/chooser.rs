//! Chooser abstraction for wizard input
//!
//! The resolver never talks to a terminal directly; it asks a [`Chooser`]
//! for each answer. The interactive implementation lives in `prompt`, and
//! [`ScriptedChooser`] replays canned answers so the whole resolution chain
//! can be unit-tested deterministically.

use crate::config::EnvironmentConfig;
use crate::error::{DevWizError, Result};

/// Supplies answers for the wizard's questions.
///
/// # Contract
///
/// `ask_choice` must return one of the supplied `choices`. Interactive
/// implementations satisfy this by only offering the closed set; the
/// resolver still re-validates every answer and treats a violation as
/// fatal.
pub trait Chooser {
    /// Free-text question with a default answer.
    fn ask(&mut self, label: &str, default: &str) -> Result<String>;

    /// Closed-set question; the answer must be one of `choices`.
    fn ask_choice(&mut self, label: &str, choices: &[&str], default: &str) -> Result<String>;

    /// Yes/no question.
    fn confirm(&mut self, label: &str, default: bool) -> Result<bool>;

    /// Show the tentative configuration ahead of the final confirmation.
    ///
    /// Display only; scripted implementations keep the no-op default.
    fn review(&mut self, _config: &EnvironmentConfig) {}
}

/// A scripted answer for [`ScriptedChooser`].
#[derive(Debug, Clone)]
pub enum Answer {
    /// Answer to `ask` or `ask_choice`.
    Text(String),
    /// Answer to `confirm`.
    Bool(bool),
    /// Accept whatever default the question offers.
    Default,
}

/// Replays a fixed sequence of answers, for tests and headless runs.
///
/// Running out of answers, or answering a question with the wrong answer
/// kind, is a prompt error: the script does not match the wizard flow.
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    answers: std::collections::VecDeque<Answer>,
}

impl ScriptedChooser {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    fn next(&mut self, label: &str) -> Result<Answer> {
        self.answers
            .pop_front()
            .ok_or_else(|| DevWizError::prompt(format!("no scripted answer for {label:?}")))
    }
}

impl Chooser for ScriptedChooser {
    fn ask(&mut self, label: &str, default: &str) -> Result<String> {
        match self.next(label)? {
            Answer::Text(text) => Ok(text),
            Answer::Default => Ok(default.to_string()),
            Answer::Bool(_) => Err(DevWizError::prompt(format!(
                "scripted answer for {label:?} is a bool, expected text"
            ))),
        }
    }

    fn ask_choice(&mut self, label: &str, choices: &[&str], default: &str) -> Result<String> {
        let answer = match self.next(label)? {
            Answer::Text(text) => text,
            Answer::Default => default.to_string(),
            Answer::Bool(_) => {
                return Err(DevWizError::prompt(format!(
                    "scripted answer for {label:?} is a bool, expected a choice"
                )))
            }
        };
        if !choices.contains(&answer.as_str()) {
            return Err(DevWizError::prompt(format!(
                "scripted answer {answer:?} for {label:?} is not in {choices:?}"
            )));
        }
        Ok(answer)
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool> {
        match self.next(label)? {
            Answer::Bool(value) => Ok(value),
            Answer::Default => Ok(default),
            Answer::Text(_) => Err(DevWizError::prompt(format!(
                "scripted answer for {label:?} is text, expected a bool"
            ))),
        }
    }
}
