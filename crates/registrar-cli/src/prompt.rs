//! Operator input. [`TerminalPrompter`] talks to a terminal through
//! dialoguer; [`ScriptedPrompter`] replays canned answers.

use std::collections::VecDeque;

use dialoguer::{Confirm, Input, Password, Select};

use crate::error::{CliError, CliResult};

pub trait Prompter {
    /// Free-text answer; `initial` is the editable starting text.
    fn input(&mut self, prompt: &str, initial: &str) -> CliResult<String>;

    fn password(&mut self, prompt: &str) -> CliResult<String>;

    /// Index of the chosen option.
    fn select(&mut self, prompt: &str, options: &[&str], default: usize) -> CliResult<usize>;

    fn confirm(&mut self, prompt: &str) -> CliResult<bool>;
}

#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, initial: &str) -> CliResult<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?)
    }

    fn password(&mut self, prompt: &str) -> CliResult<String> {
        Ok(Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?)
    }

    fn select(&mut self, prompt: &str, options: &[&str], default: usize) -> CliResult<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(default)
            .interact()?)
    }

    fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}

/// Answers prompts from a queue, in order.
///
/// Inputs and passwords take the next answer verbatim, except `"="` which
/// keeps the initial text. Selects take an option label. Confirms take
/// `y`/`n`.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> CliResult<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| CliError::ScriptExhausted(prompt.to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, initial: &str) -> CliResult<String> {
        let answer = self.next(prompt)?;
        Ok(if answer == "=" {
            initial.to_string()
        } else {
            answer
        })
    }

    fn password(&mut self, prompt: &str) -> CliResult<String> {
        self.next(prompt)
    }

    fn select(&mut self, prompt: &str, options: &[&str], default: usize) -> CliResult<usize> {
        let answer = self.next(prompt)?;
        if answer == "=" {
            return Ok(default);
        }
        options
            .iter()
            .position(|option| *option == answer)
            .ok_or_else(|| CliError::Validation(format!("\"{answer}\" is not an option for {prompt}")))
    }

    fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        Ok(matches!(
            self.next(prompt)?.to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}
