#![allow(dead_code)]

use cpp_scaffold::error::{Error, Result};
use cpp_scaffold::prompt::Prompter;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Answer {
    Line(&'static str),
    /// Keep the proposed default
    Default,
    Choice(usize),
    Confirm(bool),
    Selections(Vec<usize>),
}

/// Prompter replaying a fixed list of answers and recording the questions asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::default() }
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::ConfigError(format!("no scripted answer for '{prompt}'")))
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        match self.next(prompt)? {
            Answer::Line(text) => Ok(text.to_string()),
            Answer::Default => Ok(default.unwrap_or_default().to_string()),
            other => Err(Error::ConfigError(format!("expected a line for '{prompt}', got {other:?}"))),
        }
    }

    fn read_choice(&self, prompt: &str, choices: &[&str], default: usize) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Choice(index) if index < choices.len() => Ok(index),
            Answer::Default => Ok(default),
            other => {
                Err(Error::ConfigError(format!("expected a choice for '{prompt}', got {other:?}")))
            }
        }
    }

    fn read_confirmation(&self, prompt: &str, default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            Answer::Default => Ok(default),
            other => Err(Error::ConfigError(format!(
                "expected a confirmation for '{prompt}', got {other:?}"
            ))),
        }
    }

    fn read_selections(
        &self,
        prompt: &str,
        choices: &[&str],
        defaults: &[bool],
    ) -> Result<Vec<usize>> {
        match self.next(prompt)? {
            Answer::Selections(indices) if indices.iter().all(|index| *index < choices.len()) => {
                Ok(indices)
            }
            Answer::Default => Ok(defaults
                .iter()
                .enumerate()
                .filter_map(|(index, selected)| selected.then_some(index))
                .collect()),
            other => {
                Err(Error::ConfigError(format!("expected selections for '{prompt}', got {other:?}")))
            }
        }
    }
}
