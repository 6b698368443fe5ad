use std::collections::VecDeque;

use anyhow::anyhow;
use log::warn;

use super::{Prompter, Validator};

/// Answers prompts from a fixed list, in order.
///
/// Every menu it is shown and every response a validator turned down are kept,
/// so a session can be inspected after the fact.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    menus: Vec<Vec<String>>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// One answer per line. Blank lines are blank answers.
    pub fn from_script(script: &str) -> Self {
        Self::new(script.lines())
    }

    pub fn menus(&self) -> &[Vec<String>] {
        &self.menus
    }

    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, question: &str) -> anyhow::Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer left for `{question}`"))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        self.next_answer(question)
    }

    fn ask_with_default(&mut self, question: &str, default: &str) -> anyhow::Result<String> {
        let answer = self.next_answer(question)?;
        if answer.is_empty() {
            Ok(default.to_owned())
        } else {
            Ok(answer)
        }
    }

    fn ask_with_validation(
        &mut self,
        question: &str,
        validator: Validator,
    ) -> anyhow::Result<String> {
        loop {
            let answer = self.next_answer(question)?;
            match validator(&answer) {
                Ok(()) => return Ok(answer),
                Err(err) => {
                    warn!("Rejected `{answer}` for `{question}`: {err}");
                    self.rejections.push(answer);
                }
            }
        }
    }

    fn pick(&mut self, description: &str, choices: &[String]) -> anyhow::Result<String> {
        self.menus.push(choices.to_vec());
        self.next_answer(description)
    }
}
