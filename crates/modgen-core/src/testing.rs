//! Scripted host capabilities for tests

use crate::prompt::{
    BinaryPrompt, FolderPrompt, InputPrompt, MultiSelectPrompt, Notifier, Pick, PromptProvider,
    SelectPrompt,
};
use crate::validate::ValidationError;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

/// Canned answer for the next prompt; `None` simulates a cancel
#[derive(Debug, Clone)]
pub(crate) enum Answer {
    Text(Option<String>),
    Index(Option<usize>),
    Indices(Option<Vec<usize>>),
    Pick(Option<Pick>),
    Folder(Option<PathBuf>),
    /// The host fails with this message
    Fail(String),
}

impl Answer {
    pub(crate) fn text(value: &str) -> Self {
        Answer::Text(Some(value.to_string()))
    }
}

/// A prompt the wizard issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Asked {
    Input {
        message: String,
        initial_value: Option<String>,
    },
    Select {
        choices: Vec<String>,
    },
    MultiSelect {
        choices: Vec<String>,
    },
    Choose,
    Folder,
}

/// Replays answers in order and records every prompt
///
/// Text answers that fail the prompt's validator are recorded as rejections
/// and the next answer is tried, the way an interactive prompt stays open.
pub(crate) struct ScriptedPrompts {
    answers: VecDeque<Answer>,
    pub(crate) asked: Vec<Asked>,
    pub(crate) rejections: Vec<ValidationError>,
}

impl ScriptedPrompts {
    pub(crate) fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
            rejections: Vec::new(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self) -> Result<Answer> {
        match self.answers.pop_front() {
            Some(Answer::Fail(message)) => Err(anyhow::anyhow!(message)),
            Some(answer) => Ok(answer),
            None => anyhow::bail!("No scripted answer left"),
        }
    }
}

#[async_trait]
impl PromptProvider for ScriptedPrompts {
    async fn input(&mut self, prompt: &InputPrompt<'_>) -> Result<Option<String>> {
        self.asked.push(Asked::Input {
            message: prompt.message.to_string(),
            initial_value: prompt.initial_value.clone(),
        });
        loop {
            match self.next()? {
                Answer::Text(Some(text)) => match (prompt.validate)(&text) {
                    Ok(()) => return Ok(Some(text)),
                    Err(rejection) => self.rejections.push(rejection),
                },
                Answer::Text(None) => return Ok(None),
                other => anyhow::bail!("Expected a text answer, got {:?}", other),
            }
        }
    }

    async fn select(&mut self, prompt: &SelectPrompt<'_>) -> Result<Option<usize>> {
        self.asked.push(Asked::Select {
            choices: prompt.choices.iter().map(|c| c.label.to_string()).collect(),
        });
        match self.next()? {
            Answer::Index(idx) => Ok(idx),
            other => anyhow::bail!("Expected an index answer, got {:?}", other),
        }
    }

    async fn multi_select(
        &mut self,
        prompt: &MultiSelectPrompt<'_>,
    ) -> Result<Option<Vec<usize>>> {
        self.asked.push(Asked::MultiSelect {
            choices: prompt.choices.iter().map(|c| c.label.to_string()).collect(),
        });
        match self.next()? {
            Answer::Indices(indices) => Ok(indices),
            other => anyhow::bail!("Expected an indices answer, got {:?}", other),
        }
    }

    async fn choose(&mut self, _prompt: &BinaryPrompt<'_>) -> Result<Option<Pick>> {
        self.asked.push(Asked::Choose);
        match self.next()? {
            Answer::Pick(pick) => Ok(pick),
            other => anyhow::bail!("Expected a pick answer, got {:?}", other),
        }
    }

    async fn pick_folder(&mut self, _prompt: &FolderPrompt<'_>) -> Result<Option<PathBuf>> {
        self.asked.push(Asked::Folder);
        match self.next()? {
            Answer::Folder(path) => Ok(path),
            other => anyhow::bail!("Expected a folder answer, got {:?}", other),
        }
    }
}

/// Collects every message shown
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
