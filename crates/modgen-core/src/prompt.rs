//! Capabilities the wizard needs from its host
//!
//! The wizard never renders anything itself. It describes each prompt with one
//! of the request types below and hands it to a [`PromptProvider`]. Every
//! provider method returns `Ok(None)` when the user cancels, and `Err` only for
//! failures of the host itself.

use crate::validate::Validator;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Single-line text prompt
#[derive(Debug, Clone)]
pub struct InputPrompt<'a> {
    pub message: &'a str,
    pub placeholder: &'a str,
    /// Editable text the prompt starts with
    pub initial_value: Option<String>,
    /// Checked on every submit; the prompt stays open until it passes
    pub validate: Validator,
}

/// One entry of a choice list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<'a> {
    pub label: &'a str,
    pub description: &'a str,
}

impl<'a> Choice<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            description: "",
        }
    }

    pub fn with_description(label: &'a str, description: &'a str) -> Self {
        Self { label, description }
    }
}

/// Pick exactly one entry
#[derive(Debug, Clone)]
pub struct SelectPrompt<'a> {
    pub placeholder: &'a str,
    pub choices: Vec<Choice<'a>>,
}

/// Pick any number of entries, including none
#[derive(Debug, Clone)]
pub struct MultiSelectPrompt<'a> {
    pub placeholder: &'a str,
    pub choices: Vec<Choice<'a>>,
}

/// Pick one of two labelled options
#[derive(Debug, Clone, Copy)]
pub struct BinaryPrompt<'a> {
    pub placeholder: &'a str,
    pub first: &'a str,
    pub second: &'a str,
}

/// Answer to a [`BinaryPrompt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    First,
    Second,
}

/// Select a single existing folder; files cannot be selected
#[derive(Debug, Clone, Copy)]
pub struct FolderPrompt<'a> {
    pub open_label: &'a str,
}

/// Interactive prompts supplied by the host
#[async_trait]
pub trait PromptProvider: Send {
    async fn input(&mut self, prompt: &InputPrompt<'_>) -> Result<Option<String>>;

    /// Returns the index of the chosen entry
    async fn select(&mut self, prompt: &SelectPrompt<'_>) -> Result<Option<usize>>;

    /// Returns the indices of the chosen entries; an empty list is a valid answer
    async fn multi_select(&mut self, prompt: &MultiSelectPrompt<'_>)
        -> Result<Option<Vec<usize>>>;

    async fn choose(&mut self, prompt: &BinaryPrompt<'_>) -> Result<Option<Pick>>;

    async fn pick_folder(&mut self, prompt: &FolderPrompt<'_>) -> Result<Option<PathBuf>>;
}

/// Read-only view of the folders the host has open
pub trait WorkspaceFolders {
    fn workspace_folders(&self) -> Vec<PathBuf>;
}

impl WorkspaceFolders for [PathBuf] {
    fn workspace_folders(&self) -> Vec<PathBuf> {
        self.to_vec()
    }
}

impl WorkspaceFolders for Vec<PathBuf> {
    fn workspace_folders(&self) -> Vec<PathBuf> {
        self.clone()
    }
}

/// Fire-and-forget error display
pub trait Notifier {
    fn show_error(&self, message: &str);
}
