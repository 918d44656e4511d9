//! Charm-style terminal host using cliclack

use crate::catalog::Catalog;
use crate::command::{create_mod, CommandStatus};
use crate::prompt::{
    BinaryPrompt, FolderPrompt, InputPrompt, MultiSelectPrompt, Notifier, Pick, PromptProvider,
    SelectPrompt,
};
use crate::session::WizardSession;
use crate::validate::Validator;
use anyhow::Result;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// cliclack reports Esc and Ctrl+C as `Interrupted`
fn cancellable<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Resolve user input against the current directory (empty input means current directory)
fn resolve_path(current_dir: &Path, input: &str) -> PathBuf {
    let input = input.trim();
    if input.is_empty() || input == "." {
        return current_dir.to_path_buf();
    }
    let path = PathBuf::from(input);
    if path.is_absolute() {
        path
    } else {
        current_dir.join(path)
    }
}

/// Text shown while the input is empty; a pre-filled value is what Enter submits
fn shown_placeholder<'p>(prompt: &'p InputPrompt<'_>) -> &'p str {
    prompt.initial_value.as_deref().unwrap_or(prompt.placeholder)
}

fn check_answer(validate: Validator, value: &str) -> Result<(), String> {
    validate(value).map_err(|e| e.to_string())
}

fn text_input(prompt: &InputPrompt<'_>) -> cliclack::Input {
    let validate = prompt.validate;
    let input = cliclack::input(prompt.message)
        .placeholder(shown_placeholder(prompt))
        // Empty answers reach the validator so its own message is shown
        .required(false)
        .validate(move |value: &String| check_answer(validate, value));

    match &prompt.initial_value {
        Some(initial) => input.default_input(initial),
        None => input,
    }
}

fn intro_title(catalog: &Catalog) -> String {
    format!("Create a new {}", catalog.display_name)
}

/// Prompts rendered inline in the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackPrompts;

#[async_trait]
impl PromptProvider for ClackPrompts {
    async fn input(&mut self, prompt: &InputPrompt<'_>) -> Result<Option<String>> {
        let mut input = text_input(prompt);
        cancellable(input.interact::<String>())
    }

    async fn select(&mut self, prompt: &SelectPrompt<'_>) -> Result<Option<usize>> {
        // Use indices so duplicate labels stay distinguishable
        let mut select = cliclack::select(prompt.placeholder);
        for (idx, choice) in prompt.choices.iter().enumerate() {
            select = select.item(idx, choice.label, choice.description);
        }
        cancellable(select.interact())
    }

    async fn multi_select(
        &mut self,
        prompt: &MultiSelectPrompt<'_>,
    ) -> Result<Option<Vec<usize>>> {
        let mut multi = cliclack::multiselect(prompt.placeholder);
        for (idx, choice) in prompt.choices.iter().enumerate() {
            multi = multi.item(idx, choice.label, choice.description);
        }
        cancellable(multi.required(false).interact())
    }

    async fn choose(&mut self, prompt: &BinaryPrompt<'_>) -> Result<Option<Pick>> {
        let mut select = cliclack::select(prompt.placeholder)
            .item(Pick::First, prompt.first, "")
            .item(Pick::Second, prompt.second, "");
        cancellable(select.interact())
    }

    async fn pick_folder(&mut self, prompt: &FolderPrompt<'_>) -> Result<Option<PathBuf>> {
        let current_dir = std::env::current_dir()?;
        let base = current_dir.clone();

        let mut input = cliclack::input(prompt.open_label)
            .placeholder(".")
            .default_input(".")
            .validate(move |value: &String| {
                let path = resolve_path(&base, value);
                if path.is_dir() {
                    Ok(())
                } else {
                    Err(format!("Not a folder: {}", path.display()))
                }
            });

        let answer = cancellable(input.interact::<String>())?;
        Ok(answer.map(|value| resolve_path(&current_dir, &value)))
    }
}

/// Shows failures as cliclack error lines
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackNotifier;

impl Notifier for ClackNotifier {
    fn show_error(&self, message: &str) {
        // Nothing sensible to do if the terminal itself is gone
        let _ = cliclack::log::error(message);
    }
}

/// Run the `createMod` command with interactive terminal prompts
pub async fn run(catalog: &Catalog, workspace: &[PathBuf]) -> Result<CommandStatus> {
    cliclack::intro(intro_title(catalog))?;

    let status = create_mod(&mut ClackPrompts, workspace, &ClackNotifier, catalog).await;

    match &status {
        CommandStatus::Completed(session) => print_summary(catalog, session)?,
        CommandStatus::Cancelled { .. } => cliclack::outro_cancel("Cancelled")?,
        CommandStatus::Failed => cliclack::outro_cancel("No mod was created")?,
    }

    Ok(status)
}

fn summary_lines(catalog: &Catalog, session: &WizardSession) -> Vec<String> {
    let features: Vec<&str> = session
        .options
        .enabled()
        .into_iter()
        .map(|flag| {
            catalog
                .feature(flag)
                .map(|f| f.label.as_str())
                .unwrap_or_else(|| flag.key())
        })
        .collect();

    vec![
        format!("Name:       {}", session.mod_name),
        format!("Package:    {}", session.mod_package),
        format!("Minecraft:  {}", session.minecraft_version),
        format!(
            "Options:    {}",
            if features.is_empty() {
                "none".to_string()
            } else {
                features.join(", ")
            }
        ),
        format!("Folder:     {}", session.target_folder.display()),
    ]
}

fn print_summary(catalog: &Catalog, session: &WizardSession) -> Result<()> {
    println!();
    println!("  Your mod");
    println!();

    for line in summary_lines(catalog, session) {
        println!("  {}", line);
    }

    cliclack::outro("Happy modding!")?;

    Ok(())
}
