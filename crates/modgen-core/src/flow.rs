//! The mod creation wizard
//!
//! A fixed, forward-only chain of steps:
//!
//! ```text
//! ModName -> PackageName -> MinecraftVersion -> FeatureOptions -> TargetFolder -> Completed
//!    |           |                |                  |                |
//!    +-----------+----------------+------------------+----------------+--> Aborted { at }
//! ```
//!
//! Each step awaits one prompt (two for the folder step when a workspace is
//! open). A cancelled prompt ends the run at that step; nothing is retried and
//! no step is revisited.

use crate::catalog::Catalog;
use crate::prompt::{
    BinaryPrompt, Choice, FolderPrompt, InputPrompt, MultiSelectPrompt, Pick, PromptProvider,
    SelectPrompt, WorkspaceFolders,
};
use crate::session::{FeatureOptions, WizardSession};
use crate::validate::{default_package_name, validate_mod_name, validate_package_name};
use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

const MOD_NAME_MESSAGE: &str = r#"Choose a name for your new mod (e.g. "My New Mod")"#;
const MOD_NAME_PLACEHOLDER: &str = "My New Mod";
const PACKAGE_MESSAGE: &str = "Choose a unique package name for your new mod. The package name should be unique to you. \
     If you are unsure about this use \"name.modid\" (e.g. \"com.example.mynewmod\")";
const PACKAGE_PLACEHOLDER: &str = "com.example.mynewmod";
const VERSION_PLACEHOLDER: &str =
    r#"Select the version of Minecraft that you wish to use for your mod (e.g. "1.20.1")"#;
const FEATURES_PLACEHOLDER: &str = "Select advanced options (optional)";
const DESTINATION_PLACEHOLDER: &str = "Finally, where should the mod be created?";
const CURRENT_WORKSPACE: &str = "Current Workspace";
const DIFFERENT_FOLDER: &str = "Choose Different Folder";
const SELECT_FOLDER: &str = "Select Folder";

/// Steps of the wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ModName,
    PackageName,
    MinecraftVersion,
    FeatureOptions,
    TargetFolder,
}

impl Step {
    pub fn display_name(&self) -> &'static str {
        match self {
            Step::ModName => "mod name",
            Step::PackageName => "package name",
            Step::MinecraftVersion => "Minecraft version",
            Step::FeatureOptions => "feature options",
            Step::TargetFolder => "target folder",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a wizard run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(WizardSession),
    /// The user cancelled the prompt of this step
    Aborted { at: Step },
}

/// One run of the wizard against a set of host capabilities
pub struct Wizard<'a, P: ?Sized, W: ?Sized> {
    prompts: &'a mut P,
    workspace: &'a W,
    catalog: &'a Catalog,
}

impl<'a, P, W> Wizard<'a, P, W>
where
    P: PromptProvider + ?Sized,
    W: WorkspaceFolders + ?Sized,
{
    pub fn new(prompts: &'a mut P, workspace: &'a W, catalog: &'a Catalog) -> Self {
        Self {
            prompts,
            workspace,
            catalog,
        }
    }

    /// Run every step in order, stopping at the first cancellation
    pub async fn run(mut self) -> Result<Outcome> {
        macro_rules! step {
            ($step:expr, $prompt:expr) => {{
                debug!(step = %$step, "prompting");
                match $prompt.await? {
                    Some(answer) => answer,
                    None => {
                        info!(step = %$step, "wizard cancelled");
                        return Ok(Outcome::Aborted { at: $step });
                    }
                }
            }};
        }

        let mod_name = step!(Step::ModName, self.prompt_mod_name());
        let mod_package = step!(Step::PackageName, self.prompt_package_name(&mod_name));
        let minecraft_version = step!(Step::MinecraftVersion, self.prompt_version());
        let options = step!(Step::FeatureOptions, self.prompt_features());
        let target_folder = step!(Step::TargetFolder, self.resolve_target_folder());

        let session = WizardSession {
            mod_name: mod_name.trim().to_string(),
            mod_package,
            minecraft_version,
            options,
            target_folder,
        };
        debug!(?session, "wizard completed");
        Ok(Outcome::Completed(session))
    }

    async fn prompt_mod_name(&mut self) -> Result<Option<String>> {
        let prompt = InputPrompt {
            message: MOD_NAME_MESSAGE,
            placeholder: MOD_NAME_PLACEHOLDER,
            initial_value: None,
            validate: validate_mod_name,
        };
        self.input(&prompt).await
    }

    async fn prompt_package_name(&mut self, mod_name: &str) -> Result<Option<String>> {
        let prompt = InputPrompt {
            message: PACKAGE_MESSAGE,
            placeholder: PACKAGE_PLACEHOLDER,
            initial_value: Some(default_package_name(
                &self.catalog.package_prefix,
                mod_name,
            )),
            validate: validate_package_name,
        };
        self.input(&prompt).await
    }

    /// Text input whose answer is re-checked against the prompt's validator
    async fn input(&mut self, prompt: &InputPrompt<'_>) -> Result<Option<String>> {
        let Some(answer) = self.prompts.input(prompt).await? else {
            return Ok(None);
        };
        (prompt.validate)(&answer)
            .with_context(|| format!("Prompt accepted invalid input '{}'", answer))?;
        Ok(Some(answer))
    }

    async fn prompt_version(&mut self) -> Result<Option<String>> {
        let versions = &self.catalog.versions;
        let prompt = SelectPrompt {
            placeholder: VERSION_PLACEHOLDER,
            choices: versions.iter().map(|v| Choice::new(v)).collect(),
        };

        let Some(idx) = self.prompts.select(&prompt).await? else {
            return Ok(None);
        };
        let version = versions
            .get(idx)
            .with_context(|| format!("Version picker returned unknown entry {}", idx))?;
        Ok(Some(version.clone()))
    }

    async fn prompt_features(&mut self) -> Result<Option<FeatureOptions>> {
        let features = &self.catalog.features;
        if features.is_empty() {
            debug!("catalog offers no features");
            return Ok(Some(FeatureOptions::default()));
        }

        let prompt = MultiSelectPrompt {
            placeholder: FEATURES_PLACEHOLDER,
            choices: features
                .iter()
                .map(|f| Choice::with_description(&f.label, &f.description))
                .collect(),
        };

        let Some(indices) = self.prompts.multi_select(&prompt).await? else {
            return Ok(None);
        };
        let flags = indices
            .into_iter()
            .map(|idx| {
                features
                    .get(idx)
                    .map(|f| f.id)
                    .with_context(|| format!("Feature picker returned unknown entry {}", idx))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(FeatureOptions::from_flags(flags)))
    }

    async fn resolve_target_folder(&mut self) -> Result<Option<PathBuf>> {
        let folders = self.workspace.workspace_folders();

        let Some(current) = folders.into_iter().next() else {
            debug!("no workspace open, asking for a folder");
            return self.pick_folder().await;
        };

        let prompt = BinaryPrompt {
            placeholder: DESTINATION_PLACEHOLDER,
            first: CURRENT_WORKSPACE,
            second: DIFFERENT_FOLDER,
        };
        match self.prompts.choose(&prompt).await? {
            Some(Pick::First) => Ok(Some(current)),
            Some(Pick::Second) => self.pick_folder().await,
            None => Ok(None),
        }
    }

    async fn pick_folder(&mut self) -> Result<Option<PathBuf>> {
        let prompt = FolderPrompt {
            open_label: SELECT_FOLDER,
        };
        self.prompts.pick_folder(&prompt).await
    }
}
