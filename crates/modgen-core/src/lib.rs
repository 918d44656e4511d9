//! Modgen Core - the Fabric mod creation wizard
//!
//! The wizard collects the parameters of a new Fabric mod: its name, package,
//! target Minecraft version, optional features and destination folder. It is
//! host-agnostic: prompts, workspace information and error display are
//! injected capabilities, so the same flow runs in a terminal or under tests.
//!
//! # Architecture
//!
//! - **Layer 1: Model** - `Catalog` of versions and features, validators, `WizardSession`
//! - **Layer 2: Flow** - the `Wizard` state machine and the `create_mod` command wrapper
//! - **Layer 3: Terminal host** - cliclack implementations of the capabilities (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based terminal host
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use modgen_core::{create_mod, Catalog, CommandStatus};
//!
//! let catalog = Catalog::load(None)?;
//! let status = create_mod(&mut my_prompts, &workspace_roots, &my_notifier, &catalog).await;
//! if let CommandStatus::Completed(session) = status {
//!     println!("{} -> {}", session.mod_package, session.target_folder.display());
//! }
//! ```

pub mod catalog;
pub mod command;
pub mod flow;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogError, FeatureOption, CATALOG_ENV};
pub use command::{create_mod, failure_message, CommandStatus, CREATE_MOD_COMMAND};
pub use flow::{Outcome, Step, Wizard};
pub use prompt::{Notifier, PromptProvider, WorkspaceFolders};
pub use session::{FeatureFlag, FeatureOptions, WizardSession};
pub use validate::ValidationError;

#[cfg(feature = "tui")]
pub use tui::run;
