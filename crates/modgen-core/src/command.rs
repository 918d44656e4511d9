//! The `createMod` command
//!
//! Wraps a wizard run so that any failure is reported to the user once, as a
//! single message, and a cancellation is reported to nobody.

use crate::catalog::Catalog;
use crate::flow::{Outcome, Step, Wizard};
use crate::prompt::{Notifier, PromptProvider, WorkspaceFolders};
use crate::session::WizardSession;
use tracing::error;

/// Identifier under which the command is registered with the host
pub const CREATE_MOD_COMMAND: &str = "fabric-mod-generator.createMod";

/// Shown when a failure has no description of its own
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Result of invoking the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Completed(WizardSession),
    /// The user cancelled; nothing was reported
    Cancelled { at: Step },
    /// The failure was already shown through the notifier
    Failed,
}

/// Text shown to the user for an unexpected failure
pub fn failure_message(err: &anyhow::Error) -> String {
    let description = format!("{:#}", err);
    let description = if description.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        description.as_str()
    };
    format!("Failed to create Fabric mod: {}", description)
}

/// Run the wizard, reporting unexpected failures through `notifier`
pub async fn create_mod<P, W, N>(
    prompts: &mut P,
    workspace: &W,
    notifier: &N,
    catalog: &Catalog,
) -> CommandStatus
where
    P: PromptProvider + ?Sized,
    W: WorkspaceFolders + ?Sized,
    N: Notifier + ?Sized,
{
    match Wizard::new(prompts, workspace, catalog).run().await {
        Ok(Outcome::Completed(session)) => CommandStatus::Completed(session),
        Ok(Outcome::Aborted { at }) => CommandStatus::Cancelled { at },
        Err(err) => {
            error!(error = %format!("{:#}", err), "mod wizard failed");
            notifier.show_error(&failure_message(&err));
            CommandStatus::Failed
        }
    }
}
