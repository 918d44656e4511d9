//! Fabric Mod Generator - interactive wizard for new Fabric mods

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use modgen_core::{Catalog, CommandStatus, CREATE_MOD_COMMAND};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "fabric-mod-generator")]
#[command(about = "Interactive wizard for creating Fabric mods")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Catalog of Minecraft versions and features to offer (YAML; defaults to the built-in list)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Fabric mod
    #[command(name = "create-mod", alias = CREATE_MOD_COMMAND)]
    CreateMod(CreateModArgs),
    /// List the Minecraft versions and features the wizard offers
    Versions,
}

#[derive(Parser, Debug, Default)]
pub struct CreateModArgs {
    /// Open workspace folder (repeatable; defaults to the current directory)
    #[arg(short, long = "workspace")]
    pub workspace: Vec<PathBuf>,

    /// Behave as if no workspace is open
    #[arg(long, conflicts_with = "workspace")]
    pub no_workspace: bool,
}

impl CreateModArgs {
    /// Absolute workspace roots, first one being the primary workspace
    fn workspace_roots(&self) -> Result<Vec<PathBuf>> {
        if self.no_workspace {
            return Ok(Vec::new());
        }

        let current_dir = std::env::current_dir().context("Failed to read current directory")?;
        if self.workspace.is_empty() {
            return Ok(vec![current_dir]);
        }

        self.workspace
            .iter()
            .map(|dir| absolute_dir(&current_dir, dir))
            .collect()
    }
}

fn absolute_dir(current_dir: &Path, dir: &Path) -> Result<PathBuf> {
    let path = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        current_dir.join(dir)
    };

    if !path.is_dir() {
        anyhow::bail!("Workspace folder does not exist: {}", path.display());
    }

    Ok(path)
}

fn print_catalog(catalog: &Catalog) {
    println!("{}", "Minecraft versions (newest first)".cyan().bold());
    for version in &catalog.versions {
        println!("  {} {}", "->".blue(), version);
    }

    println!();
    println!("{}", "Feature options".cyan().bold());
    for feature in &catalog.features {
        println!("  {} {} ({})", "->".blue(), feature.label.bold(), feature.id);
        println!("     {}", feature.description.dimmed());
    }

    println!();
    println!(
        "{} {}.<modname>",
        "Default package:".green().bold(),
        catalog.package_prefix
    );
}

async fn create(catalog: &Catalog, args: &CreateModArgs) -> Result<()> {
    let roots = args.workspace_roots()?;
    tracing::debug!(?roots, "workspace roots");

    let result = modgen_core::run(catalog, &roots).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    // Failures were already shown to the user by the wizard
    if let CommandStatus::Failed = result? {
        std::process::exit(1);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    modgen_core::logging::init_logging(args.verbose)?;

    let catalog = Catalog::load(args.catalog.as_deref())?;

    match args.command {
        Some(Command::CreateMod(create_args)) => create(&catalog, &create_args).await,
        Some(Command::Versions) => {
            print_catalog(&catalog);
            Ok(())
        }
        // No subcommand provided, default to the wizard
        None => create(&catalog, &CreateModArgs::default()).await,
    }
}
