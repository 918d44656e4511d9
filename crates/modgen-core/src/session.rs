//! Wizard session model
//!
//! A session holds the answers collected during one run of the wizard. It only
//! exists in memory and is discarded once the command finishes.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Optional features that can be enabled for a new mod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureFlag {
    Kotlin,
    MojangMappings,
    DataGeneration,
    SplitSources,
}

impl FeatureFlag {
    /// All feature flags in the order the wizard presents them
    pub const ALL: [FeatureFlag; 4] = [
        FeatureFlag::Kotlin,
        FeatureFlag::MojangMappings,
        FeatureFlag::DataGeneration,
        FeatureFlag::SplitSources,
    ];

    /// Key used in catalog files
    pub fn key(&self) -> &'static str {
        match self {
            FeatureFlag::Kotlin => "kotlin",
            FeatureFlag::MojangMappings => "mojang_mappings",
            FeatureFlag::DataGeneration => "data_generation",
            FeatureFlag::SplitSources => "split_sources",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The set of feature flags chosen for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureOptions {
    pub use_kotlin: bool,
    pub use_mojang_mappings: bool,
    pub use_data_generation: bool,
    pub split_sources: bool,
}

impl FeatureOptions {
    pub fn from_flags(flags: impl IntoIterator<Item = FeatureFlag>) -> Self {
        let mut options = Self::default();
        for flag in flags {
            options.set(flag, true);
        }
        options
    }

    pub fn set(&mut self, flag: FeatureFlag, enabled: bool) {
        match flag {
            FeatureFlag::Kotlin => self.use_kotlin = enabled,
            FeatureFlag::MojangMappings => self.use_mojang_mappings = enabled,
            FeatureFlag::DataGeneration => self.use_data_generation = enabled,
            FeatureFlag::SplitSources => self.split_sources = enabled,
        }
    }

    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::Kotlin => self.use_kotlin,
            FeatureFlag::MojangMappings => self.use_mojang_mappings,
            FeatureFlag::DataGeneration => self.use_data_generation,
            FeatureFlag::SplitSources => self.split_sources,
        }
    }

    /// Enabled flags, in presentation order
    pub fn enabled(&self) -> Vec<FeatureFlag> {
        FeatureFlag::ALL
            .into_iter()
            .filter(|flag| self.is_enabled(*flag))
            .collect()
    }
}

/// Answers collected by a completed wizard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    /// Display name of the mod, trimmed
    pub mod_name: String,
    /// Dotted lowercase package name
    pub mod_package: String,
    /// One of the catalog's Minecraft versions
    pub minecraft_version: String,
    pub options: FeatureOptions,
    /// Folder the mod should be created in
    pub target_folder: PathBuf,
}
