//! Version and feature catalog
//!
//! The catalog is the closed list of Minecraft versions and optional features
//! the wizard offers. A default catalog is compiled into the binary; a YAML
//! file with the same shape can replace it, either passed explicitly or named
//! by the `FABRIC_MOD_CATALOG` environment variable.

use crate::session::FeatureFlag;
use crate::validate::is_valid_package_prefix;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Environment variable naming a catalog file to use instead of the default
pub const CATALOG_ENV: &str = "FABRIC_MOD_CATALOG";

const DEFAULT_CATALOG: &str = include_str!("fabric.yaml");

/// Errors raised while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog lists no Minecraft versions")]
    NoVersions,

    #[error("Catalog contains an empty version entry")]
    EmptyVersion,

    #[error("Catalog lists version '{0}' more than once")]
    DuplicateVersion(String),

    #[error("Catalog lists feature '{0}' more than once")]
    DuplicateFeature(FeatureFlag),

    #[error("Invalid package prefix '{0}'")]
    InvalidPackagePrefix(String),
}

/// A selectable feature with its user-facing text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureOption {
    pub id: FeatureFlag,
    pub label: String,
    pub description: String,
}

fn default_display_name() -> String {
    "Fabric mod".to_string()
}

fn default_package_prefix() -> String {
    "com.example".to_string()
}

/// Versions and features offered by the wizard
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// What the wizard creates, shown in its title
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Prefix of the suggested package name
    #[serde(default = "default_package_prefix")]
    pub package_prefix: String,

    /// Minecraft versions, newest first
    pub versions: Vec<String>,

    #[serde(default)]
    pub features: Vec<FeatureOption>,
}

impl Catalog {
    /// Parse and check a catalog document
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_yaml(DEFAULT_CATALOG)
    }

    /// Read a catalog file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load the catalog from `path`, else from `FABRIC_MOD_CATALOG`, else the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let override_path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from));

        match override_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading catalog from file");
                Self::from_file(&path)
            }
            None => {
                tracing::debug!("using embedded catalog");
                Self::embedded()
            }
        }
    }

    pub fn feature(&self, flag: FeatureFlag) -> Option<&FeatureOption> {
        self.features.iter().find(|f| f.id == flag)
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.versions.is_empty() {
            return Err(CatalogError::NoVersions);
        }

        let mut seen = HashSet::new();
        for version in &self.versions {
            if version.trim().is_empty() {
                return Err(CatalogError::EmptyVersion);
            }
            if !seen.insert(version.as_str()) {
                return Err(CatalogError::DuplicateVersion(version.clone()));
            }
        }

        let mut seen = HashSet::new();
        for feature in &self.features {
            if !seen.insert(feature.id) {
                return Err(CatalogError::DuplicateFeature(feature.id));
            }
        }

        if !is_valid_package_prefix(&self.package_prefix) {
            return Err(CatalogError::InvalidPackagePrefix(
                self.package_prefix.clone(),
            ));
        }

        Ok(())
    }
}
