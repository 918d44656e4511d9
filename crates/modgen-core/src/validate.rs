//! Input validation for the free-text wizard steps

use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a mod name or package name, after trimming
pub const MAX_NAME_LENGTH: usize = 64;

static PACKAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)+$").expect("package pattern is valid")
});

// Prefixes may be a single segment ("example" -> "example.mymod")
static PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$").expect("prefix pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Reason a free-text answer was rejected; the message is shown inline
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Mod name cannot be empty or longer than 64 characters")]
    ModName,

    #[error("Package name is required")]
    PackageRequired,

    #[error("Invalid package name format (e.g., com.example.mynewmod)")]
    PackageFormat,
}

/// Signature shared by all inline validators
pub type Validator = fn(&str) -> Result<(), ValidationError>;

fn trimmed_len(input: &str) -> usize {
    input.trim().chars().count()
}

/// Accept names whose trimmed length is between 1 and 64 characters
pub fn validate_mod_name(input: &str) -> Result<(), ValidationError> {
    let len = trimmed_len(input);
    if len == 0 || len > MAX_NAME_LENGTH {
        return Err(ValidationError::ModName);
    }
    Ok(())
}

/// Accept dotted lowercase identifiers of at least two segments
pub fn validate_package_name(input: &str) -> Result<(), ValidationError> {
    let len = trimmed_len(input);
    if len == 0 || len > MAX_NAME_LENGTH {
        return Err(ValidationError::PackageRequired);
    }
    if !PACKAGE_PATTERN.is_match(input) {
        return Err(ValidationError::PackageFormat);
    }
    Ok(())
}

pub fn is_valid_package_prefix(prefix: &str) -> bool {
    PREFIX_PATTERN.is_match(prefix)
}

/// Default package offered for a mod name: `<prefix>.<lowercased name without whitespace>`
///
/// Whitespace runs anywhere in the name are removed, not just leading and
/// trailing ones. The result is only a suggestion and still goes through
/// [`validate_package_name`].
pub fn default_package_name(prefix: &str, mod_name: &str) -> String {
    let lowered = mod_name.to_lowercase();
    format!("{}.{}", prefix, WHITESPACE.replace_all(&lowered, ""))
}
