//! Structural validation of an assembled schema.
//!
//! Catches invariant breaks before the schema is persisted: malformed flag
//! spellings, duplicate flags or commands, command-local flags shadowing a
//! global flag, and a leftover synthetic root node.
//!
//! # Examples
//!
//! ```
//! use hugo_schema_core::*;
//!
//! let mut spec = HugoSpec::default();
//! spec.global_flags.push(FlagSpec::boolean("--quiet"));
//! assert!(validate_spec(&spec).is_empty());
//!
//! // Invalid: long flag missing its double-dash marker
//! let mut bad = HugoSpec::default();
//! bad.global_flags.push(FlagSpec::boolean("quiet"));
//! assert!(!validate_spec(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{FlagSpec, HugoSpec, ROOT_TOKEN};

/// Schema validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Command path string is empty or whitespace-only.
    #[error("command path cannot be empty")]
    EmptyCommandName,
    /// The synthetic root token leaked into the assembled command list.
    #[error("synthetic root node must not appear in assembled spec")]
    RootCommandPresent,
    /// Two entries share the same command path.
    #[error("duplicate command in spec: {0}")]
    DuplicateCommand(String),
    /// Long flag does not start with `--` or is too short.
    #[error("invalid long flag format: {0}")]
    InvalidLongFlag(String),
    /// Short flag is not a single dash plus one character.
    #[error("invalid short flag format: {0}")]
    InvalidShortFlag(String),
    /// Two flags in the same scope share a long name.
    #[error("duplicate flag in scope: {0}")]
    DuplicateFlag(String),
    /// A command-local flag repeats a global flag's long name.
    #[error("command flag shadows global flag: {0}")]
    ShadowedGlobalFlag(String),
}

/// Validates an assembled schema.
///
/// Checks flag spellings, per-scope uniqueness, command uniqueness, the
/// global/local disjointness invariant, and root exclusion.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::*;
///
/// let mut spec = HugoSpec::default();
/// spec.global_flags.push(FlagSpec::boolean("--quiet"));
/// spec.commands.push(CommandFlags {
///     command: "build".into(),
///     flags: vec![FlagSpec::boolean("--quiet")],
/// });
///
/// let errors = validate_spec(&spec);
/// assert!(errors.iter().any(|e| matches!(e, ValidationError::ShadowedGlobalFlag(_))));
/// ```
pub fn validate_spec(spec: &HugoSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_flags(&spec.global_flags));
    if !errors.is_empty() {
        return errors;
    }

    let global_longs: HashSet<&str> = spec
        .global_flags
        .iter()
        .map(|flag| flag.long.as_str())
        .collect();

    let mut seen_commands: HashSet<&str> = HashSet::new();
    for entry in &spec.commands {
        let command = entry.command.trim();
        if command.is_empty() {
            errors.push(ValidationError::EmptyCommandName);
            return errors;
        }
        if entry.command.split_whitespace().any(|token| token == ROOT_TOKEN) {
            errors.push(ValidationError::RootCommandPresent);
            return errors;
        }
        if !seen_commands.insert(command) {
            errors.push(ValidationError::DuplicateCommand(command.to_string()));
            return errors;
        }

        errors.extend(validate_flags(&entry.flags));
        if !errors.is_empty() {
            return errors;
        }

        for flag in &entry.flags {
            if global_longs.contains(flag.long.as_str()) {
                errors.push(ValidationError::ShadowedGlobalFlag(flag.long.clone()));
                return errors;
            }
        }
    }

    errors
}

fn validate_flags(flags: &[FlagSpec]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for flag in flags {
        if !flag.long.starts_with("--") || flag.long.len() < 3 {
            errors.push(ValidationError::InvalidLongFlag(flag.long.clone()));
            return errors;
        }
        if let Some(short) = &flag.short {
            if !short.starts_with('-') || short.starts_with("--") || short.len() != 2 {
                errors.push(ValidationError::InvalidShortFlag(short.clone()));
                return errors;
            }
        }
        if !seen.insert(flag.long.as_str()) {
            errors.push(ValidationError::DuplicateFlag(flag.long.clone()));
            return errors;
        }
    }

    errors
}
