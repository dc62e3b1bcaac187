//! Help-text acquisition from the Hugo executable.
//!
//! Discovery only ever needs one operation from the outside world: "give me
//! the help text for this command path". The [`HelpProvider`] trait is that
//! seam; [`BinaryHelpProvider`] implements it by invoking the real
//! executable, and tests substitute an in-memory map.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::DiscoveryError;
use crate::sections::COMMANDS_HEADER;

/// Source of help text for command-tree discovery.
pub trait HelpProvider {
    /// Returns the help text for the command at `path_tokens` (empty for
    /// the root). Failures abort discovery as a whole; a partial schema
    /// would silently mis-serialize arguments later.
    fn help(&self, path_tokens: &[String]) -> Result<String, DiscoveryError>;
}

/// [`HelpProvider`] backed by a Hugo executable on disk.
///
/// Probes `hugo help <path…>` first. Some parent commands route the help
/// subcommand to a default child instead of printing their own subcommand
/// listing, so when the first output lacks an `Available Commands:` section
/// the probe retries with `hugo <path…> --help`.
pub struct BinaryHelpProvider {
    program: PathBuf,
}

impl BinaryHelpProvider {
    /// Creates a provider for the executable at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[String], path: &str) -> Result<String, DiscoveryError> {
        debug!(program = %self.program.display(), args = ?args, "probing help output");
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| DiscoveryError::Spawn {
                program: self.program.display().to_string(),
                path: path.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let first_line = stderr
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or("no error output")
                .to_string();
            return Err(DiscoveryError::HelpProbe {
                path: path.to_string(),
                detail: format!("{first_line} ({})", output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl HelpProvider for BinaryHelpProvider {
    fn help(&self, path_tokens: &[String]) -> Result<String, DiscoveryError> {
        let path = path_tokens.join(" ");

        let mut help_argv = vec!["help".to_string()];
        help_argv.extend(path_tokens.iter().cloned());
        let first = self.run(&help_argv, &path)?;

        if path_tokens.is_empty() || first.contains(COMMANDS_HEADER) {
            return Ok(first);
        }

        let mut direct_argv: Vec<String> = path_tokens.to_vec();
        direct_argv.push("--help".to_string());
        self.run(&direct_argv, &path)
    }
}
