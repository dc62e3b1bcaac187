//! Offline discovery of the Hugo command tree and flag grammar.
//!
//! Hugo ships no machine-readable description of its CLI, so this crate
//! reverse-engineers one from `--help` output: a line-level grammar
//! classifies flag declarations, a section parser turns one node's help
//! text into a [`CommandSpec`], a breadth-first traversal walks the whole
//! command tree through a [`HelpProvider`], and the assembler reduces the
//! visited nodes into the persisted [`HugoSpec`]. The emitter renders that
//! schema into the two artifacts consumed downstream: a JSON runtime schema
//! and generated typed options declarations.
//!
//! # Main entry points
//!
//! - [`parse_command_help`] — parse pre-captured help text for one node
//!   without running any commands.
//! - [`discover_spec`] — walk the full tree through a help provider and
//!   assemble the final schema.
//! - [`emit::write_artifacts`] — render the schema to disk.
//!
//! # Example
//!
//! ```
//! use hugo_schema_discovery::parse_command_help;
//!
//! let help = "\
//! Usage:
//!   hugo build [flags]
//!
//! Flags:
//!   -b, --baseURL string   hostname (and path) to the root
//!       --minify           minify any supported output format
//!   -h, --help             help for build
//! ";
//!
//! let node = parse_command_help(&["build".to_string()], help);
//! assert_eq!(node.command(), "build");
//! assert_eq!(node.flags.len(), 2); // --help is dropped
//! assert!(node.flags.iter().any(|flag| flag.long == "--baseURL"));
//! ```
//!
//! [`CommandSpec`]: hugo_schema_core::CommandSpec
//! [`HugoSpec`]: hugo_schema_core::HugoSpec

pub mod assemble;
pub mod discover;
pub mod emit;
pub mod error;
pub mod grammar;
pub mod provider;
pub mod sections;

pub use assemble::assemble_spec;
pub use discover::discover_commands;
pub use error::DiscoveryError;
pub use provider::{BinaryHelpProvider, HelpProvider};
pub use sections::parse_command_help;

use hugo_schema_core::HugoSpec;

/// Discovers the full command tree through `provider` and assembles the
/// persisted schema in one step.
///
/// Equivalent to [`discover_commands`] followed by [`assemble_spec`]; a
/// help-probe failure aborts the run and names the command path that was
/// being probed.
pub fn discover_spec(provider: &dyn HelpProvider) -> Result<HugoSpec, DiscoveryError> {
    let commands = discover_commands(provider)?;
    Ok(assemble_spec(&commands))
}
