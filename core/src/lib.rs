//! Core schema types for the wrapped Hugo CLI.
//!
//! This crate defines the data model shared by the discovery pipeline and
//! the runtime argument-vector builder:
//!
//! - [`FlagSpec`] — one command-line flag with its long/short spelling, raw
//!   type token, normalized [`FlagKind`], description, enum values, and
//!   default.
//! - [`CommandSpec`] — one node of the discovered command tree (pre
//!   assembly, may still carry overlapping global flags).
//! - [`HugoSpec`] — the assembled, persisted schema: deduplicated global
//!   flags plus per-command flag lists.
//!
//! Validation ([`validate_spec`]) catches structural errors such as
//! duplicate flags, malformed spellings, and command-local flags shadowing
//! globals. Name conversions ([`to_hyphen_case`], [`to_property_name`])
//! define the mapping between flag spellings and options-object keys.
//!
//! # Example
//!
//! ```
//! use hugo_schema_core::*;
//!
//! let spec = HugoSpec {
//!     global_flags: vec![
//!         FlagSpec::with_type("--logLevel", "string", FlagKind::String)
//!             .with_description("log level"),
//!     ],
//!     commands: vec![CommandFlags {
//!         command: "server".into(),
//!         flags: vec![
//!             FlagSpec::with_type("--port", "int", FlagKind::Number).with_short("-p"),
//!         ],
//!     }],
//! };
//!
//! assert!(validate_spec(&spec).is_empty());
//! assert!(spec.find_command("server").is_some());
//! ```

mod names;
mod types;
mod validate;

pub use names::{to_hyphen_case, to_property_name};
pub use types::*;
pub use validate::{ValidationError, validate_spec};
