//! Runtime argument-vector construction for the wrapped Hugo CLI.
//!
//! This crate is the runtime half of the schema pipeline: it consumes the
//! JSON schema artifact written by discovery and turns `(command, options)`
//! pairs into ordered argv token lists ready for process spawning. It never
//! consults the Hugo binary itself.
//!
//! Most callers use the module-level [`build_args`], which loads the
//! artifact once per process and caches the parsed schema for the process
//! lifetime. [`ArgvBuilder`] is the explicit, injectable form for tests and
//! for artifacts in non-default locations.
//!
//! # Example
//!
//! ```
//! use hugo_schema_argv::ArgvBuilder;
//! use hugo_schema_core::{CommandFlags, FlagSpec, HugoSpec};
//! use serde_json::{Map, json};
//!
//! let builder = ArgvBuilder::new(HugoSpec {
//!     global_flags: vec![],
//!     commands: vec![CommandFlags {
//!         command: "build".into(),
//!         flags: vec![FlagSpec::boolean("--minify")],
//!     }],
//! });
//!
//! let mut options = Map::new();
//! options.insert("minify".to_string(), json!(true));
//! assert_eq!(builder.build_args("build", Some(&options)), vec!["build", "--minify"]);
//! ```

mod builder;
mod error;

pub use builder::{ArgvBuilder, infer_kind, resolve_flag};
pub use error::ArgvError;

use std::sync::LazyLock;

use serde_json::{Map, Value};

/// Default location of the schema artifact, relative to the working
/// directory the process was started in.
pub const DEFAULT_SCHEMA_FILE: &str = "hugo-spec.json";

// Populated at most once, on the first build_args call; a load failure is
// cached too and handed to every subsequent caller, since guessing at an
// empty schema would mis-serialize every command.
static SHARED_BUILDER: LazyLock<Result<ArgvBuilder, ArgvError>> =
    LazyLock::new(|| ArgvBuilder::from_file(DEFAULT_SCHEMA_FILE));

/// Builds the argument vector for `command` using the process-wide schema.
///
/// The schema artifact is read and parsed on the first call only; later
/// calls reuse the cached schema and perform no I/O. A missing or malformed
/// artifact fails every call.
pub fn build_args(
    command: &str,
    options: Option<&Map<String, Value>>,
) -> Result<Vec<String>, ArgvError> {
    match &*SHARED_BUILDER {
        Ok(builder) => Ok(builder.build_args(command, options)),
        Err(err) => Err(err.clone()),
    }
}
