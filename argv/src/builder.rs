//! Schema-driven serialization of an options mapping into an argv.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use hugo_schema_core::{FlagKind, FlagSpec, HugoSpec, to_hyphen_case};

use crate::error::ArgvError;

/// Builds ordered argument vectors from a command path and an options
/// mapping, using a discovered [`HugoSpec`].
///
/// The builder is pure and performs no I/O after construction. Options
/// mappings iterate in insertion order, and emitted flag/value tokens
/// follow that order.
///
/// # Examples
///
/// ```
/// use hugo_schema_argv::ArgvBuilder;
/// use hugo_schema_core::{CommandFlags, FlagKind, FlagSpec, HugoSpec};
/// use serde_json::{Map, json};
///
/// let builder = ArgvBuilder::new(HugoSpec {
///     global_flags: vec![FlagSpec::boolean("--quiet")],
///     commands: vec![CommandFlags {
///         command: "server".into(),
///         flags: vec![FlagSpec::with_type("--port", "int", FlagKind::Number)],
///     }],
/// });
///
/// let mut options = Map::new();
/// options.insert("port".to_string(), json!(1313));
/// assert_eq!(
///     builder.build_args("server", Some(&options)),
///     vec!["server", "--port", "1313"]
/// );
/// ```
#[derive(Debug)]
pub struct ArgvBuilder {
    spec: HugoSpec,
}

impl ArgvBuilder {
    /// Creates a builder over an already-loaded schema.
    pub fn new(spec: HugoSpec) -> Self {
        Self { spec }
    }

    /// Loads the schema artifact from disk.
    ///
    /// A missing or malformed artifact is a hard error; the builder never
    /// falls back to an empty schema.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArgvError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| ArgvError::SchemaLoad {
            path: path.display().to_string(),
            detail: err.to_string(),
        })?;
        let spec: HugoSpec = serde_json::from_str(&raw).map_err(|err| ArgvError::SchemaLoad {
            path: path.display().to_string(),
            detail: err.to_string(),
        })?;
        Ok(Self::new(spec))
    }

    /// Returns the schema this builder serializes against.
    pub fn spec(&self) -> &HugoSpec {
        &self.spec
    }

    /// Serializes `command` and `options` into an ordered token list.
    ///
    /// The command path is split on whitespace into the leading tokens.
    /// Each options entry is then serialized in the mapping's insertion
    /// order: null values are skipped entirely, known flags emit their
    /// stored long token verbatim with their declared kind, and unknown
    /// keys fall back to a hyphenated spelling with the kind inferred from
    /// the value.
    pub fn build_args(&self, command: &str, options: Option<&Map<String, Value>>) -> Vec<String> {
        let mut argv: Vec<String> = command.split_whitespace().map(str::to_string).collect();

        let Some(options) = options else {
            return argv;
        };

        let local_flags = self
            .spec
            .find_command(command)
            .map(|entry| entry.flags.as_slice())
            .unwrap_or_default();

        for (key, value) in options {
            if value.is_null() {
                continue;
            }

            match resolve_flag(&self.spec.global_flags, local_flags, key) {
                Some(flag) => push_flag(&mut argv, &flag.long, flag.kind, value),
                None => {
                    let long = format!("--{}", to_hyphen_case(key));
                    debug!(key = %key, flag = %long, "options key not in schema, using hyphenated fallback");
                    push_flag(&mut argv, &long, infer_kind(value), value);
                }
            }
        }

        argv
    }
}

/// Finds the flag addressed by an options key among globals and one
/// command's local flags; globals are searched first.
pub fn resolve_flag<'a>(
    global_flags: &'a [FlagSpec],
    local_flags: &'a [FlagSpec],
    key: &str,
) -> Option<&'a FlagSpec> {
    global_flags
        .iter()
        .chain(local_flags.iter())
        .find(|flag| flag.matches_key(key))
}

/// Infers a serialization kind from a JSON value, for keys with no schema
/// entry.
pub fn infer_kind(value: &Value) -> FlagKind {
    match value {
        Value::Bool(_) => FlagKind::Bool,
        Value::Number(_) => FlagKind::Number,
        Value::Array(items) => {
            if items.iter().all(Value::is_number) {
                FlagKind::NumberList
            } else {
                FlagKind::StringList
            }
        }
        _ => FlagKind::String,
    }
}

fn push_flag(argv: &mut Vec<String>, long: &str, kind: FlagKind, value: &Value) {
    match kind {
        FlagKind::Bool => {
            // Only a literal `true` emits the token; `false` emits nothing.
            if value == &Value::Bool(true) {
                argv.push(long.to_string());
            }
        }
        FlagKind::String | FlagKind::Number => {
            argv.push(long.to_string());
            argv.push(value_token(value));
        }
        FlagKind::StringList | FlagKind::NumberList => match value {
            Value::Array(items) => {
                for item in items {
                    argv.push(long.to_string());
                    argv.push(value_token(item));
                }
            }
            scalar => {
                argv.push(long.to_string());
                argv.push(value_token(scalar));
            }
        },
    }
}

fn value_token(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
