//! Rendering of the assembled schema into its two persisted artifacts.
//!
//! The runtime artifact is a JSON document mirroring [`HugoSpec`] exactly;
//! it is the only channel between offline discovery and the argv builder.
//! The declarations artifact is generated Rust source giving callers a
//! statically typed options struct per command. Both renderings order
//! commands alphabetically by path and flags alphabetically by long name,
//! so re-running discovery produces reproducible diffs.

use std::fs;
use std::path::Path;

use tracing::info;

use hugo_schema_core::{FlagKind, FlagSpec, HugoSpec, to_hyphen_case, to_property_name};

use crate::error::DiscoveryError;

/// File name of the serialized runtime schema.
pub const RUNTIME_SCHEMA_FILE: &str = "hugo-spec.json";
/// File name of the generated typed declarations.
pub const DECLARATIONS_FILE: &str = "options.rs";

const GENERATED_HEADER: &str = "// Generated from Hugo help output. Do not edit by hand.\n";

// Field idents that would collide with Rust keywords get a raw prefix.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match",
    "mod", "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
    "true", "try", "type", "unsafe", "use", "where", "while", "yield",
];

/// Returns a copy of the schema with commands and flags in emission order.
pub fn sorted_spec(spec: &HugoSpec) -> HugoSpec {
    let mut sorted = spec.clone();
    sorted.global_flags.sort_by(|a, b| a.long.cmp(&b.long));
    for entry in &mut sorted.commands {
        entry.flags.sort_by(|a, b| a.long.cmp(&b.long));
    }
    sorted.commands.sort_by(|a, b| a.command.cmp(&b.command));
    sorted
}

/// Renders the runtime schema artifact as pretty-printed JSON.
pub fn emit_runtime_schema(spec: &HugoSpec) -> Result<String, DiscoveryError> {
    let mut json = serde_json::to_string_pretty(&sorted_spec(spec))?;
    json.push('\n');
    Ok(json)
}

/// Renders the typed declarations artifact as Rust source.
///
/// Every command gets an options struct containing all global-flag
/// properties plus its own filtered local flags; `GlobalOptions` carries
/// the globals alone. The `command_options` table maps each command path
/// to its struct name.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::{CommandFlags, FlagKind, FlagSpec, HugoSpec};
/// use hugo_schema_discovery::emit::emit_declarations;
///
/// let spec = HugoSpec {
///     global_flags: vec![FlagSpec::boolean("--quiet")],
///     commands: vec![CommandFlags {
///         command: "mod clean".into(),
///         flags: vec![FlagSpec::with_type("--pattern", "string", FlagKind::String)],
///     }],
/// };
///
/// let source = emit_declarations(&spec);
/// assert!(source.contains("pub struct ModCleanOptions"));
/// assert!(source.contains("pub pattern: Option<String>,"));
/// ```
pub fn emit_declarations(spec: &HugoSpec) -> String {
    let sorted = sorted_spec(spec);

    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("use serde::Serialize;\n\n");

    push_struct(
        &mut out,
        "GlobalOptions",
        "Options accepted by every command.",
        sorted.global_flags.iter().collect(),
    );

    let mut table: Vec<(String, String)> = Vec::new();
    for entry in &sorted.commands {
        let name = struct_name(&entry.command);
        let mut merged: Vec<&FlagSpec> =
            sorted.global_flags.iter().chain(entry.flags.iter()).collect();
        merged.sort_by(|a, b| a.long.cmp(&b.long));

        push_struct(
            &mut out,
            &name,
            &format!("Options for `hugo {}`.", entry.command),
            merged,
        );
        table.push((entry.command.clone(), name));
    }

    out.push_str("/// Maps each command path to the name of its options struct.\n");
    out.push_str("pub fn command_options() -> &'static [(&'static str, &'static str)] {\n");
    out.push_str("    &[\n");
    for (command, name) in &table {
        out.push_str(&format!("        ({command:?}, {name:?}),\n"));
    }
    out.push_str("    ]\n}\n");
    out
}

/// Writes both artifacts into `dir`, creating it if needed.
pub fn write_artifacts(spec: &HugoSpec, dir: &Path) -> Result<(), DiscoveryError> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(RUNTIME_SCHEMA_FILE), emit_runtime_schema(spec)?)?;
    fs::write(dir.join(DECLARATIONS_FILE), emit_declarations(spec))?;
    info!(dir = %dir.display(), "wrote schema artifacts");
    Ok(())
}

fn push_struct(out: &mut String, name: &str, doc: &str, flags: Vec<&FlagSpec>) {
    out.push_str(&format!("/// {doc}\n"));
    out.push_str("#[derive(Debug, Default, Clone, Serialize)]\n");
    out.push_str(&format!("pub struct {name} {{\n"));
    for flag in flags {
        let property = to_property_name(flag.name());
        if !flag.description.is_empty() {
            out.push_str(&format!("    /// {}\n", flag.description));
        }
        out.push_str(&format!(
            "    #[serde(rename = {property:?}, skip_serializing_if = \"Option::is_none\")]\n"
        ));
        out.push_str(&format!(
            "    pub {}: Option<{}>,\n",
            field_ident(&property),
            rust_type(flag.kind)
        ));
    }
    out.push_str("}\n\n");
}

fn rust_type(kind: FlagKind) -> &'static str {
    match kind {
        FlagKind::Bool => "bool",
        FlagKind::String => "String",
        FlagKind::Number => "f64",
        FlagKind::StringList => "Vec<String>",
        FlagKind::NumberList => "Vec<f64>",
    }
}

fn field_ident(property: &str) -> String {
    let snake = to_hyphen_case(property).replace('-', "_");
    if KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}

fn struct_name(command: &str) -> String {
    let mut name = String::new();
    for token in command.split_whitespace() {
        let mut chars = token.chars().filter(|ch| ch.is_ascii_alphanumeric());
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.extend(chars);
        }
    }
    name.push_str("Options");
    name
}
