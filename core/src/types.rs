//! Schema type definitions for the Hugo command surface.
//!
//! This module defines the data model produced by help-text discovery and
//! consumed by the argument-vector builder. The types are designed for
//! serialization with [`serde`]; their JSON form (camelCase keys) is the
//! persisted runtime artifact.

use serde::{Deserialize, Serialize};

use crate::names::to_hyphen_case;

/// Reserved path token for the synthetic root command node.
///
/// The root node exists only to seed discovery; it never appears in an
/// assembled [`HugoSpec`].
pub const ROOT_TOKEN: &str = "__root__";

/// Normalized value type of a flag, used for argv serialization.
///
/// This is a closed enumeration: the serializer's switch over it is
/// exhaustive, and new kinds are added by extending both together.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::FlagKind;
///
/// let kind = FlagKind::default();
/// assert_eq!(kind, FlagKind::Bool);
/// assert!(!kind.is_list());
/// assert!(FlagKind::StringList.is_list());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FlagKind {
    /// Presence-only flag; serialized as `"boolean"`.
    #[default]
    #[serde(rename = "boolean")]
    Bool,
    /// Single string value.
    String,
    /// Single numeric value.
    Number,
    /// Repeatable string value (flag emitted once per element).
    StringList,
    /// Repeatable numeric value.
    NumberList,
}

impl FlagKind {
    /// Returns `true` for the repeatable kinds.
    pub fn is_list(self) -> bool {
        matches!(self, FlagKind::StringList | FlagKind::NumberList)
    }
}

/// Schema for one command-line flag.
///
/// The `long` form (including its `--` marker) is the flag's identity and is
/// unique within any flags list. The raw `type_token` is kept as printed by
/// the Hugo help output; `kind` is the normalized type derived from it.
///
/// Use the constructor methods [`boolean`](FlagSpec::boolean) and
/// [`with_type`](FlagSpec::with_type) to create flags, then chain builder
/// methods like [`with_short`](FlagSpec::with_short).
///
/// # Examples
///
/// ```
/// use hugo_schema_core::{FlagKind, FlagSpec};
///
/// let minify = FlagSpec::boolean("--minify").with_description("minify output");
/// assert_eq!(minify.kind, FlagKind::Bool);
/// assert_eq!(minify.name(), "minify");
///
/// let base_url = FlagSpec::with_type("--baseURL", "string", FlagKind::String)
///     .with_short("-b");
/// assert!(base_url.matches_key("baseURL"));
/// assert!(base_url.matches_key("base-url"));
/// assert!(!base_url.matches_key("port"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagSpec {
    /// Long form including the leading `--` (e.g. `"--baseURL"`).
    pub long: String,
    /// Single-character short alias including the leading `-`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Raw type word printed next to the flag (e.g. `"string"`), absent when
    /// no type could be confidently separated from the description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_token: Option<String>,
    /// Normalized type used for serialization.
    pub kind: FlagKind,
    /// Description text with trailing default and enum clauses removed.
    #[serde(default)]
    pub description: String,
    /// Allowed values, present only for a recognized `(a|b|c)` clause.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Raw inner text of a trailing `(default ...)` clause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_raw: Option<String>,
}

impl FlagSpec {
    /// Creates a presence-only boolean flag.
    pub fn boolean(long: &str) -> Self {
        Self {
            long: long.to_string(),
            short: None,
            type_token: None,
            kind: FlagKind::Bool,
            description: String::new(),
            enum_values: None,
            default_raw: None,
        }
    }

    /// Creates a flag with a raw type token and its normalized kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use hugo_schema_core::{FlagKind, FlagSpec};
    ///
    /// let port = FlagSpec::with_type("--port", "int", FlagKind::Number);
    /// assert_eq!(port.type_token.as_deref(), Some("int"));
    /// assert_eq!(port.kind, FlagKind::Number);
    /// ```
    pub fn with_type(long: &str, type_token: &str, kind: FlagKind) -> Self {
        Self {
            long: long.to_string(),
            short: None,
            type_token: Some(type_token.to_string()),
            kind,
            description: String::new(),
            enum_values: None,
            default_raw: None,
        }
    }

    /// Adds a short alias.
    pub fn with_short(mut self, short: &str) -> Self {
        self.short = Some(short.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Returns the long name without its `--` marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use hugo_schema_core::FlagSpec;
    ///
    /// assert_eq!(FlagSpec::boolean("--cleanDestinationDir").name(), "cleanDestinationDir");
    /// ```
    pub fn name(&self) -> &str {
        self.long.strip_prefix("--").unwrap_or(&self.long)
    }

    /// Checks whether an options-mapping key addresses this flag.
    ///
    /// The key is converted to hyphen-separated form and compared against
    /// both the hyphenated long name and the verbatim long name, so
    /// `baseUrl`, `base-url`, and `baseURL` all address `--baseURL`.
    pub fn matches_key(&self, key: &str) -> bool {
        let hyphenated = to_hyphen_case(key);
        hyphenated == to_hyphen_case(self.name()) || hyphenated == self.name()
    }
}

/// One node of the discovered command tree.
///
/// Created once per visited node during discovery and consumed by the
/// assembler; `flags` may still overlap with `global_flags` at this stage.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::{CommandSpec, ROOT_TOKEN};
///
/// let node = CommandSpec::new(vec!["mod".into(), "clean".into()]);
/// assert_eq!(node.command(), "mod clean");
/// assert!(!node.is_root());
///
/// let root = CommandSpec::new(Vec::new());
/// assert_eq!(root.command(), ROOT_TOKEN);
/// assert!(root.is_root());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSpec {
    /// Ordered path tokens (e.g. `["mod", "clean"]`); the synthetic root
    /// uses the single [`ROOT_TOKEN`].
    pub path_tokens: Vec<String>,
    /// Command-local flags from the node's `Flags:` section.
    pub flags: Vec<FlagSpec>,
    /// Flags from the node's `Global Flags:` section.
    pub global_flags: Vec<FlagSpec>,
    /// Immediate child command names, used to drive traversal.
    pub subcommands: Vec<String>,
}

impl CommandSpec {
    /// Creates an empty node for the given path; an empty path yields the
    /// synthetic root.
    pub fn new(path_tokens: Vec<String>) -> Self {
        let path_tokens = if path_tokens.is_empty() {
            vec![ROOT_TOKEN.to_string()]
        } else {
            path_tokens
        };
        Self {
            path_tokens,
            ..Default::default()
        }
    }

    /// Returns the space-joined command path.
    pub fn command(&self) -> String {
        self.path_tokens.join(" ")
    }

    /// Returns `true` for the synthetic root node.
    pub fn is_root(&self) -> bool {
        self.path_tokens.len() == 1 && self.path_tokens[0] == ROOT_TOKEN
    }
}

/// Flags applicable to one command, keyed by its space-joined path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandFlags {
    /// Space-joined command path (e.g. `"mod clean"`).
    pub command: String,
    /// Command-local flags, with global flags already removed.
    pub flags: Vec<FlagSpec>,
}

/// The assembled, persisted schema for the whole Hugo command tree.
///
/// Produced once by discovery and thereafter treated as immutable, read-only
/// configuration. No flag in `commands[i].flags` shares a `long` with a
/// global flag, and the synthetic root never appears in `commands`.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::{CommandFlags, FlagKind, FlagSpec, HugoSpec};
///
/// let spec = HugoSpec {
///     global_flags: vec![FlagSpec::with_type("--config", "string", FlagKind::String)],
///     commands: vec![CommandFlags {
///         command: "server".into(),
///         flags: vec![FlagSpec::with_type("--port", "int", FlagKind::Number)],
///     }],
/// };
///
/// assert!(spec.find_command("server").is_some());
/// // Global + local flags, globals first.
/// assert_eq!(spec.flags_for_command("server").len(), 2);
/// assert_eq!(spec.flags_for_command("new site").len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HugoSpec {
    /// Deduplicated flags usable by every command.
    pub global_flags: Vec<FlagSpec>,
    /// Per-command flag lists, excluding the synthetic root.
    pub commands: Vec<CommandFlags>,
}

impl HugoSpec {
    /// Finds a command entry by its space-joined path.
    pub fn find_command(&self, command: &str) -> Option<&CommandFlags> {
        self.commands.iter().find(|entry| entry.command == command)
    }

    /// Returns all flags applicable to a command: globals first, then the
    /// command's own flags. Unknown commands still get the globals.
    pub fn flags_for_command(&self, command: &str) -> Vec<&FlagSpec> {
        let mut flags: Vec<&FlagSpec> = self.global_flags.iter().collect();
        if let Some(entry) = self.find_command(command) {
            flags.extend(entry.flags.iter());
        }
        flags
    }
}
