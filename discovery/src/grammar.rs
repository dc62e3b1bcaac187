//! Line-level grammar for Cobra-style help output.
//!
//! Hugo's help text is loosely structured: flag declarations, wrapped
//! description continuations, section headers, and prose all share the same
//! stream of lines. This module classifies single lines and extracts the
//! typed pieces of a flag declaration, so the section parser above it can be
//! a small state machine over [`LineKind`] instead of one large pattern.
//!
//! Ambiguity is resolved conservatively and never raised as an error: a
//! candidate type word outside the known whitelist is folded back into the
//! description, and a flag without a type token defaults to boolean.

use std::sync::LazyLock;

use regex::Regex;

use hugo_schema_core::{FlagKind, FlagSpec};

/// Type words Hugo prints next to flags that take a value.
///
/// A candidate word outside this whitelist is treated as the first word of
/// the description, which guards boolean flags whose description starts
/// with an ordinary word.
pub const TYPE_TOKENS: &[&str] = &[
    "bool",
    "duration",
    "float",
    "float64",
    "int",
    "int32",
    "int64",
    "ints",
    "string",
    "stringArray",
    "stringSlice",
    "strings",
    "uint",
];

/// Regex patterns for the line grammar.
static PATTERNS: LazyLock<GrammarPatterns> = LazyLock::new(GrammarPatterns::new);

struct GrammarPatterns {
    // "  -b, --baseURL string   hostname (and path) to the root"
    flag_line: Regex,
    // "Flags:", "Global Flags:", "Available Commands:"
    section_header: Regex,
    // "  server      Start the embedded web server"
    subcommand_line: Regex,
    // trailing "(default ...)" / "(default is ...)"
    default_clause: Regex,
    // first parenthetical containing a pipe
    enum_clause: Regex,
    simple_token: Regex,
}

impl GrammarPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime condition.
        Self {
            flag_line: Regex::new(
                r"^\s+(?:(-[A-Za-z]),\s+)?(--[A-Za-z][-A-Za-z0-9._]*)(?:\s+(\S+))?(?:\s+(.*))?$",
            )
            .expect("static regex must compile"),
            section_header: Regex::new(r"^[A-Z][A-Za-z0-9 ]*:$").expect("static regex must compile"),
            subcommand_line: Regex::new(r"^  (\S+)\s{2,}\S").expect("static regex must compile"),
            default_clause: Regex::new(r"(?i)\(default(?:\s+is)?\s+(.*)\)$")
                .expect("static regex must compile"),
            enum_clause: Regex::new(r"\(([^)]*\|[^)]*)\)").expect("static regex must compile"),
            simple_token: Regex::new(r"^[A-Za-z0-9._-]+$").expect("static regex must compile"),
        }
    }
}

/// Classification of a single help-text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A flag declaration (`  -b, --baseURL string  ...`).
    Flag,
    /// An indented wrap of the previous flag's description.
    Continuation,
    /// A section header (`Flags:`, `Available Commands:`).
    SectionHeader,
    /// Anything else: blank lines, usage lines, prose.
    Other,
}

/// Classifies one line of help text.
///
/// # Examples
///
/// ```
/// use hugo_schema_discovery::grammar::{LineKind, classify_line};
///
/// assert_eq!(classify_line("Flags:"), LineKind::SectionHeader);
/// assert_eq!(classify_line("  -w, --watch   watch for changes"), LineKind::Flag);
/// assert_eq!(classify_line("      wrapped description text"), LineKind::Continuation);
/// assert_eq!(classify_line(""), LineKind::Other);
/// ```
pub fn classify_line(line: &str) -> LineKind {
    if is_section_header(line) {
        return LineKind::SectionHeader;
    }
    if PATTERNS.flag_line.is_match(line) {
        return LineKind::Flag;
    }
    if is_continuation_line(line) {
        return LineKind::Continuation;
    }
    LineKind::Other
}

/// Returns `true` for a capitalized word-phrase followed by a colon with
/// nothing else on the line.
pub fn is_section_header(line: &str) -> bool {
    PATTERNS.section_header.is_match(line.trim_end())
}

/// Returns `true` for an indented wrap line: at least two leading spaces and
/// a first non-space character that is not a dash.
pub fn is_continuation_line(line: &str) -> bool {
    let trimmed = line.trim();
    line.starts_with("  ") && !trimmed.is_empty() && !trimmed.starts_with('-')
}

/// Returns `true` for Cobra's trailing `Use "..." for more information`
/// hint, which is printed unindented and terminates flag parsing.
pub fn is_usage_hint(line: &str) -> bool {
    line.starts_with("Use \"")
}

/// Parses one flag declaration line into a [`FlagSpec`].
///
/// The optional word after the long flag is taken as a type token only when
/// it appears in [`TYPE_TOKENS`]; otherwise it is restored as the first word
/// of the description and the flag stays boolean. Default and enum clauses
/// are left in the description until [`refine_flag`] runs, so wrapped
/// continuation lines can be folded in first.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::FlagKind;
/// use hugo_schema_discovery::grammar::parse_flag_line;
///
/// let flag = parse_flag_line("  -p, --port int   port on which the server will listen")
///     .expect("flag line parses");
/// assert_eq!(flag.long, "--port");
/// assert_eq!(flag.short.as_deref(), Some("-p"));
/// assert_eq!(flag.kind, FlagKind::Number);
///
/// // "watch" is not a type word, so it stays in the description.
/// let flag = parse_flag_line("  -w, --watch   watch filesystem for changes")
///     .expect("flag line parses");
/// assert_eq!(flag.kind, FlagKind::Bool);
/// assert_eq!(flag.description, "watch filesystem for changes");
/// ```
pub fn parse_flag_line(line: &str) -> Option<FlagSpec> {
    let caps = PATTERNS.flag_line.captures(line)?;

    let short = caps.get(1).map(|m| m.as_str().to_string());
    let long = caps[2].to_string();
    let candidate = caps.get(3).map(|m| m.as_str());
    let rest = caps.get(4).map(|m| m.as_str().trim()).unwrap_or("");

    let (type_token, description) = match candidate {
        Some(word) if TYPE_TOKENS.contains(&word) => (Some(word.to_string()), rest.to_string()),
        Some(word) => {
            let mut description = word.to_string();
            if !rest.is_empty() {
                description.push(' ');
                description.push_str(rest);
            }
            (None, description)
        }
        None => (None, rest.to_string()),
    };

    Some(FlagSpec {
        kind: flag_kind_for(type_token.as_deref()),
        long,
        short,
        type_token,
        description,
        enum_values: None,
        default_raw: None,
    })
}

/// Maps a raw type token to its normalized [`FlagKind`].
///
/// Total and deterministic: an absent token means boolean, and a present
/// but unrecognized token degrades to string rather than failing.
pub fn flag_kind_for(type_token: Option<&str>) -> FlagKind {
    match type_token {
        None | Some("bool") => FlagKind::Bool,
        Some("int" | "int32" | "int64" | "uint" | "float" | "float64") => FlagKind::Number,
        Some("strings" | "stringArray" | "stringSlice") => FlagKind::StringList,
        Some("ints") => FlagKind::NumberList,
        Some(_) => FlagKind::String,
    }
}

/// Returns the subcommand name from an `Available Commands:` listing line,
/// which uses a two-space indent, the name, and at least two more spaces
/// before the description.
pub fn parse_subcommand_line(line: &str) -> Option<String> {
    PATTERNS
        .subcommand_line
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Appends a wrapped continuation line to a flag description with
/// single-space normalization.
pub fn append_continuation(description: &mut String, line: &str) {
    let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return;
    }
    if !description.is_empty() {
        description.push(' ');
    }
    description.push_str(&normalized);
}

/// Strips a trailing `(default ...)` clause, returning the cleaned
/// description and the inner text verbatim.
///
/// Idempotent: re-applying it to its own cleaned output changes nothing.
///
/// # Examples
///
/// ```
/// use hugo_schema_discovery::grammar::extract_default;
///
/// let (cleaned, default) = extract_default("config dir (default \"config\")");
/// assert_eq!(cleaned, "config dir");
/// assert_eq!(default.as_deref(), Some("\"config\""));
///
/// let (unchanged, none) = extract_default("config dir");
/// assert_eq!(unchanged, "config dir");
/// assert!(none.is_none());
/// ```
pub fn extract_default(description: &str) -> (String, Option<String>) {
    let trimmed = description.trim_end();
    match PATTERNS.default_clause.captures(trimmed) {
        Some(caps) => {
            let clause = caps.get(0).expect("capture 0 always present");
            let cleaned = trimmed[..clause.start()].trim_end().to_string();
            (cleaned, Some(caps[1].to_string()))
        }
        None => (trimmed.to_string(), None),
    }
}

/// Extracts a `(a|b|c)`-shaped enum clause from a description.
///
/// The first parenthetical containing a pipe is considered; it is accepted
/// only when splitting on `|` yields at least two tokens and every trimmed
/// token is a simple word (letters, digits, dot, underscore, hyphen).
/// Anything else (example URLs, prose with pipes) leaves the description
/// unchanged.
///
/// # Examples
///
/// ```
/// use hugo_schema_discovery::grammar::extract_enum;
///
/// let (cleaned, values) = extract_enum("filesystem cache behavior (all|cache|assets)");
/// assert_eq!(cleaned, "filesystem cache behavior");
/// assert_eq!(values.unwrap(), vec!["all", "cache", "assets"]);
///
/// // Not an enumeration: tokens contain spaces.
/// let (unchanged, none) = extract_enum("see (the docs | the wiki) for details");
/// assert_eq!(unchanged, "see (the docs | the wiki) for details");
/// assert!(none.is_none());
/// ```
pub fn extract_enum(description: &str) -> (String, Option<Vec<String>>) {
    let Some(caps) = PATTERNS.enum_clause.captures(description) else {
        return (description.to_string(), None);
    };

    let tokens: Vec<String> = caps[1].split('|').map(|t| t.trim().to_string()).collect();
    let accepted = tokens.len() >= 2
        && tokens
            .iter()
            .all(|token| PATTERNS.simple_token.is_match(token));
    if !accepted {
        return (description.to_string(), None);
    }

    let clause = caps.get(0).expect("capture 0 always present");
    let head = description[..clause.start()].trim_end();
    let tail = description[clause.end()..].trim_start();
    let cleaned = if head.is_empty() || tail.is_empty() {
        format!("{head}{tail}")
    } else {
        format!("{head} {tail}")
    };
    (cleaned.trim().to_string(), Some(tokens))
}

/// Applies the default and enum extractors to a flag's folded description.
pub fn refine_flag(flag: &mut FlagSpec) {
    let (cleaned, default_raw) = extract_default(&flag.description);
    let (cleaned, enum_values) = extract_enum(&cleaned);
    flag.description = cleaned;
    flag.default_raw = default_raw;
    flag.enum_values = enum_values;
}
