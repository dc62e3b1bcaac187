//! Section-level parsing of one command node's help text.
//!
//! Locates the `Flags:`, `Global Flags:`, and `Available Commands:` sections
//! and runs the line grammar over each. Absence of a section is not an
//! error; it yields an empty list.

use std::collections::HashSet;

use hugo_schema_core::{CommandSpec, FlagSpec};

use crate::grammar::{
    LineKind, append_continuation, classify_line, is_section_header, is_usage_hint,
    parse_flag_line, parse_subcommand_line, refine_flag,
};

/// Header of the command-local flags section.
pub const FLAGS_HEADER: &str = "Flags:";
/// Header of the global flags section.
pub const GLOBAL_FLAGS_HEADER: &str = "Global Flags:";
/// Header of the subcommand listing section.
pub const COMMANDS_HEADER: &str = "Available Commands:";

/// The conventional help flag, dropped everywhere: it is not a typed option.
const HELP_FLAG: &str = "--help";

/// Parses the flag list under the given section header.
///
/// Parsing proceeds from the line after the header until the Cobra
/// `Use "..."` hint, another section header, or end of input. Wrapped
/// description lines are folded into the preceding flag, and default/enum
/// clauses are extracted once each description is complete. When the same
/// long name appears twice, the first declaration wins.
///
/// # Examples
///
/// ```
/// use hugo_schema_discovery::sections::{FLAGS_HEADER, parse_flag_section};
///
/// let help = "\
/// Flags:
///   -D, --buildDrafts      include content marked as draft
///   -h, --help             help for hugo
///
/// Global Flags:
///       --quiet            build in quiet mode
/// ";
///
/// let flags = parse_flag_section(help, FLAGS_HEADER);
/// assert_eq!(flags.len(), 1); // --help is dropped
/// assert_eq!(flags[0].long, "--buildDrafts");
/// ```
pub fn parse_flag_section(help_text: &str, header: &str) -> Vec<FlagSpec> {
    let lines: Vec<&str> = help_text.lines().collect();
    let Some(start) = lines.iter().position(|line| line.trim() == header) else {
        return Vec::new();
    };

    let mut flags: Vec<FlagSpec> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    // Continuations only attach to the flag declared on the line right
    // above them (possibly through further continuations).
    let mut continuing = false;
    for line in &lines[start + 1..] {
        if is_usage_hint(line) || is_section_header(line) {
            break;
        }
        match classify_line(line) {
            LineKind::Flag => {
                continuing = true;
                if let Some(flag) = parse_flag_line(line) {
                    if seen.insert(flag.long.clone()) {
                        flags.push(flag);
                    } else {
                        continuing = false;
                    }
                }
            }
            LineKind::Continuation => {
                if continuing {
                    if let Some(current) = flags.last_mut() {
                        append_continuation(&mut current.description, line);
                    }
                }
            }
            LineKind::SectionHeader | LineKind::Other => {
                continuing = false;
            }
        }
    }

    flags.retain(|flag| flag.long != HELP_FLAG);
    for flag in &mut flags {
        refine_flag(flag);
    }
    flags
}

/// Parses the subcommand names under `Available Commands:`.
///
/// Collects listing lines (two-space indent, name, at least two spaces,
/// description) until the next section header, the `Use "..."` hint, or end
/// of input; blank lines inside the run are skipped.
pub fn parse_subcommands(help_text: &str) -> Vec<String> {
    let lines: Vec<&str> = help_text.lines().collect();
    let Some(start) = lines
        .iter()
        .position(|line| line.trim() == COMMANDS_HEADER)
    else {
        return Vec::new();
    };

    let mut names = Vec::new();
    for line in &lines[start + 1..] {
        if is_usage_hint(line) || is_section_header(line) {
            break;
        }
        if let Some(name) = parse_subcommand_line(line) {
            names.push(name);
        }
    }
    names
}

/// Parses the full help text of one command node into a [`CommandSpec`].
///
/// An empty path yields the synthetic root node.
pub fn parse_command_help(path_tokens: &[String], help_text: &str) -> CommandSpec {
    let mut spec = CommandSpec::new(path_tokens.to_vec());
    spec.flags = parse_flag_section(help_text, FLAGS_HEADER);
    spec.global_flags = parse_flag_section(help_text, GLOBAL_FLAGS_HEADER);
    spec.subcommands = parse_subcommands(help_text);
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use hugo_schema_core::FlagKind;

    const SERVER_HELP: &str = "\
Start the embedded web server

The server command starts Hugo's embedded web server.

Usage:
  hugo server [command] [flags]

Available Commands:
  trust       Install the local CA in the system trust store

Flags:
      --appendPort             append port to baseURL (default true)
      --bind string            interface to which the server will bind (default \"127.0.0.1\")
  -h, --help                   help for server
      --liveReloadPort int     port for live reloading (default -1)
      --poll string            set this to a poll interval, e.g --poll 700ms, to use a poll
                               based approach to watch for file system changes
  -p, --port int               port on which the server will listen (default 1313)

Global Flags:
      --config string      config file (default is hugo.yaml|json|toml)
      --logLevel string    log level (debug|info|warn|error) (default \"info\")
      --quiet              build in quiet mode

Use \"hugo server [command] --help\" for more information about a command.
";

    #[test]
    fn test_parse_flags_section_stops_before_global_flags() {
        let flags = parse_flag_section(SERVER_HELP, FLAGS_HEADER);

        let longs: Vec<&str> = flags.iter().map(|flag| flag.long.as_str()).collect();
        assert_eq!(
            longs,
            vec!["--appendPort", "--bind", "--liveReloadPort", "--poll", "--port"]
        );
        assert!(!longs.contains(&"--config"));
    }

    #[test]
    fn test_help_flag_is_always_dropped() {
        let flags = parse_flag_section(SERVER_HELP, FLAGS_HEADER);
        assert!(flags.iter().all(|flag| flag.long != "--help"));
    }

    #[test]
    fn test_wrapped_description_is_folded() {
        let flags = parse_flag_section(SERVER_HELP, FLAGS_HEADER);
        let poll = flags
            .iter()
            .find(|flag| flag.long == "--poll")
            .expect("--poll should be parsed");

        assert_eq!(
            poll.description,
            "set this to a poll interval, e.g --poll 700ms, to use a poll based approach to watch for file system changes"
        );
    }

    #[test]
    fn test_defaults_extracted_from_flag_descriptions() {
        let flags = parse_flag_section(SERVER_HELP, FLAGS_HEADER);

        let port = flags.iter().find(|flag| flag.long == "--port").expect("--port");
        assert_eq!(port.kind, FlagKind::Number);
        assert_eq!(port.default_raw.as_deref(), Some("1313"));
        assert_eq!(port.description, "port on which the server will listen");

        let bind = flags.iter().find(|flag| flag.long == "--bind").expect("--bind");
        assert_eq!(bind.default_raw.as_deref(), Some("\"127.0.0.1\""));
    }

    #[test]
    fn test_global_flags_section_parsed_independently() {
        let globals = parse_flag_section(SERVER_HELP, GLOBAL_FLAGS_HEADER);

        let longs: Vec<&str> = globals.iter().map(|flag| flag.long.as_str()).collect();
        assert_eq!(longs, vec!["--config", "--logLevel", "--quiet"]);

        let log_level = &globals[1];
        assert_eq!(log_level.description, "log level");
        assert_eq!(log_level.default_raw.as_deref(), Some("\"info\""));
        assert_eq!(
            log_level.enum_values.as_deref().map(<[String]>::len),
            Some(4)
        );

        // The default clause's pipes are not an enum once the clause is gone.
        let config = &globals[0];
        assert_eq!(config.description, "config file");
        assert_eq!(config.default_raw.as_deref(), Some("hugo.yaml|json|toml"));
        assert!(config.enum_values.is_none());
    }

    #[test]
    fn test_parse_subcommands_listing() {
        assert_eq!(parse_subcommands(SERVER_HELP), vec!["trust".to_string()]);
    }

    #[test]
    fn test_absent_sections_yield_empty_lists() {
        let help = "No sections at all\n\nJust prose.\n";
        assert!(parse_flag_section(help, FLAGS_HEADER).is_empty());
        assert!(parse_flag_section(help, GLOBAL_FLAGS_HEADER).is_empty());
        assert!(parse_subcommands(help).is_empty());
    }

    #[test]
    fn test_duplicate_long_keeps_first_declaration() {
        let help = "\
Flags:
      --minify           minify supported output formats
      --minify           duplicated declaration
";
        let flags = parse_flag_section(help, FLAGS_HEADER);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].description, "minify supported output formats");
    }

    #[test]
    fn test_parse_command_help_builds_full_node() {
        let spec = parse_command_help(&["server".to_string()], SERVER_HELP);

        assert_eq!(spec.command(), "server");
        assert_eq!(spec.flags.len(), 5);
        assert_eq!(spec.global_flags.len(), 3);
        assert_eq!(spec.subcommands, vec!["trust".to_string()]);
    }

    #[test]
    fn test_parse_command_help_with_empty_path_is_root() {
        let spec = parse_command_help(&[], SERVER_HELP);
        assert!(spec.is_root());
    }
}
