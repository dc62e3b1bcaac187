//! Breadth-first discovery of the full command tree.
//!
//! The tree is implicit: each node's help text names its children. Discovery
//! models it explicitly as a worklist of path-token sequences plus a visited
//! set keyed by the space-joined path. The worklist only grows with
//! previously-unseen paths, so traversal terminates on any finite tree, and
//! a node claiming an already-visited subcommand is simply skipped.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, info};

use hugo_schema_core::CommandSpec;

use crate::error::DiscoveryError;
use crate::provider::HelpProvider;
use crate::sections::parse_command_help;

/// Visits every reachable command node and returns one [`CommandSpec`] per
/// node, in breadth-first discovery order with the synthetic root first.
///
/// Each visit issues one blocking help probe through `provider`; a probe
/// failure aborts the run and reports the path that was being probed.
pub fn discover_commands(
    provider: &dyn HelpProvider,
) -> Result<Vec<CommandSpec>, DiscoveryError> {
    let mut worklist: VecDeque<Vec<String>> = VecDeque::new();
    worklist.push_back(Vec::new());
    let mut visited: HashSet<String> = HashSet::new();
    let mut commands: Vec<CommandSpec> = Vec::new();

    while let Some(path) = worklist.pop_front() {
        if !visited.insert(path.join(" ")) {
            continue;
        }

        let help_text = provider.help(&path)?;
        let spec = parse_command_help(&path, &help_text);
        debug!(
            command = %spec.command(),
            flags = spec.flags.len(),
            subcommands = spec.subcommands.len(),
            "visited command node"
        );

        for name in &spec.subcommands {
            let mut child = path.clone();
            child.push(name.clone());
            worklist.push_back(child);
        }
        commands.push(spec);
    }

    info!(commands = commands.len(), "command tree discovery complete");
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory provider keyed by space-joined path.
    struct MapProvider {
        help_texts: HashMap<String, String>,
    }

    impl MapProvider {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                help_texts: entries
                    .iter()
                    .map(|(path, text)| ((*path).to_string(), (*text).to_string()))
                    .collect(),
            }
        }
    }

    impl HelpProvider for MapProvider {
        fn help(&self, path_tokens: &[String]) -> Result<String, DiscoveryError> {
            let path = path_tokens.join(" ");
            self.help_texts
                .get(&path)
                .cloned()
                .ok_or_else(|| DiscoveryError::HelpProbe {
                    path,
                    detail: "no help text registered".to_string(),
                })
        }
    }

    const ROOT_HELP: &str = "\
Usage:
  hugo [command]

Available Commands:
  mod         Manage modules
  version     Display version

Flags:
      --minify   minify any supported output format

Global Flags:
      --quiet    build in quiet mode
";

    const MOD_HELP: &str = "\
Usage:
  hugo mod [command]

Available Commands:
  clean       Delete the module cache

Flags:
  -h, --help   help for mod

Global Flags:
      --quiet    build in quiet mode
";

    const LEAF_HELP: &str = "\
Usage:
  hugo mod clean [flags]

Flags:
      --all   clean entire module cache

Global Flags:
      --quiet    build in quiet mode
";

    #[test]
    fn test_discovers_nested_tree_breadth_first() {
        let provider = MapProvider::new(&[
            ("", ROOT_HELP),
            ("mod", MOD_HELP),
            ("version", LEAF_HELP),
            ("mod clean", LEAF_HELP),
        ]);

        let commands = discover_commands(&provider).expect("discovery should succeed");
        let paths: Vec<String> = commands.iter().map(CommandSpec::command).collect();

        assert_eq!(paths, vec!["__root__", "mod", "version", "mod clean"]);
        assert!(commands[0].is_root());
    }

    #[test]
    fn test_self_referential_subcommand_expands_once() {
        // "loop" lists itself as a child. The child is a distinct path
        // ("loop loop"), which turns out to be a leaf; no path is visited
        // more than once.
        let loop_help = "\
Available Commands:
  loop        The same node again

Flags:
      --all   do everything
";
        let leaf_help = "\
Flags:
      --all   do everything
";
        let provider =
            MapProvider::new(&[("", loop_help), ("loop", loop_help), ("loop loop", leaf_help)]);

        let commands = discover_commands(&provider).expect("discovery should succeed");
        let paths: Vec<String> = commands.iter().map(CommandSpec::command).collect();

        assert_eq!(paths, vec!["__root__", "loop", "loop loop"]);
    }

    #[test]
    fn test_duplicate_sibling_listing_is_visited_once() {
        let root = "\
Available Commands:
  env         Display environment
  env         Display environment (listed twice)
";
        let env_help = "\
Flags:
      --all   print all environment data
";
        let provider = MapProvider::new(&[("", root), ("env", env_help)]);

        let commands = discover_commands(&provider).expect("discovery should succeed");
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_probe_failure_reports_failing_path() {
        let provider = MapProvider::new(&[("", ROOT_HELP), ("mod", MOD_HELP)]);

        let err = discover_commands(&provider).expect_err("missing node should fail");
        match err {
            DiscoveryError::HelpProbe { path, .. } => assert_eq!(path, "version"),
            other => panic!("expected help probe error, got: {other}"),
        }
    }
}
