//! Reduction of discovered command nodes into the persisted schema.

use std::collections::HashSet;

use hugo_schema_core::{CommandFlags, CommandSpec, FlagSpec, HugoSpec};

/// Assembles discovered nodes into a [`HugoSpec`].
///
/// Global flags are accumulated across nodes in discovery order and
/// deduplicated by long name, first occurrence wins. The section order is
/// expected to be identical across nodes, which makes first-seen
/// deterministic in practice; if nodes ever genuinely disagree about the
/// same flag's type or description, the chosen representative is arbitrary
/// (known limitation). Each command's local list then drops any flag whose
/// long name is global, and the synthetic root node is discarded.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::{CommandSpec, FlagSpec};
/// use hugo_schema_discovery::assemble_spec;
///
/// let mut root = CommandSpec::new(Vec::new());
/// root.global_flags.push(FlagSpec::boolean("--quiet"));
/// root.subcommands.push("env".to_string());
///
/// let mut env = CommandSpec::new(vec!["env".into()]);
/// env.flags.push(FlagSpec::boolean("--quiet"));
/// env.flags.push(FlagSpec::boolean("--all"));
/// env.global_flags.push(FlagSpec::boolean("--quiet"));
///
/// let spec = assemble_spec(&[root, env]);
/// assert_eq!(spec.global_flags.len(), 1);
/// assert_eq!(spec.commands.len(), 1); // root removed
/// assert_eq!(spec.commands[0].flags.len(), 1); // --quiet stripped
/// ```
pub fn assemble_spec(commands: &[CommandSpec]) -> HugoSpec {
    let mut global_flags: Vec<FlagSpec> = Vec::new();
    let mut global_longs: HashSet<String> = HashSet::new();
    for node in commands {
        for flag in &node.global_flags {
            if global_longs.insert(flag.long.clone()) {
                global_flags.push(flag.clone());
            }
        }
    }

    let entries = commands
        .iter()
        .filter(|node| !node.is_root())
        .map(|node| CommandFlags {
            command: node.command(),
            flags: node
                .flags
                .iter()
                .filter(|flag| !global_longs.contains(&flag.long))
                .cloned()
                .collect(),
        })
        .collect();

    HugoSpec {
        global_flags,
        commands: entries,
    }
}
