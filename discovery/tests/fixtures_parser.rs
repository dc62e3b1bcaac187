use std::fs;
use std::path::PathBuf;

use hugo_schema_core::{CommandSpec, FlagKind, validate_spec};
use hugo_schema_discovery::emit::{emit_declarations, emit_runtime_schema};
use hugo_schema_discovery::{assemble_spec, parse_command_help};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture '{}': {err}", path.display()))
}

fn parse_fixture(path: &[&str], name: &str) -> CommandSpec {
    let tokens: Vec<String> = path.iter().map(|token| (*token).to_string()).collect();
    parse_command_help(&tokens, &fixture(name))
}

#[test]
fn test_root_fixture_extracts_subcommands_and_flags() {
    let root = parse_fixture(&[], "hugo-help.txt");

    assert!(root.is_root());
    for expected in ["server", "mod", "new", "version"] {
        assert!(
            root.subcommands.iter().any(|name| name == expected),
            "missing '{expected}' subcommand"
        );
    }

    let base_url = root
        .flags
        .iter()
        .find(|flag| flag.long == "--baseURL")
        .expect("missing --baseURL");
    assert_eq!(base_url.short.as_deref(), Some("-b"));
    assert_eq!(base_url.type_token.as_deref(), Some("string"));
    assert_eq!(base_url.kind, FlagKind::String);

    let theme = root
        .flags
        .iter()
        .find(|flag| flag.long == "--theme")
        .expect("missing --theme");
    assert_eq!(theme.kind, FlagKind::StringList);

    assert!(root.flags.iter().all(|flag| flag.long != "--help"));
}

#[test]
fn test_root_fixture_folds_wrapped_poll_description() {
    let root = parse_fixture(&[], "hugo-help.txt");

    let poll = root
        .flags
        .iter()
        .find(|flag| flag.long == "--poll")
        .expect("missing --poll");
    assert!(poll.description.ends_with("to watch for file system changes"));
    assert_eq!(poll.kind, FlagKind::String);
}

#[test]
fn test_root_fixture_global_flags_with_enum_and_default() {
    let root = parse_fixture(&[], "hugo-help.txt");
    assert_eq!(root.global_flags.len(), 6);

    let log_level = root
        .global_flags
        .iter()
        .find(|flag| flag.long == "--logLevel")
        .expect("missing --logLevel");
    assert_eq!(log_level.description, "log level");
    assert_eq!(log_level.default_raw.as_deref(), Some("\"info\""));
    assert_eq!(
        log_level.enum_values.as_deref(),
        Some(&["debug".to_string(), "info".into(), "warn".into(), "error".into()][..])
    );

    let config_dir = root
        .global_flags
        .iter()
        .find(|flag| flag.long == "--configDir")
        .expect("missing --configDir");
    assert_eq!(config_dir.default_raw.as_deref(), Some("\"config\""));
}

#[test]
fn test_server_fixture_numeric_flags_and_defaults() {
    let server = parse_fixture(&["server"], "hugo-server-help.txt");

    assert_eq!(server.subcommands, vec!["trust".to_string()]);

    let port = server
        .flags
        .iter()
        .find(|flag| flag.long == "--port")
        .expect("missing --port");
    assert_eq!(port.kind, FlagKind::Number);
    assert_eq!(port.default_raw.as_deref(), Some("1313"));

    let live_reload = server
        .flags
        .iter()
        .find(|flag| flag.long == "--liveReloadPort")
        .expect("missing --liveReloadPort");
    assert_eq!(live_reload.default_raw.as_deref(), Some("-1"));
    // "(i.e. 443 / 1313)" stays in the description; it is not an enum.
    assert!(live_reload.description.contains("(i.e. 443 / 1313)"));
    assert!(live_reload.enum_values.is_none());

    let append_port = server
        .flags
        .iter()
        .find(|flag| flag.long == "--appendPort")
        .expect("missing --appendPort");
    assert_eq!(append_port.kind, FlagKind::Bool);
    assert_eq!(append_port.default_raw.as_deref(), Some("true"));
}

#[test]
fn test_mod_fixture_parses_leaf_and_parent_nodes() {
    let mod_node = parse_fixture(&["mod"], "hugo-mod-help.txt");
    assert_eq!(mod_node.subcommands.len(), 8);
    assert!(mod_node.flags.is_empty(), "only --help, which is dropped");

    let clean = parse_fixture(&["mod", "clean"], "hugo-mod-clean-help.txt");
    assert_eq!(clean.command(), "mod clean");
    assert!(clean.subcommands.is_empty());

    let longs: Vec<&str> = clean.flags.iter().map(|flag| flag.long.as_str()).collect();
    assert_eq!(longs, vec!["--all", "--pattern"]);

    let pattern = &clean.flags[1];
    // "(all if not set)" has no pipe and is not a default clause.
    assert!(pattern.description.contains("(all if not set)"));
    assert!(pattern.enum_values.is_none());
    assert!(pattern.default_raw.is_none());
}

#[test]
fn test_fixture_nodes_assemble_into_valid_schema() {
    let nodes = vec![
        parse_fixture(&[], "hugo-help.txt"),
        parse_fixture(&["server"], "hugo-server-help.txt"),
        parse_fixture(&["mod"], "hugo-mod-help.txt"),
        parse_fixture(&["mod", "clean"], "hugo-mod-clean-help.txt"),
        parse_fixture(&["new"], "hugo-new-help.txt"),
    ];

    let spec = assemble_spec(&nodes);

    assert!(validate_spec(&spec).is_empty());
    assert_eq!(spec.global_flags.len(), 6);
    assert_eq!(spec.commands.len(), 4);
    assert!(spec.find_command("mod clean").is_some());
    assert!(spec.find_command("__root__").is_none());

    // The global --config never leaks into a command's local list.
    for entry in &spec.commands {
        assert!(entry.flags.iter().all(|flag| flag.long != "--config"));
    }
}

#[test]
fn test_fixture_schema_emits_deterministic_artifacts() {
    let nodes = vec![
        parse_fixture(&[], "hugo-help.txt"),
        parse_fixture(&["server"], "hugo-server-help.txt"),
        parse_fixture(&["mod"], "hugo-mod-help.txt"),
        parse_fixture(&["mod", "clean"], "hugo-mod-clean-help.txt"),
    ];
    let spec = assemble_spec(&nodes);

    let schema_json = emit_runtime_schema(&spec).expect("schema serializes");
    assert_eq!(
        schema_json,
        emit_runtime_schema(&spec).expect("schema serializes")
    );

    let declarations = emit_declarations(&spec);
    assert!(declarations.contains("pub struct GlobalOptions {"));
    assert!(declarations.contains("pub struct ServerOptions {"));
    assert!(declarations.contains("pub struct ModCleanOptions {"));
    assert!(declarations.contains("#[serde(rename = \"tlsCertFile\""));

    // Commands are ordered alphabetically by joined path.
    let mod_pos = schema_json.find("\"command\": \"mod\"").expect("mod entry");
    let server_pos = schema_json
        .find("\"command\": \"server\"")
        .expect("server entry");
    assert!(mod_pos < server_pos);
}
