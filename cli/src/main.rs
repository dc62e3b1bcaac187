use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hugo_schema_argv::ArgvBuilder;
use hugo_schema_core::{HugoSpec, validate_spec};
use hugo_schema_discovery::emit::{DECLARATIONS_FILE, RUNTIME_SCHEMA_FILE, write_artifacts};
use hugo_schema_discovery::{BinaryHelpProvider, discover_spec, parse_command_help};

#[derive(Debug, Parser)]
#[command(name = "hugo-schema")]
#[command(about = "Discover the Hugo CLI grammar and build argument vectors from it")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Discover the full command tree from a Hugo executable and write both artifacts.
    Discover(DiscoverArgs),
    /// Parse one command's help text from a file without executing Hugo.
    ParseFile(ParseFileArgs),
    /// Parse one command's help text from stdin without executing Hugo.
    ParseStdin(ParseStdinArgs),
    /// Re-emit both artifacts from an existing schema JSON file.
    Emit(EmitArgs),
    /// Validate one or more schema JSON files.
    Validate(ValidateArgs),
    /// Build the argument vector for a command from an options JSON object.
    BuildArgs(BuildArgsArgs),
}

#[derive(Debug, Args)]
struct DiscoverArgs {
    /// Path to the Hugo executable to probe.
    #[arg(long)]
    bin: PathBuf,
    /// Output directory for the schema and declarations artifacts.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Space-joined command path the help text belongs to (empty for the root).
    #[arg(long, default_value = "")]
    command: String,
    /// Path to a file containing captured help text.
    #[arg(long)]
    input: PathBuf,
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    /// Space-joined command path the help text belongs to (empty for the root).
    #[arg(long, default_value = "")]
    command: String,
}

#[derive(Debug, Args)]
struct EmitArgs {
    /// Path to an existing schema JSON file.
    #[arg(long)]
    spec: PathBuf,
    /// Output directory for the re-emitted artifacts.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Schema JSON files to validate.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct BuildArgsArgs {
    /// Path to the schema JSON artifact.
    #[arg(long)]
    spec: PathBuf,
    /// Space-joined command path (e.g. "mod clean").
    command: String,
    /// Options as a JSON object (e.g. '{"minify": true}').
    #[arg(long)]
    options: Option<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Discover(args) => run_discover(args),
        Command::ParseFile(args) => run_parse_file(args),
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::Emit(args) => run_emit(args),
        Command::Validate(args) => run_validate(args),
        Command::BuildArgs(args) => run_build_args(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_discover(args: DiscoverArgs) -> Result<(), String> {
    let provider = BinaryHelpProvider::new(&args.bin);
    let spec = discover_spec(&provider).map_err(|err| err.to_string())?;

    let errors = validate_spec(&spec);
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(format!(
            "discovered schema failed validation: {}",
            messages.join("; ")
        ));
    }

    write_artifacts(&spec, &args.out_dir).map_err(|err| err.to_string())?;
    println!(
        "Discovered {} command(s) and {} global flag(s); wrote {} and {} to '{}'.",
        spec.commands.len(),
        spec.global_flags.len(),
        RUNTIME_SCHEMA_FILE,
        DECLARATIONS_FILE,
        args.out_dir.display()
    );
    Ok(())
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let help_text = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    print_parsed_node(&args.command, &help_text)
}

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), String> {
    let mut help_text = String::new();
    std::io::stdin()
        .read_to_string(&mut help_text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    print_parsed_node(&args.command, &help_text)
}

fn print_parsed_node(command: &str, help_text: &str) -> Result<(), String> {
    let path_tokens: Vec<String> = command.split_whitespace().map(str::to_string).collect();
    let node = parse_command_help(&path_tokens, help_text);
    let rendered = serde_json::to_string_pretty(&node)
        .map_err(|err| format!("Failed to serialize parsed node: {err}"))?;
    println!("{rendered}");
    Ok(())
}

fn run_emit(args: EmitArgs) -> Result<(), String> {
    let spec = load_spec(&args.spec)?;
    write_artifacts(&spec, &args.out_dir).map_err(|err| err.to_string())?;
    println!(
        "Wrote {RUNTIME_SCHEMA_FILE} and {DECLARATIONS_FILE} to '{}'.",
        args.out_dir.display()
    );
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut failures = 0usize;
    for input in &args.inputs {
        let spec = load_spec(input)?;
        let errors = validate_spec(&spec);
        if errors.is_empty() {
            println!(
                "{}: ok ({} command(s), {} global flag(s))",
                input.display(),
                spec.commands.len(),
                spec.global_flags.len()
            );
        } else {
            failures += 1;
            for error in &errors {
                eprintln!("{}: {error}", input.display());
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} schema file(s) failed validation"));
    }
    Ok(())
}

fn run_build_args(args: BuildArgsArgs) -> Result<(), String> {
    let builder = ArgvBuilder::from_file(&args.spec).map_err(|err| err.to_string())?;

    let options = match &args.options {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw)
                .map_err(|err| format!("Failed to parse --options JSON: {err}"))?;
            match value {
                serde_json::Value::Object(map) => Some(map),
                _ => return Err("--options must be a JSON object".to_string()),
            }
        }
        None => None,
    };

    for token in builder.build_args(&args.command, options.as_ref()) {
        println!("{token}");
    }
    Ok(())
}

fn load_spec(path: &PathBuf) -> Result<HugoSpec, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("Failed to parse '{}': {err}", path.display()))
}
