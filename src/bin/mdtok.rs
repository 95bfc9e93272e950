//! Command-line interface for mdtok
//! Tokenizes a markdown file (or stdin) and prints the token stream in one of the registered formats.
//!
//! Usage:
//!   mdtok tokenize `<path>` [--format `<format>`] [--config `<file>`] [--no-balance]
//!   mdtok list-formats
//!
//! Pass `-` as the path to read from stdin.

use clap::{Arg, ArgAction, ArgMatches, Command};
use mdtok::config::{Loader, LOCAL_CONFIG_FILE};
use mdtok::markdown::formats::FormatRegistry;
use mdtok::markdown::{tokenize, tokenize_balanced};
use std::error::Error;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("mdtok")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize markdown into a balanced marker stream")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Enable info-level logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a markdown file")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (marked, tokens, json, yaml)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults and ./mdtok.toml"),
                )
                .arg(
                    Arg::new("no-balance")
                        .long("no-balance")
                        .help("Keep dangling italic/bold tags")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if matches.get_flag("verbose") {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => handle_tokenize_command(tokenize_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Handle the tokenize command
fn handle_tokenize_command(matches: &ArgMatches) -> Result<String, Box<dyn Error>> {
    let mut loader = Loader::with_defaults().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.with_format(format)?;
    }
    if matches.get_flag("no-balance") {
        loader = loader.with_balancing(false)?;
    }
    let config = loader.build()?;

    let path = matches
        .get_one::<String>("path")
        .ok_or("path is required")?;
    let source = read_source(path)?;
    tracing::info!(path = %path, bytes = source.len(), "read source");

    let tokenized = if config.balancing.enabled {
        tokenize_balanced(&source)
    } else {
        tokenize(&source)
    };

    let registry = FormatRegistry::with_defaults();
    Ok(registry.serialize(&tokenized, &config.output.format)?)
}

/// Handle the list-formats command
fn handle_list_formats_command() -> Result<String, Box<dyn Error>> {
    let registry = FormatRegistry::with_defaults();
    let mut out = String::from("Available formats:\n\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        out.push_str(&format!("  {:<8} {}\n", name, description));
    }
    Ok(out)
}

fn read_source(path: &str) -> Result<String, Box<dyn Error>> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path, e).into())
    }
}
