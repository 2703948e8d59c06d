//! Command-line interface for MML
//! Validates, converts, compresses and measures MML documents.
//!
//! Usage:
//!   mml validate [input]                       - Check document structure
//!   mml convert -f `<format>` [input] [output]   - Render to html, json, text, mml or mmlc
//!   mml compress [input] [output]              - Raw line-by-line MMLC compression
//!   mml decompress [input] [output]            - Best-effort MMLC expansion
//!   mml stats [input]                          - Counts and signal ratio
//!
//! Input defaults to stdin and output to stdout. `-` means the same.

mod io;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use mml_config::{Loader, MmlConfig};
use mml_parser::{parse_with_report, validate, Compressor, DocumentStats};
use std::process::ExitCode;

fn io_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("input")
                .help("Input file (default: stdin)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file (default: stdout)")
                .index(2),
        )
        .arg(
            Arg::new("input-file")
                .long("input")
                .short('i')
                .help("Input file, same as the positional argument")
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("output-file")
                .long("output")
                .short('o')
                .help("Output file, same as the positional argument")
                .conflicts_with("output"),
        )
        .arg(
            Arg::new("stdin")
                .long("stdin")
                .help("Read from stdin even if an input file is given")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Write to stdout even if an output file is given")
                .action(ArgAction::SetTrue),
        )
}

fn cli() -> Command {
    Command::new("mml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for validating, converting and compressing MML documents")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .subcommand(io_args(
            Command::new("validate").about("Check document structure, exit 1 on problems"),
        ))
        .subcommand(io_args(
            Command::new("convert")
                .about("Render a document")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: html, json, text, mml or mmlc (default from config)"),
                ),
        ))
        .subcommand(io_args(
            Command::new("compress").about("Compress MML line by line into MMLC"),
        ))
        .subcommand(io_args(
            Command::new("decompress").about("Expand MMLC back into readable MML (lossy)"),
        ))
        .subcommand(io_args(
            Command::new("stats")
                .about("Show document statistics")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Report format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        ))
}

fn main() -> ExitCode {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let Some((command, args)) = matches.subcommand() else {
        let _ = cli().print_help();
        return ExitCode::SUCCESS;
    };

    init_logging(args.get_flag("verbose"));

    match run(command, args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<MmlConfig> {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            Loader::new().with_file(path)
        }
        None => Loader::new(),
    };
    loader.build().context("Failed to load configuration")
}

/// Run a command. `Ok(false)` means the command ran but the document failed.
///
/// Global flags are read from the subcommand's matches, where clap propagates them.
fn run(command: &str, args: &ArgMatches) -> Result<bool> {
    let config = load_config(args)?;

    match command {
        "validate" => handle_validate(args),
        "convert" => handle_convert(args, &config),
        "compress" => handle_compress(args, &config),
        "decompress" => handle_decompress(args, &config),
        "stats" => handle_stats(args),
        other => anyhow::bail!("Unknown command '{other}', see `mml help`"),
    }
}

fn handle_validate(args: &ArgMatches) -> Result<bool> {
    let input = io::Input::from_args(args);
    let source = input.read()?;
    let report = parse_with_report(&source);
    let issues = validate(&report.document);

    if issues.is_empty() {
        eprintln!("Valid MML document");
        let doc = &report.document;
        log::info!("Title: {}", doc.display_title().unwrap_or("(none)"));
        log::info!("Sections: {}", doc.sections.len());
        log::info!("Metadata: {}", doc.metadata.len());
        Ok(true)
    } else {
        eprintln!("Invalid MML document:");
        for issue in &issues {
            eprintln!("  - {issue}");
        }
        Ok(false)
    }
}

fn handle_convert(args: &ArgMatches, config: &MmlConfig) -> Result<bool> {
    let input = io::Input::from_args(args);
    let format = args
        .get_one::<String>("format")
        .unwrap_or(&config.convert.default_format);

    let registry = config.registry()?;
    let doc = parse_with_report(&input.read()?).document;
    let rendered = registry.serialize(&doc, format)?;

    io::Output::from_args(args).write(&rendered)?;
    log::info!("Converted {} to {format}", input.describe());
    Ok(true)
}

fn handle_compress(args: &ArgMatches, config: &MmlConfig) -> Result<bool> {
    let source = io::Input::from_args(args).read()?;
    let compressor = Compressor::new(config.dictionary()?);
    let compressed = compressor.compress_lines(&source);

    io::Output::from_args(args).write(&compressed)?;
    if !source.is_empty() {
        let reduction = (source.len() as f64 - compressed.len() as f64) / source.len() as f64 * 100.0;
        log::info!(
            "Compression: {} -> {} bytes ({reduction:.1}% reduction)",
            source.len(),
            compressed.len()
        );
    }
    Ok(true)
}

fn handle_decompress(args: &ArgMatches, config: &MmlConfig) -> Result<bool> {
    let compressed = io::Input::from_args(args).read()?;
    let compressor = Compressor::new(config.dictionary()?);
    io::Output::from_args(args).write(&compressor.decompress_lines(&compressed))?;
    Ok(true)
}

fn handle_stats(args: &ArgMatches) -> Result<bool> {
    let source = io::Input::from_args(args).read()?;
    let doc = parse_with_report(&source).document;
    let stats = DocumentStats::collect(&source, &doc);

    let report = match args.get_one::<String>("format").map(String::as_str) {
        Some("json") => serde_json::to_string_pretty(&stats)?,
        _ => format_stats(&stats),
    };
    io::Output::from_args(args).write(&report)?;
    Ok(true)
}

fn format_stats(stats: &DocumentStats) -> String {
    [
        format!("Title: {}", if stats.has_title { "yes" } else { "no" }),
        format!("Sections: {}", stats.sections),
        format!("Paragraphs: {}", stats.paragraphs),
        format!("Links: {}", stats.links),
        format!("Images: {}", stats.images),
        format!("Metadata: {}", stats.metadata),
        format!("Size: {} bytes", stats.bytes),
        format!("Lines: {}", stats.lines),
        format!("Signal ratio: {}%", stats.signal_ratio),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn positional_and_flag_inputs_conflict() {
        let result = cli().try_get_matches_from(["mml", "validate", "a.mml", "-i", "b.mml"]);
        assert!(result.is_err());
    }

    #[test]
    fn format_stats_lists_every_count() {
        let report = format_stats(&DocumentStats {
            has_title: true,
            sections: 2,
            signal_ratio: 87,
            ..DocumentStats::default()
        });
        assert!(report.starts_with("Title: yes\nSections: 2\n"));
        assert!(report.ends_with("Signal ratio: 87%"));
        assert_eq!(report.lines().count(), 9);
    }
}
