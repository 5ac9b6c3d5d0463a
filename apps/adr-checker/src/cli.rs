//! CLI argument parsing via `clap`.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "adr-checker",
    version,
    about = "Track and validate Architecture Decision Records referenced from code",
    long_about = "adr-checker: cross-reference ADR citations in source comments against a directory of ADR documents.\n\nConfiguration precedence: CLI > .adr-checker.json|adr-checker.toml|adr-checker.yaml > defaults.",
    after_help = "Examples:\n  adr-checker scan\n  adr-checker scan --adr-dir docs/decisions --source-dir app --format json\n  adr-checker validate-docs --format html --output adr-report.html\n  adr-checker init --path adr-checker.toml",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Clone, Debug, Default)]
/// Flags shared by the scanning subcommands.
pub struct ScanArgs {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<String>,
    #[arg(short, long, help = "Path to ADR documents directory")]
    pub adr_dir: Option<String>,
    #[arg(short, long, help = "Path to output report file (default: stdout)")]
    pub output: Option<String>,
    #[arg(short, long, value_enum, help = "Output format (default: text)")]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current adr-checker version.")]
    Version,
    /// Scan sources and ADR documents
    #[command(
        about = "Scan project for ADR references and validate against ADR documents",
        long_about = "Find ADR citations in source comments and report missing, unused, and conflicting references. Exits non-zero when issues are found.",
        after_help = "Examples:\n  adr-checker scan\n  adr-checker scan --format json --output report.json\n  adr-checker scan --check-docs"
    )]
    Scan {
        #[command(flatten)]
        args: ScanArgs,
        #[arg(short, long, help = "Path to source code directory")]
        source_dir: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Also report document metadata, link, and outdated-decision issues")]
        check_docs: bool,
    },
    /// Write a default configuration file
    #[command(
        about = "Initialize a new configuration file",
        long_about = "Write the default configuration. The syntax follows the file extension: .json (default), .toml, .yaml/.yml."
    )]
    Init {
        #[arg(short, long, default_value = ".adr-checker.json", help = "Path to create configuration file")]
        path: String,
    },
    /// Validate ADR documents
    #[command(
        name = "validate-docs",
        about = "Validate ADR documents for common issues",
        long_about = "Report missing metadata, potential broken links, and citations of deprecated or superseded decisions.",
        after_help = "Examples:\n  adr-checker validate-docs\n  adr-checker validate-docs --format json"
    )]
    ValidateDocs {
        #[command(flatten)]
        args: ScanArgs,
    },
}
