//! adr-checker CLI binary entry point.
//! Delegates to the library for config, scanning, and reporting.

use adr_checker::cli::{Cli, Commands, ScanArgs};
use adr_checker::config::{self, Effective};
use adr_checker::models::{AdrIssueType, AdrScanResult};
use adr_checker::parsers::ExtractorRegistry;
use adr_checker::scan::{run_scan, ScanOptions};
use adr_checker::{output, utils};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ExitCode {
    eprintln!("{} {}", utils::error_prefix(), msg);
    ExitCode::from(2)
}

fn resolve(args: &ScanArgs, source_dir: Option<&str>) -> Effective {
    let eff = config::resolve_effective(
        args.repo_root.as_deref(),
        args.config.as_deref(),
        args.adr_dir.as_deref(),
        source_dir,
        args.format,
    );
    if eff.config_path.is_none() && args.config.is_none() {
        eprintln!(
            "{} No .adr-checker config found; using defaults.",
            utils::note_prefix()
        );
    }
    eff
}

fn scan(eff: &Effective, check_documents: bool) -> AdrScanResult {
    let registry = ExtractorRegistry::from_languages(&eff.config.languages);
    run_scan(&ScanOptions {
        adr_dir: &eff.adr_dir,
        source_dir: &eff.source_dir,
        registry: &registry,
        ignore_patterns: &eff.config.ignore_patterns,
        check_documents,
    })
}

/// Render, then print or write the report. Returns the exit code.
fn emit(res: &AdrScanResult, eff: &Effective, dest: Option<&str>, what: &str) -> ExitCode {
    let color = dest.is_none() && utils::use_colors();
    let report = match output::render_report(res, eff.output_format, color) {
        Ok(r) => r,
        Err(e) => return fail(e),
    };
    match dest {
        Some(path) => match output::write_report(Path::new(path), &report) {
            Ok(full) => eprintln!(
                "{} Report written to {}",
                utils::info_prefix(),
                full.display()
            ),
            Err(e) => return fail(e),
        },
        None => println!("{}", report),
    }
    let n = res.issues.len();
    if n > 0 {
        eprintln!(
            "{} Found {} issues{}. See report for details.",
            utils::note_prefix(),
            n,
            what
        );
        ExitCode::from(1)
    } else {
        eprintln!("{} No issues found{}!", utils::info_prefix(), what);
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::Scan {
            args,
            source_dir,
            check_docs,
        } => {
            let eff = resolve(&args, source_dir.as_deref());
            eprintln!(
                "{} Scanning {} for ADR references...",
                utils::info_prefix(),
                utils::rel_to_wd(&eff.source_dir)
            );
            let res = scan(&eff, check_docs);
            emit(&res, &eff, args.output.as_deref(), "")
        }
        Commands::ValidateDocs { args } => {
            let eff = resolve(&args, None);
            eprintln!(
                "{} Validating ADR documents in {}...",
                utils::info_prefix(),
                utils::rel_to_wd(&eff.adr_dir)
            );
            let res = scan(&eff, true).retain_issue_kinds(&AdrIssueType::DOCUMENT_KINDS);
            emit(&res, &eff, args.output.as_deref(), " in ADR documents")
        }
        Commands::Init { path } => match config::write_default_config(Path::new(&path)) {
            Ok(full) => {
                println!("Created default configuration at {}", full.display());
                ExitCode::SUCCESS
            }
            Err(e) => fail(e),
        },
    }
}
