//! Scan orchestration: discover, parse/extract per file, then validate.
//!
//! The document and source phases are independent and run concurrently;
//! files within each phase are processed on the rayon pool. A file that
//! cannot be read is logged and skipped without aborting the scan.

use crate::discovery::{discover_documents, discover_files, IgnoreSet};
use crate::models::{AdrDocument, AdrIssue, AdrReference, AdrScanResult};
use crate::parsers::adr::{parse_adr_document, validate_document};
use crate::parsers::ExtractorRegistry;
use crate::validate::{outdated_references, validate_references};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs of one scan, already resolved to absolute roots.
pub struct ScanOptions<'a> {
    pub adr_dir: &'a Path,
    pub source_dir: &'a Path,
    pub registry: &'a ExtractorRegistry,
    pub ignore_patterns: &'a [String],
    /// Append document-level issues after the cross-reference issues.
    pub check_documents: bool,
}

/// Run a full scan and assemble the result.
pub fn run_scan(opts: &ScanOptions) -> AdrScanResult {
    let (documents, references) = rayon::join(
        || scan_documents(opts.adr_dir),
        || scan_sources(opts.source_dir, opts.registry, opts.ignore_patterns),
    );
    tracing::debug!(
        documents = documents.len(),
        references = references.len(),
        "scan phases complete"
    );

    let mut issues = validate_references(&references, &documents);
    if opts.check_documents {
        issues.extend(document_issues(&references, &documents));
    }
    AdrScanResult {
        references,
        documents,
        issues,
    }
}

/// Document-level checks for every document, then outdated citations.
pub fn document_issues(references: &[AdrReference], documents: &[AdrDocument]) -> Vec<AdrIssue> {
    let mut issues: Vec<AdrIssue> = documents.iter().flat_map(validate_document).collect();
    issues.extend(outdated_references(references, documents));
    issues
}

fn read_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
            None
        }
    }
}

/// Parse every ADR document under `adr_dir`, in path order.
pub fn scan_documents(adr_dir: &Path) -> Vec<AdrDocument> {
    let files = discover_documents(adr_dir);
    files
        .par_iter()
        .filter_map(|path| {
            let content = read_file(path)?;
            Some(parse_adr_document(path, &content))
        })
        .collect()
}

/// Extract references from every registered source file under `source_dir`.
pub fn scan_sources(
    source_dir: &Path,
    registry: &ExtractorRegistry,
    ignore_patterns: &[String],
) -> Vec<AdrReference> {
    let ignore = IgnoreSet::new(ignore_patterns);
    let files: Vec<PathBuf> = discover_files(source_dir, &registry.extensions(), Some(&ignore));
    let per_file: Vec<Vec<AdrReference>> = files
        .par_iter()
        .map(|path| {
            let Some(extractor) = registry.for_path(path) else {
                return Vec::new();
            };
            match read_file(path) {
                Some(content) => extractor.extract(&path.to_string_lossy(), &content),
                None => Vec::new(),
            }
        })
        .collect();
    per_file.into_iter().flatten().collect()
}
