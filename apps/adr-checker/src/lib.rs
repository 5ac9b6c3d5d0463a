//! adr-checker core library.
//!
//! This crate exposes programmatic APIs for cross-referencing ADR citations
//! in source-code comments against a directory of ADR markdown documents.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `discovery`: Glob-based file enumeration with ignore patterns.
//! - `parsers`: ADR document parsing and per-language reference extraction.
//! - `validate`: Pure cross-validation of references against documents.
//! - `scan`: Orchestrates discovery, parsing, and validation.
//! - `models`: Report data model (references, documents, issues).
//! - `output`: Text/JSON/HTML report rendering.
//! - `error`: Crate error type.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod scan;
pub mod utils;
pub mod validate;

pub use error::{Error, Result};
pub use models::{AdrDocument, AdrIssue, AdrIssueType, AdrReference, AdrScanResult, CommentType};
pub use scan::{run_scan, ScanOptions};
