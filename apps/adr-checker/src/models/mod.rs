//! Shared data models for scan results: references, documents, and issues.
//!
//! Everything here is a plain value type that serializes to the stable JSON
//! report contract consumed by the report printers and any external
//! dashboard. Field names are camelCase on the wire (`commentType`, `adrId`).

pub mod comment;

pub use comment::CommentType;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One occurrence of an ADR citation in a source file.
pub struct AdrReference {
    pub id: String,
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based character offset of the match start within the line.
    pub column: usize,
    pub comment_type: CommentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One parsed ADR markdown file.
pub struct AdrDocument {
    pub id: String,
    pub title: String,
    pub path: String,
    /// Lowercased free text; `unknown` when absent.
    pub status: String,
    /// Unparsed date text; empty when absent.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: String,
    /// Always empty after parsing; cross-referencing belongs to validation.
    #[serde(default)]
    pub references: Vec<AdrReference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Closed set of inconsistency kinds reported by a scan.
pub enum AdrIssueType {
    MissingDocument,
    UnusedDocument,
    ConflictingReference,
    BrokenLink,
    MissingMetadata,
    OutdatedDecision,
}

impl AdrIssueType {
    /// Wire name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdrIssueType::MissingDocument => "missing_document",
            AdrIssueType::UnusedDocument => "unused_document",
            AdrIssueType::ConflictingReference => "conflicting_reference",
            AdrIssueType::BrokenLink => "broken_link",
            AdrIssueType::MissingMetadata => "missing_metadata",
            AdrIssueType::OutdatedDecision => "outdated_decision",
        }
    }

    /// Issue kinds concerning the ADR documents themselves.
    pub const DOCUMENT_KINDS: [AdrIssueType; 3] = [
        AdrIssueType::MissingMetadata,
        AdrIssueType::BrokenLink,
        AdrIssueType::OutdatedDecision,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single detected inconsistency.
pub struct AdrIssue {
    #[serde(rename = "type")]
    pub kind: AdrIssueType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Aggregate scan output handed to the report printers.
pub struct AdrScanResult {
    pub references: Vec<AdrReference>,
    pub documents: Vec<AdrDocument>,
    pub issues: Vec<AdrIssue>,
}

impl AdrScanResult {
    /// Keep only issues whose kind is in `kinds`, preserving order.
    pub fn retain_issue_kinds(mut self, kinds: &[AdrIssueType]) -> Self {
        self.issues.retain(|is| kinds.contains(&is.kind));
        self
    }
}

/// Normalize the numeric part of an ADR citation to `ADR-NNNN`.
///
/// Shorter numbers are zero-padded to four digits; longer ones are kept as is.
pub fn normalize_adr_id(digits: &str) -> String {
    format!("ADR-{:0>4}", digits)
}
