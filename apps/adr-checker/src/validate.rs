//! Cross-validation of references against documents.
//!
//! `validate_references` is pure and deterministic. Output order is all
//! missing-document issues (reference order), then unused-document issues
//! (document order), then conflicting-reference issues (first-seen order of
//! each file/line pair). Duplicate document ids are not flagged.

use crate::models::{AdrDocument, AdrIssue, AdrIssueType, AdrReference};
use std::collections::{HashMap, HashSet};

/// Compute missing, unused, and conflicting reference issues.
pub fn validate_references(references: &[AdrReference], documents: &[AdrDocument]) -> Vec<AdrIssue> {
    let mut issues = Vec::new();
    let doc_ids: HashSet<&str> = documents.iter().map(|d| d.id.as_str()).collect();

    for r in references {
        if !doc_ids.contains(r.id.as_str()) {
            issues.push(AdrIssue {
                kind: AdrIssueType::MissingDocument,
                message: format!("Referenced ADR {} does not exist", r.id),
                file: Some(r.file.clone()),
                line: Some(r.line),
                adr_id: Some(r.id.clone()),
            });
        }
    }

    let referenced: HashSet<&str> = references.iter().map(|r| r.id.as_str()).collect();
    for d in documents {
        if !referenced.contains(d.id.as_str()) {
            issues.push(AdrIssue {
                kind: AdrIssueType::UnusedDocument,
                message: format!("ADR {} is not referenced in any source file", d.id),
                file: Some(d.path.clone()),
                line: None,
                adr_id: Some(d.id.clone()),
            });
        }
    }

    // Group by (file, line), keeping first-seen order of groups
    let mut slots: HashMap<(&str, usize), usize> = HashMap::new();
    let mut groups: Vec<((&str, usize), Vec<&str>)> = Vec::new();
    for r in references {
        let key = (r.file.as_str(), r.line);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(r.id.as_str());
    }
    for ((file, line), ids) in groups {
        if ids.len() > 1 {
            issues.push(AdrIssue {
                kind: AdrIssueType::ConflictingReference,
                message: format!("Multiple ADRs referenced on the same line: {}", ids.join(", ")),
                file: Some(file.to_string()),
                line: Some(line),
                adr_id: None,
            });
        }
    }
    issues
}

/// References citing a deprecated or superseded decision.
pub fn outdated_references(references: &[AdrReference], documents: &[AdrDocument]) -> Vec<AdrIssue> {
    let outdated: HashMap<&str, &str> = documents
        .iter()
        .filter(|d| is_outdated_status(&d.status))
        .map(|d| (d.id.as_str(), d.status.as_str()))
        .collect();
    references
        .iter()
        .filter_map(|r| {
            let status = outdated.get(r.id.as_str())?;
            Some(AdrIssue {
                kind: AdrIssueType::OutdatedDecision,
                message: format!("Reference to {} which is {}", r.id, status),
                file: Some(r.file.clone()),
                line: Some(r.line),
                adr_id: Some(r.id.clone()),
            })
        })
        .collect()
}

pub fn is_outdated_status(status: &str) -> bool {
    status.starts_with("deprecated") || status.starts_with("superseded")
}
