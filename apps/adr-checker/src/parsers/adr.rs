//! ADR markdown document parsing.
//!
//! The id comes from the file name (`0007-adopt-graphql.md` -> `ADR-0007`);
//! files without a numeric prefix all map to `ADR-0000`. Title, status,
//! date and tags are each read from the first line that mentions them;
//! later lines with the same keyword are ignored.

use crate::models::{normalize_adr_id, AdrDocument, AdrIssue, AdrIssueType};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Id used for ADR files whose name has no numeric prefix.
pub const SENTINEL_ID: &str = "ADR-0000";

struct DocPatterns {
    file_id: Regex,
    status: Regex,
    date: Regex,
    tags: Regex,
    link: Regex,
}

fn patterns() -> &'static DocPatterns {
    static PATTERNS: OnceLock<DocPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| DocPatterns {
        file_id: Regex::new(r"^(\d+)-").expect("file id pattern"),
        status: Regex::new(r"(?i)status:\s*([a-z\s]+)").expect("status pattern"),
        date: Regex::new(r"(?i)date:\s*(.+)").expect("date pattern"),
        tags: Regex::new(r"(?i)tags:\s*(.+)").expect("tags pattern"),
        link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern"),
    })
}

/// Derive the ADR id from a file path's base name.
pub fn id_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match patterns().file_id.captures(&name) {
        Some(caps) => normalize_adr_id(&caps[1]),
        None => SENTINEL_ID.to_string(),
    }
}

/// First line whose lowercased form contains `keyword`.
fn keyword_line<'a>(lines: &[&'a str], keyword: &str) -> Option<&'a str> {
    lines
        .iter()
        .find(|l| l.to_lowercase().contains(keyword))
        .copied()
}

/// Parse one ADR markdown file into an `AdrDocument`.
pub fn parse_adr_document(path: &Path, content: &str) -> AdrDocument {
    let pats = patterns();
    let lines: Vec<&str> = content.split('\n').collect();

    let title = lines
        .iter()
        .find(|l| l.starts_with("# "))
        .map(|l| l[2..].trim().to_string())
        .unwrap_or_default();

    let status = keyword_line(&lines, "status:")
        .and_then(|l| pats.status.captures(l))
        .map(|c| c[1].trim().to_lowercase())
        .unwrap_or_else(|| "unknown".to_string());

    let date = keyword_line(&lines, "date:")
        .and_then(|l| pats.date.captures(l))
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    let tags: Vec<String> = keyword_line(&lines, "tags:")
        .and_then(|l| pats.tags.captures(l))
        .map(|c| c[1].trim().split(',').map(|t| t.trim().to_string()).collect())
        .unwrap_or_default();

    AdrDocument {
        id: id_from_path(path),
        title,
        path: path.to_string_lossy().to_string(),
        status,
        date,
        tags,
        content: content.to_string(),
        references: Vec::new(),
    }
}

/// Document-level checks: missing metadata and suspicious relative links.
///
/// A link is flagged when its target starts with neither `http` nor `#`.
/// This is a heuristic; the target is not resolved on disk.
pub fn validate_document(doc: &AdrDocument) -> Vec<AdrIssue> {
    let mut issues = Vec::new();
    let mut missing = |what: &str| {
        issues.push(AdrIssue {
            kind: AdrIssueType::MissingMetadata,
            message: format!("Missing {} in {}", what, doc.id),
            file: Some(doc.path.clone()),
            line: None,
            adr_id: Some(doc.id.clone()),
        })
    };
    if doc.title.is_empty() {
        missing("title");
    }
    if doc.status.is_empty() || doc.status == "unknown" {
        missing("status");
    }
    if doc.date.is_empty() {
        missing("date");
    }

    for caps in patterns().link.captures_iter(&doc.content) {
        let target = &caps[2];
        if target.starts_with("http") || target.starts_with('#') {
            continue;
        }
        let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
        let line = doc.content[..start].matches('\n').count() + 1;
        issues.push(AdrIssue {
            kind: AdrIssueType::BrokenLink,
            message: format!(
                "Potential broken link in {}: {} -> {}",
                doc.id, &caps[1], target
            ),
            file: Some(doc.path.clone()),
            line: Some(line),
            adr_id: Some(doc.id.clone()),
        });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "# Adopt GraphQL\n\nStatus: Accepted\nDate: 2024-03-01\nTags: api, graphql , backend\n\n## Context\nSee [RFC](https://example.com/rfc) and [ctx](#context).\n";

    #[test]
    fn test_id_from_numeric_prefix_and_sentinel() {
        assert_eq!(id_from_path(Path::new("/adr/0007-adopt-graphql.md")), "ADR-0007");
        assert_eq!(id_from_path(Path::new("/adr/7-adopt-graphql.md")), "ADR-0007");
        assert_eq!(id_from_path(Path::new("/adr/adopt-graphql.md")), "ADR-0000");
        assert_eq!(id_from_path(Path::new("/adr/0012.md")), "ADR-0000");
    }

    #[test]
    fn test_parse_full_metadata() {
        let doc = parse_adr_document(Path::new("/adr/0007-adopt-graphql.md"), FULL);
        assert_eq!(doc.id, "ADR-0007");
        assert_eq!(doc.title, "Adopt GraphQL");
        assert_eq!(doc.status, "accepted");
        assert_eq!(doc.date, "2024-03-01");
        assert_eq!(doc.tags, vec!["api", "graphql", "backend"]);
        assert_eq!(doc.path, "/adr/0007-adopt-graphql.md");
        assert_eq!(doc.content, FULL);
        assert!(doc.references.is_empty());
    }

    #[test]
    fn test_parse_defaults_when_metadata_absent() {
        let doc = parse_adr_document(Path::new("notes.md"), "just text\n## Sub\n");
        assert_eq!(doc.id, SENTINEL_ID);
        assert_eq!(doc.title, "");
        assert_eq!(doc.status, "unknown");
        assert_eq!(doc.date, "");
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn test_only_first_keyword_line_counts() {
        let doc = parse_adr_document(
            Path::new("0001-x.md"),
            "# T\n**Status:** 🚧\nStatus: accepted\n",
        );
        // First status line has no letters after the colon: stays unknown
        assert_eq!(doc.status, "unknown");

        let doc = parse_adr_document(Path::new("0001-x.md"), "status: Proposed\nStatus: Rejected\n");
        assert_eq!(doc.status, "proposed");
    }

    #[test]
    fn test_status_stops_at_non_letters_and_handles_crlf() {
        let doc = parse_adr_document(
            Path::new("0002-y.md"),
            "# Title\r\nStatus: Superseded by ADR-0003\r\nDate: 2023-01-02\r\n",
        );
        assert_eq!(doc.title, "Title");
        assert_eq!(doc.status, "superseded by adr");
        assert_eq!(doc.date, "2023-01-02");
    }

    #[test]
    fn test_h2_is_not_a_title() {
        let doc = parse_adr_document(Path::new("0003-z.md"), "## Not title\n# Real\n");
        assert_eq!(doc.title, "Real");
    }

    #[test]
    fn test_validate_complete_document_is_clean() {
        let doc = parse_adr_document(Path::new("/adr/0007-adopt-graphql.md"), FULL);
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn test_validate_flags_missing_metadata_and_relative_links() {
        let doc = parse_adr_document(
            Path::new("/adr/0004-w.md"),
            "intro\nsee [other](./0003-x.md)\n",
        );
        let issues = validate_document(&doc);
        let kinds: Vec<_> = issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AdrIssueType::MissingMetadata,
                AdrIssueType::MissingMetadata,
                AdrIssueType::MissingMetadata,
                AdrIssueType::BrokenLink,
            ]
        );
        assert_eq!(issues[0].message, "Missing title in ADR-0004");
        let link = &issues[3];
        assert_eq!(link.line, Some(2));
        assert_eq!(
            link.message,
            "Potential broken link in ADR-0004: other -> ./0003-x.md"
        );
        assert_eq!(link.adr_id.as_deref(), Some("ADR-0004"));
    }
}
