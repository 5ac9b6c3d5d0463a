//! Report rendering for scan results.
//!
//! Supports `text` (default, colored unless `NO_COLOR` is set), `json`
//! (the serialized `AdrScanResult`), and a self-contained `html` page.
//! Renderers are pure; `write_report` is the only I/O here.

use crate::config::OutputFormat;
use crate::error::{Error, Result};
use crate::models::{AdrDocument, AdrIssue, AdrIssueType, AdrReference, AdrScanResult};
use crate::utils;
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Render `res` in the requested format.
pub fn render_report(res: &AdrScanResult, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Json => compose_json(res),
        OutputFormat::Html => Ok(compose_html(res)),
        OutputFormat::Text => Ok(compose_text(res, color)),
    }
}

/// Write a rendered report, returning the absolute destination.
pub fn write_report(path: &Path, report: &str) -> Result<PathBuf> {
    let full = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    };
    fs::write(&full, report).map_err(|source| Error::Write {
        path: full.clone(),
        source,
    })?;
    Ok(full)
}

/// Pretty JSON with the stable field names of the report contract.
pub fn compose_json(res: &AdrScanResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(res)?)
}

struct Palette {
    color: bool,
}

impl Palette {
    fn red(&self, s: &str) -> String {
        if self.color {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }
    fn yellow(&self, s: &str) -> String {
        if self.color {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }
    fn green(&self, s: &str) -> String {
        if self.color {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }
    fn blue(&self, s: &str) -> String {
        if self.color {
            s.blue().to_string()
        } else {
            s.to_string()
        }
    }
    fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }
    fn heading(&self, s: &str) -> String {
        if self.color {
            s.blue().bold().to_string()
        } else {
            s.to_string()
        }
    }
    fn status(&self, status: &str) -> String {
        match status {
            "accepted" => self.green(status),
            "rejected" => self.red(status),
            "deprecated" => self.yellow(status),
            _ => self.blue(status),
        }
    }
}

fn issues_of(res: &AdrScanResult, kind: AdrIssueType) -> Vec<&AdrIssue> {
    res.issues.iter().filter(|i| i.kind == kind).collect()
}

fn is_grouped(kind: AdrIssueType) -> bool {
    matches!(
        kind,
        AdrIssueType::MissingDocument
            | AdrIssueType::UnusedDocument
            | AdrIssueType::ConflictingReference
    )
}

fn location(issue: &AdrIssue) -> String {
    let mut out = String::new();
    if let Some(f) = &issue.file {
        out.push_str(&utils::rel_to_wd(Path::new(f)));
    }
    if let Some(l) = issue.line {
        out.push_str(&format!(":{}", l));
    }
    out
}

fn refs_for<'a>(res: &'a AdrScanResult, doc: &AdrDocument) -> Vec<&'a AdrReference> {
    res.references.iter().filter(|r| r.id == doc.id).collect()
}

/// Human-readable summary, issue groups, and document listing.
pub fn compose_text(res: &AdrScanResult, color: bool) -> String {
    let p = Palette { color };
    let mut out = String::from("\n");
    out.push_str(&p.heading("=== ADR Checker Summary ==="));
    out.push_str("\n\n");
    out.push_str(&format!(
        "{} Found {} ADR documents\n",
        p.green("✓"),
        p.bold(&res.documents.len().to_string())
    ));
    out.push_str(&format!(
        "{} Found {} ADR references in code\n",
        p.green("✓"),
        p.bold(&res.references.len().to_string())
    ));
    out.push_str(&format!(
        "{} Detected {} issues\n\n",
        p.yellow("!"),
        p.bold(&res.issues.len().to_string())
    ));

    if res.issues.is_empty() {
        out.push_str(&p.green("No issues found!"));
        out.push_str("\n\n");
    } else {
        out.push_str(&p.heading("=== Issues ==="));
        out.push_str("\n\n");

        let missing = issues_of(res, AdrIssueType::MissingDocument);
        if !missing.is_empty() {
            out.push_str(&p.red(&format!("Missing ADR Documents ({}):", missing.len())));
            out.push('\n');
            for is in missing {
                out.push_str(&format!(
                    "  {} {} referenced in {}\n",
                    p.red("✗"),
                    is.adr_id.as_deref().unwrap_or("?"),
                    location(is)
                ));
            }
            out.push('\n');
        }

        let unused = issues_of(res, AdrIssueType::UnusedDocument);
        if !unused.is_empty() {
            out.push_str(&p.yellow(&format!("Unused ADR Documents ({}):", unused.len())));
            out.push('\n');
            for is in unused {
                out.push_str(&format!(
                    "  {} {} is not referenced in any source file\n",
                    p.yellow("!"),
                    is.adr_id.as_deref().unwrap_or("?")
                ));
            }
            out.push('\n');
        }

        let conflicting = issues_of(res, AdrIssueType::ConflictingReference);
        if !conflicting.is_empty() {
            out.push_str(&p.red(&format!(
                "Conflicting ADR References ({}):",
                conflicting.len()
            )));
            out.push('\n');
            for is in conflicting {
                out.push_str(&format!("  {} {}: {}\n", p.red("✗"), location(is), is.message));
            }
            out.push('\n');
        }

        let other: Vec<&AdrIssue> = res.issues.iter().filter(|i| !is_grouped(i.kind)).collect();
        if !other.is_empty() {
            out.push_str(&p.yellow(&format!("Other Issues ({}):", other.len())));
            out.push('\n');
            for is in other {
                let loc = location(is);
                if loc.is_empty() {
                    out.push_str(&format!("  {} {}\n", p.yellow("!"), is.message));
                } else {
                    out.push_str(&format!("  {} {} in {}\n", p.yellow("!"), is.message, loc));
                }
            }
            out.push('\n');
        }
    }

    out.push_str(&p.heading("=== ADR Documents ==="));
    out.push_str("\n\n");
    for doc in &res.documents {
        let refs = refs_for(res, doc);
        out.push_str(&format!("{} - {}\n", p.bold(&doc.id), doc.title));
        out.push_str(&format!("  Status: {}\n", p.status(&doc.status)));
        if !doc.date.is_empty() {
            out.push_str(&format!("  Date: {}\n", doc.date));
        }
        if !doc.tags.is_empty() {
            out.push_str(&format!("  Tags: {}\n", doc.tags.join(", ")));
        }
        out.push_str(&format!("  References in code: {}\n", refs.len()));
        for r in refs {
            out.push_str(&format!(
                "    {}:{}  {}\n",
                utils::rel_to_wd(Path::new(&r.file)),
                r.line,
                r.comment_type.display_form(&r.id)
            ));
        }
        out.push_str(&format!("  Path: {}\n\n", utils::rel_to_wd(Path::new(&doc.path))));
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HTML_STYLE: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 1200px; margin: 0 auto; padding: 20px; }
    h1, h2, h3 { color: #0066cc; }
    .summary { background-color: #f5f5f5; padding: 20px; border-radius: 5px; margin-bottom: 20px; }
    .issue { padding: 10px; border-left: 4px solid #ddd; margin-bottom: 10px; }
    .issue.error { border-left-color: #dc3545; background-color: rgba(220, 53, 69, 0.1); }
    .issue.warning { border-left-color: #ffc107; background-color: rgba(255, 193, 7, 0.1); }
    .adr-document { background-color: #f8f9fa; padding: 15px; margin-bottom: 15px; border-radius: 5px; border-left: 4px solid #0066cc; }
    .status { display: inline-block; padding: 3px 8px; border-radius: 3px; font-size: 0.8em; font-weight: bold; color: white; background-color: #6c757d; }
    .status.accepted { background-color: #28a745; }
    .status.rejected { background-color: #dc3545; }
    .status.deprecated { background-color: #ffc107; color: black; }
    .status.proposed { background-color: #17a2b8; }
    .tag { display: inline-block; background-color: #e9ecef; padding: 2px 6px; border-radius: 3px; font-size: 0.8em; margin-right: 5px; }
"#;

fn status_class(status: &str) -> &'static str {
    match status {
        "accepted" => "accepted",
        "rejected" => "rejected",
        "deprecated" => "deprecated",
        "proposed" => "proposed",
        _ => "unknown",
    }
}

fn html_issue_group(out: &mut String, title: &str, class: &str, issues: &[&AdrIssue]) {
    if issues.is_empty() {
        return;
    }
    out.push_str(&format!(
        "    <div class=\"issue-group\">\n      <h3>{} ({})</h3>\n",
        escape_html(title),
        issues.len()
    ));
    for is in issues {
        let loc = location(is);
        let suffix = if loc.is_empty() {
            String::new()
        } else {
            format!(" <small>{}</small>", escape_html(&loc))
        };
        out.push_str(&format!(
            "      <div class=\"issue {}\"><p>{}{}</p></div>\n",
            class,
            escape_html(&is.message),
            suffix
        ));
    }
    out.push_str("    </div>\n");
}

/// Self-contained HTML page; all interpolated text is escaped.
pub fn compose_html(res: &AdrScanResult) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n");
    out.push_str("  <title>ADR Checker Report</title>\n  <style>");
    out.push_str(HTML_STYLE);
    out.push_str("  </style>\n</head>\n<body>\n  <h1>ADR Checker Report</h1>\n");
    out.push_str(&format!(
        "  <div class=\"summary\">\n    <h2>Summary</h2>\n    <p>Found <strong>{}</strong> ADR documents</p>\n    <p>Found <strong>{}</strong> ADR references in code</p>\n    <p>Detected <strong>{}</strong> issues</p>\n  </div>\n",
        res.documents.len(),
        res.references.len(),
        res.issues.len()
    ));

    out.push_str("  <div class=\"issues\">\n    <h2>Issues</h2>\n");
    if res.issues.is_empty() {
        out.push_str("    <p>No issues found!</p>\n");
    } else {
        let other: Vec<&AdrIssue> = res.issues.iter().filter(|i| !is_grouped(i.kind)).collect();
        html_issue_group(
            &mut out,
            "Missing ADR Documents",
            "error",
            &issues_of(res, AdrIssueType::MissingDocument),
        );
        html_issue_group(
            &mut out,
            "Unused ADR Documents",
            "warning",
            &issues_of(res, AdrIssueType::UnusedDocument),
        );
        html_issue_group(
            &mut out,
            "Conflicting ADR References",
            "error",
            &issues_of(res, AdrIssueType::ConflictingReference),
        );
        html_issue_group(&mut out, "Other Issues", "warning", &other);
    }
    out.push_str("  </div>\n");

    out.push_str("  <div class=\"adr-documents\">\n    <h2>ADR Documents</h2>\n");
    for doc in &res.documents {
        let refs = refs_for(res, doc);
        out.push_str(&format!(
            "    <div class=\"adr-document\">\n      <h3>{} - {}</h3>\n      <p>Status: <span class=\"status {}\">{}</span></p>\n",
            escape_html(&doc.id),
            escape_html(&doc.title),
            status_class(&doc.status),
            escape_html(&doc.status)
        ));
        if !doc.date.is_empty() {
            out.push_str(&format!("      <p>Date: {}</p>\n", escape_html(&doc.date)));
        }
        if !doc.tags.is_empty() {
            let tags: Vec<String> = doc
                .tags
                .iter()
                .map(|t| format!("<span class=\"tag\">{}</span>", escape_html(t)))
                .collect();
            out.push_str(&format!("      <p>Tags: {}</p>\n", tags.join(" ")));
        }
        out.push_str(&format!("      <p>References in code: {}</p>\n", refs.len()));
        if !refs.is_empty() {
            out.push_str("      <ul>\n");
            for r in refs {
                out.push_str(&format!(
                    "        <li>{}:{} <code>{}</code></li>\n",
                    escape_html(&utils::rel_to_wd(Path::new(&r.file))),
                    r.line,
                    escape_html(&r.comment_type.display_form(&r.id))
                ));
            }
            out.push_str("      </ul>\n");
        }
        out.push_str(&format!(
            "      <p>Path: {}</p>\n    </div>\n",
            escape_html(&utils::rel_to_wd(Path::new(&doc.path)))
        ));
    }
    out.push_str("  </div>\n</body>\n</html>\n");
    out
}
