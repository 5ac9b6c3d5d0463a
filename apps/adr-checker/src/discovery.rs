//! File discovery under the ADR and source roots.
//!
//! Enumerates `root/**/*.<ext>` with `glob`. A missing root yields no files
//! rather than an error. Ignore globs apply to source discovery only and
//! are matched against the path relative to the root (also anywhere below
//! it, so `node_modules/**` excludes nested `node_modules` too). Only
//! patterns starting with `/` are matched against the absolute path.

use glob::{glob, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Compiled ignore globs; invalid ones are logged and dropped.
pub struct IgnoreSet {
    patterns: Vec<(Pattern, Option<Pattern>)>,
}

impl IgnoreSet {
    pub fn new(globs: &[String]) -> Self {
        let mut patterns = Vec::new();
        for g in globs {
            match Pattern::new(g) {
                Ok(p) => {
                    let nested = if g.starts_with("**/") || g.starts_with('/') {
                        None
                    } else {
                        Pattern::new(&format!("**/{}", g)).ok()
                    };
                    patterns.push((p, nested));
                }
                Err(e) => {
                    tracing::warn!(pattern = %g, error = %e, "skipping invalid ignore pattern");
                }
            }
        }
        Self { patterns }
    }

    /// Whether `path` (under `root`) is excluded.
    pub fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        let opts = MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };
        let rel = path.strip_prefix(root).unwrap_or(path);
        self.patterns.iter().any(|(p, nested)| {
            if p.as_str().starts_with('/') {
                return p.matches_path_with(path, opts);
            }
            p.matches_path_with(rel, opts)
                || nested
                    .as_ref()
                    .is_some_and(|n| n.matches_path_with(rel, opts))
        })
    }
}

/// Collect files under `root` with any of `extensions`, sorted and unique.
///
/// Extensions may be given with or without the leading dot.
pub fn discover_files(root: &Path, extensions: &[String], ignore: Option<&IgnoreSet>) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "discovery root missing; nothing to scan");
        return Vec::new();
    }
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let mut targets: Vec<PathBuf> = Vec::new();
    for ext in extensions {
        let ext = ext.trim_start_matches('.');
        if ext.is_empty() {
            continue;
        }
        let pattern = format!("{}/**/*.{}", escaped_root, Pattern::escape(ext));
        let entries = match glob(&pattern) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "bad discovery pattern");
                continue;
            }
        };
        for entry in entries {
            match entry {
                Ok(p) if p.is_file() => targets.push(p),
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "unreadable path during discovery"),
            }
        }
    }
    if let Some(ig) = ignore {
        targets.retain(|p| !ig.is_ignored(root, p));
    }
    targets.sort();
    targets.dedup();
    targets
}

/// ADR documents: every `*.md` below `adr_root`, no ignore filtering.
pub fn discover_documents(adr_root: &Path) -> Vec<PathBuf> {
    discover_files(adr_root, &["md".to_string()], None)
}
