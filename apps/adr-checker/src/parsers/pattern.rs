//! Extractor driven by `commentPatterns` from the language config.
//!
//! Used for languages without a built-in extractor (e.g. `# ADR-\d+` for
//! Python or shell). Semantics mirror the built-in forms: every pattern is
//! tried on every line and each hit yields one reference.

use super::{char_column, ReferenceExtractor};
use crate::error::{Error, Result};
use crate::models::{normalize_adr_id, AdrReference, CommentType};
use regex::Regex;

pub struct PatternExtractor {
    patterns: Vec<Regex>,
    id_re: Regex,
}

/// Compile one configured pattern, tagging failures with the language.
pub fn compile_pattern(language: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::CommentPattern {
        language: language.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

impl PatternExtractor {
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self {
            patterns,
            id_re: Regex::new(r"ADR-(\d+)").expect("id pattern"),
        }
    }

    /// Digits from capture group 1 if the pattern has one, else from the
    /// first `ADR-n` inside the matched text.
    fn digits<'a>(&self, caps: &regex::Captures<'a>) -> Option<&'a str> {
        if let Some(g) = caps.get(1) {
            if !g.as_str().is_empty() && g.as_str().bytes().all(|b| b.is_ascii_digit()) {
                return Some(g.as_str());
            }
        }
        let whole = caps.get(0)?.as_str();
        self.id_re
            .captures(whole)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

impl ReferenceExtractor for PatternExtractor {
    fn extract(&self, file: &str, content: &str) -> Vec<AdrReference> {
        let mut refs = Vec::new();
        for (idx, line) in content.split('\n').enumerate() {
            for re in &self.patterns {
                let Some(caps) = re.captures(line) else {
                    continue;
                };
                let Some(digits) = self.digits(&caps) else {
                    continue;
                };
                let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
                refs.push(AdrReference {
                    id: normalize_adr_id(digits),
                    file: file.to_string(),
                    line: idx + 1,
                    column: char_column(line, start),
                    comment_type: CommentType::Pattern(re.as_str().to_string()),
                });
            }
        }
        refs
    }
}
