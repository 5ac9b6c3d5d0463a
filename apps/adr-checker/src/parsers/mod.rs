//! Parsers for ADR documents and source-file references.
//!
//! - `adr`: markdown ADR document parsing and document-level checks.
//! - `comments`: built-in comment-form extractor.
//! - `pattern`: extractor built from configured `commentPatterns`.
//!
//! Reference extraction is dispatched by file extension through an
//! `ExtractorRegistry`, so adding a language never touches the scanner.

pub mod adr;
pub mod comments;
pub mod pattern;

use crate::config::LanguageConfig;
use crate::models::AdrReference;
use comments::CommentFormExtractor;
use pattern::{compile_pattern, PatternExtractor};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Turns one source file's text into ADR references, in appearance order.
pub trait ReferenceExtractor: Send + Sync {
    fn extract(&self, file: &str, content: &str) -> Vec<AdrReference>;
}

/// Languages served by the built-in comment-form extractor.
pub const BUILTIN_COMMENT_LANGUAGES: [&str; 1] = ["javascript"];

/// Extensions used when no language is configured at all.
pub const FALLBACK_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

#[derive(Default, Clone)]
/// Maps a file extension (without the dot) to its extractor.
pub struct ExtractorRegistry {
    by_ext: BTreeMap<String, Arc<dyn ReferenceExtractor>>,
}

pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}

/// Character offset of byte index `byte_idx` in `line`.
pub(crate) fn char_column(line: &str, byte_idx: usize) -> usize {
    line[..byte_idx].chars().count()
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `extractor` for `ext`. The first registration wins;
    /// returns false when the extension was already taken.
    pub fn register(&mut self, ext: &str, extractor: Arc<dyn ReferenceExtractor>) -> bool {
        let key = normalize_extension(ext);
        if key.is_empty() || self.by_ext.contains_key(&key) {
            return false;
        }
        self.by_ext.insert(key, extractor);
        true
    }

    /// Build the registry from the `languages` config section.
    pub fn from_languages(languages: &BTreeMap<String, LanguageConfig>) -> Self {
        let mut reg = Self::new();
        let builtin: Arc<dyn ReferenceExtractor> = Arc::new(CommentFormExtractor::new());
        if languages.is_empty() {
            for ext in FALLBACK_EXTENSIONS {
                reg.register(ext, builtin.clone());
            }
            return reg;
        }
        for (name, lang) in languages {
            let extractor: Arc<dyn ReferenceExtractor> =
                if BUILTIN_COMMENT_LANGUAGES.contains(&name.as_str()) {
                    builtin.clone()
                } else {
                    let compiled: Vec<_> = lang
                        .comment_patterns
                        .iter()
                        .filter_map(|p| match compile_pattern(name, p) {
                            Ok(re) => Some(re),
                            Err(e) => {
                                tracing::warn!(error = %e, "skipping comment pattern");
                                None
                            }
                        })
                        .collect();
                    if compiled.is_empty() {
                        tracing::warn!(
                            language = %name,
                            "no usable comment patterns; language not scanned"
                        );
                        continue;
                    }
                    Arc::new(PatternExtractor::new(compiled))
                };
            for ext in &lang.extensions {
                if !reg.register(ext, extractor.clone()) {
                    tracing::debug!(language = %name, extension = %ext, "extension already registered");
                }
            }
        }
        reg
    }

    /// Registered extensions, sorted.
    pub fn extensions(&self) -> Vec<String> {
        self.by_ext.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ext.is_empty()
    }

    /// Extractor responsible for `path`, by its extension.
    pub fn for_path(&self, path: &Path) -> Option<&dyn ReferenceExtractor> {
        let ext = path.extension()?.to_str()?;
        self.by_ext.get(ext).map(|e| e.as_ref())
    }
}
