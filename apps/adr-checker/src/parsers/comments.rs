//! Built-in extractor for C-family comment forms (JS/TS and friends).
//!
//! Three patterns are tested against every line, in a fixed order:
//! 1. `// ADR-n`
//! 2. `/* ADR-n */` (the whole block on one line)
//! 3. `* @adr ADR-n` inside a doc comment
//!
//! Each pattern that matches a line emits one reference. The forms are not
//! mutually exclusive, so one line may yield several references; nothing is
//! deduplicated here.

use super::{char_column, ReferenceExtractor};
use crate::models::{normalize_adr_id, AdrReference, CommentType};
use regex::Regex;

pub struct CommentFormExtractor {
    forms: Vec<(Regex, CommentType)>,
}

impl CommentFormExtractor {
    pub fn new() -> Self {
        let forms = vec![
            (r"//\s*ADR-(\d+)", CommentType::LineComment),
            (r"/\*\s*ADR-(\d+)\s*\*/", CommentType::BlockComment),
            (r"\*\s*@adr\s*ADR-(\d+)", CommentType::DocTag),
        ]
        .into_iter()
        .map(|(re, ct)| (Regex::new(re).expect("built-in comment pattern"), ct))
        .collect();
        Self { forms }
    }
}

impl Default for CommentFormExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceExtractor for CommentFormExtractor {
    fn extract(&self, file: &str, content: &str) -> Vec<AdrReference> {
        let mut refs = Vec::new();
        for (idx, line) in content.split('\n').enumerate() {
            for (re, ct) in &self.forms {
                // First match per pattern per line only
                if let Some(caps) = re.captures(line) {
                    let whole = caps.get(0).expect("group 0 always present");
                    refs.push(AdrReference {
                        id: normalize_adr_id(&caps[1]),
                        file: file.to_string(),
                        line: idx + 1,
                        column: char_column(line, whole.start()),
                        comment_type: ct.clone(),
                    });
                }
            }
        }
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<AdrReference> {
        CommentFormExtractor::new().extract("a.ts", content)
    }

    #[test]
    fn test_line_comment_at_line_twelve() {
        let mut src = "\n".repeat(11);
        src.push_str("// ADR-0007: rationale\n");
        let refs = extract(&src);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].id, "ADR-0007");
        assert_eq!(refs[0].file, "a.ts");
        assert_eq!(refs[0].line, 12);
        assert_eq!(refs[0].column, 0);
        assert_eq!(refs[0].comment_type, CommentType::LineComment);
    }

    #[test]
    fn test_short_ids_are_padded_and_column_counts_chars() {
        let refs = extract("const x = 1; //ADR-3");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].id, "ADR-0003");
        assert_eq!(refs[0].column, 13);

        // multi-byte prefix: column is a character offset, not a byte offset
        let refs = extract("é // ADR-1");
        assert_eq!(refs[0].column, 2);
    }

    #[test]
    fn test_block_comment_must_close_on_same_line() {
        let refs = extract("/* ADR-0002 */ const a = 1;");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].comment_type, CommentType::BlockComment);

        let refs = extract("/* ADR-0002\n */");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_doc_tag_form() {
        let refs = extract("/**\n * Main App component\n * @adr ADR-0002\n */");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].line, 3);
        assert_eq!(refs[0].column, 1);
        assert_eq!(refs[0].comment_type, CommentType::DocTag);
    }

    #[test]
    fn test_overlapping_forms_each_emit_a_reference() {
        let refs = extract("// ADR-1 * @adr ADR-2");
        let kinds: Vec<_> = refs.iter().map(|r| r.comment_type.clone()).collect();
        assert_eq!(kinds, vec![CommentType::LineComment, CommentType::DocTag]);
        assert_eq!(refs[0].id, "ADR-0001");
        assert_eq!(refs[1].id, "ADR-0002");
        assert_eq!(refs[1].column, 9);
        assert!(refs.iter().all(|r| r.line == 1));
    }

    #[test]
    fn test_two_ids_in_one_line_comment_yield_one_reference() {
        // Each pattern reports only its first match on a line
        let refs = extract("// ADR-0001 ADR-0002");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].id, "ADR-0001");
    }

    #[test]
    fn test_line_and_block_on_same_line() {
        let refs = extract("/* ADR-0001 */ // ADR-0002");
        let ids: Vec<_> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ADR-0002", "ADR-0001"]);
        assert_eq!(refs[0].column, 15);
        assert_eq!(refs[1].column, 0);
    }

    #[test]
    fn test_plain_text_mentions_are_ignored() {
        assert!(extract("see ADR-0001 for details").is_empty());
    }
}
