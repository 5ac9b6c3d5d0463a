//! Comment form discriminator carried by every reference.
//!
//! Serialized as a plain string: one of the built-in names or the raw
//! pattern source of a configured extractor. `display_form` is the only
//! place that turns a comment type into presentation text.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommentType {
    /// `// ADR-0001`
    LineComment,
    /// `/* ADR-0001 */` on a single line
    BlockComment,
    /// `* @adr ADR-0001` inside a doc comment
    DocTag,
    /// Configured pattern, stored by source text.
    Pattern(String),
}

impl CommentType {
    pub fn as_str(&self) -> &str {
        match self {
            CommentType::LineComment => "line_comment",
            CommentType::BlockComment => "block_comment",
            CommentType::DocTag => "doc_tag",
            CommentType::Pattern(p) => p.as_str(),
        }
    }

    /// Render how the citation looks in source, for report display.
    pub fn display_form(&self, id: &str) -> String {
        match self {
            CommentType::LineComment => format!("// {}", id),
            CommentType::BlockComment => format!("/* {} */", id),
            CommentType::DocTag => format!("* @adr {}", id),
            CommentType::Pattern(p) => p.clone(),
        }
    }
}

impl From<String> for CommentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "line_comment" => CommentType::LineComment,
            "block_comment" => CommentType::BlockComment,
            "doc_tag" => CommentType::DocTag,
            _ => CommentType::Pattern(s),
        }
    }
}

impl From<CommentType> for String {
    fn from(ct: CommentType) -> Self {
        match ct {
            CommentType::Pattern(p) => p,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(CommentType::LineComment.display_form("ADR-0001"), "// ADR-0001");
        assert_eq!(
            CommentType::BlockComment.display_form("ADR-0001"),
            "/* ADR-0001 */"
        );
        assert_eq!(CommentType::DocTag.display_form("ADR-0001"), "* @adr ADR-0001");
        assert_eq!(
            CommentType::Pattern(r"# ADR-\d+".into()).display_form("ADR-0001"),
            r"# ADR-\d+"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let s = serde_json::to_string(&CommentType::DocTag).unwrap();
        assert_eq!(s, "\"doc_tag\"");
        let p: CommentType = serde_json::from_str("\"-- ADR-(\\\\d+)\"").unwrap();
        assert_eq!(p, CommentType::Pattern(r"-- ADR-(\d+)".into()));
    }
}
