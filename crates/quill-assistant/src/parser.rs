//! Extraction of fenced code blocks from markdown completion text.

use std::sync::LazyLock;

use quill_core::RequestKind;
use regex::Regex;

/// Matches the first fenced block: opening fence with optional language tag,
/// then everything up to the closing fence.
static FIRST_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(\w+)?\n(?s)(.*?)```").expect("fence capture pattern is valid")
});

/// Matches every fenced block, consuming one trailing newline so the
/// surrounding prose lines rejoin when the block is removed.
static ALL_FENCES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```\n?").expect("fence strip pattern is valid"));

/// A completion split into prose and code payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    /// Full completion text as returned by the provider.
    pub content: String,
    /// Extracted code payload, when the reply carries one.
    pub code: Option<String>,
    /// Completion text with all fenced blocks removed, trimmed.
    pub explanation: String,
}

/// Splits a completion into prose and code according to the request kind.
///
/// Only the first fenced block is ever extracted; later fences are stripped
/// from the explanation but discarded. When no fence is present the whole
/// reply is treated as code for code-producing kinds, a behavior kept from
/// the original dispatcher. Explain and general replies are prose only.
pub fn parse_reply(kind: RequestKind, content: &str) -> ParsedReply {
    match kind {
        RequestKind::Explain | RequestKind::General => ParsedReply {
            content: content.to_owned(),
            code: None,
            explanation: content.trim().to_owned(),
        },
        RequestKind::Generate | RequestKind::Fix | RequestKind::Refactor => {
            if let Some(captures) = FIRST_FENCE.captures(content) {
                let code = captures
                    .get(2)
                    .map(|body| body.as_str().trim().to_owned())
                    .unwrap_or_default();
                let explanation = ALL_FENCES.replace_all(content, "").trim().to_owned();

                ParsedReply {
                    content: content.to_owned(),
                    code: Some(code),
                    explanation,
                }
            } else {
                // No fence at all: the whole reply is the payload.
                let explanation = if kind == RequestKind::Generate {
                    "Generated code".to_owned()
                } else {
                    content.trim().to_owned()
                };

                ParsedReply {
                    content: content.to_owned(),
                    code: Some(content.trim().to_owned()),
                    explanation,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_fence_and_rejoins_prose() {
        let reply = parse_reply(
            RequestKind::Generate,
            "pre\n```js\nconst x=1;\n```\npost",
        );

        assert_eq!(reply.code.as_deref(), Some("const x=1;"));
        assert_eq!(reply.explanation, "pre\npost");
        assert_eq!(reply.content, "pre\n```js\nconst x=1;\n```\npost");
    }

    #[test]
    fn language_tag_line_is_not_part_of_code() {
        let reply = parse_reply(
            RequestKind::Fix,
            "Here is the fix:\n\n```python\nprint('hi')\n```\n",
        );

        assert_eq!(reply.code.as_deref(), Some("print('hi')"));
        assert!(!reply.code.expect("code should be present").contains("python"));
    }

    #[test]
    fn untagged_fence_is_extracted() {
        let reply = parse_reply(RequestKind::Refactor, "```\nlet y = 2;\n```");
        assert_eq!(reply.code.as_deref(), Some("let y = 2;"));
        assert_eq!(reply.explanation, "");
    }

    #[test]
    fn only_first_fence_is_extracted() {
        let reply = parse_reply(
            RequestKind::Generate,
            "first:\n```js\none\n```\nsecond:\n```js\ntwo\n```\n",
        );

        assert_eq!(reply.code.as_deref(), Some("one"));
        // Both fences are stripped from the explanation.
        assert_eq!(reply.explanation, "first:\nsecond:");
    }

    #[test]
    fn no_fence_treats_whole_reply_as_code() {
        let reply = parse_reply(RequestKind::Generate, "const x = 1;");
        assert_eq!(reply.code.as_deref(), Some("const x = 1;"));
        assert_eq!(reply.explanation, "Generated code");

        let fix = parse_reply(RequestKind::Fix, "change line 3 to use ==");
        assert_eq!(fix.code.as_deref(), Some("change line 3 to use =="));
        assert_eq!(fix.explanation, "change line 3 to use ==");
    }

    #[test]
    fn explain_never_extracts_code() {
        let reply = parse_reply(
            RequestKind::Explain,
            "This loop sums:\n```rust\nxs.iter().sum::<i32>()\n```\n",
        );

        assert!(reply.code.is_none());
        assert!(reply.explanation.contains("This loop sums"));
    }

    #[test]
    fn general_is_prose_only() {
        let reply = parse_reply(RequestKind::General, "  I can help with that.  ");
        assert!(reply.code.is_none());
        assert_eq!(reply.explanation, "I can help with that.");
    }

    #[test]
    fn empty_content_yields_empty_code() {
        let reply = parse_reply(RequestKind::Generate, "");
        assert_eq!(reply.code.as_deref(), Some(""));
    }
}
