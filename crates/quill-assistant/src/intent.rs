//! Keyword-based intent classification for user turns.

use quill_core::RequestKind;

/// Classifies a user turn into a request kind.
///
/// Case-insensitive substring containment against a fixed ordered keyword
/// list; the first matching group wins. Precedence is generate > explain >
/// fix > refactor, with everything else falling through to `General`.
pub fn classify(text: &str) -> RequestKind {
    let lower = text.to_lowercase();

    if lower.contains("generate") || lower.contains("create") {
        RequestKind::Generate
    } else if lower.contains("explain") || lower.contains("what") {
        RequestKind::Explain
    } else if lower.contains("fix") || lower.contains("bug") || lower.contains("error") {
        RequestKind::Fix
    } else if lower.contains("refactor") || lower.contains("improve") {
        RequestKind::Refactor
    } else {
        RequestKind::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_generate_keywords() {
        assert_eq!(classify("generate a parser"), RequestKind::Generate);
        assert_eq!(classify("Create a login form"), RequestKind::Generate);
    }

    #[test]
    fn classifies_explain_keywords() {
        assert_eq!(classify("explain this function"), RequestKind::Explain);
        assert_eq!(classify("What does this loop do?"), RequestKind::Explain);
    }

    #[test]
    fn classifies_fix_keywords_case_insensitive() {
        assert_eq!(classify("FIX this please"), RequestKind::Fix);
        assert_eq!(classify("there is a Bug here"), RequestKind::Fix);
        assert_eq!(classify("I get an error on line 3"), RequestKind::Fix);
    }

    #[test]
    fn classifies_refactor_keywords() {
        assert_eq!(classify("refactor this module"), RequestKind::Refactor);
        assert_eq!(classify("improve the performance"), RequestKind::Refactor);
    }

    #[test]
    fn fix_beats_refactor_in_precedence() {
        // Both keyword groups present; fix comes first in the fixed order.
        assert_eq!(classify("refactor this and fix the bug"), RequestKind::Fix);
    }

    #[test]
    fn generate_beats_fix_in_precedence() {
        assert_eq!(classify("generate a fix for this"), RequestKind::Generate);
    }

    #[test]
    fn explain_beats_fix_in_precedence() {
        assert_eq!(classify("explain the fix"), RequestKind::Explain);
    }

    #[test]
    fn unmatched_text_is_general() {
        assert_eq!(classify("hello there"), RequestKind::General);
        assert_eq!(classify(""), RequestKind::General);
    }

    #[test]
    fn keywords_match_inside_words() {
        // Substring containment, not word matching: "whatever" contains "what".
        assert_eq!(classify("whatever you say"), RequestKind::Explain);
    }
}
