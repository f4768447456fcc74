//! Canned replies for turns that cannot reach the completion endpoint.
//!
//! Used both when no credential is configured and when the transport fails;
//! the two paths deliberately produce identical payloads. Never fails and
//! never carries a code suggestion.

use quill_core::RequestKind;

use crate::parser::ParsedReply;

/// Shared tail of every canned reply.
const CONFIGURE_HINT: &str =
    "Please set the XAI_API_KEY environment variable or add it to ~/.quill/config.toml.";

/// Returns the fixed per-kind reply stating the feature needs a credential.
pub fn fallback_reply(kind: RequestKind) -> ParsedReply {
    let feature = match kind {
        RequestKind::Generate | RequestKind::General => "Code generation",
        RequestKind::Explain => "Code explanation",
        RequestKind::Fix => "Bug fixing",
        RequestKind::Refactor => "Code refactoring",
    };

    let content = format!("{feature} requires an xAI API key. {CONFIGURE_HINT}");

    ParsedReply {
        explanation: content.clone(),
        content,
        code: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_mentions_the_missing_key() {
        for kind in [
            RequestKind::Generate,
            RequestKind::Explain,
            RequestKind::Fix,
            RequestKind::Refactor,
            RequestKind::General,
        ] {
            let reply = fallback_reply(kind);
            assert!(
                reply.content.contains("requires an xAI API key"),
                "fallback for {kind} should mention the missing key"
            );
            assert!(reply.code.is_none(), "fallback for {kind} should carry no code");
        }
    }

    #[test]
    fn explain_fallback_names_the_feature() {
        let reply = fallback_reply(RequestKind::Explain);
        assert!(reply.content.starts_with("Code explanation requires an xAI API key"));
    }

    #[test]
    fn general_reuses_generate_payload() {
        assert_eq!(
            fallback_reply(RequestKind::General),
            fallback_reply(RequestKind::Generate)
        );
    }
}
