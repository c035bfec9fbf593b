//! Helpers shared by the reqwest-backed upstream adapters.

use reqwest::Url;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Whitespace-compacted, length-capped rendering of an error response body.
pub(crate) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

/// Ensure `Url::join` appends to the base path instead of replacing its last
/// segment.
pub(crate) fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"  not \n found  ".as_slice(), "not found")]
    #[case(b"".as_slice(), "")]
    fn compacts_whitespace(#[case] body: &[u8], #[case] expected: &str) {
        assert_eq!(body_preview(body), expected);
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(PREVIEW_CHAR_LIMIT + 40);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), PREVIEW_CHAR_LIMIT + 3);
        assert!(preview.ends_with("..."));
    }

    #[rstest]
    #[case("https://api.x.ai/v1", "https://api.x.ai/v1/chat/completions")]
    #[case("https://api.x.ai/v1/", "https://api.x.ai/v1/chat/completions")]
    #[case("http://127.0.0.1:8080", "http://127.0.0.1:8080/chat/completions")]
    fn joins_below_the_base_path(#[case] base: &str, #[case] expected: &str) {
        let base = with_trailing_slash(Url::parse(base).expect("valid url"));
        let joined = base.join("chat/completions").expect("joinable");
        assert_eq!(joined.as_str(), expected);
    }
}
