//! Stable scenario identifiers derived from human-readable suite names.
use regex::Regex;
use std::sync::OnceLock;

/// Slug used when a suite name has no alphanumeric content at all.
pub const FALLBACK_SCENARIO_ID: &str = "robot-suite";

fn separator_run() -> &'static Regex {
    static SEPARATOR_RUN: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_RUN
        .get_or_init(|| Regex::new(r"[^a-zA-Z0-9]+").expect("regex for slug separators"))
}

/// Lower-case `value` and collapse every non-alphanumeric run into one hyphen.
///
/// Never fails; empty or symbol-only input yields [`FALLBACK_SCENARIO_ID`].
pub fn sanitize_id(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let cleaned = separator_run().replace_all(&lowered, "-");
    let trimmed = cleaned.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_SCENARIO_ID.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_slug(value: &str) -> bool {
        !value.is_empty()
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
    }

    #[test]
    fn collapses_punctuation_and_whitespace() {
        assert_eq!(sanitize_id("My Test Suite!!"), "my-test-suite");
        assert_eq!(sanitize_id("Login -- Web / Chrome"), "login-web-chrome");
        assert_eq!(sanitize_id("Suite_42.Smoke"), "suite-42-smoke");
    }

    #[test]
    fn falls_back_when_nothing_survives() {
        assert_eq!(sanitize_id(""), FALLBACK_SCENARIO_ID);
        assert_eq!(sanitize_id("   "), FALLBACK_SCENARIO_ID);
        assert_eq!(sanitize_id("!!!---???"), FALLBACK_SCENARIO_ID);
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(sanitize_id("Café Über Tests"), "caf-ber-tests");
        assert_eq!(sanitize_id("テスト"), FALLBACK_SCENARIO_ID);
    }

    #[test]
    fn output_is_always_a_slug() {
        let inputs = [
            "",
            " ",
            "-",
            "--a--",
            "A",
            "Robot Suite",
            "Mixed CASE 123",
            "\ttabs\nand\rnewlines ",
            "ünïcödé",
            "emoji 🚀 suite",
            "trailing!",
            "!leading",
        ];
        for input in inputs {
            let slug = sanitize_id(input);
            assert!(is_slug(&slug), "{input:?} produced {slug:?}");
        }
    }
}
