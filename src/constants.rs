//! Fixed vocabulary shared by every message variant.
//!
//! Emoji shortcodes, attachment colors, default titles, templated message
//! strings and the numeric limits that govern truncation. Every builder
//! depends on these exact values for output fidelity, so changes here are
//! visible to any Slack integration consuming the payloads.

use lazy_static::lazy_static;
use regex::Regex;

/// Attachment color bar per message kind.
pub mod colors {
    pub const PASSED: &str = "#36a64f";
    pub const FAILED: &str = "#FF0000";
    pub const FLAKY: &str = "#FFA500";
    pub const AI: &str = "#800080";
}

/// Slack emoji shortcodes used across the block builders.
pub mod emojis {
    pub const TEST_TUBE: &str = ":test_tube:";
    pub const CHECK_MARK: &str = ":white_check_mark:";
    pub const X_MARK: &str = ":x:";
    pub const FAST_FORWARD: &str = ":fast_forward:";
    pub const HOURGLASS: &str = ":hourglass_flowing_sand:";
    pub const QUESTION: &str = ":question:";
    pub const SPARKLES: &str = ":sparkles:";
    pub const WARNING: &str = ":warning:";
    pub const INFO: &str = ":information_source:";
    pub const FALLEN_LEAF: &str = ":fallen_leaf:";
    pub const GREEN_HEART: &str = ":green_heart:";
}

/// Default notification titles, one per report view.
pub mod titles {
    use super::emojis;

    pub const TEST_RESULTS: &str = "Test Results";
    pub const FLAKY_TESTS: &str = "Flaky Tests";
    pub const AI_TEST_SUMMARY: &str = "AI Test summary";
    pub const FAILED_TEST_SUMMARY: &str = "Failed Test summary";

    pub fn ai_test_reporter() -> String {
        format!("{} AI Test Reporter", emojis::SPARKLES)
    }

    pub fn failed_test_report() -> String {
        format!("{} Failed Test Report", emojis::X_MARK)
    }
}

/// Message templates with `{0}`, `{1}`, ... positional placeholders,
/// resolved by [`format_string`].
pub mod messages {
    use super::emojis;

    pub const RESULT_PASSED: &str = "*Result:* Passed";
    pub const RESULT_FAILED: &str = "*Result:* {0} failed tests";
    pub const DURATION_LESS_THAN_ONE: &str = "*Duration:* <1s";
    pub const DURATION_FORMAT: &str = "*Duration:* {0}";
    pub const STATUS_FAILED: &str = "*Status:* Failed";
    pub const NO_MESSAGE_PROVIDED: &str = "No message provided";
    pub const NO_BUILD_INFO: &str = "*Build:* No build information provided";
    pub const TEST_NAME: &str = "*Test Name:* {0}";
    pub const TOTAL_FAILED_TESTS: &str = "*Total Failed Tests:* {0}";
    pub const MESSAGE_PREFIX: &str = "*Message:* ";
    pub const BUILD_PREFIX: &str = "*Build:* ";

    pub fn flaky_tests_detected() -> String {
        format!("{} *Flaky tests detected*", emojis::FALLEN_LEAF)
    }

    pub fn ai_summary() -> String {
        format!("*{} AI Summary:* {{0}}", emojis::SPARKLES)
    }

    pub fn missing_env_warning() -> String {
        format!(
            "{} Missing environment properties: {{0}}. Add these to your CTRF report for a better experience.",
            emojis::WARNING
        )
    }

    pub fn footer_text() -> String {
        format!(
            "<https://github.com/ctrf-io/slack-ctrf|Slack Test Reporter> by <https://ctrf.io|CTRF {}>",
            emojis::GREEN_HEART
        )
    }
}

/// Numeric limits governing the truncation policy.
pub mod limits {
    /// Maximum number of individually rendered failing tests per message.
    pub const MAX_FAILED_TESTS: usize = 20;
    /// Maximum character length for a single rendered failure message,
    /// including the trim notice.
    pub const CHAR_LIMIT: usize = 2950;
}

/// Notices appended when a limit is hit.
pub mod notices {
    use super::emojis;

    pub fn trimmed_message() -> String {
        format!("\n{} Message trimmed as too long for Slack", emojis::WARNING)
    }

    pub fn max_tests_exceeded() -> String {
        format!(
            "{} Only the first {{0}} failed tests are displayed. {{1}} additional failed tests were not included.",
            emojis::INFO
        )
    }
}

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(\d+)\}").unwrap();
}

/// Resolve `{0}`, `{1}`, ... placeholders left to right against `args`.
/// A placeholder with no matching argument is left literal.
pub fn format_string(template: &str, args: &[&str]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let index: usize = caps[1].parse().unwrap_or(usize::MAX);
            match args.get(index) {
                Some(value) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_string_substitutes_in_order() {
        assert_eq!(
            format_string("*Result:* {0} failed tests", &["2"]),
            "*Result:* 2 failed tests"
        );
        assert_eq!(format_string("{0} and {1}", &["a", "b"]), "a and b");
    }

    #[test]
    fn test_format_string_leaves_unmatched_placeholders() {
        assert_eq!(format_string("{0} and {1}", &["a"]), "a and {1}");
        assert_eq!(format_string("no placeholders", &[]), "no placeholders");
    }

    #[test]
    fn test_format_string_repeated_placeholder() {
        assert_eq!(format_string("{0} {0}", &["x"]), "x x");
    }

    #[test]
    fn test_trim_notice_fits_within_char_limit() {
        assert!(notices::trimmed_message().len() < limits::CHAR_LIMIT);
    }

    #[test]
    fn test_max_tests_exceeded_wording() {
        let text = format_string(&notices::max_tests_exceeded(), &["20", "5"]);
        assert_eq!(
            text,
            ":information_source: Only the first 20 failed tests are displayed. 5 additional failed tests were not included."
        );
    }
}
