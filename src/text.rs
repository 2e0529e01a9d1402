//! Free-form text sanitizing and test-name composition.

use crate::types::{Report, Test};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// CSI/OSC-style escape sequences terminated by BEL or a final byte.
    static ref ANSI: Regex = Regex::new(
        r"[\u{1B}\u{9B}][\[\]()#;?]*(?:(?:(?:(?:;[-a-zA-Z\d/#&.:=?%@~_]+)*|[a-zA-Z\d]+(?:;[-a-zA-Z\d/#&.:=?%@~_]*)*)?\u{07})|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PR-TZcf-ntqry=><~]))"
    )
    .unwrap();
}

/// Remove ANSI/VT100 escape sequences, then every character outside the
/// 7-bit ASCII range. Idempotent; the empty string maps to itself.
pub fn strip_ansi(message: &str) -> String {
    ANSI.replace_all(message, "")
        .chars()
        .filter(|c| c.is_ascii())
        .collect()
}

/// Rewrite each test's `message` and `trace` in place with [`strip_ansi`].
/// This is the only mutation a report undergoes before message
/// construction; everything downstream treats it as read-only.
pub fn strip_ansi_from_report(report: &mut Report) {
    for test in &mut report.results.tests {
        if let Some(message) = &test.message {
            test.message = Some(strip_ansi(message));
        }
        if let Some(trace) = &test.trace {
            test.trace = Some(strip_ansi(trace));
        }
    }
}

/// `"{suite}:{name}"` when `use_suite_name` is set and the test carries a
/// suite, plain `name` otherwise.
pub fn get_test_name(test: &Test, use_suite_name: bool) -> String {
    if use_suite_name {
        if let Some(suite) = &test.suite {
            return format!("{}:{}", suite, test.name);
        }
    }
    test.name.clone()
}
