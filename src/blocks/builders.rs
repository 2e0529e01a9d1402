//! Block builders for each report view.
//!
//! Pure functions from domain data plus a build-info line to an ordered
//! block list. Ordering inside each builder is part of the output
//! contract, as is the truncation policy for failure messages.

use super::chart::chart_image_url;
use super::types::{Accessory, Block, TextObject};
use crate::config::RenderConfig;
use crate::constants::{emojis, format_string, limits, messages, notices};
use crate::types::{Summary, Test};
use chrono::DateTime;

/// One section block summarizing the run: a count line (zero counts are
/// omitted entirely), a verdict/duration line and the build-info line,
/// with an optional pie-chart accessory.
pub fn test_result_blocks(
    summary: &Summary,
    build_info: &str,
    flaky_count: usize,
    config: &RenderConfig,
) -> Vec<Block> {
    let result_text = if summary.failed > 0 {
        format_string(messages::RESULT_FAILED, &[&summary.failed.to_string()])
    } else {
        messages::RESULT_PASSED.to_string()
    };

    let duration_ms = summary.stop.saturating_sub(summary.start);
    let duration_text = if duration_ms < 1000 {
        messages::DURATION_LESS_THAN_ONE.to_string()
    } else {
        format_string(messages::DURATION_FORMAT, &[&clock_format(duration_ms)])
    };

    let mut test_summary = format!(
        "{} {} | {} {} | {} {}",
        emojis::TEST_TUBE,
        summary.tests,
        emojis::CHECK_MARK,
        summary.passed,
        emojis::X_MARK,
        summary.failed
    );

    if summary.skipped > 0 {
        test_summary.push_str(&format!(" | {} {}", emojis::FAST_FORWARD, summary.skipped));
    }
    if summary.pending > 0 {
        test_summary.push_str(&format!(" | {} {}", emojis::HOURGLASS, summary.pending));
    }
    if summary.other > 0 {
        test_summary.push_str(&format!(" | {} {}", emojis::QUESTION, summary.other));
    }
    if flaky_count > 0 {
        test_summary.push_str(&format!(" | {} {}", emojis::FALLEN_LEAF, flaky_count));
    }

    let text = format!("{}\n{} | {}\n{}", test_summary, result_text, duration_text, build_info);

    let accessory = if config.suppress_chart {
        None
    } else {
        Some(Accessory::Image {
            image_url: chart_image_url(summary),
            alt_text: "Pie Chart".to_string(),
        })
    };

    vec![Block::Section {
        text: TextObject::mrkdwn(text),
        accessory,
    }]
}

/// Build-info section, failed-count section and divider, then a header
/// plus message section for each of the first `MAX_FAILED_TESTS` failing
/// tests in input order. A closing section reports how many tests were
/// omitted when the cap is exceeded.
pub fn failed_test_blocks(failed_tests: &[&Test], build_info: &str) -> Vec<Block> {
    let mut blocks = vec![
        Block::section(build_info),
        Block::section(format_string(
            messages::TOTAL_FAILED_TESTS,
            &[&failed_tests.len().to_string()],
        )),
        Block::Divider,
    ];

    for test in failed_tests.iter().take(limits::MAX_FAILED_TESTS) {
        let fail_summary = enrich_message(test.message.as_deref());
        blocks.push(Block::header(format!("{} {}", emojis::X_MARK, test.name)));
        blocks.push(Block::section(fenced(&fail_summary)));
    }

    if failed_tests.len() > limits::MAX_FAILED_TESTS {
        blocks.push(Block::section(format_string(
            &notices::max_tests_exceeded(),
            &[
                &limits::MAX_FAILED_TESTS.to_string(),
                &(failed_tests.len() - limits::MAX_FAILED_TESTS).to_string(),
            ],
        )));
    }

    blocks
}

/// Same skeleton as [`failed_test_blocks`], rendering each test's
/// externally supplied AI summary instead of its message. AI text is not
/// truncated.
pub fn ai_test_blocks(failed_tests: &[&Test], build_info: &str) -> Vec<Block> {
    let mut blocks = vec![
        Block::section(build_info),
        Block::section(format_string(
            messages::TOTAL_FAILED_TESTS,
            &[&failed_tests.len().to_string()],
        )),
        Block::Divider,
    ];

    for test in failed_tests.iter().take(limits::MAX_FAILED_TESTS) {
        let ai_summary = test.ai.as_deref().unwrap_or_default();
        blocks.push(Block::header(format!("{} {}", emojis::X_MARK, test.name)));
        blocks.push(Block::section(format_string(&messages::ai_summary(), &[ai_summary])));
    }

    if failed_tests.len() > limits::MAX_FAILED_TESTS {
        blocks.push(Block::section(format_string(
            &notices::max_tests_exceeded(),
            &[
                &limits::MAX_FAILED_TESTS.to_string(),
                &(failed_tests.len() - limits::MAX_FAILED_TESTS).to_string(),
            ],
        )));
    }

    blocks
}

/// Announcement section plus one section listing each flaky test name.
pub fn flaky_test_blocks(flaky_tests: &[&Test], build_info: &str) -> Vec<Block> {
    let flaky_tests_text = flaky_tests
        .iter()
        .map(|test| format!("- {}", test.name))
        .collect::<Vec<_>>()
        .join("\n");

    vec![
        Block::section(format!("{}\n{}", messages::flaky_tests_detected(), build_info)),
        Block::section(format!("*Flaky Tests*\n{}", flaky_tests_text)),
    ]
}

/// Compact two-block rendering of one AI-annotated failed test.
pub fn single_ai_test_blocks(test_name: &str, ai_summary: &str) -> Vec<Block> {
    vec![
        Block::section(format!(
            "{}\n{}",
            format_string(messages::TEST_NAME, &[test_name]),
            messages::STATUS_FAILED
        )),
        Block::section(format_string(&messages::ai_summary(), &[ai_summary])),
    ]
}

/// Compact three-block rendering of one failed test: name, message and
/// build info. The message follows the shared truncation policy.
pub fn single_failed_test_blocks(
    test_name: &str,
    message: Option<&str>,
    build_info: &str,
) -> Vec<Block> {
    let enriched = enrich_message(message);

    vec![
        Block::section(format_string(messages::TEST_NAME, &[test_name])),
        Block::section(format!("*Message:*\n{}", fenced(&enriched))),
        Block::section(build_info),
    ]
}

/// Wrap builder output with title/prefix/suffix/warning/footer scaffolding
/// into one ordered block list. The two suppression switches are explicit
/// configuration, not ambient state.
pub fn message_blocks(
    title: &str,
    prefix: Option<&str>,
    suffix: Option<&str>,
    custom_blocks: Vec<Block>,
    missing_env_properties: &[&str],
    config: &RenderConfig,
) -> Vec<Block> {
    let mut blocks = Vec::new();

    if !title.is_empty() {
        blocks.push(Block::header(title));
    }

    if let Some(prefix) = prefix {
        if !prefix.is_empty() {
            blocks.push(Block::section(prefix));
        }
    }

    blocks.extend(custom_blocks);

    if let Some(suffix) = suffix {
        if !suffix.is_empty() {
            blocks.push(Block::section(suffix));
        }
    }

    if !config.suppress_warnings && !missing_env_properties.is_empty() {
        blocks.push(Block::section(format_string(
            &messages::missing_env_warning(),
            &[&missing_env_properties.join(", ")],
        )));
    }

    if !config.suppress_footer {
        blocks.push(Block::context(messages::footer_text()));
    }

    blocks
}

/// Apply the truncation policy: messages longer than `CHAR_LIMIT` are cut
/// so the total, trim notice included, is exactly `CHAR_LIMIT` characters;
/// absent messages resolve to a fixed placeholder.
fn enrich_message(message: Option<&str>) -> String {
    match message {
        Some(message) => {
            let notice = notices::trimmed_message();
            if message.chars().count() > limits::CHAR_LIMIT {
                let keep = limits::CHAR_LIMIT - notice.chars().count();
                let mut trimmed: String = message.chars().take(keep).collect();
                trimmed.push_str(&notice);
                trimmed
            } else {
                message.to_string()
            }
        }
        None => messages::NO_MESSAGE_PROVIDED.to_string(),
    }
}

/// Code-fence a message for Slack, leaving blank text untouched.
fn fenced(text: &str) -> String {
    if text.trim().is_empty() {
        text.to_string()
    } else {
        format!("```{}```", text)
    }
}

/// Render an elapsed-millisecond count as a zero-padded `HH:MM:SS` clock
/// by formatting it as a UTC time of day. Runs of 24 hours or more wrap
/// around; kept as-is for output compatibility.
fn clock_format(duration_ms: u64) -> String {
    DateTime::from_timestamp_millis(duration_ms as i64)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "00:00:00".to_string())
}
