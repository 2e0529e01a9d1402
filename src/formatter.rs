//! Message assembly - one formatting function per report view.
//!
//! Each function normalizes options once, resolves build info, delegates
//! to the block builders and wraps the result in the outer envelope.
//! Functions return `None` when the view has nothing to say (no flaky
//! tests, no AI summary); the results view always produces a message.

use crate::blocks::{
    ai_test_blocks, failed_test_blocks, flaky_test_blocks, message_blocks,
    single_ai_test_blocks, single_failed_test_blocks, test_result_blocks, Attachment, Block,
    BlockKitTemplate, SlackMessage,
};
use crate::build_info::resolve_build_info;
use crate::config::{BuildOverrides, RenderConfig};
use crate::constants::{colors, messages, titles};
use crate::types::{Environment, Report, Test, TestStatus};

/// Options for a single message-construction call. Transport selectors are
/// passed through untouched; nothing here ever mutates the report.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub title: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub on_fail_only: bool,
    pub consolidated: bool,
    pub webhook_url: Option<String>,
    pub oauth_token: Option<String>,
    pub channel_id: Option<String>,
}

struct NormalizedOptions {
    title: String,
    prefix: Option<String>,
    suffix: Option<String>,
}

/// Resolve the per-view title default and carry prefix/suffix through.
/// Defaults are applied here once, not ad hoc inside builders.
fn normalize_options(default_title: &str, options: &Options) -> NormalizedOptions {
    NormalizedOptions {
        title: options.title.clone().unwrap_or_else(|| default_title.to_string()),
        prefix: options.prefix.clone(),
        suffix: options.suffix.clone(),
    }
}

/// Full result-summary message: counts, verdict, duration, build info and
/// chart, under the default "Test Results" title.
pub fn format_results_message(
    report: &Report,
    options: &Options,
    overrides: &BuildOverrides,
    config: &RenderConfig,
) -> SlackMessage {
    let results = &report.results;
    let normalized = normalize_options(titles::TEST_RESULTS, options);
    let build = resolve_build_info(results.environment.as_ref(), overrides);

    let flaky_count = results.tests.iter().filter(|test| test.is_flaky()).count();

    let custom_blocks = test_result_blocks(&results.summary, &build.text, flaky_count, config);

    let blocks = message_blocks(
        &normalized.title,
        normalized.prefix.as_deref(),
        normalized.suffix.as_deref(),
        custom_blocks,
        &build.missing_env_properties,
        config,
    );

    let failed = results.summary.failed;
    let message = if failed > 0 {
        format!("Failed: {}", failed)
    } else {
        "Passed".to_string()
    };

    create_slack_message(
        blocks,
        if failed > 0 { colors::FAILED } else { colors::PASSED },
        &normalized.title,
        results.environment.as_ref(),
        Some(&message),
    )
}

/// Flaky-tests message, or `None` when the report contains none.
pub fn format_flaky_tests_message(
    report: &Report,
    options: &Options,
    overrides: &BuildOverrides,
    config: &RenderConfig,
) -> Option<SlackMessage> {
    let results = &report.results;
    let flaky_tests: Vec<&Test> = results.tests.iter().filter(|test| test.is_flaky()).collect();
    let normalized = normalize_options(titles::FLAKY_TESTS, options);
    let build = resolve_build_info(results.environment.as_ref(), overrides);

    if flaky_tests.is_empty() {
        return None;
    }

    let custom_blocks = flaky_test_blocks(&flaky_tests, &build.text);

    let blocks = message_blocks(
        &normalized.title,
        normalized.prefix.as_deref(),
        normalized.suffix.as_deref(),
        custom_blocks,
        &build.missing_env_properties,
        config,
    );

    Some(create_slack_message(
        blocks,
        colors::FLAKY,
        &normalized.title,
        results.environment.as_ref(),
        Some("Flaky tests detected"),
    ))
}

/// Per-test AI summary, or `None` when the test has no AI text or passed.
pub fn format_ai_test_summary(
    test: &Test,
    environment: Option<&Environment>,
    options: &Options,
    overrides: &BuildOverrides,
    config: &RenderConfig,
) -> Option<SlackMessage> {
    let normalized = normalize_options(titles::AI_TEST_SUMMARY, options);
    let build = resolve_build_info(environment, overrides);

    let ai = test.ai.as_deref()?;
    if test.status == TestStatus::Passed {
        return None;
    }

    let custom_blocks = single_ai_test_blocks(&test.name, ai);

    let blocks = message_blocks(
        &normalized.title,
        normalized.prefix.as_deref(),
        normalized.suffix.as_deref(),
        custom_blocks,
        &build.missing_env_properties,
        config,
    );

    Some(create_slack_message(
        blocks,
        colors::AI,
        &normalized.title,
        environment,
        Some(&test.name),
    ))
}

/// One combined message for every failed test carrying an AI summary, or
/// `None` when no test qualifies.
pub fn format_consolidated_ai_test_summary(
    tests: &[Test],
    environment: Option<&Environment>,
    options: &Options,
    overrides: &BuildOverrides,
    config: &RenderConfig,
) -> Option<SlackMessage> {
    let failed_tests: Vec<&Test> = tests
        .iter()
        .filter(|test| test.ai.is_some() && test.status == TestStatus::Failed)
        .collect();
    let normalized = normalize_options(&titles::ai_test_reporter(), options);
    let build = resolve_build_info(environment, overrides);

    if failed_tests.is_empty() {
        return None;
    }

    let custom_blocks = ai_test_blocks(&failed_tests, &build.text);

    let blocks = message_blocks(
        &normalized.title,
        normalized.prefix.as_deref(),
        normalized.suffix.as_deref(),
        custom_blocks,
        &build.missing_env_properties,
        config,
    );

    Some(create_slack_message(
        blocks,
        colors::AI,
        &normalized.title,
        environment,
        None,
    ))
}

/// One combined message for every failed test, or `None` when none failed.
pub fn format_consolidated_failed_test_summary(
    tests: &[Test],
    environment: Option<&Environment>,
    options: &Options,
    overrides: &BuildOverrides,
    config: &RenderConfig,
) -> Option<SlackMessage> {
    let failed_tests: Vec<&Test> = tests
        .iter()
        .filter(|test| test.status == TestStatus::Failed)
        .collect();
    let normalized = normalize_options(&titles::failed_test_report(), options);
    let build = resolve_build_info(environment, overrides);

    if failed_tests.is_empty() {
        return None;
    }

    let custom_blocks = failed_test_blocks(&failed_tests, &build.text);

    let blocks = message_blocks(
        &normalized.title,
        normalized.prefix.as_deref(),
        normalized.suffix.as_deref(),
        custom_blocks,
        &build.missing_env_properties,
        config,
    );

    Some(create_slack_message(
        blocks,
        colors::FAILED,
        &normalized.title,
        environment,
        None,
    ))
}

/// Per-test failure summary, or `None` when the test did not fail.
pub fn format_failed_test_summary(
    test: &Test,
    environment: Option<&Environment>,
    options: &Options,
    overrides: &BuildOverrides,
    config: &RenderConfig,
) -> Option<SlackMessage> {
    let normalized = normalize_options(titles::FAILED_TEST_SUMMARY, options);
    let build = resolve_build_info(environment, overrides);

    if test.status != TestStatus::Failed {
        return None;
    }

    let custom_blocks = single_failed_test_blocks(&test.name, test.message.as_deref(), &build.text);

    let blocks = message_blocks(
        &normalized.title,
        normalized.prefix.as_deref(),
        normalized.suffix.as_deref(),
        custom_blocks,
        &build.missing_env_properties,
        config,
    );

    Some(create_slack_message(
        blocks,
        colors::FAILED,
        &normalized.title,
        environment,
        Some(&test.name),
    ))
}

/// Wrap rendered template markdown as a single section inside the standard
/// scaffold. The title defaults to empty, so no header is emitted unless
/// the caller provides one.
pub fn format_custom_markdown_message(
    report: &Report,
    template_content: &str,
    options: &Options,
    overrides: &BuildOverrides,
    config: &RenderConfig,
) -> SlackMessage {
    let results = &report.results;
    let normalized = normalize_options("", options);
    let build = resolve_build_info(results.environment.as_ref(), overrides);

    let custom_blocks = vec![Block::section(template_content)];

    let blocks = message_blocks(
        &normalized.title,
        normalized.prefix.as_deref(),
        normalized.suffix.as_deref(),
        custom_blocks,
        &build.missing_env_properties,
        config,
    );

    create_slack_message(
        blocks,
        if results.summary.failed > 0 { colors::FAILED } else { colors::PASSED },
        &normalized.title,
        results.environment.as_ref(),
        None,
    )
}

/// Envelope pre-built Block Kit blocks, appending the footer context block.
pub fn format_custom_block_kit_message(
    report: &Report,
    block_kit: BlockKitTemplate,
) -> SlackMessage {
    let mut blocks = block_kit.blocks;
    blocks.push(Block::context(messages::footer_text()));

    create_slack_message(
        blocks,
        if report.results.summary.failed > 0 { colors::FAILED } else { colors::PASSED },
        "",
        report.results.environment.as_ref(),
        Some("Test Results"),
    )
}

/// Wrap a finished block list into the outer envelope. The fallback
/// notification joins the title, a `name #number` build line when the
/// report environment carries both, and any extra line.
pub fn create_slack_message(
    blocks: Vec<Block>,
    color: &str,
    title: &str,
    environment: Option<&Environment>,
    additional_info: Option<&str>,
) -> SlackMessage {
    let mut notification: Vec<String> = vec![title.to_string()];

    if let Some(environment) = environment {
        if let (Some(name), Some(number)) = (&environment.build_name, &environment.build_number) {
            notification.push(format!("{} #{}", name, number));
        }
    }

    if let Some(additional_info) = additional_info {
        notification.push(additional_info.to_string());
    }

    SlackMessage {
        attachments: vec![Attachment {
            fallback: notification.join("\n"),
            color: color.to_string(),
            blocks,
        }],
    }
}
