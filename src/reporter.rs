//! Report-view orchestration - one entry point per view.
//!
//! Each function applies its send gate, chooses consolidated or per-test
//! delivery, builds the envelope through the formatter and hands it to the
//! transport. Per-test loops are strictly sequential; a failed send stops
//! the loop and propagates immediately.

use crate::blocks::BlockKitTemplate;
use crate::client;
use crate::config::{BuildOverrides, RenderConfig};
use crate::error::SlackCtrfError;
use crate::formatter::{
    format_ai_test_summary, format_consolidated_ai_test_summary,
    format_consolidated_failed_test_summary, format_custom_block_kit_message,
    format_custom_markdown_message, format_failed_test_summary, format_flaky_tests_message,
    format_results_message, Options,
};
use crate::template::compile_template;
use crate::text::strip_ansi_from_report;
use crate::types::{Report, TestStatus};
use crate::ui;
use log::debug;

/// Send the full result-summary message. Skipped entirely when
/// `on_fail_only` is set and the report has no failures.
pub fn send_test_results(
    report: &Report,
    options: &Options,
    logs: bool,
) -> Result<(), SlackCtrfError> {
    let overrides = BuildOverrides::from_env();
    let config = RenderConfig::from_env();

    if options.on_fail_only && report.results.summary.failed == 0 {
        if logs {
            ui::status("No failed tests. Message not sent.");
        }
        return Ok(());
    }

    let message = format_results_message(report, options, &overrides, &config);
    deliver(&message, options)?;

    if logs {
        ui::status("Test results message sent to Slack.");
    }
    Ok(())
}

/// Send failed-test summaries: one consolidated message, or one message
/// per failed test in report order. Does nothing when nothing failed.
pub fn send_failed_results(
    report: &Report,
    options: &Options,
    logs: bool,
) -> Result<(), SlackCtrfError> {
    let overrides = BuildOverrides::from_env();
    let config = RenderConfig::from_env();

    if report.results.summary.failed == 0 {
        debug!("no failures in summary, skipping failed-results message");
        return Ok(());
    }

    let mut report = report.clone();
    strip_ansi_from_report(&mut report);
    let environment = report.results.environment.as_ref();

    if options.consolidated {
        match format_consolidated_failed_test_summary(
            &report.results.tests,
            environment,
            options,
            &overrides,
            &config,
        ) {
            Some(message) => {
                deliver(&message, options)?;
                if logs {
                    ui::status("Failed test summary sent to Slack.");
                }
            }
            None => {
                if logs {
                    ui::status("No failed test summary detected. No message sent.");
                }
            }
        }
    } else {
        for test in &report.results.tests {
            if test.status != TestStatus::Failed {
                continue;
            }
            match format_failed_test_summary(test, environment, options, &overrides, &config) {
                Some(message) => {
                    deliver(&message, options)?;
                    if logs {
                        ui::status("Failed test summary sent to Slack.");
                    }
                }
                None => {
                    if logs {
                        ui::status("No failed test summary detected. No message sent.");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Send the flaky-tests message; nothing is sent when the report has no
/// flaky tests.
pub fn send_flaky_results(
    report: &Report,
    options: &Options,
    logs: bool,
) -> Result<(), SlackCtrfError> {
    let overrides = BuildOverrides::from_env();
    let config = RenderConfig::from_env();

    match format_flaky_tests_message(report, options, &overrides, &config) {
        Some(message) => {
            deliver(&message, options)?;
            if logs {
                ui::status("Flaky tests message sent to Slack.");
            }
        }
        None => {
            if logs {
                ui::status("No flaky tests detected. No message sent.");
            }
        }
    }

    Ok(())
}

/// Send AI failure summaries: consolidated, or one message per failed
/// test that carries AI text.
pub fn send_ai_summary(
    report: &Report,
    options: &Options,
    logs: bool,
) -> Result<(), SlackCtrfError> {
    let overrides = BuildOverrides::from_env();
    let config = RenderConfig::from_env();
    let environment = report.results.environment.as_ref();

    if options.consolidated {
        match format_consolidated_ai_test_summary(
            &report.results.tests,
            environment,
            options,
            &overrides,
            &config,
        ) {
            Some(message) => {
                deliver(&message, options)?;
                if logs {
                    ui::status("AI test summary sent to Slack.");
                }
            }
            None => {
                if logs {
                    ui::status("No AI summary detected. No message sent.");
                }
            }
        }
    } else {
        for test in &report.results.tests {
            if test.status != TestStatus::Failed {
                continue;
            }
            match format_ai_test_summary(test, environment, options, &overrides, &config) {
                Some(message) => {
                    deliver(&message, options)?;
                    if logs {
                        ui::status("AI test summary sent to Slack.");
                    }
                }
                None => {
                    if logs {
                        ui::status("No AI summary detected. No message sent.");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Render a Handlebars template against the report and send the output as
/// a markdown section in the standard scaffold.
pub fn send_custom_markdown_template(
    report: &Report,
    template_content: &str,
    options: &Options,
    logs: bool,
) -> Result<(), SlackCtrfError> {
    let overrides = BuildOverrides::from_env();
    let config = RenderConfig::from_env();

    let mut report = report.clone();
    strip_ansi_from_report(&mut report);

    let compiled_content = compile_template(template_content, &report)?;

    let message =
        format_custom_markdown_message(&report, &compiled_content, options, &overrides, &config);
    deliver(&message, options)?;

    if logs {
        ui::status("Custom template message sent to Slack.");
    }
    Ok(())
}

/// Render a Handlebars template expected to produce Block Kit JSON and
/// send the parsed blocks. Parse failure or an empty block list is a hard
/// error.
pub fn send_custom_blockkit_template(
    report: &Report,
    template_content: &str,
    options: &Options,
    logs: bool,
) -> Result<(), SlackCtrfError> {
    let rendered = compile_template(template_content, report)?;

    let block_kit: BlockKitTemplate = serde_json::from_str(&rendered)
        .map_err(|err| SlackCtrfError::BlockKitParse(err.to_string()))?;

    if block_kit.blocks.is_empty() {
        return Err(SlackCtrfError::BlockKitParse(
            "template produced no blocks".to_string(),
        ));
    }

    let message = format_custom_block_kit_message(report, block_kit);
    deliver(&message, options)?;

    if logs {
        ui::status("Custom Block Kit message sent to Slack.");
    }
    Ok(())
}

/// Hand a finished envelope to the transport: an authenticated channel
/// post when a channel is configured, the webhook otherwise.
fn deliver(
    message: &crate::blocks::SlackMessage,
    options: &Options,
) -> Result<(), SlackCtrfError> {
    if let Some(channel) = &options.channel_id {
        let token = client::resolve_oauth_token(options.oauth_token.as_deref())?;
        client::post_to_channel(message, channel, &token)
    } else {
        let webhook_url = client::resolve_webhook_url(options.webhook_url.as_deref())?;
        client::send_via_webhook(message, &webhook_url)
    }
}
