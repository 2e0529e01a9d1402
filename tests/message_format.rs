/// End-to-end message construction tests
///
/// These tests exercise the full pipeline from a parsed CTRF report to a
/// serialized Slack envelope, asserting on the on-wire JSON shape that
/// consuming integrations depend on.
use serde_json::{json, Value};
use slack_ctrf::config::{BuildOverrides, RenderConfig};
use slack_ctrf::formatter::{
    format_consolidated_failed_test_summary, format_flaky_tests_message, format_results_message,
    Options,
};
use slack_ctrf::Report;

fn sample_report() -> Report {
    serde_json::from_value(json!({
        "results": {
            "tool": { "name": "jest", "version": "29.5.0" },
            "summary": {
                "tests": 10, "passed": 5, "failed": 2,
                "skipped": 1, "pending": 1, "other": 1,
                "start": 1706644023000u64, "stop": 1706644048000u64
            },
            "tests": [
                { "name": "login works", "status": "passed", "duration": 1200 },
                { "name": "signup works", "status": "passed", "duration": 800 },
                { "name": "profile loads", "status": "passed", "duration": 350 },
                { "name": "avatar uploads", "status": "passed", "duration": 420 },
                { "name": "logout works", "status": "passed", "duration": 150 },
                { "name": "checkout totals", "status": "failed", "duration": 900,
                  "message": "expected 18.99 to equal 17.99" },
                { "name": "refund flow", "status": "failed", "duration": 1100 },
                { "name": "legacy export", "status": "skipped", "duration": 0 },
                { "name": "beta banner", "status": "pending", "duration": 0 },
                { "name": "ie11 canvas", "status": "other", "duration": 0 }
            ],
            "environment": {
                "buildName": "ctrf",
                "buildNumber": "123",
                "buildUrl": "https://ctrf.io/"
            }
        }
    }))
    .unwrap()
}

fn first_attachment(message: &slack_ctrf::blocks::SlackMessage) -> Value {
    serde_json::to_value(message).unwrap()["attachments"][0].clone()
}

#[test]
fn test_results_envelope_wire_shape() {
    let message = format_results_message(
        &sample_report(),
        &Options::default(),
        &BuildOverrides::default(),
        &RenderConfig::default(),
    );

    let attachment = first_attachment(&message);
    assert_eq!(attachment["color"], "#FF0000");
    assert_eq!(attachment["fallback"], "Test Results\nctrf #123\nFailed: 2");

    let blocks = attachment["blocks"].as_array().unwrap();

    // Header with the default title.
    assert_eq!(blocks[0]["type"], "header");
    assert_eq!(blocks[0]["text"]["type"], "plain_text");
    assert_eq!(blocks[0]["text"]["text"], "Test Results");
    assert_eq!(blocks[0]["text"]["emoji"], true);

    // Summary section: counts, verdict, duration and build info.
    assert_eq!(blocks[1]["type"], "section");
    assert_eq!(blocks[1]["text"]["type"], "mrkdwn");
    let summary_text = blocks[1]["text"]["text"].as_str().unwrap();
    assert!(summary_text.contains(":test_tube: 10"));
    assert!(summary_text.contains(":white_check_mark: 5"));
    assert!(summary_text.contains(":x: 2"));
    assert!(summary_text.contains(":fast_forward: 1"));
    assert!(summary_text.contains(":hourglass_flowing_sand: 1"));
    assert!(summary_text.contains(":question: 1"));
    assert!(summary_text.contains("*Result:* 2 failed tests"));
    assert!(summary_text.contains("*Duration:* 00:00:25"));
    assert!(summary_text.contains("*Build:* <https://ctrf.io/|ctrf #123>"));

    // Chart accessory rides on the summary section.
    assert_eq!(blocks[1]["accessory"]["type"], "image");
    assert_eq!(blocks[1]["accessory"]["alt_text"], "Pie Chart");
    assert!(blocks[1]["accessory"]["image_url"]
        .as_str()
        .unwrap()
        .starts_with("https://quickchart.io/chart"));

    // Footer context closes the message.
    let footer = blocks.last().unwrap();
    assert_eq!(footer["type"], "context");
    assert!(footer["elements"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Slack Test Reporter"));
}

#[test]
fn test_results_envelope_all_env_fields_present_no_warning() {
    let message = format_results_message(
        &sample_report(),
        &Options::default(),
        &BuildOverrides::default(),
        &RenderConfig::default(),
    );
    let attachment = first_attachment(&message);
    let text = attachment["blocks"].to_string();
    assert!(!text.contains("Missing environment properties"));
}

#[test]
fn test_results_envelope_missing_env_warning() {
    let mut report = sample_report();
    report.results.environment = None;

    let message = format_results_message(
        &report,
        &Options::default(),
        &BuildOverrides::default(),
        &RenderConfig::default(),
    );
    let attachment = first_attachment(&message);
    let text = attachment["blocks"].to_string();
    assert!(text.contains("*Build:* No build information provided"));
    assert!(text.contains("Missing environment properties: buildName, buildNumber, buildUrl"));
    // Without environment fields the fallback is just the title and verdict.
    assert_eq!(attachment["fallback"], "Test Results\nFailed: 2");
}

#[test]
fn test_flaky_view_returns_none_for_report_without_flaky_tests() {
    let message = format_flaky_tests_message(
        &sample_report(),
        &Options::default(),
        &BuildOverrides::default(),
        &RenderConfig::default(),
    );
    assert!(message.is_none());
}

#[test]
fn test_consolidated_failed_envelope_lists_each_failure() {
    let message = format_consolidated_failed_test_summary(
        &sample_report().results.tests,
        sample_report().results.environment.as_ref(),
        &Options::default(),
        &BuildOverrides::default(),
        &RenderConfig::default(),
    )
    .unwrap();

    let attachment = first_attachment(&message);
    assert_eq!(attachment["color"], "#FF0000");

    let blocks = attachment["blocks"].as_array().unwrap();
    assert_eq!(blocks[0]["text"]["text"], ":x: Failed Test Report");

    let all_text = attachment["blocks"].to_string();
    assert!(all_text.contains("*Total Failed Tests:* 2"));
    assert!(all_text.contains(":x: checkout totals"));
    assert!(all_text.contains("expected 18.99 to equal 17.99"));
    assert!(all_text.contains(":x: refund flow"));
    assert!(all_text.contains("No message provided"));

    // A divider separates the counts from the per-test blocks.
    assert!(blocks.iter().any(|block| block["type"] == "divider"));
}

#[test]
fn test_suppression_flags_remove_footer_warning_and_chart() {
    let mut report = sample_report();
    report.results.environment = None;

    let config = RenderConfig {
        suppress_footer: true,
        suppress_warnings: true,
        suppress_chart: true,
    };
    let message = format_results_message(
        &report,
        &Options::default(),
        &BuildOverrides::default(),
        &config,
    );
    let attachment = first_attachment(&message);
    let text = attachment["blocks"].to_string();
    assert!(!text.contains("context"));
    assert!(!text.contains("Missing environment properties"));
    assert!(!text.contains("quickchart.io"));
}
