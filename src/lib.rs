//! Send CTRF test report results to Slack.
//!
//! Parses a CTRF report, builds Slack Block Kit messages for one of
//! several report views (results summary, failed tests, flaky tests, AI
//! summaries, custom Handlebars templates) and delivers them via a
//! webhook or an authenticated channel post.

pub mod blocks;
pub mod build_info;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod reporter;
pub mod template;
pub mod text;
pub mod types;
pub mod ui;

pub use error::SlackCtrfError;
pub use formatter::Options;
pub use parser::parse_ctrf_file;
pub use reporter::{
    send_ai_summary, send_custom_blockkit_template, send_custom_markdown_template,
    send_failed_results, send_flaky_results, send_test_results,
};
pub use types::{Environment, Report, Results, Summary, Test, TestStatus, Tool};
