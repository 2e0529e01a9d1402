//! Error type shared by the library and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading a report and handing the
/// finished message to Slack. Transport failures are surfaced as-is; there
/// is no retry or recovery at this level.
#[derive(Debug, Error)]
pub enum SlackCtrfError {
    #[error("failed to read report file {}: {source}", .path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CTRF report: {0}")]
    ReportParse(#[source] serde_json::Error),

    #[error("failed to read template file {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template: {0}")]
    TemplateRender(#[from] Box<handlebars::RenderError>),

    #[error("custom Block Kit template did not produce valid blocks: {0}")]
    BlockKitParse(String),

    #[error("SLACK_WEBHOOK_URL is not defined in the environment variables")]
    MissingWebhookUrl,

    #[error("Slack API token is required")]
    MissingOauthToken,

    #[error("failed to send message, status code: {status}, response: {body}")]
    WebhookStatus { status: u16, body: String },

    #[error("failed to send Slack message: {0}")]
    Transport(String),

    #[error("Slack API call failed: {0}")]
    Api(String),
}

impl From<handlebars::RenderError> for SlackCtrfError {
    fn from(err: handlebars::RenderError) -> Self {
        SlackCtrfError::TemplateRender(Box::new(err))
    }
}
