//! Slack transport: webhook POST and authenticated channel posts.
//!
//! Sends are blocking and unretried; failures carry the status code and
//! response body upward untouched.

use crate::blocks::SlackMessage;
use crate::error::SlackCtrfError;
use log::debug;
use std::env;

const SLACK_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Resolve the webhook URL from an explicit value or `SLACK_WEBHOOK_URL`.
pub fn resolve_webhook_url(explicit: Option<&str>) -> Result<String, SlackCtrfError> {
    explicit
        .map(|url| url.to_string())
        .or_else(|| env::var("SLACK_WEBHOOK_URL").ok())
        .ok_or(SlackCtrfError::MissingWebhookUrl)
}

/// Resolve the API token from an explicit value or `SLACK_OAUTH_TOKEN`.
pub fn resolve_oauth_token(explicit: Option<&str>) -> Result<String, SlackCtrfError> {
    explicit
        .map(|token| token.to_string())
        .or_else(|| env::var("SLACK_OAUTH_TOKEN").ok())
        .ok_or(SlackCtrfError::MissingOauthToken)
}

/// POST the JSON-serialized envelope to a webhook URL.
pub fn send_via_webhook(message: &SlackMessage, webhook_url: &str) -> Result<(), SlackCtrfError> {
    debug!("posting message to webhook");

    match ureq::post(webhook_url)
        .set("Content-Type", "application/json")
        .send_json(message)
    {
        Ok(_) => Ok(()),
        Err(ureq::Error::Status(status, response)) => {
            let body = response.into_string().unwrap_or_default();
            Err(SlackCtrfError::WebhookStatus { status, body })
        }
        Err(err) => Err(SlackCtrfError::Transport(err.to_string())),
    }
}

/// Post the envelope's attachments to a channel through `chat.postMessage`.
pub fn post_to_channel(
    message: &SlackMessage,
    channel: &str,
    token: &str,
) -> Result<(), SlackCtrfError> {
    debug!("posting message to channel {}", channel);

    let payload = serde_json::json!({
        "channel": channel,
        "attachments": message.attachments,
    });

    let response = ureq::post(SLACK_POST_MESSAGE_URL)
        .set("Authorization", &format!("Bearer {}", token))
        .set("Content-Type", "application/json; charset=utf-8")
        .send_json(&payload)
        .map_err(|err| match err {
            ureq::Error::Status(status, response) => SlackCtrfError::WebhookStatus {
                status,
                body: response.into_string().unwrap_or_default(),
            },
            other => SlackCtrfError::Transport(other.to_string()),
        })?;

    let body: serde_json::Value = response
        .into_json()
        .map_err(|err| SlackCtrfError::Api(err.to_string()))?;

    if body["ok"].as_bool() == Some(true) {
        Ok(())
    } else {
        let reason = body["error"].as_str().unwrap_or("unknown error");
        Err(SlackCtrfError::Api(reason.to_string()))
    }
}
