use crate::formatter::Options;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "slack-ctrf")]
#[command(about = "Send CTRF test report results to Slack")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Send test results summary to Slack
    Results {
        /// Path to the CTRF file
        path: PathBuf,

        /// Send message only if there are failed tests
        #[arg(long = "on-fail-only", short = 'f')]
        on_fail_only: bool,

        #[command(flatten)]
        shared: SharedArgs,
    },

    /// Send failed test results to Slack
    Failed {
        /// Path to the CTRF file
        path: PathBuf,

        /// Consolidate all failure summaries into a single message
        #[arg(long, short = 'c')]
        consolidated: bool,

        #[command(flatten)]
        shared: SharedArgs,
    },

    /// Send flaky test results to Slack
    Flaky {
        /// Path to the CTRF file
        path: PathBuf,

        #[command(flatten)]
        shared: SharedArgs,
    },

    /// Send AI failed test summary for each failed test to Slack
    Ai {
        /// Path to the CTRF file
        path: PathBuf,

        /// Consolidate all AI summaries into a single message
        #[arg(long, short = 'c')]
        consolidated: bool,

        #[command(flatten)]
        shared: SharedArgs,
    },

    /// Send a message to Slack using a custom Handlebars template
    Custom {
        /// Path to the CTRF file
        path: PathBuf,

        /// Path to the Handlebars template file
        template_path: PathBuf,

        /// Send message only if there are failed tests
        #[arg(long = "on-fail-only", short = 'f')]
        on_fail_only: bool,

        /// Template is Slack-flavored markdown
        #[arg(long, short = 'm')]
        markdown: bool,

        /// Template is Block Kit JSON format (default)
        #[arg(long, short = 'b', conflicts_with = "markdown")]
        blockkit: bool,

        #[command(flatten)]
        shared: SharedArgs,
    },
}

/// Options common to every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SharedArgs {
    /// Title of notification
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Custom text to add as a prefix to the message
    #[arg(long, short = 'p', default_value = "")]
    pub prefix: String,

    /// Custom text to add as a suffix to the message
    #[arg(long, short = 's', default_value = "")]
    pub suffix: String,

    /// Slack webhook URL (defaults to SLACK_WEBHOOK_URL)
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Slack API token for channel posting (defaults to SLACK_OAUTH_TOKEN)
    #[arg(long)]
    pub oauth_token: Option<String>,

    /// Channel ID to post to via the Slack API instead of a webhook
    #[arg(long)]
    pub channel_id: Option<String>,
}

impl SharedArgs {
    /// Build library options from shared flags plus per-command switches.
    pub fn to_options(&self, on_fail_only: bool, consolidated: bool) -> Options {
        Options {
            title: self.title.clone(),
            prefix: Some(self.prefix.clone()),
            suffix: Some(self.suffix.clone()),
            on_fail_only,
            consolidated,
            webhook_url: self.webhook_url.clone(),
            oauth_token: self.oauth_token.clone(),
            channel_id: self.channel_id.clone(),
        }
    }
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_subcommand_parses() {
        let args = CliArgs::try_parse_from([
            "slack-ctrf",
            "results",
            "ctrf/ctrf-report.json",
            "--on-fail-only",
            "-t",
            "Nightly",
        ])
        .unwrap();

        match args.command {
            Command::Results { path, on_fail_only, shared } => {
                assert_eq!(path, PathBuf::from("ctrf/ctrf-report.json"));
                assert!(on_fail_only);
                assert_eq!(shared.title.as_deref(), Some("Nightly"));
                assert_eq!(shared.prefix, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_failed_subcommand_consolidated() {
        let args =
            CliArgs::try_parse_from(["slack-ctrf", "failed", "report.json", "-c"]).unwrap();
        match args.command {
            Command::Failed { consolidated, .. } => assert!(consolidated),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_custom_subcommand_requires_template_path() {
        assert!(CliArgs::try_parse_from(["slack-ctrf", "custom", "report.json"]).is_err());

        let args = CliArgs::try_parse_from([
            "slack-ctrf",
            "custom",
            "report.json",
            "template.hbs",
            "--markdown",
        ])
        .unwrap();
        match args.command {
            Command::Custom { markdown, blockkit, .. } => {
                assert!(markdown);
                assert!(!blockkit);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_markdown_and_blockkit_conflict() {
        assert!(CliArgs::try_parse_from([
            "slack-ctrf",
            "custom",
            "report.json",
            "template.hbs",
            "--markdown",
            "--blockkit",
        ])
        .is_err());
    }

    #[test]
    fn test_to_options_carries_shared_flags() {
        let shared = SharedArgs {
            title: Some("T".to_string()),
            prefix: "P".to_string(),
            suffix: "".to_string(),
            webhook_url: Some("https://hooks.slack.com/services/x".to_string()),
            oauth_token: None,
            channel_id: None,
        };
        let options = shared.to_options(true, false);
        assert_eq!(options.title.as_deref(), Some("T"));
        assert_eq!(options.prefix.as_deref(), Some("P"));
        assert!(options.on_fail_only);
        assert!(!options.consolidated);
    }
}
