use slack_ctrf::cli::{CliArgs, Command};
use slack_ctrf::{parser, reporter, ui};
use std::fs;
use std::process;

fn main() {
    env_logger::init();

    let args = CliArgs::parse_args();

    if let Err(e) = run(args) {
        ui::print_error(&e.to_string());
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), slack_ctrf::SlackCtrfError> {
    match args.command {
        Command::Results { path, on_fail_only, shared } => {
            let report = parser::parse_ctrf_file(&path)?;
            let options = shared.to_options(on_fail_only, false);
            reporter::send_test_results(&report, &options, true)
        }
        Command::Failed { path, consolidated, shared } => {
            let report = parser::parse_ctrf_file(&path)?;
            let options = shared.to_options(false, consolidated);
            reporter::send_failed_results(&report, &options, true)
        }
        Command::Flaky { path, shared } => {
            let report = parser::parse_ctrf_file(&path)?;
            let options = shared.to_options(false, false);
            reporter::send_flaky_results(&report, &options, true)
        }
        Command::Ai { path, consolidated, shared } => {
            let report = parser::parse_ctrf_file(&path)?;
            let options = shared.to_options(false, consolidated);
            reporter::send_ai_summary(&report, &options, true)
        }
        Command::Custom { path, template_path, on_fail_only, markdown, blockkit: _, shared } => {
            let report = parser::parse_ctrf_file(&path)?;
            let options = shared.to_options(on_fail_only, false);

            let template_content = fs::read_to_string(&template_path).map_err(|source| {
                slack_ctrf::SlackCtrfError::TemplateRead { path: template_path, source }
            })?;

            if markdown {
                reporter::send_custom_markdown_template(&report, &template_content, &options, true)
            } else {
                reporter::send_custom_blockkit_template(&report, &template_content, &options, true)
            }
        }
    }
}
