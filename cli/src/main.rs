//! CLI for the ClickUp pull request linker.
//!
//! Runs as a GitHub Action step: inputs come from `INPUT_*` environment
//! variables and the pull request from the event payload at `GITHUB_EVENT_PATH`.

use clap::Parser;
use clickup_pr_linker::config::{DEFAULT_CLICKUP_API_URL, DEFAULT_GITHUB_API_URL};
use clickup_pr_linker::{
    load_pull_request_context, ActionInputs, RunOutcome, RunSummary, Runner, RunnerConfig,
    RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// ClickUp PR Linker - Update ClickUp tasks referenced in a pull request title.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token used to read and update the pull request.
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,

    /// ClickUp personal API token.
    #[arg(long, env = "INPUT_CLICKUP_API_KEY", hide_env_values = true)]
    clickup_api_key: String,

    /// Status applied to every referenced task.
    #[arg(long, env = "INPUT_NEW_CLICKUP_STATUS")]
    new_clickup_status: String,

    /// "yes" to append task links to the pull request description.
    #[arg(long, env = "INPUT_SHOULD_UPDATE_PR_DESCRIPTION", default_value = "no")]
    should_update_pr_description: String,

    /// "yes" to comment on each task with the pull request URL.
    #[arg(long, env = "INPUT_SHOULD_ADD_TASK_COMMENT", default_value = "no")]
    should_add_task_comment: String,

    /// Handlebars template for the task comment.
    #[arg(long, env = "INPUT_CLICKUP_COMMENT_TEMPLATE")]
    clickup_comment_template: Option<String>,

    /// Path to the triggering event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// ClickUp API base URL.
    #[arg(long, env = "CLICKUP_API_URL", default_value = DEFAULT_CLICKUP_API_URL)]
    clickup_api_url: String,

    /// GitHub API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    github_api_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // octocrab and reqwest both pull in rustls; pick the provider explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(RunOutcome::NoReferences) => ExitCode::from(0),
        Ok(RunOutcome::Completed(summary)) => {
            print_summary(&summary);

            if summary.has_failures() {
                for failure in &summary.failures {
                    report_failure(&failure.to_string());
                }
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            report_failure(&e.to_string());
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutcome, RunnerError> {
    let pull_request = load_pull_request_context(&args.event_path)?;

    let inputs = ActionInputs {
        github_token: args.github_token,
        clickup_api_key: args.clickup_api_key,
        new_clickup_status: args.new_clickup_status,
        should_update_pr_description: args.should_update_pr_description,
        should_add_task_comment: args.should_add_task_comment,
        clickup_comment_template: args.clickup_comment_template,
        clickup_api_url: args.clickup_api_url,
        github_api_url: args.github_api_url,
    };

    let runner = Runner::new(RunnerConfig::new(inputs, pull_request)?)?;
    Ok(runner.run().await)
}

/// Emits a GitHub Actions error annotation.
fn report_failure(message: &str) {
    println!("::error::{}", escape_workflow_data(message));
}

/// Escapes a message for use in a workflow command.
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Task references: {}", summary.references_found);
    println!("  Statuses updated: {}", summary.statuses_updated);
    println!("  Comments posted: {}", summary.comments_posted);
    println!("  Comments skipped: {}", summary.comments_skipped);
    println!("  Comments rejected: {}", summary.comments_rejected);
    println!(
        "  Description: {}",
        if summary.description_updated {
            format!("{} task link(s) added", summary.links_added)
        } else {
            "unchanged".to_string()
        }
    );
    println!("  Failures: {}", summary.failures.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_workflow_command_data() {
        assert_eq!(
            escape_workflow_data("100% failed\nsecond line\r"),
            "100%25 failed%0Asecond line%0D"
        );
    }

    #[test]
    fn parses_action_inputs() {
        let args = Args::try_parse_from([
            "clickup-pr-linker",
            "--github-token",
            "ghp_test",
            "--clickup-api-key",
            "pk_test",
            "--new-clickup-status",
            "in review",
            "--should-add-task-comment",
            "yes",
            "--event-path",
            "/tmp/event.json",
        ])
        .unwrap();

        assert_eq!(args.new_clickup_status, "in review");
        assert_eq!(args.should_add_task_comment, "yes");
        assert_eq!(args.clickup_api_url, DEFAULT_CLICKUP_API_URL);
    }
}
