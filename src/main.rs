use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use auto_milestone::boundary::BoundaryWarning;
use auto_milestone::cli::{run_assign_workflow, AssignWorkflowArgs, WorkflowResult};
use auto_milestone::config::{self, parse_boolean_input};
use auto_milestone::domain::EventPayload;
use auto_milestone::tracker::github::DEFAULT_API_URL;
use auto_milestone::tracker::{GitHubTracker, Repository};
use auto_milestone::ui;

#[derive(clap::Parser)]
#[command(
    name = "auto-milestone",
    version,
    about = "Assign the highest versioned open milestone to an issue or pull request"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        env = "INPUT_GITHUB-TOKEN",
        hide_env_values = true,
        help = "Token used to call the GitHub API"
    )]
    github_token: Option<String>,

    #[arg(long, env = "INPUT_VERSION-PREFIX", help = "Prefix of version milestone titles")]
    version_prefix: Option<String>,

    #[arg(
        long,
        env = "INPUT_VERSION-SEPARATOR",
        help = "Separator between version components"
    )]
    version_separator: Option<String>,

    #[arg(
        long,
        env = "INPUT_OVERWRITE",
        help = "Replace an existing milestone (true | false)"
    )]
    overwrite: Option<String>,

    #[arg(long, env = "GITHUB_REPOSITORY", help = "Repository as owner/repo")]
    repository: Option<String>,

    #[arg(long, env = "GITHUB_EVENT_PATH", help = "Path of the webhook event payload")]
    event_path: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, help = "GitHub API base URL")]
    api_url: String,

    #[arg(long, help = "Select the milestone without assigning it")]
    dry_run: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::set_failed(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    let overwrite = args
        .overwrite
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(|value| parse_boolean_input("overwrite", value))
        .transpose()?;

    let config = config::load_config(args.config.as_deref())?.with_overrides(
        args.version_prefix,
        args.version_separator,
        overwrite,
    );
    tracing::debug!(?config, "resolved configuration");

    let event_path = args
        .event_path
        .ok_or_else(|| anyhow!("GITHUB_EVENT_PATH is not set; pass --event-path"))?;
    let target = EventPayload::from_path(&event_path)?.target()?;

    let token = args
        .github_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("Input required and not supplied: github-token"))?;
    let repository = args
        .repository
        .ok_or_else(|| anyhow!("GITHUB_REPOSITORY is not set; pass --repository"))?;
    let repository = Repository::parse(&repository)?;
    let tracker = GitHubTracker::new(&args.api_url, repository, &token)?;

    ui::display_status(&format!(
        "Selecting milestone for {} #{} in {}",
        target.kind,
        target.number,
        tracker.repository()
    ));

    let workflow_args = AssignWorkflowArgs {
        dry_run: args.dry_run,
    };
    let result = run_assign_workflow(&tracker, &target, &config, &workflow_args)?;

    match &result {
        WorkflowResult::Skipped { existing } => {
            ui::display_boundary_warning(&BoundaryWarning::MilestoneExists {
                kind: target.kind,
                number: target.number,
                title: existing.title.clone(),
            });
        }
        WorkflowResult::Planned { milestone } => {
            ui::display_selected_milestone(milestone.number, &milestone.title, target.number);
            ui::display_status("Dry run: milestone not assigned");
        }
        WorkflowResult::Assigned { milestone } => {
            ui::display_selected_milestone(milestone.number, &milestone.title, target.number);
            ui::display_success(&format!(
                "Assigned milestone '{}' to {} #{}",
                milestone.title, target.kind, target.number
            ));
        }
    }

    if let Some(milestone) = result.output_milestone() {
        ui::set_output("milestone-number", &milestone.number.to_string())?;
        ui::set_output("milestone-title", &milestone.title)?;
    }

    Ok(())
}
