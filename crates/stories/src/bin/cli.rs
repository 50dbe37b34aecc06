//! Stories CLI - turn user-story markdown into GitHub issues.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use serde::Serialize;

use stories::domain::{
    check_consistency, find_story, issue_draft, load_story, ConfigDomain,
    Discrepancy, SyncDomain,
};
use stories::entities::{IssueDraft, StoriesConfig, StoryRecord};
use stories::errors::StoriesError;
use stories::publish::{DryRunPublisher, GitHubPublisher, IssuePublisher};
use stories::ui;

#[derive(Parser)]
#[command(name = "stories")]
#[command(about = "Create GitHub issues from user story markdown files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root directory
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// User stories directory (overrides configuration)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Target repository as owner/name (overrides configuration)
    #[arg(long, global = true)]
    repo: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print, or create, one issue per user story
    Sync {
        /// Create issues instead of printing what would be created
        #[arg(long)]
        no_dry_run: bool,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List user stories with their labels
    List,

    /// Show a parsed user story and the issue it would produce
    Show {
        /// Story ID (e.g. US-004)
        id: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    record: &'a StoryRecord,
    issue: &'a IssueDraft,
    discrepancies: &'a [Discrepancy],
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let project_path = match cli.project {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let config_domain = ConfigDomain::new(&project_path);
    let mut config = config_domain.load().await?;
    if let Some(dir) = cli.dir {
        config.stories_dir = dir;
    }
    if let Some(repo) = cli.repo {
        config.repository = repo;
    }

    let catalog = Arc::new(config.catalog());
    let domain = SyncDomain::new(
        config.resolve_stories_dir(&project_path),
        config.file_prefix.clone(),
        Arc::clone(&catalog),
    );

    match cli.command {
        Commands::Sync { no_dry_run, yes } => {
            sync(&domain, &config, &config_domain, !no_dry_run, yes).await?;
        }

        Commands::List => {
            let records = domain.load_all().await?;
            if records.is_empty() {
                ui::print_info("No user stories found");
            } else {
                println!("{}", ui::story_table(&records, &catalog));
                println!();
                ui::print_info(&format!("{} story(ies) total", records.len()));
            }
        }

        Commands::Show { id, json } => {
            let path = find_story(domain.stories_dir(), &config.file_prefix, &id).await?;
            let record = load_story(&path).await?;
            let draft = issue_draft(&record, &catalog);
            let discrepancies = check_consistency(&record, &catalog);

            if json {
                let output = ShowOutput {
                    record: &record,
                    issue: &draft,
                    discrepancies: &discrepancies,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output).context("Failed to serialize story")?
                );
            } else {
                ui::display_story_details(
                    &record,
                    &draft.labels,
                    catalog.is_complete(&record.id),
                    &discrepancies,
                    &draft.body,
                );
            }
        }
    }

    Ok(())
}

async fn sync(
    domain: &SyncDomain,
    config: &StoriesConfig,
    config_domain: &ConfigDomain,
    dry_run: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let files = domain.discover().await?;

    let publisher: Box<dyn IssuePublisher> = if dry_run {
        ui::print_dry_run_banner();
        Box::new(DryRunPublisher::new())
    } else {
        match GitHubPublisher::from_config(&config.github, &config.repository) {
            Ok(publisher) => Box::new(publisher),
            Err(StoriesError::IntegrationDisabled) => {
                ui::print_remediation(config_domain.config_path(), &config.github.token_env);
                ui::print_summary(&domain.summarize().await?);
                return Ok(());
            }
            Err(e) => return Err(e).context("Cannot create issues"),
        }
    };

    if publisher.is_live() && !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Create {} issue(s) in {}?",
                files.len(),
                config.repository
            ))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            ui::print_info("Cancelled");
            return Ok(());
        }
    }

    let report = domain.run(publisher.as_ref()).await?;

    println!("Found {} user story files\n", report.stories.len());
    for story in &report.stories {
        ui::print_story_report(story);
    }
    ui::print_summary(&report.summary);

    let failures = report.failures();
    if failures > 0 {
        ui::print_warning(&format!("{failures} issue(s) could not be created"));
    }

    Ok(())
}
