//! Terminal UI helpers for story output.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::domain::{Discrepancy, PublishOutcome, StoryReport, Summary};
use crate::entities::{Catalog, Section, StoryRecord};

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Completion marker shown next to each story
pub fn completion_text(complete: bool) -> &'static str {
    if complete {
        "✅ COMPLETE"
    } else {
        "❌ NOT STARTED"
    }
}

fn completion_colored(complete: bool) -> String {
    if complete {
        completion_text(true).green().to_string()
    } else {
        completion_text(false).yellow().to_string()
    }
}

/// Banner printed before a dry run
pub fn print_dry_run_banner() {
    println!("{}", rule().dimmed());
    println!("{}", "DRY RUN MODE - No issues will be created".bold());
    println!("Run with --no-dry-run to actually create issues");
    println!("{}", rule().dimmed());
    println!();
}

/// Per-story block of a sync run
pub fn print_story_report(report: &StoryReport) {
    println!("{}", rule().dimmed());
    println!("{}: {}", "Story".bold(), report.id.cyan().bold());
    println!("{}: {}", "Title".bold(), report.issue_title);
    println!("{}: {}", "Labels".bold(), report.labels.join(", "));
    println!("{}: {}", "Status".bold(), completion_colored(report.complete));
    println!("{}: {} bytes", "Body length".bold(), report.body_len);

    for discrepancy in &report.discrepancies {
        print_warning(&discrepancy.to_string());
    }

    match &report.outcome {
        PublishOutcome::DryRun => println!("{}", "DRY RUN - Would create issue".dimmed()),
        PublishOutcome::Created { number, url } => {
            print_success(&format!("Created issue #{number} ({url})"));
        }
        PublishOutcome::Failed { reason } => print_error(&format!("Error creating issue: {reason}")),
    }
    println!();
}

/// Closing summary of a run
pub fn print_summary(summary: &Summary) {
    println!();
    println!("{}", rule().dimmed());
    println!("{}", "Summary:".bold());
    println!("- Total stories: {}", summary.total);
    println!("- Completed stories: {}", summary.completed.to_string().green());
    println!("- Not started stories: {}", summary.not_started.to_string().yellow());
    println!("{}", rule().dimmed());
}

/// Explain how to turn on live issue creation
pub fn print_remediation(config_path: &Path, token_env: &str) {
    print_error("GitHub API integration not yet enabled");
    println!("To enable:");
    println!(
        "1. Set \"github\": {{ \"enabled\": true }} in {}",
        config_path.display()
    );
    println!("2. Set the {token_env} environment variable to a token with issue write access");
    println!("3. Run with the --no-dry-run flag");
    println!();
}

/// Table of stories with their labels
pub fn story_table(records: &[StoryRecord], catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Sections").fg(Color::Cyan),
        Cell::new("Labels").fg(Color::Cyan),
    ]);

    for record in records {
        let complete = catalog.is_complete(&record.id);
        let status_color = if complete { Color::Green } else { Color::Yellow };
        let labels = crate::domain::derive_labels(&record.id, catalog);

        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.title),
            Cell::new(completion_text(complete)).fg(status_color),
            Cell::new(format!("{}/{}", record.sections.len(), Section::ALL.len())),
            Cell::new(labels.join(", ")),
        ]);
    }

    table
}

/// Display a parsed story with its derived data
pub fn display_story_details(
    record: &StoryRecord,
    labels: &[String],
    complete: bool,
    discrepancies: &[Discrepancy],
    body: &str,
) {
    println!("{}", "═".repeat(60).dimmed());
    println!(
        "{} {} {}",
        "Story".cyan().bold(),
        record.id.cyan().bold(),
        format!("[{}]", completion_text(complete)).yellow()
    );
    println!("{}", "═".repeat(60).dimmed());
    println!();

    println!("{}: {}", "Title".bold(), record.title);
    println!("{}: {}", "Status".bold(), record.status);
    println!("{}: {}", "Category".bold(), record.category);
    println!("{}: {}", "Effort".bold(), record.effort);
    println!("{}: {}", "Sprint".bold(), record.sprint);
    println!("{}: {}", "Labels".bold(), labels.join(", "));

    let missing: Vec<&str> = Section::ALL
        .iter()
        .filter(|&&s| !record.has_section(s))
        .map(|s| s.heading())
        .collect();
    if !missing.is_empty() {
        println!("{}: {}", "Missing sections".bold(), missing.join(", ").dimmed());
    }

    for discrepancy in discrepancies {
        print_warning(&discrepancy.to_string());
    }

    println!();
    println!("{}", "Issue body".bold().underline());
    if body.is_empty() {
        println!("{}", "(empty)".dimmed());
    } else {
        println!("{body}");
    }
    println!();
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
