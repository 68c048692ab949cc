//! Rendering of validation reports

use colored::Colorize;
use tabled::Tabled;

use super::formatters::count_noun;
use crate::preflight::{CheckOutcome, CheckStatus, FeatureChange, ValidationReport};

/// Check outcome for table display
#[derive(Tabled)]
pub struct CheckRow {
    #[tabled(rename = "CHECK")]
    pub check: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

fn status_label(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Passed => "passed",
        CheckStatus::Failed => "failed",
        CheckStatus::Skipped => "skipped",
        CheckStatus::Absent => "absent",
    }
}

impl From<&CheckOutcome> for CheckRow {
    fn from(outcome: &CheckOutcome) -> Self {
        let detail = match outcome.status {
            CheckStatus::Absent => "No organization exists yet".to_string(),
            CheckStatus::Skipped => "Requires an existing organization".to_string(),
            _ => outcome.diagnostic.clone().unwrap_or_default(),
        };
        Self {
            check: outcome.check.description().to_string(),
            status: status_label(outcome.status).to_string(),
            detail,
        }
    }
}

/// Render one outcome as a checklist line.
fn checklist_line(outcome: &CheckOutcome) -> String {
    let description = outcome.check.description();
    match outcome.status {
        CheckStatus::Passed => format!("{} {}", "✓".green(), description),
        CheckStatus::Failed => format!(
            "{} {}\n  → {}",
            "✗".red(),
            description,
            outcome.diagnostic.as_deref().unwrap_or_default()
        ),
        CheckStatus::Skipped => format!(
            "{} {} {}",
            "○".dimmed(),
            description,
            "(skipped)".dimmed()
        ),
        CheckStatus::Absent => format!(
            "{} {} {}",
            "○".dimmed(),
            description,
            "(no organization yet)".dimmed()
        ),
    }
}

/// Human-oriented checklist for a report.
pub fn format_checklist(report: &ValidationReport) -> String {
    let mut lines: Vec<String> = report.outcomes().iter().map(checklist_line).collect();

    lines.push(String::new());
    if report.is_compatible() {
        lines.push(format!(
            "{}",
            "Organization is ready for a landing zone deployment.".green().bold()
        ));
    } else {
        lines.push(format!(
            "{}",
            format!("Found {}.", count_noun(report.issue_count(), "issue"))
                .red()
                .bold()
        ));
    }

    lines.join("\n")
}

/// One-line summary of what the feature enabler did.
pub fn format_feature_change(change: FeatureChange) -> String {
    match change {
        FeatureChange::AlreadyEnabled => {
            format!("{} All features already enabled", "✓".green())
        }
        FeatureChange::Enabled => format!(
            "{} Requested all-features upgrade (member accounts must accept the handshake)",
            "⚠".yellow()
        ),
        FeatureChange::NoOrganization => format!(
            "{} No organization to upgrade; it will be created with all features",
            "○".dimmed()
        ),
    }
}
