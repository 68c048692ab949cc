//! Validate command implementation

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::{Error, Result};
use crate::output::report::{CheckRow, format_checklist, format_feature_change};
use crate::output::{json, table};
use crate::preflight::{self, ValidationReport};

/// Spinner shown on stderr while checks run (pretty output only).
fn spinner(format: OutputFormat) -> Option<ProgressBar> {
    if format != OutputFormat::Pretty {
        return None;
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message("Checking organization state...");
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

fn print_report(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => println!("{}", format_checklist(report)),
        OutputFormat::Table => {
            let rows: Vec<CheckRow> = report.outcomes().iter().map(CheckRow::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => println!("{}", json::format_json(report)?),
    }
    Ok(())
}

/// Run the validate command
///
/// Prints the report either way; an incompatible organization is returned
/// as the aggregated validation error.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;

    if ctx.format == OutputFormat::Pretty {
        println!(
            "{} (management region {}, workload region {})\n",
            "Landing zone pre-flight".bold(),
            ctx.config.management_region.cyan(),
            ctx.config.workload_region().cyan()
        );
    }

    let progress = spinner(ctx.format);
    let result = preflight::validate_organization(&ctx.organizations, &ctx.identity_center).await;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    match result {
        Ok(validated) => {
            match ctx.format {
                OutputFormat::Json => println!("{}", json::format_json(&validated)?),
                format => {
                    print_report(&validated.report, format)?;
                    println!("{}", format_feature_change(validated.features));
                }
            }
            Ok(())
        }
        Err(Error::Validation(err)) => {
            print_report(&err.report, ctx.format)?;
            if ctx.format == OutputFormat::Pretty {
                println!();
            }
            Err(Error::Validation(err))
        }
        Err(e) => Err(e),
    }
}
