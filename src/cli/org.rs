//! Organization structure command implementations

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output::formatters::count_noun;
use crate::output::table::{OrganizationalUnitRow, RootRow, ServiceRow, rows};
use crate::output::{json, table};
use crate::preflight;

/// Run the root command
pub async fn root(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let root = preflight::get_organizations_root(&ctx.organizations).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&root)?),
        OutputFormat::Table => println!("{}", table::format_table(&[RootRow::from(&root)])),
        OutputFormat::Pretty => {
            println!("{} {}", "Root:".bold(), root.id.cyan());
            println!("  Name: {}", root.name);
            if let Some(arn) = &root.arn {
                println!("  ARN:  {}", arn.dimmed());
            }
        }
    }

    Ok(())
}

/// Run the ous command
pub async fn organizational_units(opts: &GlobalOptions, parent: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let units = preflight::get_organizational_units_for_root(&ctx.organizations, parent).await?;
    let display: Vec<OrganizationalUnitRow> = rows(&units);

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&units)?),
        OutputFormat::Table => println!("{}", table::format_table(&display)),
        OutputFormat::Pretty => {
            println!("{}\n", count_noun(units.len(), "organizational unit").bold());
            println!("{}", table::format_table(&display));
        }
    }

    Ok(())
}

/// Heading for the pretty services listing, pluralizing the head noun.
fn services_heading(count: usize) -> String {
    format!("{} with trusted access", count_noun(count, "service"))
}

/// Run the services command
pub async fn services(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let services = preflight::get_enabled_services(&ctx.organizations).await?;
    let display: Vec<ServiceRow> = rows(&services);

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&services)?),
        OutputFormat::Table => println!("{}", table::format_table(&display)),
        OutputFormat::Pretty => {
            println!("{}\n", services_heading(services.len()).bold());
            println!("{}", table::format_table(&display));
        }
    }

    Ok(())
}
