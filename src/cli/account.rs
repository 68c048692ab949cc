//! Account command implementations

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output::formatters::count_noun;
use crate::output::table::{AccountRow, rows};
use crate::output::{json, table};
use crate::preflight;

/// Run the accounts command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let accounts = preflight::get_organization_accounts(&ctx.organizations).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&accounts)?),
        OutputFormat::Table => {
            let display: Vec<AccountRow> = rows(&accounts);
            println!("{}", table::format_table(&display));
        }
        OutputFormat::Pretty => {
            let display: Vec<AccountRow> = rows(&accounts);
            println!("{}\n", count_noun(accounts.len(), "account").bold());
            println!("{}", table::format_table(&display));
            if accounts.len() > 1 {
                println!(
                    "\n{} Landing zone deployment requires the management account to be the only account",
                    "⚠".yellow()
                );
            }
        }
    }

    Ok(())
}

/// Run the management-account command
pub async fn management_account(opts: &GlobalOptions, email: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let account_id = preflight::get_management_account_id(&ctx.organizations, email).await?;

    match ctx.format {
        OutputFormat::Json => {
            let data = serde_json::json!({ "email": email, "account_id": account_id });
            println!("{}", json::format_json(&data)?);
        }
        OutputFormat::Table => println!("{}", account_id),
        OutputFormat::Pretty => {
            println!("{} {} → {}", "✓".green(), email, account_id.bold());
        }
    }

    Ok(())
}
