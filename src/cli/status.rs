//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::resolve_credentials;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "lzpreflight Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }

    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!(
                "\nRun {} to create a configuration file.",
                "lzpreflight init".cyan()
            );
            return Ok(());
        }
    };
    opts.apply(&mut config);

    println!();
    println!("{} Management region: {}", "✓".green(), config.management_region);
    println!("{} Workload region: {}", "✓".green(), config.workload_region());
    println!("{} Caller identifier: {}", "✓".green(), config.caller_identifier());

    let resolved = resolve_credentials(
        config.credentials.as_ref(),
        config.profile.as_deref(),
        &config.management_region,
    )
    .await;
    match resolved {
        Ok(credentials) => {
            let source = match (&config.credentials, &config.profile) {
                (Some(_), _) => "config file".to_string(),
                (None, Some(profile)) => format!("profile {}", profile),
                (None, None) => "AWS default provider chain".to_string(),
            };
            println!(
                "{} Credentials: {} (from {})",
                "✓".green(),
                credentials.access_key_id,
                source
            );
            if credentials.session_token.is_some() {
                println!("  {} session token present", "○".dimmed());
            }
        }
        Err(_) => {
            println!("{} Credentials not configured", "✗".red());
            println!("  → Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY, or pass --profile");
        }
    }

    // Endpoint overrides (only show if custom)
    if let Some(endpoint) = &config.organizations_endpoint {
        println!("{} Custom Organizations endpoint: {}", "○".dimmed(), endpoint.cyan());
    }
    if let Some(endpoint) = &config.identity_center_endpoint {
        println!("{} Custom Identity Center endpoint: {}", "○".dimmed(), endpoint.cyan());
    }

    println!(
        "{} Retry: {} attempts, {}ms base delay, {}ms max delay",
        "○".dimmed(),
        config.retry.max_attempts,
        config.retry.base_delay_ms,
        config.retry.max_delay_ms
    );
    println!("{} Listing cap: {} items", "○".dimmed(), config.max_items);
    println!();

    Ok(())
}
