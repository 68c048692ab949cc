//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for regions and the caller identifier. Credentials are not
/// prompted for; they come from the AWS default provider chain or can be
/// added to the config file by hand.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to lzpreflight!".bold().green());
    println!("Let's set up your landing zone pre-flight configuration.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    opts.apply(&mut config);
    let theme = ColorfulTheme::default();

    config.management_region = Input::with_theme(&theme)
        .with_prompt("AWS Organizations (management) region")
        .default(config.management_region.clone())
        .interact_text()?;

    let home_region: String = Input::with_theme(&theme)
        .with_prompt("Home (workload) region for IAM Identity Center")
        .default(config.workload_region().to_string())
        .interact_text()?;
    config.home_region = (home_region != config.management_region).then_some(home_region);

    let solution_id: String = Input::with_theme(&theme)
        .with_prompt("Solution identifier for the User-Agent (optional)")
        .default(config.solution_id.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    config.solution_id = Some(solution_id.trim().to_string()).filter(|id| !id.is_empty());

    config.validate()?;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    if config.credentials.is_none() {
        println!(
            "{} Credentials come from the AWS default provider chain (environment, profile, SSO or instance role).",
            "○".dimmed()
        );
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "lzpreflight status".cyan());
    println!("  {} - Run the pre-flight checks", "lzpreflight validate".cyan());

    Ok(())
}
