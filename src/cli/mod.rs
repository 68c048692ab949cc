//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod account;
pub mod args;
pub mod context;
pub mod init;
pub mod org;
pub mod status;
pub mod validate;

pub use args::OutputFormat;

/// lzpreflight - Pre-flight checks before deploying a landing zone on AWS Organizations
#[derive(Parser, Debug)]
#[command(name = "lzpreflight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "LZPREFLIGHT_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "LZPREFLIGHT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "LZPREFLIGHT_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Region for AWS Organizations calls (default: us-east-1)
    #[arg(
        long,
        global = true,
        env = "LZPREFLIGHT_MANAGEMENT_REGION",
        hide_env = true
    )]
    pub management_region: Option<String>,

    /// Home (workload) region for IAM Identity Center calls
    #[arg(long, global = true, env = "LZPREFLIGHT_HOME_REGION", hide_env = true)]
    pub region: Option<String>,

    /// Caller identifier appended to the User-Agent
    #[arg(long, global = true, env = "LZPREFLIGHT_SOLUTION_ID", hide_env = true)]
    pub solution_id: Option<String>,

    /// Named AWS profile to take credentials from
    #[arg(long, global = true, env = "LZPREFLIGHT_PROFILE", hide_env = true)]
    pub profile: Option<String>,

    /// Custom Organizations endpoint (development/testing)
    #[arg(
        long,
        global = true,
        env = "LZPREFLIGHT_ORGANIZATIONS_ENDPOINT",
        hide = true
    )]
    pub organizations_endpoint: Option<String>,

    /// Custom Identity Center endpoint (development/testing)
    #[arg(
        long,
        global = true,
        env = "LZPREFLIGHT_IDENTITY_CENTER_ENDPOINT",
        hide = true
    )]
    pub identity_center_endpoint: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the organization can take a landing zone, then enable all features
    Validate,

    /// List accounts in the organization
    Accounts,

    /// Show the organization root
    Root,

    /// List organizational units below the root
    Ous {
        /// List below this root or OU instead of the organization root
        #[arg(long)]
        parent: Option<String>,
    },

    /// List services with trusted access to the organization
    Services,

    /// Find the management account ID by its email address
    ManagementAccount {
        /// Exact (case-sensitive) account email
        #[arg(long)]
        email: String,
    },

    /// Initialize lzpreflight configuration
    Init,

    /// Show configuration status
    Status,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   lzpreflight completion bash > /etc/bash_completion.d/lzpreflight
  zsh:    lzpreflight completion zsh > \"${fpath[1]}/_lzpreflight\"
  fish:   lzpreflight completion fish > ~/.config/fish/completions/lzpreflight.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}
