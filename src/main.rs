//! lzpreflight - Landing zone pre-flight validator for AWS Organizations

use clap::{CommandFactory, Parser};
use log::{LevelFilter, debug};

mod cli;
mod client;
mod config;
mod error;
mod output;
mod preflight;

use cli::Cli;
use cli::Commands;
use cli::args::GlobalOptions;
use error::{Error, Result};

/// Exit code for an organization that failed validation
const EXIT_VALIDATION_FAILED: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        let code = match err {
            Error::Validation(_) => EXIT_VALIDATION_FAILED,
            _ => 1,
        };
        std::process::exit(code);
    }
}

/// `--debug` forces debug output; otherwise RUST_LOG applies, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    debug!("Running {:?}", cli.command);

    match cli.command {
        Commands::Validate => cli::validate::run(&opts).await,
        Commands::Accounts => cli::account::list(&opts).await,
        Commands::Root => cli::org::root(&opts).await,
        Commands::Ous { parent } => cli::org::organizational_units(&opts, parent.as_deref()).await,
        Commands::Services => cli::org::services(&opts).await,
        Commands::ManagementAccount { email } => {
            cli::account::management_account(&opts, &email).await
        }
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts).await,
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "lzpreflight",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Commands::Version => {
            println!("lzpreflight version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
