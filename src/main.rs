mod bootstrap;
mod cli;
mod download;
mod install;
mod locations;
mod platform;
mod registry;
mod remove;
mod switch;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use locations::Locations;

const RELEASE_HISTORY_URL: &str = "https://go.dev/doc/devel/release";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli)?;

    match cli.command {
        Commands::Version => {
            println!("gover v{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        Commands::Releases => {
            println!("Go release history: {}", RELEASE_HISTORY_URL);
            return Ok(());
        }

        Commands::Install { version } => {
            let locations = Locations::resolve()?;
            install::install(&version, &locations).await?;
            println!(
                "go{} installed. Run `gover set {}` to make it the default.",
                version, version
            );
        }

        Commands::Get { version } => {
            let locations = Locations::resolve()?;
            install::install(&version, &locations).await?;
            switch::set_default(&version, &locations)?;
            println!("go{} installed and set as the default go version.", version);
        }

        Commands::List => {
            let locations = Locations::resolve()?;
            let versions = registry::installed_versions(&locations)?;
            println!("Installed go versions:");
            for version in versions {
                println!("{}", version);
            }
        }

        Commands::Set { version } => {
            let locations = Locations::resolve()?;
            switch::set_default(&version, &locations)?;
            println!("Default go version set to {}.", version);
        }

        Commands::Remove { version } => {
            let locations = Locations::resolve()?;
            remove::remove(&version, &locations)?;
            println!("go{} removed.", version);
        }
    }

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if cli.quiet {
        "error"
    } else if cli.verbose == 0 {
        "warn"
    } else if cli.verbose == 1 {
        "info"
    } else {
        "debug"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}
