//! CineVerse CLI
//!
//! Browse trending, top-rated and genre listings of movies and TV shows
//! from TMDB, search the catalog and open title detail pages.

use clap::Parser;
use cineverse::cli::{
    args::{Cli, Commands},
    commands::{open, shell},
};
use cineverse::models::config::{self, Config};
use cineverse::preflight;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config()?;

    match cli.command {
        Commands::Open {
            route,
            mode,
            genre,
            page,
            season,
        } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }

            let options = open::OpenOptions {
                mode,
                genre,
                page,
                season,
            };
            open::execute_open(&config, &route, options).await?;
        }

        Commands::Shell { route } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }

            shell::execute_shell(&config, &route).await?;
        }

        Commands::Check => {
            run_preflight_checks(&config).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("cineverse=debug")
    } else {
        EnvFilter::new("cineverse=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
