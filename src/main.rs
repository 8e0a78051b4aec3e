use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use statepages::cli::{Cli, Command};
use statepages::config::Config;
use statepages::{Catalog, Generator, RunMode};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("statepages starting");

    match cli.command {
        Command::Generate { slug, preview } => {
            let generator = Generator::load(&config)?;
            let mode = if preview { RunMode::Preview } else { RunMode::Write };
            let outcomes = generator.run(slug.as_deref(), mode)?;

            for outcome in &outcomes {
                match &outcome.path {
                    Some(path) => println!(
                        "{} {} ({} bytes)",
                        "✓".green(),
                        path.display().to_string().cyan(),
                        outcome.bytes
                    ),
                    None => println!(
                        "{} {}.html ({} bytes)",
                        "→".yellow(),
                        outcome.slug.cyan(),
                        outcome.bytes
                    ),
                }
            }

            let verb = if preview { "Previewed" } else { "Generated" };
            println!("{} {} page(s)", verb, outcomes.len());
        }
        Command::List => {
            let catalog = Catalog::load(&config.catalog_path)?;
            if catalog.is_empty() {
                println!("Catalog is empty");
            } else {
                for slug in catalog.slugs() {
                    println!("{}", slug);
                }
            }
        }
    }

    Ok(())
}
