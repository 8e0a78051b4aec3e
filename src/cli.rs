//! CLI argument parsing for statepages

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sp")]
#[command(author, version, about = "Static state-page generator", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate state pages
    Generate {
        /// Generate only this state; all states when absent
        slug: Option<String>,

        /// Compute pages and report sizes without writing files
        #[arg(short, long)]
        preview: bool,
    },

    /// List the slugs in the catalog
    List,
}
