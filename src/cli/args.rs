//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate a tag index page from Markdown front matter
#[derive(Parser, Debug)]
#[command(name = "tagdex")]
#[command(about = "Generate a tag index page from Markdown front matter")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a docs tree and generate the tag index page
    Build {
        /// Path to the docs directory to scan
        docs_dir: PathBuf,

        /// Output folder (relative paths land next to the docs directory)
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// Output filename
        #[arg(long)]
        filename: Option<String>,

        /// Custom template file
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Glob patterns to exclude (can be repeated)
        #[arg(long)]
        exclude: Vec<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (markdown, json)
        #[arg(long)]
        format: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}
