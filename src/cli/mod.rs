//! CLI module for Tagdex

mod args;

pub use args::{Args, Command};

use crate::config::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::index::{group_by_tag, Scanner};
use crate::output::PageGenerator;
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Build {
            docs_dir,
            folder,
            filename,
            template,
            exclude,
            config,
            format,
            verbose,
        } => {
            // Load config file if it exists
            let mut cfg = if let Some(config_path) = &config {
                Config::load_or_default(config_path)
            } else {
                Config::load_or_default(Path::new("tagdex.toml"))
            };

            // Merge CLI arguments (CLI takes precedence)
            cfg.merge_cli(folder, filename, template, exclude, format);
            cfg.validate()?;

            if verbose {
                println!("Docs dir: {}", docs_dir.display());
                println!(
                    "Output: {}",
                    cfg.output.resolved_folder(&docs_dir).display()
                );
                println!("Filename: {}", cfg.output.filename);
                println!("Format: {:?}", cfg.output.format);
                if let Some(template) = &cfg.output.template {
                    println!("Template: {}", template.display());
                }
                println!("Exclude: {:?}", cfg.scan.exclude);
            }

            if !docs_dir.exists() {
                return Err(Error::PathNotFound(docs_dir));
            }

            let scanner = Scanner::new(&cfg)?.with_verbose(verbose);

            println!("Scanning {}...", docs_dir.display());
            let scan = scanner.scan(&docs_dir)?;

            println!(
                "Collected metadata from {} pages ({} without front matter)",
                scan.records.len(),
                scan.skipped.len()
            );

            if verbose && !scan.skipped.is_empty() {
                println!("\nFiles without usable front matter ({}):", scan.skipped.len());
                for path in scan.skipped.iter().take(5) {
                    println!("  {}", path.display());
                }
                if scan.skipped.len() > 5 {
                    println!("  ... and {} more", scan.skipped.len() - 5);
                }
            }

            let buckets = group_by_tag(scan.records);

            match cfg.output.format {
                OutputFormat::Markdown => {
                    let generator = PageGenerator::new(&cfg.output, &docs_dir)?;
                    let written = generator.generate(&buckets)?;
                    println!("Tag index written to: {}", written.display());
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&buckets)?;
                    let out_folder = cfg.output.resolved_folder(&docs_dir);
                    std::fs::create_dir_all(&out_folder)?;
                    let written =
                        out_folder.join(Path::new(&cfg.output.filename).with_extension("json"));
                    std::fs::write(&written, json)?;
                    println!("JSON written to: {}", written.display());
                }
            }

            Ok(())
        }

        Command::Version => {
            println!("tagdex {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
