//! CLI for the harfile HAR writer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use harfile_core::config;
use std::path::PathBuf;

use commands::{run_bench, run_config, run_write, WriteOptions};

/// Top-level CLI for harfile.
#[derive(Debug, Parser)]
#[command(name = "harfile")]
#[command(about = "harfile: stream HTTP transactions into HAR 1.2 documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Stream newline-delimited JSON entries into a HAR document.
    Write {
        /// File with one JSON entry per line, or `-` for stdin.
        input: PathBuf,

        /// Output HAR path (default: stdout).
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Top-level `log.comment` (overrides config).
        #[arg(long)]
        comment: Option<String>,

        /// Browser name written to `log.browser` (overrides config).
        #[arg(long, requires = "browser_version")]
        browser_name: Option<String>,

        /// Browser version written to `log.browser`.
        #[arg(long, requires = "browser_name")]
        browser_version: Option<String>,
    },

    /// Measure serialization throughput for a JSON array of entries.
    Bench {
        /// Path to a JSON file holding an array of entries.
        path: PathBuf,

        /// Number of complete documents to write.
        #[arg(long, default_value = "10", value_name = "N")]
        iterations: usize,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Write {
                input,
                output,
                comment,
                browser_name,
                browser_version,
            } => {
                let opts = WriteOptions {
                    input,
                    output,
                    comment,
                    browser: browser_name.zip(browser_version),
                };
                run_write(&cfg, &opts)?;
            }
            CliCommand::Bench { path, iterations } => run_bench(&path, iterations)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
