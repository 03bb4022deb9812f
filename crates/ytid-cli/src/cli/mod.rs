//! CLI for ytid.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ytid_core::config::{self, OutputFormat};

use commands::{run_batch, run_extract};

/// Top-level CLI for ytid.
#[derive(Debug, Parser)]
#[command(name = "ytid")]
#[command(about = "ytid: extract YouTube video and playlist IDs from links", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/ytid/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract IDs from one or more links.
    Extract {
        /// YouTube links (watch, youtu.be, shorts, embed, live).
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print one JSON object per link instead of tab-separated text.
        #[arg(long)]
        json: bool,
    },

    /// Extract IDs from a file with one link per line (`#` comments and blank lines skipped).
    Batch {
        /// Path to the link list.
        path: PathBuf,
        /// Print one JSON object per link instead of tab-separated text.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match cli.config.as_deref() {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let policy = cfg.link_policy();

        match cli.command {
            CliCommand::Extract { urls, json } => {
                run_extract(&policy, output_format(json, cfg.output), &urls)?
            }
            CliCommand::Batch { path, json } => {
                run_batch(&policy, output_format(json, cfg.output), &path)?
            }
        }

        Ok(())
    }
}

/// `--json` wins over the configured default.
fn output_format(json_flag: bool, configured: OutputFormat) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        configured
    }
}

#[cfg(test)]
mod tests;
