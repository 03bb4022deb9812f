//! `ytid extract <url>...` – extract IDs from links given on the command line.

use anyhow::{bail, Result};
use ytid_core::config::OutputFormat;
use ytid_core::LinkPolicy;

use super::output::emit;

pub fn run_extract(policy: &LinkPolicy, format: OutputFormat, urls: &[String]) -> Result<()> {
    let mut failed = 0usize;
    for url in urls {
        if !emit(policy, format, url, url)? {
            failed += 1;
        }
    }
    tracing::info!(total = urls.len(), failed, "extract finished");
    if failed > 0 {
        bail!("{} of {} links had no extractable video ID", failed, urls.len());
    }
    Ok(())
}
