//! `ytid batch <path>` – extract IDs from a file of links, one per line.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use ytid_core::config::OutputFormat;
use ytid_core::LinkPolicy;

use super::output::emit;

/// Non-empty, non-comment lines with their 1-based line numbers.
fn link_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

pub fn run_batch(policy: &LinkPolicy, format: OutputFormat, path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut total = 0usize;
    let mut failed = 0usize;
    for (line_no, url) in link_lines(&content) {
        total += 1;
        if !emit(policy, format, &format!("line {line_no}"), url)? {
            failed += 1;
        }
    }

    tracing::info!(path = %path.display(), total, failed, "batch finished");
    if failed > 0 {
        bail!("{} of {} links in {} had no extractable video ID", failed, total, path.display());
    }
    Ok(())
}
