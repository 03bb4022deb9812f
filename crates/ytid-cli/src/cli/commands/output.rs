//! Rendering of extraction results for stdout.

use anyhow::Result;
use ytid_core::config::OutputFormat;
use ytid_core::{LinkPolicy, YoutubeIds};

/// Placeholder printed in text mode when a link has no playlist.
const NO_PLAYLIST: &str = "-";

/// One output line for `ids` (no trailing newline).
pub fn format_ids(ids: &YoutubeIds, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "{}\t{}",
            ids.video_id,
            ids.playlist_id.as_deref().unwrap_or(NO_PLAYLIST)
        ),
        OutputFormat::Json => serde_json::to_string(ids)?,
    })
}

/// Extracts `url` and prints the result to stdout, or `<label>: <error>` to stderr.
///
/// Returns whether extraction succeeded; only rendering failures are errors.
pub fn emit(policy: &LinkPolicy, format: OutputFormat, label: &str, url: &str) -> Result<bool> {
    match policy.extract(url) {
        Ok(ids) => {
            println!("{}", format_ids(&ids, format)?);
            Ok(true)
        }
        Err(err) => {
            tracing::debug!(%url, %err, "link rejected");
            eprintln!("{label}: {err}");
            Ok(false)
        }
    }
}
