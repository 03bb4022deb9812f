use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::youtube_link::LinkPolicy;

/// How the CLI prints extraction results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<video_id>\t<playlist_id or ->` per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Global configuration loaded from `~/.config/ytid/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YtidConfig {
    /// Hosts accepted in addition to youtube.com, youtu.be and youtube-nocookie.com
    /// (e.g. a self-hosted front-end). Subdomains match as well.
    pub extra_hosts: Vec<String>,
    /// Require video IDs to be exactly 11 characters of `[A-Za-z0-9_-]`.
    pub strict_video_id: bool,
    /// Default output format; `--json` on the command line overrides it.
    pub output: OutputFormat,
}

impl YtidConfig {
    pub fn link_policy(&self) -> LinkPolicy {
        LinkPolicy::new(&self.extra_hosts, self.strict_video_id)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytid")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YtidConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<YtidConfig> {
    if !path.exists() {
        let default_cfg = YtidConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: YtidConfig = toml::from_str(&data)?;
    Ok(cfg)
}
