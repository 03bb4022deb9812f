//! Which hosts count as YouTube, and how strictly video IDs are checked.

use url::{ParseError, Url};

use super::error::ExtractError;
use super::path::video_id_from_path;
use super::YoutubeIds;

/// Hosts accepted by default. Subdomains (`www.`, `m.`, `music.`) match too.
const DEFAULT_HOSTS: &[&str] = &["youtube.com", "youtu.be", "youtube-nocookie.com"];

/// Host whose first path segment is the video ID.
const SHORT_HOST: &str = "youtu.be";

/// Schemes a YouTube link may carry.
const WEB_SCHEMES: &[&str] = &["http", "https"];

/// Length of a canonical YouTube video ID.
const VIDEO_ID_LEN: usize = 11;

/// Extraction rules: accepted hosts and optional strict ID check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPolicy {
    hosts: Vec<String>,
    strict_video_id: bool,
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self {
            hosts: DEFAULT_HOSTS.iter().map(|h| h.to_string()).collect(),
            strict_video_id: false,
        }
    }
}

impl LinkPolicy {
    /// Default hosts plus `extra_hosts` (case-insensitive, leading dots ignored).
    pub fn new<I, S>(extra_hosts: I, strict_video_id: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut policy = Self {
            strict_video_id,
            ..Self::default()
        };
        for host in extra_hosts {
            let host = host.as_ref().trim().trim_start_matches('.').to_ascii_lowercase();
            if !host.is_empty() && !policy.hosts.contains(&host) {
                policy.hosts.push(host);
            }
        }
        policy
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn strict_video_id(&self) -> bool {
        self.strict_video_id
    }

    /// True if `host` is an accepted host or a subdomain of one.
    ///
    /// A fully qualified host (`www.youtube.com.`) matches like its bare form.
    pub fn accepts_host(&self, host: &str) -> bool {
        let host = bare_host(host).to_ascii_lowercase();
        self.hosts.iter().any(|h| host_matches(&host, h))
    }

    /// Extracts the video ID (`v`) and optional playlist ID (`list`) from `url`.
    ///
    /// Query parameters are looked up by name, so order does not matter. Empty
    /// values count as absent. When `v` is missing the ID is taken from the
    /// path (`youtu.be/<id>`, `/shorts/<id>`, `/embed/<id>`, ...).
    pub fn extract(&self, url: &str) -> Result<YoutubeIds, ExtractError> {
        let parsed = parse_link(url)?;

        if !WEB_SCHEMES.contains(&parsed.scheme()) {
            return Err(ExtractError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        let host = parsed.host_str().unwrap_or_default();
        if !self.accepts_host(host) {
            return Err(ExtractError::UnsupportedHost(host.to_string()));
        }
        let short_host = host_matches(&bare_host(host).to_ascii_lowercase(), SHORT_HOST);

        let video_id = query_value(&parsed, "v")
            .or_else(|| video_id_from_path(&parsed, short_host))
            .filter(|id| !id.is_empty())
            .ok_or(ExtractError::MissingVideoId)?;

        if self.strict_video_id && !is_canonical_video_id(&video_id) {
            return Err(ExtractError::InvalidVideoId(video_id));
        }

        Ok(YoutubeIds {
            video_id,
            playlist_id: query_value(&parsed, "list"),
        })
    }
}

/// Parses `raw`, assuming `https://` when the scheme is missing.
fn parse_link(raw: &str) -> Result<Url, ExtractError> {
    let trimmed = raw.trim();
    let parsed = match Url::parse(trimmed) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{trimmed}")),
        other => other,
    };
    parsed.map_err(|source| ExtractError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// First non-empty decoded value of query parameter `name`.
fn query_value(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Drops the root-label dot of a fully qualified host.
fn bare_host(host: &str) -> &str {
    host.strip_suffix('.').unwrap_or(host)
}

fn host_matches(host: &str, accepted: &str) -> bool {
    host == accepted
        || host
            .strip_suffix(accepted)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn is_canonical_video_id(id: &str) -> bool {
    id.len() == VIDEO_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
