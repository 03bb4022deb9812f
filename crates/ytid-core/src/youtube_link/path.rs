//! Video ID extraction from URL path (short links, shorts, embeds).

use percent_encoding::percent_decode_str;
use url::Url;

/// Path prefixes on youtube.com whose next segment is the video ID.
const ID_PREFIXES: &[&str] = &["shorts", "embed", "live", "v"];

/// Extracts the video ID carried in the path rather than the query.
///
/// `short_host` marks a `youtu.be` style host where the first segment is the
/// ID itself. The segment is percent-decoded like query values are. Returns
/// `None` when the path has no such segment or it does not decode to UTF-8.
pub fn video_id_from_path(url: &Url, short_host: bool) -> Option<String> {
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let first = segments.next()?;

    let id = if short_host {
        first
    } else if ID_PREFIXES.contains(&first) {
        segments.next()?
    } else {
        return None;
    };

    percent_decode_str(id)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
