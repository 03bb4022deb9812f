//! YouTube link parsing.
//!
//! Extracts the video ID and optional playlist ID from a pasted link. Pure:
//! no I/O and no logging, so it is safe to call from any thread.

mod error;
mod path;
mod policy;

use serde::Serialize;

pub use error::ExtractError;
pub use path::video_id_from_path;
pub use policy::LinkPolicy;

/// Video ID plus optional playlist ID taken from one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YoutubeIds {
    /// Value of the `v` parameter (or the path ID for short/embed links).
    pub video_id: String,
    /// Value of the `list` parameter; `None` when absent, never empty.
    pub playlist_id: Option<String>,
}

impl YoutubeIds {
    pub fn into_pair(self) -> (String, Option<String>) {
        (self.video_id, self.playlist_id)
    }
}

/// Extracts `(video_id, playlist_id)` from `url` using the default [`LinkPolicy`].
///
/// # Examples
///
/// - `https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL12345` → `("dQw4w9WgXcQ", Some("PL12345"))`
/// - `https://www.youtube.com/watch?v=dQw4w9WgXcQ` → `("dQw4w9WgXcQ", None)`
pub fn extract_youtube_id(url: &str) -> Result<YoutubeIds, ExtractError> {
    LinkPolicy::default().extract(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATCH: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn video_and_playlist() {
        let ids = extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL12345")
            .unwrap();
        assert_eq!(ids.video_id, "dQw4w9WgXcQ");
        assert_eq!(ids.playlist_id.as_deref(), Some("PL12345"));
    }

    #[test]
    fn video_only() {
        let (vid, playlist) = extract_youtube_id(WATCH).unwrap().into_pair();
        assert_eq!(vid, "dQw4w9WgXcQ");
        assert!(playlist.is_none());
    }

    #[test]
    fn parameter_order_irrelevant() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?list=PL12345&v=dQw4w9WgXcQ").unwrap(),
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL12345").unwrap()
        );
    }

    #[test]
    fn deterministic() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL12345&index=3";
        assert_eq!(
            extract_youtube_id(url).unwrap(),
            extract_youtube_id(url).unwrap()
        );
    }

    #[test]
    fn empty_v_is_missing() {
        assert!(matches!(
            extract_youtube_id("https://www.youtube.com/watch?v=&list=PL12345"),
            Err(ExtractError::MissingVideoId)
        ));
    }

    #[test]
    fn empty_list_is_none() {
        let ids = extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=").unwrap();
        assert_eq!(ids.playlist_id, None);
    }

    #[test]
    fn first_non_empty_duplicate_wins() {
        let ids =
            extract_youtube_id("https://www.youtube.com/watch?v=&v=dQw4w9WgXcQ&v=other").unwrap();
        assert_eq!(ids.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn playlist_page_without_video() {
        assert!(matches!(
            extract_youtube_id("https://www.youtube.com/playlist?list=PL12345"),
            Err(ExtractError::MissingVideoId)
        ));
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(
            extract_youtube_id("not a url"),
            Err(ExtractError::InvalidUrl { .. })
        ));
        assert!(matches!(
            extract_youtube_id(""),
            Err(ExtractError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn foreign_host() {
        match extract_youtube_id("https://example.com/watch?v=dQw4w9WgXcQ") {
            Err(ExtractError::UnsupportedHost(host)) => assert_eq!(host, "example.com"),
            other => panic!("expected UnsupportedHost, got {other:?}"),
        }
    }

    #[test]
    fn short_and_path_forms_keep_playlist() {
        let ids = extract_youtube_id("https://youtu.be/dQw4w9WgXcQ?list=PL12345").unwrap();
        assert_eq!(ids.video_id, "dQw4w9WgXcQ");
        assert_eq!(ids.playlist_id.as_deref(), Some("PL12345"));

        for raw in [
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/live/dQw4w9WgXcQ?feature=share",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
        ] {
            let ids = extract_youtube_id(raw).unwrap();
            assert_eq!(ids.video_id, "dQw4w9WgXcQ", "{raw}");
            assert!(ids.playlist_id.is_none(), "{raw}");
        }
    }

    #[test]
    fn query_v_beats_path() {
        let ids = extract_youtube_id("https://www.youtube.com/embed/pathId00000?v=dQw4w9WgXcQ")
            .unwrap();
        assert_eq!(ids.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn percent_encoded_values_decoded() {
        let ids = extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL%2D1")
            .unwrap();
        assert_eq!(ids.playlist_id.as_deref(), Some("PL-1"));
    }

    #[test]
    fn encoded_id_same_across_link_forms() {
        let strict = LinkPolicy::new(Vec::<String>::new(), true);
        for raw in [
            "https://www.youtube.com/watch?v=dQw4w9WgXc%51",
            "https://youtu.be/dQw4w9WgXc%51",
            "https://www.youtube.com/shorts/dQw4w9WgXc%51",
        ] {
            assert_eq!(strict.extract(raw).unwrap().video_id, "dQw4w9WgXcQ", "{raw}");
        }
    }

    #[test]
    fn surrounding_whitespace_and_fragment() {
        let ids = extract_youtube_id("  https://music.youtube.com/watch?v=dQw4w9WgXcQ#t=10  ")
            .unwrap();
        assert_eq!(ids.video_id, "dQw4w9WgXcQ");
        assert!(ids.playlist_id.is_none());
    }

    #[test]
    fn serializes_absent_playlist_as_null() {
        let json = serde_json::to_string(&extract_youtube_id(WATCH).unwrap()).unwrap();
        assert_eq!(json, r#"{"video_id":"dQw4w9WgXcQ","playlist_id":null}"#);
    }
}
