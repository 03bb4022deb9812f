pub mod config;
pub mod logging;

pub mod youtube_link;

pub use youtube_link::{extract_youtube_id, ExtractError, LinkPolicy, YoutubeIds};
