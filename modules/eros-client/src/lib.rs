pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod platforms;
pub mod types;

pub use client::Eros;
pub use config::{ErosConfig, DEFAULT_BASE_URL};
pub use endpoint::{Endpoint, Platform, Resource};
pub use error::{ErosError, Result};
pub use platforms::{Instagram, Pinterest, Threads, TikTok, Twitter, YouTube};
pub use types::instagram::{
    InstagramAuthor, InstagramMedia, InstagramPost, InstagramProfile, InstagramStory,
    InstagramStoryItem, InstagramTimeline,
};
pub use types::pinterest::{
    PinterestFeed, PinterestPinner, PinterestPost, PinterestReverseMatch, PinterestReverseSearch,
    PinterestUser,
};
pub use types::threads::{ThreadsAuthor, ThreadsMedia, ThreadsPost, ThreadsProfile};
pub use types::tiktok::{TikTokAuthor, TikTokFeed, TikTokPost, TikTokStatistics, TikTokUser, TikTokVideo};
pub use types::twitter::{TwitterAuthor, TwitterMedia, TwitterPost, TwitterTimeline, TwitterUser};
pub use types::youtube::{YouTubeChannel, YouTubeChannelVideos, YouTubeVideo};
