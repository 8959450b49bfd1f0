use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeChannel {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub avatar_url: Option<String>,
    pub subscribers: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeVideo {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub view_count: Option<i64>,
    pub duration_seconds: Option<u32>,
    /// As rendered by YouTube, e.g. "3 days ago".
    pub published: Option<String>,
}

/// Latest uploads returned by `youtube/feed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeChannelVideos {
    pub channel: Option<YouTubeChannel>,
    pub videos: Vec<YouTubeVideo>,
}
