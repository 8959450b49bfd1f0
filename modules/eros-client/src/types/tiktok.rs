use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TikTokUser {
    pub username: String,
    pub id: Option<String>,
    pub nickname: Option<String>,
    /// Profile bio.
    pub signature: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub private: bool,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub likes: Option<i64>,
    pub videos: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TikTokAuthor {
    pub username: String,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TikTokVideo {
    pub url: String,
    pub cover_url: Option<String>,
    pub duration: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TikTokStatistics {
    pub plays: Option<i64>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub shares: Option<i64>,
}

/// A single post. Slideshow posts carry `images` instead of a `video`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TikTokPost {
    pub id: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub author: Option<TikTokAuthor>,
    pub video: Option<TikTokVideo>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub statistics: TikTokStatistics,
    pub created_at: Option<i64>,
}

impl TikTokPost {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        super::from_unix(self.created_at)
    }

    pub fn is_slideshow(&self) -> bool {
        self.video.is_none() && !self.images.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TikTokFeed {
    pub author: Option<TikTokAuthor>,
    pub items: Vec<TikTokPost>,
}
