use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile returned by `instagram/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramProfile {
    pub username: String,
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub biography: Option<String>,
    pub avatar_url: Option<String>,
    pub external_url: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_verified: bool,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub post_count: Option<i64>,
}

/// Minimal author block embedded in posts, stories and timelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramAuthor {
    pub username: String,
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramMedia {
    pub url: String,
    #[serde(default)]
    pub is_video: bool,
    pub thumbnail_url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Post returned by `instagram/post`, also the element type of a timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramPost {
    pub id: String,
    pub shortcode: Option<String>,
    pub url: Option<String>,
    pub caption: Option<String>,
    pub author: Option<InstagramAuthor>,
    #[serde(default)]
    pub media: Vec<InstagramMedia>,
    pub like_count: Option<i64>,
    pub comment_count: Option<i64>,
    pub view_count: Option<i64>,
    /// Unix seconds.
    pub taken_at: Option<i64>,
}

impl InstagramPost {
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        super::from_unix(self.taken_at)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramStoryItem {
    pub id: String,
    pub media: InstagramMedia,
    pub taken_at: Option<i64>,
    pub expiring_at: Option<i64>,
}

impl InstagramStoryItem {
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        super::from_unix(self.taken_at)
    }

    pub fn expiring_at(&self) -> Option<DateTime<Utc>> {
        super::from_unix(self.expiring_at)
    }
}

/// Stories returned by `instagram/story`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramStory {
    pub author: Option<InstagramAuthor>,
    pub items: Vec<InstagramStoryItem>,
}

/// Recent posts returned by `instagram/feed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramTimeline {
    pub author: Option<InstagramAuthor>,
    pub posts: Vec<InstagramPost>,
    #[serde(default)]
    pub has_more: bool,
}
