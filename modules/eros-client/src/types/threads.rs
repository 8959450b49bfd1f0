use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadsProfile {
    pub username: String,
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub biography: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    pub followers: Option<i64>,
    #[serde(default)]
    pub bio_links: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadsAuthor {
    pub username: String,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadsMedia {
    pub url: String,
    #[serde(default)]
    pub is_video: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadsPost {
    pub id: String,
    /// Short code used in the public URL.
    pub code: Option<String>,
    pub caption: Option<String>,
    pub author: Option<ThreadsAuthor>,
    #[serde(default)]
    pub media: Vec<ThreadsMedia>,
    pub like_count: Option<i64>,
    pub reply_count: Option<i64>,
    pub taken_at: Option<i64>,
}

impl ThreadsPost {
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        super::from_unix(self.taken_at)
    }
}
