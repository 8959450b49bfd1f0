use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterUser {
    pub username: String,
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub verified: bool,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub tweet_count: Option<i64>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterAuthor {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterMedia {
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterPost {
    pub id: String,
    pub url: Option<String>,
    pub text: Option<String>,
    pub author: Option<TwitterAuthor>,
    #[serde(default)]
    pub media: Vec<TwitterMedia>,
    pub like_count: Option<i64>,
    pub retweet_count: Option<i64>,
    pub reply_count: Option<i64>,
    pub view_count: Option<i64>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterTimeline {
    pub user: Option<TwitterAuthor>,
    pub tweets: Vec<TwitterPost>,
}
