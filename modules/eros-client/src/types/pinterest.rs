use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinterestUser {
    pub username: String,
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub about: Option<String>,
    pub avatar_url: Option<String>,
    pub website: Option<String>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub pin_count: Option<i64>,
    pub board_count: Option<i64>,
}

/// The account that saved a pin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinterestPinner {
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinterestPost {
    pub id: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    /// Outbound link attached to the pin.
    pub link: Option<String>,
    pub pinner: Option<PinterestPinner>,
    pub repin_count: Option<i64>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinterestFeed {
    pub user: Option<PinterestPinner>,
    pub pins: Vec<PinterestPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinterestReverseMatch {
    pub id: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub domain: Option<String>,
}

/// Result of a reverse image search, best match first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinterestReverseSearch {
    pub results: Vec<PinterestReverseMatch>,
}

impl PinterestReverseSearch {
    pub fn best_match(&self) -> Option<&PinterestReverseMatch> {
        self.results.first()
    }
}
