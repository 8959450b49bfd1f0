use crate::client::Eros;
use crate::endpoint::{Endpoint, Platform, Resource};
use crate::error::Result;
use crate::types::youtube::YouTubeChannelVideos;

const FEED: Endpoint = Endpoint::new(Platform::YouTube, Resource::Feed);

#[derive(Debug, Clone)]
pub struct YouTube {
    client: Eros,
}

impl YouTube {
    pub fn new(client: &Eros) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Fetch the latest uploads of a channel. `user` is a handle or channel id.
    pub async fn get_feed(&self, user: &str) -> Result<YouTubeChannelVideos> {
        self.client.fetch(&FEED, &[("snowflake", user)]).await
    }
}
