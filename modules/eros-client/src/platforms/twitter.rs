use crate::client::Eros;
use crate::endpoint::{Endpoint, Platform, Resource};
use crate::error::Result;
use crate::types::twitter::{TwitterPost, TwitterTimeline, TwitterUser};

const USER: Endpoint = Endpoint::new(Platform::Twitter, Resource::User);
const POST: Endpoint = Endpoint::new(Platform::Twitter, Resource::Post);
const FEED: Endpoint = Endpoint::new(Platform::Twitter, Resource::Feed);

/// X/Twitter lookups.
#[derive(Debug, Clone)]
pub struct Twitter {
    client: Eros,
}

impl Twitter {
    pub fn new(client: &Eros) -> Self {
        Self {
            client: client.clone(),
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<TwitterUser> {
        self.client.fetch(&USER, &[("username", username)]).await
    }

    pub async fn get_post(&self, url: &str) -> Result<TwitterPost> {
        self.client.fetch(&POST, &[("url", url)]).await
    }

    pub async fn get_feed(&self, username: &str) -> Result<TwitterTimeline> {
        self.client.fetch(&FEED, &[("username", username)]).await
    }
}
