use crate::client::Eros;
use crate::endpoint::{Endpoint, Platform, Resource};
use crate::error::Result;
use crate::types::pinterest::{PinterestFeed, PinterestPost, PinterestReverseSearch, PinterestUser};

const USER: Endpoint = Endpoint::new(Platform::Pinterest, Resource::User);
const POST: Endpoint = Endpoint::new(Platform::Pinterest, Resource::Post);
const FEED: Endpoint = Endpoint::new(Platform::Pinterest, Resource::Feed);
const REVERSE: Endpoint = Endpoint::new(Platform::Pinterest, Resource::Reverse);

#[derive(Debug, Clone)]
pub struct Pinterest {
    client: Eros,
}

impl Pinterest {
    pub fn new(client: &Eros) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Fetch a pin by its URL.
    pub async fn get_post(&self, url: &str) -> Result<PinterestPost> {
        self.client.fetch(&POST, &[("url", url)]).await
    }

    pub async fn get_user(&self, username: &str) -> Result<PinterestUser> {
        self.client.fetch(&USER, &[("username", username)]).await
    }

    /// Reverse image search: find pins visually similar to the image at `url`.
    pub async fn reverse_search(&self, url: &str) -> Result<PinterestReverseSearch> {
        self.client.fetch(&REVERSE, &[("url", url)]).await
    }

    pub async fn get_feed(&self, username: &str) -> Result<PinterestFeed> {
        self.client.fetch(&FEED, &[("username", username)]).await
    }
}
