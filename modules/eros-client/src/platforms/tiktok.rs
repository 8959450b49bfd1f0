use crate::client::Eros;
use crate::endpoint::{Endpoint, Platform, Resource};
use crate::error::Result;
use crate::types::tiktok::{TikTokFeed, TikTokPost, TikTokUser};

const USER: Endpoint = Endpoint::new(Platform::TikTok, Resource::User);
const POST: Endpoint = Endpoint::new(Platform::TikTok, Resource::Post);
const FEED: Endpoint = Endpoint::new(Platform::TikTok, Resource::Feed);

#[derive(Debug, Clone)]
pub struct TikTok {
    client: Eros,
}

impl TikTok {
    pub fn new(client: &Eros) -> Self {
        Self {
            client: client.clone(),
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<TikTokUser> {
        self.client.fetch(&USER, &[("username", username)]).await
    }

    pub async fn get_post(&self, url: &str) -> Result<TikTokPost> {
        self.client.fetch(&POST, &[("url", url)]).await
    }

    pub async fn get_feed(&self, username: &str) -> Result<TikTokFeed> {
        self.client.fetch(&FEED, &[("username", username)]).await
    }
}
