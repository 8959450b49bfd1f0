use crate::client::Eros;
use crate::endpoint::{Endpoint, Platform, Resource};
use crate::error::Result;
use crate::types::instagram::{InstagramPost, InstagramProfile, InstagramStory, InstagramTimeline};

const USER: Endpoint = Endpoint::new(Platform::Instagram, Resource::User);
const POST: Endpoint = Endpoint::new(Platform::Instagram, Resource::Post);
const STORY: Endpoint = Endpoint::new(Platform::Instagram, Resource::Story);
const FEED: Endpoint = Endpoint::new(Platform::Instagram, Resource::Feed);

#[derive(Debug, Clone)]
pub struct Instagram {
    client: Eros,
}

impl Instagram {
    pub fn new(client: &Eros) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Fetch a profile by username.
    pub async fn get_user(&self, username: &str) -> Result<InstagramProfile> {
        self.client.fetch(&USER, &[("username", username)]).await
    }

    /// Fetch a single post by its URL.
    pub async fn get_post(&self, url: &str) -> Result<InstagramPost> {
        self.client.fetch(&POST, &[("url", url)]).await
    }

    /// Fetch the stories linked from a story URL.
    pub async fn get_story(&self, url: &str) -> Result<InstagramStory> {
        self.client.fetch(&STORY, &[("url", url)]).await
    }

    /// Fetch the recent timeline of a user.
    pub async fn get_feed(&self, username: &str) -> Result<InstagramTimeline> {
        self.client.fetch(&FEED, &[("username", username)]).await
    }
}
