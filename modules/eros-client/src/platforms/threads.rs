use crate::client::Eros;
use crate::endpoint::{Endpoint, Platform, Resource};
use crate::error::Result;
use crate::types::threads::{ThreadsPost, ThreadsProfile};

const USER: Endpoint = Endpoint::new(Platform::Threads, Resource::User);
const POST: Endpoint = Endpoint::new(Platform::Threads, Resource::Post);

#[derive(Debug, Clone)]
pub struct Threads {
    client: Eros,
}

impl Threads {
    pub fn new(client: &Eros) -> Self {
        Self {
            client: client.clone(),
        }
    }

    pub async fn get_post(&self, url: &str) -> Result<ThreadsPost> {
        self.client.fetch(&POST, &[("url", url)]).await
    }

    pub async fn get_user(&self, username: &str) -> Result<ThreadsProfile> {
        self.client.fetch(&USER, &[("username", username)]).await
    }
}
