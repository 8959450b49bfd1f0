//! Typed `<platform>/<resource>` paths understood by the Eros API.

use std::fmt;
use std::str::FromStr;

use crate::error::ErosError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    TikTok,
    Pinterest,
    Threads,
    YouTube,
    Twitter,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
            Platform::Pinterest => "pinterest",
            Platform::Threads => "threads",
            Platform::YouTube => "youtube",
            Platform::Twitter => "twitter",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "instagram" => Some(Platform::Instagram),
            "tiktok" => Some(Platform::TikTok),
            "pinterest" => Some(Platform::Pinterest),
            "threads" => Some(Platform::Threads),
            "youtube" => Some(Platform::YouTube),
            "twitter" => Some(Platform::Twitter),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Post,
    Story,
    Feed,
    /// Pinterest reverse image search.
    Reverse,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Post => "post",
            Resource::Story => "story",
            Resource::Feed => "feed",
            Resource::Reverse => "reverse",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "user" => Some(Resource::User),
            "post" => Some(Resource::Post),
            "story" => Some(Resource::Story),
            "feed" => Some(Resource::Feed),
            "reverse" => Some(Resource::Reverse),
            _ => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category/resource pair, rendered as `instagram/user` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub platform: Platform,
    pub resource: Resource,
}

impl Endpoint {
    pub const fn new(platform: Platform, resource: Resource) -> Self {
        Self { platform, resource }
    }

    /// Message used when the upstream body is not JSON.
    pub(crate) fn not_found_message(&self, identifier: &str) -> String {
        format!("{} {} **{}** not found", self.platform, self.resource, identifier)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.resource)
    }
}

impl FromStr for Endpoint {
    type Err = ErosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ErosError::MalformedEndpoint(s.to_string());

        let (category, resource) = s.split_once('/').ok_or_else(malformed)?;
        if resource.contains('/') {
            return Err(malformed());
        }

        let platform = Platform::from_segment(category).ok_or_else(malformed)?;
        let resource = Resource::from_segment(resource).ok_or_else(malformed)?;
        Ok(Endpoint::new(platform, resource))
    }
}
