//! Per-platform wrappers. Each holds a handle to the shared [`crate::Eros`]
//! client and maps one method onto one endpoint.

mod instagram;
mod pinterest;
mod threads;
mod tiktok;
mod twitter;
mod youtube;

pub use instagram::Instagram;
pub use pinterest::Pinterest;
pub use threads::Threads;
pub use tiktok::TikTok;
pub use twitter::Twitter;
pub use youtube::YouTube;
