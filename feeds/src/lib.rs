mod client;
mod error;
mod model;

pub use client::{parse_feed, FeedClient, FeedSource};
pub use error::FeedError;
pub use model::{Feed, FeedEntry};
