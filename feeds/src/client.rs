use async_trait::async_trait;
use reqwest::Client;

use crate::error::FeedError;
use crate::model::Feed;

/// Anything that can turn a feed URL into a parsed feed.
#[async_trait]
pub trait FeedSource {
    async fn fetch(&self, url: &str) -> Result<Feed, FeedError>;
}

pub struct FeedClient<'client> {
    reqwest_client: &'client Client,
}

impl<'client> FeedClient<'client> {
    pub fn new(client: &'client Client) -> Self {
        Self {
            reqwest_client: client,
        }
    }
}

#[async_trait]
impl<'client> FeedSource for FeedClient<'client> {
    async fn fetch(&self, url: &str) -> Result<Feed, FeedError> {
        tracing::debug!("fetching feed {}", url);

        let response = self
            .reqwest_client
            .get(url)
            .send()
            .await
            .map_err(|error| FeedError::Fetch {
                url: url.to_owned(),
                error,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_owned(),
                status,
            });
        }

        let bytes = response.bytes().await.map_err(|error| FeedError::Fetch {
            url: url.to_owned(),
            error,
        })?;
        parse_feed(url, &bytes)
    }
}

/// Parse an RSS, Atom or JSON feed document. `url` is only used for error reporting.
pub fn parse_feed(url: &str, body: &[u8]) -> Result<Feed, FeedError> {
    let feed: Feed = feed_rs::parser::parse(body)
        .map_err(|error| FeedError::Parse {
            url: url.to_owned(),
            error,
        })?
        .into();
    tracing::debug!("parsed {} entries from {}", feed.entries.len(), url);
    Ok(feed)
}
