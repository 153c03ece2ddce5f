use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("unable to fetch feed: {url}, {error}")]
    Fetch { url: String, error: reqwest::Error },

    #[error("unable to fetch feed: {url}, HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unable to parse feed: {url}, {error}")]
    Parse {
        url: String,
        error: feed_rs::parser::ParseFeedError,
    },
}
