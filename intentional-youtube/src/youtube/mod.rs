use std::num::NonZeroUsize;

use feeds::FeedSource;

use crate::downloader::VideoDownloader;

pub use self::select::{download_latest, is_video_link, Selection, VIDEO_DOMAINS};

mod select;

/// Fetch every feed in `urls` and download its latest videos.
///
/// Feeds that fail to fetch or parse are logged and skipped, the rest of the list is still
/// processed.
pub async fn download<S, D>(urls: &[String], num_videos: NonZeroUsize, source: &S, downloader: &D)
where
    S: FeedSource + ?Sized,
    D: VideoDownloader + ?Sized,
{
    for (index, url) in urls.iter().enumerate() {
        tracing::info!("Parsing URL {}: {}", index + 1, url);
        let feed = match source.fetch(url).await {
            Ok(feed) => feed,
            Err(err) => {
                tracing::error!("Error parsing feed {}: {}", url, err);
                continue;
            }
        };

        let selection = download_latest(&feed.entries, num_videos, downloader).await;
        if selection.selected == 0 {
            tracing::warn!(
                "No video links in {} ({} entries)",
                feed.title.as_deref().unwrap_or(url),
                feed.entries.len()
            );
        } else if selection.failed > 0 {
            tracing::warn!(
                "{} of {} downloads failed for {}",
                selection.failed,
                selection.selected,
                feed.title.as_deref().unwrap_or(url)
            );
        }
    }
}
