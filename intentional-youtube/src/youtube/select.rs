use std::num::NonZeroUsize;

use feeds::FeedEntry;

use crate::downloader::VideoDownloader;

/// Links containing any of these are treated as videos.
pub const VIDEO_DOMAINS: [&str; 2] = ["youtube.com", "youtu.be"];

pub fn is_video_link(link: &str) -> bool {
    let link = link.to_ascii_lowercase();
    VIDEO_DOMAINS.iter().any(|domain| link.contains(domain))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Video entries handed to the downloader, failures included.
    pub selected: usize,
    pub failed: usize,
}

/// Download the first `num_videos` video entries in feed order.
///
/// Entries are pulled lazily, nothing past the last selected video is looked at. A failed
/// download is logged and still counts towards the limit.
pub async fn download_latest<'a, I, D>(
    entries: I,
    num_videos: NonZeroUsize,
    downloader: &D,
) -> Selection
where
    I: IntoIterator<Item = &'a FeedEntry>,
    D: VideoDownloader + ?Sized,
{
    let mut selection = Selection::default();
    let videos = entries
        .into_iter()
        .filter(|entry| is_video_link(&entry.link))
        .take(num_videos.get());

    for entry in videos {
        selection.selected += 1;
        if let Err(err) = downloader.download(&entry.link).await {
            tracing::error!("Error downloading video {}: {}", entry.link, err);
            selection.failed += 1;
        }
    }

    selection
}
