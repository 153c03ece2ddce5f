use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use intentional_youtube_common::{expand_path, PathError};

use super::{Config, DEFAULT_AMOUNT_VIDS, DEFAULT_DOWNLOADER, DEFAULT_DOWNLOAD_PATH};

/// Values given on the command line, these win over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub num_videos: Option<NonZeroUsize>,
    pub urls_path: Option<PathBuf>,
    pub download_path: Option<PathBuf>,
    pub downloader: Option<String>,
}

/// Effective settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub num_videos: NonZeroUsize,
    pub urls_path: PathBuf,
    pub download_path: PathBuf,
    pub downloader: String,
}

impl Settings {
    pub fn resolve(
        overrides: Overrides,
        config: Config,
        default_urls_path: impl AsRef<Path>,
    ) -> Result<Self, PathError> {
        let num_videos = overrides
            .num_videos
            .or(config.amount_vids)
            .unwrap_or(DEFAULT_AMOUNT_VIDS);
        let urls_path = overrides
            .urls_path
            .or(config.urls_path)
            .unwrap_or_else(|| default_urls_path.as_ref().to_owned());
        let download_path = overrides
            .download_path
            .or(config.download_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_PATH));
        let downloader = overrides
            .downloader
            .or(config.downloader)
            .unwrap_or_else(|| DEFAULT_DOWNLOADER.to_owned());

        Ok(Self {
            num_videos,
            urls_path: expand_path(urls_path)?,
            download_path: expand_path(download_path)?,
            downloader,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        let settings =
            Settings::resolve(Overrides::default(), Config::default(), "/etc/iy/urls.txt").unwrap();
        assert_eq!(settings.num_videos, DEFAULT_AMOUNT_VIDS);
        assert_eq!(settings.urls_path, PathBuf::from("/etc/iy/urls.txt"));
        assert_eq!(settings.download_path, expand_path("~/Videos").unwrap());
        assert_eq!(settings.downloader, "yt-dlp");
    }

    #[test]
    fn config_over_defaults() {
        let config = Config {
            amount_vids: NonZeroUsize::new(6),
            urls_path: Some("/srv/urls.txt".into()),
            download_path: Some("~/Downloads/yt".into()),
            downloader: Some("youtube-dl".to_owned()),
        };
        let settings = Settings::resolve(Overrides::default(), config, "/etc/iy/urls.txt").unwrap();
        assert_eq!(settings.num_videos.get(), 6);
        assert_eq!(settings.urls_path, PathBuf::from("/srv/urls.txt"));
        assert_eq!(settings.download_path, expand_path("~/Downloads/yt").unwrap());
        assert_eq!(settings.downloader, "youtube-dl");
    }

    #[test]
    fn flags_over_config() {
        let config = Config {
            amount_vids: NonZeroUsize::new(6),
            urls_path: Some("/srv/urls.txt".into()),
            download_path: Some("/srv/videos".into()),
            downloader: None,
        };
        let overrides = Overrides {
            num_videos: NonZeroUsize::new(1),
            urls_path: Some("/tmp/urls.txt".into()),
            download_path: None,
            downloader: Some("echo".to_owned()),
        };
        let settings = Settings::resolve(overrides, config, "/etc/iy/urls.txt").unwrap();
        assert_eq!(settings.num_videos.get(), 1);
        assert_eq!(settings.urls_path, PathBuf::from("/tmp/urls.txt"));
        assert_eq!(settings.download_path, PathBuf::from("/srv/videos"));
        assert_eq!(settings.downloader, "echo");
    }
}
