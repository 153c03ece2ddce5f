use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use intentional_youtube_common::ensure_dir;
use serde::{Deserialize, Serialize};

pub use self::settings::{Overrides, Settings};

mod settings;

pub const CONFIG_FILE: &str = "config.toml";
pub const URLS_FILE: &str = "urls.txt";

pub const DEFAULT_AMOUNT_VIDS: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};
pub const DEFAULT_DOWNLOAD_PATH: &str = "~/Videos";
pub const DEFAULT_DOWNLOADER: &str = "yt-dlp";

const DEFAULT_URLS_CONTENT: &str = "\
# Default URLs file
# Add your URLs here, one per line. Comments with # and blank lines are allowed.
# Example:
# https://www.youtube.com/feeds/videos.xml?channel_id=UC-lHJZR3Gqxm24_Vd_AJ5Yw
";

/// Contents of `config.toml`. Every key is optional, missing keys fall back to the built-in
/// defaults when [`Settings`] are resolved.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_vids: Option<NonZeroUsize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloader: Option<String>,
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let conf_contents = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&conf_contents)?)
    }

    /// Config written on first run, with the URL list kept next to the config file.
    pub fn with_defaults(config_dir: impl AsRef<Path>) -> Self {
        Self {
            amount_vids: Some(DEFAULT_AMOUNT_VIDS),
            urls_path: Some(config_dir.as_ref().join(URLS_FILE)),
            download_path: Some(PathBuf::from(DEFAULT_DOWNLOAD_PATH)),
            downloader: Some(DEFAULT_DOWNLOADER.to_owned()),
        }
    }

    /// Load the config at `path`, creating it and a starter URL list first if it doesn't exist.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            create_default(path).context("failed to create default config file")?;
        }
        Self::read(path).with_context(|| format!("failed to load config file {}", path.display()))
    }
}

fn create_default(path: &Path) -> Result<()> {
    let config_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let config_dir = ensure_dir(config_dir)?;

    let config = Config::with_defaults(&config_dir);
    std::fs::write(path, toml::to_string_pretty(&config)?)?;
    tracing::info!("No config found, created one at {}", path.display());

    let urls_path = config_dir.join(URLS_FILE);
    if !urls_path.exists() {
        std::fs::write(&urls_path, DEFAULT_URLS_CONTENT)?;
    }
    tracing::info!("Please add URLs in {}", urls_path.display());

    Ok(())
}
