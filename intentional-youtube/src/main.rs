use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueHint};
use feeds::FeedClient;
use intentional_youtube::config::{Config, Overrides, Settings, CONFIG_FILE, URLS_FILE};
use intentional_youtube::downloader::YtDlp;
use intentional_youtube::urls::read_url_list;
use intentional_youtube::youtube;
use intentional_youtube_common::{ensure_dir, expand_path};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Download videos from YouTube RSS feeds.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the file containing URLs.
    #[arg(long, value_hint = ValueHint::FilePath)]
    urls: Option<PathBuf>,

    /// Number of latest videos to download.
    #[arg(long)]
    num_videos: Option<NonZeroUsize>,

    /// Path to the download directory.
    #[arg(long, value_hint = ValueHint::DirPath)]
    download_path: Option<PathBuf>,

    /// Downloader executable, called with a single video URL.
    #[arg(long, value_hint = ValueHint::CommandName)]
    downloader: Option<String>,

    /// Config file location
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            num_videos: self.num_videos,
            urls_path: self.urls.clone(),
            download_path: self.download_path.clone(),
            downloader: self.downloader.clone(),
        }
    }
}

fn default_config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "intentional_youtube")
        .ok_or_else(|| anyhow!("failed to resolve config directory"))?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run().await {
        Ok(_) => process::exit(0),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(1);
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => expand_path(path).context("failed to expand config path")?,
        None => default_config_path()?,
    };
    let config = Config::load_or_create(&config_path)?;
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let settings = Settings::resolve(args.overrides(), config, config_dir.join(URLS_FILE))?;

    let download_dir =
        ensure_dir(&settings.download_path).context("failed to ensure download directory")?;
    let urls = read_url_list(&settings.urls_path).with_context(|| {
        format!("failed to read URL file {}", settings.urls_path.display())
    })?;
    if urls.is_empty() {
        tracing::warn!("No URLs in {}", settings.urls_path.display());
        return Ok(());
    }

    let client = reqwest::Client::builder()
        .user_agent(APP_USER_AGENT)
        .build()?;
    let feed_client = FeedClient::new(&client);
    let downloader = YtDlp::new(&settings.downloader, download_dir);

    youtube::download(&urls, settings.num_videos, &feed_client, &downloader).await;

    Ok(())
}
