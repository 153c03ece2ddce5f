use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("unable to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} failed on {url}: {status}")]
    Status {
        program: String,
        url: String,
        status: ExitStatus,
    },
}

#[async_trait]
pub trait VideoDownloader {
    async fn download(&self, url: &str) -> Result<(), DownloadError>;
}

/// Runs an external downloader (`yt-dlp` by default) with the video URL as its only argument.
///
/// The child runs inside `download_dir` and inherits stdout and stderr, the working directory
/// of this process is left alone.
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: String,
    download_dir: PathBuf,
}

impl YtDlp {
    pub fn new(program: impl Into<String>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            download_dir: download_dir.into(),
        }
    }
}

#[async_trait]
impl VideoDownloader for YtDlp {
    async fn download(&self, url: &str) -> Result<(), DownloadError> {
        tracing::info!("Downloading {}", url);
        let status = Command::new(&self.program)
            .arg(url)
            .current_dir(&self.download_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| DownloadError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(DownloadError::Status {
                program: self.program.clone(),
                url: url.to_owned(),
                status,
            });
        }
        Ok(())
    }
}
