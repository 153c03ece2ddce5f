pub mod config;
pub mod downloader;
pub mod urls;
pub mod youtube;
