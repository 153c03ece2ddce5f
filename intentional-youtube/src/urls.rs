use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const COMMENT_MARKER: &str = "#";

/// Read feed URLs from `path`, one per line.
pub fn read_url_list(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    parse_url_list(BufReader::new(file))
}

/// Trim every line and drop blank lines and comments, order is preserved.
///
/// Lines are read as raw bytes. Invalid UTF-8 inside a comment is ignored, a URL line that isn't
/// valid UTF-8 is logged and skipped.
pub fn parse_url_list(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let decoded = String::from_utf8_lossy(&line);
        let trimmed = decoded.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }
        if std::str::from_utf8(&line).is_err() {
            tracing::warn!("Skipping line {} of URL list, not valid UTF-8: {}", index + 1, trimmed);
            continue;
        }
        urls.push(trimmed.to_owned());
    }
    Ok(urls)
}
