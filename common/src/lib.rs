use std::path::{is_separator, Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("unable to resolve home directory")]
    NoHomeDirectory,

    #[error("unable to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Replace a leading `~` with the current user's home directory.
///
/// Anything else is returned as is, so expanding an already expanded path is a no-op.
pub fn expand_path(path: impl AsRef<Path>) -> Result<PathBuf, PathError> {
    let path = path.as_ref();
    // `~` and `~/...` are matched per component, `~name` only when the path is UTF-8
    let rest = match path.strip_prefix("~") {
        Ok(rest) => rest.to_owned(),
        Err(_) => match path.to_str().and_then(|s| s.strip_prefix('~')) {
            Some(rest) => PathBuf::from(rest.trim_start_matches(is_separator)),
            None => return Ok(path.to_owned()),
        },
    };

    let home = home_dir().ok_or(PathError::NoHomeDirectory)?;
    if rest.as_os_str().is_empty() {
        return Ok(home);
    }
    Ok(home.join(rest))
}

/// Expand `path` and create it, along with any missing parents.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<PathBuf, PathError> {
    let path = expand_path(path)?;
    std::fs::create_dir_all(&path).map_err(|source| PathError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn expands_home_prefix() {
        let home = home_dir().unwrap();
        assert_eq!(expand_path("~/Videos").unwrap(), home.join("Videos"));
        assert_eq!(expand_path("~").unwrap(), home);
        assert_eq!(
            expand_path("~/.config/intentional_youtube/urls.txt").unwrap(),
            home.join(".config/intentional_youtube/urls.txt")
        );
    }

    #[cfg(unix)]
    #[test]
    fn expands_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let home = home_dir().unwrap();
        let path = Path::new(OsStr::from_bytes(b"~/Vid\xe9os"));
        assert_eq!(
            expand_path(path).unwrap(),
            home.join(OsStr::from_bytes(b"Vid\xe9os"))
        );
    }

    #[test]
    fn expands_tilde_without_separator() {
        let home = home_dir().unwrap();
        assert_eq!(expand_path("~Videos").unwrap(), home.join("Videos"));
    }

    #[test]
    fn leaves_other_paths_alone() {
        assert_eq!(expand_path("/tmp/videos").unwrap(), PathBuf::from("/tmp/videos"));
        assert_eq!(expand_path("videos/~").unwrap(), PathBuf::from("videos/~"));
        assert_eq!(expand_path("").unwrap(), PathBuf::new());
    }

    #[test]
    fn expansion_is_idempotent() {
        for p in ["~/Videos", "~", "/srv/media", "relative/dir"] {
            let once = expand_path(p).unwrap();
            let twice = expand_path(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn ensure_dir_creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b");
        let created = ensure_dir(&target).unwrap();
        assert_eq!(created, target);
        assert!(target.is_dir());

        // Already existing is fine
        ensure_dir(&target).unwrap();
    }

    #[test]
    fn ensure_dir_fails_on_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            ensure_dir(&file),
            Err(PathError::CreateDir { .. })
        ));
    }
}
