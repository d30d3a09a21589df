//! Shell document loading
//!
//! The shell document is the single HTML entry point served for all non-asset,
//! non-API routes. Bytes are cached keyed by the file's modification time, so
//! staleness is bounded to one file-change interval and the common fallback
//! path avoids redundant disk reads.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use hyper::body::Bytes;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;

/// Shell document read failure
///
/// Scoped to the single request; the server answers 500 and keeps running.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("shell document not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read shell document at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Cached shell document, keyed by modification time
pub struct ShellDocument {
    path: PathBuf,
    cache: RwLock<Option<(SystemTime, Bytes)>>,
}

impl ShellDocument {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the shell document, re-reading from disk only when the file's
    /// modification time changed since the cached copy.
    pub async fn load(&self) -> Result<Bytes, ShellError> {
        let metadata = fs::metadata(&self.path).await.map_err(|e| self.classify_io(e))?;
        let modified = metadata.modified().map_err(|e| self.classify_io(e))?;

        if let Some((cached_mtime, bytes)) = self.cache.read().await.as_ref() {
            if *cached_mtime == modified {
                return Ok(bytes.clone());
            }
        }

        let content = fs::read(&self.path).await.map_err(|e| self.classify_io(e))?;
        let bytes = Bytes::from(content);

        let mut cache = self.cache.write().await;
        *cache = Some((modified, bytes.clone()));

        Ok(bytes)
    }

    fn classify_io(&self, source: io::Error) -> ShellError {
        if source.kind() == io::ErrorKind::NotFound {
            ShellError::NotFound {
                path: self.path.clone(),
            }
        } else {
            ShellError::Io {
                path: self.path.clone(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_load_returns_document_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<html>shell</html>").expect("write");

        let shell = ShellDocument::new(&path);
        let bytes = shell.load().await.expect("load");
        assert_eq!(&bytes[..], b"<html>shell</html>");
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let shell = ShellDocument::new(dir.path().join("index.html"));
        match shell.load().await {
            Err(ShellError::NotFound { path }) => {
                assert!(path.ends_with("index.html"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cache_tracks_modification() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.html");
        std::fs::write(&path, "v1").expect("write");

        let shell = ShellDocument::new(&path);
        assert_eq!(&shell.load().await.expect("load v1")[..], b"v1");

        // Coarse mtime granularity on some filesystems; make the change visible
        tokio::time::sleep(Duration::from_millis(1100)).await;
        std::fs::write(&path, "v2").expect("rewrite");
        assert_eq!(&shell.load().await.expect("load v2")[..], b"v2");
    }

    #[tokio::test]
    async fn test_document_removed_after_caching() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.html");
        std::fs::write(&path, "v1").expect("write");

        let shell = ShellDocument::new(&path);
        shell.load().await.expect("first load");

        std::fs::remove_file(&path).expect("remove");
        assert!(matches!(
            shell.load().await,
            Err(ShellError::NotFound { .. })
        ));
    }
}
