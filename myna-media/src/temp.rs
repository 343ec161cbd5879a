//! Scoped temporary files and directories.
//!
//! Guards remove their path on drop, so cleanup happens on every exit path
//! including errors and panics.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn unique_name(ext: Option<&str>) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let pid = std::process::id();
    match ext {
        Some(ext) => format!("myna-{pid}-{id}.{ext}"),
        None => format!("myna-{pid}-{id}"),
    }
}

/// Temporary file path removed on drop.
///
/// The file itself is not created; holders write to `path()` and the guard
/// removes whatever ends up there.
#[derive(Debug)]
pub struct TempPath {
    path: PathBuf,
}

impl TempPath {
    /// Reserve a unique path in the system temp directory with the given
    /// extension.
    pub fn with_extension(ext: &str) -> Self {
        Self {
            path: std::env::temp_dir().join(unique_name(Some(ext))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        if self.path.exists()
            && let Err(e) = std::fs::remove_file(&self.path)
        {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove temp file");
        }
    }
}

/// Temporary directory removed recursively on drop.
#[derive(Debug)]
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new() -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(unique_name(None));
        std::fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if self.path.exists()
            && let Err(e) = std::fs::remove_dir_all(&self.path)
        {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove temp dir");
        }
    }
}

/// Stage a byte buffer into a scoped temp file, e.g. media piped on stdin.
pub fn stage_bytes(bytes: &[u8], ext: &str) -> std::io::Result<TempPath> {
    let staged = TempPath::with_extension(ext);
    std::fs::write(staged.path(), bytes)?;
    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_removed_on_drop() {
        let path;
        {
            let staged = stage_bytes(b"payload", "bin").unwrap();
            path = staged.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn temp_dir_is_removed_recursively() {
        let path;
        {
            let dir = TempDir::new().unwrap();
            path = dir.path().to_path_buf();
            std::fs::write(path.join("inner.txt"), b"x").unwrap();
        }
        assert!(!path.exists());
    }

    #[test]
    fn paths_are_unique() {
        let a = TempPath::with_extension("wav");
        let b = TempPath::with_extension("wav");
        assert_ne!(a.path(), b.path());
    }
}
