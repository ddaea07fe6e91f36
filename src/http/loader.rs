use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A file that could not be read.
///
/// The display text is what the client receives as the 404 body.
#[derive(Debug, Error)]
#[error("Could not open file: {path}")]
pub struct LoadError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// Reads whole files beneath a base directory.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    base: PathBuf,
}

impl ContentLoader {
    /// Loader that reads relative to the process working directory.
    pub fn current_dir() -> Self {
        Self::rooted_at(".")
    }

    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Reads the full contents of `path` into memory.
    ///
    /// `path` is joined onto the base directory as given. Any I/O failure is
    /// reported as a [`LoadError`] naming `path`.
    pub async fn load(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(self.base.join(path))
            .await
            .map_err(|source| LoadError {
                path: path.to_string(),
                source,
            })
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::current_dir()
    }
}
