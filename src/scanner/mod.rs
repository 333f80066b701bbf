//! Directory scanner for discovering index files.
//!
//! Only the top level of the index directory is searched. Entries are
//! yielded lazily, in file-name order.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Errors raised while enumerating the index directory.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Index directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Cannot read index directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Configuration for file scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Extension of index files, without the dot.
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
        }
    }
}

impl From<&crate::config::ScannerConfig> for ScanConfig {
    fn from(config: &crate::config::ScannerConfig) -> Self {
        Self {
            extension: config.extension.trim_start_matches('.').to_string(),
        }
    }
}

/// Scanner over a single index directory.
pub struct IndexScanner {
    config: ScanConfig,
    root: PathBuf,
}

impl IndexScanner {
    /// Create a new scanner.
    pub fn new(root: impl Into<PathBuf>, config: ScanConfig) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Iterate over matching index files.
    ///
    /// Fails immediately if the root is missing or not a directory; read
    /// errors while walking are yielded as `Err` items.
    pub fn scan(
        &self,
    ) -> Result<impl Iterator<Item = Result<PathBuf, ScanError>> + '_, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::NotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let files = walker.into_iter().filter_map(move |entry| match entry {
            Ok(entry) => {
                // Follows symlinks, so linked index files are counted too.
                if entry.path().is_file() && self.matches(entry.path()) {
                    Some(Ok(entry.into_path()))
                } else {
                    debug!("Skipping {}", entry.path().display());
                    None
                }
            }
            Err(e) => Some(Err(ScanError::from(e))),
        });

        Ok(files)
    }

    /// Check if a file name ends with `.<extension>`.
    ///
    /// A file named exactly `.json` matches, as do hidden files.
    pub fn matches(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.config.extension);
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(&suffix))
    }
}
