//! Blacklist management module
//!
//! Loads a line-oriented list of known-weak passwords and answers
//! exact-match membership queries.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    Read(#[from] std::io::Error),
}

/// Returns the blacklist path to use when the caller supplied none.
///
/// Reads the `PWD_CHECK_BLACKLIST_PATH` environment variable. Unset means
/// "no blacklist": every password is treated as not blacklisted.
pub fn default_blacklist_path() -> Option<PathBuf> {
    std::env::var_os("PWD_CHECK_BLACKLIST_PATH").map(PathBuf::from)
}

/// A set of known-weak passwords, matched byte-for-byte.
///
/// Lines are stored exactly as they appear in the source file with only the
/// trailing newline stripped: no trimming, no case folding. A line
/// `"secret "` (trailing space) does not match the password `"secret"`, and
/// a blank line matches the empty password.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// An empty blacklist; `contains` is always false.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a blacklist from a file, one candidate password per line.
    ///
    /// An empty file is a valid, empty blacklist. Lines of any length are
    /// stored and compared in full.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let entries: HashSet<String> = content.lines().map(str::to_owned).collect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist loaded: {} entries from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { entries })
    }

    /// Loads a blacklist, degrading to an empty one on any failure.
    ///
    /// A missing or unreadable file is not an error here: the analysis keeps
    /// going and simply treats every password as not blacklisted.
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::empty();
        };
        match Self::load(path) {
            Ok(blacklist) => blacklist,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Blacklist unavailable, continuing without it: {}", _err);
                Self::empty()
            }
        }
    }

    /// Checks whether the password appears verbatim in the blacklist.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
