//! Reading integer keys from line-delimited text.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while loading keys or configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A token in the key file is not an `i32`.
    #[error("Line {line}: '{text}' is not a valid integer key")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// The YAML configuration file is malformed.
    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

// =============================================================================
// Loading
// =============================================================================

/// Parses whitespace-separated integer keys, reporting 1-based line numbers.
///
/// Blank lines are skipped. Several keys may share a line.
pub fn parse_keys(content: &str) -> Result<Vec<i32>, LoadError> {
    let mut keys = Vec::new();

    for (index, line) in content.lines().enumerate() {
        for token in line.split_whitespace() {
            let key = token.parse().map_err(|source| LoadError::Parse {
                line: index + 1,
                text: token.to_string(),
                source,
            })?;
            keys.push(key);
        }
    }

    Ok(keys)
}

/// Reads and parses the key file at `path`.
pub fn load_keys(path: &Path) -> Result<Vec<i32>, LoadError> {
    let content = read(path)?;
    let keys = parse_keys(&content)?;
    tracing::debug!(path = %path.display(), count = keys.len(), "loaded keys");
    Ok(keys)
}

pub(crate) fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
