//! Driver configuration: YAML file plus environment and CLI overrides.
//!
//! Priority: CLI > Environment > YAML file > Default

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bench::BenchArgs;
use crate::load::{self, LoadError};

/// Environment variable overriding the key file path.
pub const INPUT_VAR: &str = "BALANCED_TREE_INPUT";
/// Environment variable overriding the probe key.
pub const PROBE_VAR: &str = "BALANCED_TREE_PROBE";

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_PROBE: i32 = 2_000_000;

/// Optional settings read from a YAML file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub probe: Option<i32>,
    pub validate: Option<bool>,
}

impl FileConfig {
    /// Reads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = load::read(path)?;
        Self::parse(&content, path)
    }

    /// Parses YAML content; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, LoadError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| LoadError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchSettings {
    pub input: PathBuf,
    pub probe: i32,
    pub validate: bool,
}

impl BenchSettings {
    /// Resolves every setting from CLI arguments, the environment (through
    /// `lookup`), and the configuration file, in that order.
    pub fn resolve<F>(args: &BenchArgs, file: &FileConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = args
            .input
            .clone()
            .or_else(|| lookup(INPUT_VAR).map(PathBuf::from))
            .or_else(|| file.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        let probe = args
            .probe
            .or_else(|| lookup(PROBE_VAR).and_then(|value| value.trim().parse().ok()))
            .or(file.probe)
            .unwrap_or(DEFAULT_PROBE);

        let validate = args.validate || file.validate.unwrap_or(false);

        Self {
            input,
            probe,
            validate,
        }
    }
}
