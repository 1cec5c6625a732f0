//! Timed batch insertion followed by a single membership probe.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use balanced_tree::{BalancedTree, has_consistent_heights, is_height_balanced, is_valid_bst};
use clap::Args;

use crate::config::{BenchSettings, FileConfig};
use crate::load;

/// Arguments for the bench subcommand
#[derive(Args, Debug, Default)]
pub struct BenchArgs {
    /// Key file, one integer per line (default: input.txt)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Key to look up after insertion (default: 2000000)
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pub probe: Option<i32>,

    /// YAML configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Check balance, heights and ordering after insertion
    #[arg(long)]
    pub validate: bool,
}

/// Outcome of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    pub keys: usize,
    pub insert: Duration,
    pub search: Duration,
    pub found: bool,
    pub height: i32,
    pub validation: Option<Validation>,
}

/// Structural checks run after insertion when requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub balanced: bool,
    pub heights: bool,
    /// Strict ordering; always false when the input repeats a key
    pub ordered: bool,
}

impl Validation {
    fn of(tree: &BalancedTree<i32>) -> Self {
        Self {
            balanced: is_height_balanced(tree.root()),
            heights: has_consistent_heights(tree.root()),
            ordered: is_valid_bst(tree.root()),
        }
    }
}

/// Inserts `keys` in order, then probes for `probe`, timing both phases.
pub fn measure(keys: &[i32], probe: i32, validate: bool) -> BenchReport {
    let mut tree = BalancedTree::new();

    let begin = Instant::now();
    for &key in keys {
        tree.insert(key);
    }
    let insert = begin.elapsed();

    let begin = Instant::now();
    let found = tree.contains(&probe);
    let search = begin.elapsed();

    BenchReport {
        keys: keys.len(),
        insert,
        search,
        found,
        height: tree.height(),
        validation: validate.then(|| Validation::of(&tree)),
    }
}

/// Run the bench subcommand
pub fn run(args: &BenchArgs) -> Result<()> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => FileConfig::default(),
    };
    let settings = BenchSettings::resolve(args, &file, |name| std::env::var(name).ok());
    tracing::info!(
        input = %settings.input.display(),
        probe = settings.probe,
        validate = settings.validate,
        "Benchmark configuration resolved"
    );

    let keys = load::load_keys(&settings.input)
        .with_context(|| format!("Failed to load keys from {}", settings.input.display()))?;
    let report = measure(&keys, settings.probe, settings.validate);

    tracing::info!(
        keys = report.keys,
        height = report.height,
        insert_ns = report.insert.as_nanos(),
        search_ns = report.search.as_nanos(),
        found = report.found,
        "Benchmark finished"
    );
    if let Some(validation) = report.validation {
        if validation.balanced && validation.heights {
            tracing::info!(ordered = validation.ordered, "Tree structure verified");
        } else {
            tracing::error!(?validation, "Tree structure is corrupt");
            anyhow::bail!("AVL invariants violated after inserting {} keys", report.keys);
        }
    }

    println!("Time to insert: {}", report.insert.as_nanos());
    println!("Time to search: {}", report.search.as_nanos());

    Ok(())
}
