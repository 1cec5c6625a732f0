//! Random insert/remove workloads with invariant checks after every step.

use std::collections::BTreeMap;

use anyhow::Result;
use balanced_tree::{BalancedTree, avl_height_bound, has_consistent_heights, is_height_balanced};
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Arguments for the fuzz subcommand
#[derive(Args, Debug)]
pub struct FuzzArgs {
    /// Number of random operations to run
    #[arg(long, short = 'n', default_value_t = 10_000)]
    pub operations: usize,

    /// Keys are drawn from 0..key_range
    #[arg(long, default_value_t = 1_000)]
    pub key_range: i32,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

/// An invariant broken at a given step.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Violation {
    #[error("step {step}: a node has balance factor outside -1..=1")]
    Unbalanced { step: usize },

    #[error("step {step}: a cached height is stale")]
    StaleHeight { step: usize },

    #[error("step {step}: height {height} exceeds bound {bound:.2}")]
    TooTall { step: usize, height: i32, bound: f64 },

    #[error("step {step}: tree holds {actual} keys, expected {expected}")]
    SizeMismatch {
        step: usize,
        actual: usize,
        expected: usize,
    },

    #[error("final contents differ from the reference model")]
    ContentMismatch,
}

/// Counters for a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzSummary {
    pub inserts: usize,
    pub removes: usize,
    pub misses: usize,
    pub len: usize,
    pub height: i32,
    pub bound: f64,
}

/// Runs `operations` random inserts and removes, checking the tree after each.
pub fn exercise<R: Rng>(
    operations: usize,
    key_range: i32,
    rng: &mut R,
) -> Result<FuzzSummary, Violation> {
    let mut tree = BalancedTree::new();
    let mut model: BTreeMap<i32, usize> = BTreeMap::new();
    let mut summary = FuzzSummary {
        inserts: 0,
        removes: 0,
        misses: 0,
        len: 0,
        height: -1,
        bound: avl_height_bound(0),
    };

    for step in 0..operations {
        let key = rng.random_range(0..key_range.max(1));
        if rng.random_bool(0.6) {
            tree.insert(key);
            *model.entry(key).or_default() += 1;
            summary.inserts += 1;
        } else if tree.remove(&key) {
            if let Some(count) = model.get_mut(&key) {
                *count -= 1;
                if *count == 0 {
                    model.remove(&key);
                }
            }
            summary.removes += 1;
        } else {
            summary.misses += 1;
        }

        check(&tree, step, model.values().sum())?;
    }

    let expected = model
        .iter()
        .flat_map(|(&key, &count)| std::iter::repeat_n(key, count));
    if !tree.keys().copied().eq(expected) {
        return Err(Violation::ContentMismatch);
    }

    summary.len = tree.len();
    summary.height = tree.height();
    summary.bound = avl_height_bound(tree.len());
    Ok(summary)
}

fn check(tree: &BalancedTree<i32>, step: usize, expected: usize) -> Result<(), Violation> {
    if tree.len() != expected {
        return Err(Violation::SizeMismatch {
            step,
            actual: tree.len(),
            expected,
        });
    }
    if !is_height_balanced(tree.root()) {
        return Err(Violation::Unbalanced { step });
    }
    if !has_consistent_heights(tree.root()) {
        return Err(Violation::StaleHeight { step });
    }
    let bound = avl_height_bound(tree.len());
    if f64::from(tree.height()) > bound {
        return Err(Violation::TooTall {
            step,
            height: tree.height(),
            bound,
        });
    }
    Ok(())
}

/// Run the fuzz subcommand
pub fn run(args: &FuzzArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, operations = args.operations, key_range = args.key_range, "Starting fuzz run");

    let mut rng = StdRng::seed_from_u64(seed);
    let summary = exercise(args.operations, args.key_range, &mut rng).map_err(|violation| {
        tracing::error!(seed, %violation, "Invariant violated");
        anyhow::anyhow!("{violation} (seed {seed})")
    })?;

    tracing::info!(
        inserts = summary.inserts,
        removes = summary.removes,
        misses = summary.misses,
        len = summary.len,
        height = summary.height,
        bound = summary.bound,
        "Fuzz run passed"
    );
    println!(
        "{} operations passed: {} keys, height {} (bound {:.2})",
        args.operations, summary.len, summary.height, summary.bound
    );

    Ok(())
}
