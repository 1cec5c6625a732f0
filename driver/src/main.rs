//! balanced-tree-driver - loads integer keys into a BalancedTree and times it
//!
//! Usage:
//!   balanced-tree-driver bench --input <file> [--probe <key>] [--config <yaml>]
//!   balanced-tree-driver fuzz [--operations <n>] [--seed <seed>]
//!
//! Logging is controlled with `RUST_LOG` (default: `balanced_tree_driver=info`).

mod bench;
mod config;
mod fuzz;
mod load;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "balanced-tree-driver")]
#[command(about = "Benchmark and fuzz driver for balanced-tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert keys from a file and time insertion and one lookup
    Bench(bench::BenchArgs),
    /// Run random insert/remove operations and verify invariants after each
    Fuzz(fuzz::FuzzArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "balanced_tree_driver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bench(args) => bench::run(&args),
        Commands::Fuzz(args) => fuzz::run(&args),
    }
}
