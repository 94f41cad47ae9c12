//! # tagerr CLI
//!
//! Command-line front end for exploring tagged errors.
//!
//! Usage:
//!   tagerr inspect <scenario.json> [--query <tag>]... [--stack]
//!   tagerr fanout [--tasks N] [--fail-every K] [--stack]
//!
//! Examples:
//!   tagerr inspect demos/nested.json --query auth
//!   tagerr fanout --tasks 16 --fail-every 5 --stack
//!
//! Stack capture honours `TAGERR_CAPTURE_STACK` and `TAGERR_MAX_FRAMES`;
//! log output honours `RUST_LOG`.

mod fanout;
mod scenario;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fanout::FanoutConfig;
use scenario::Scenario;
use std::path::PathBuf;
use tagerr::config::{self, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tagerr")]
#[command(author, version, about = "tagerr - inspect tagged errors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum stack frames captured per error
    #[arg(long, global = true)]
    max_frames: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the error described by a scenario file and report on it
    Inspect {
        /// Path to the scenario JSON file
        #[arg(required = true)]
        file: PathBuf,

        /// Additional tags to test membership for
        #[arg(short, long)]
        query: Vec<String>,

        /// Print captured stacks
        #[arg(long)]
        stack: bool,
    },
    /// Run tasks concurrently and combine their failures
    Fanout {
        /// Number of tasks to spawn
        #[arg(short, long, default_value = "8")]
        tasks: usize,

        /// Every n-th task fails (0 = none)
        #[arg(short, long, default_value = "3")]
        fail_every: usize,

        /// Print captured stacks
        #[arg(long)]
        stack: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn inspect(file: PathBuf, queries: &[String], stack: bool) -> anyhow::Result<()> {
    let scenario = Scenario::load(&file)
        .with_context(|| format!("cannot inspect {}", file.display()))?;
    scenario.register_hints();

    let report = scenario.report(queries);
    print!("{}", report.render(stack));
    Ok(())
}

async fn fanout(config: FanoutConfig, stack: bool) {
    let result = fanout::run(config).await;

    println!(
        "{} of {} tasks succeeded",
        result.succeeded.len(),
        config.tasks
    );
    match result.error {
        Some(err) => {
            println!("error: {}", err.format(stack));
            if let Some(name) = err.name() {
                println!("name: {}", name);
            }
        }
        None => println!("error: none"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stack_config = Config::from_env();
    if let Some(max_frames) = cli.max_frames {
        stack_config = stack_config.with_max_frames(max_frames);
    }
    config::set(stack_config);
    tracing::debug!(?stack_config, "stack capture configured");

    match cli.command {
        Commands::Inspect { file, query, stack } => inspect(file, &query, stack)?,
        Commands::Fanout {
            tasks,
            fail_every,
            stack,
        } => fanout(FanoutConfig { tasks, fail_every }, stack).await,
    }

    Ok(())
}
