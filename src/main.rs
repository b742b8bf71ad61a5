use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use u_seek::algorithms::AlgorithmKind;
use u_seek::presets::Preset;

mod commands;

#[derive(Parser)]
#[command(
    name = "u-seek",
    about = "Disk-seek algorithm explorer: FCFS, SCAN, SSTF",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one algorithm and print its head movements and seek times
    Run {
        /// Algorithm: fcfs, scan, or sstf (default: from config, else fcfs)
        #[arg(short, long)]
        algorithm: Option<AlgorithmKind>,
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run every algorithm on the same input and rank them
    Compare {
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Animate the head movements step by step.
    ///
    /// Without --algorithm, all three algorithms play side by side.
    Play {
        /// Algorithm to animate (default: all)
        #[arg(short, long)]
        algorithm: Option<AlgorithmKind>,
        #[command(flatten)]
        input: InputArgs,
        /// Speed multiplier: 0.5, 1, 2, or 3 (default: from config, else 1)
        #[arg(short, long)]
        speed: Option<f64>,
        /// Track width in characters
        #[arg(short, long, default_value_t = 60)]
        width: usize,
    },
    /// List the built-in example inputs
    Presets,
}

/// Where the simulation input comes from.
///
/// Sources layer in order: config file, then preset or random input, then
/// explicit flags.
#[derive(Args)]
pub struct InputArgs {
    /// Comma-separated request positions, e.g. "100, 50, 25, 75"
    #[arg(short, long)]
    pub positions: Option<String>,
    /// Starting head position
    #[arg(long)]
    pub head: Option<i64>,
    /// Disk size (addressable positions are 0..disk-size)
    #[arg(short, long)]
    pub disk_size: Option<i64>,
    /// Simulation config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Start from a built-in preset: fcfs, scan, or sstf
    #[arg(long, conflicts_with = "random")]
    pub preset: Option<Preset>,
    /// Start from a random input
    #[arg(long)]
    pub random: bool,
    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("u_seek=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            algorithm,
            input,
            format,
        } => commands::run::run(algorithm, &input, format),
        Commands::Compare { input, format } => commands::compare::compare(&input, format),
        Commands::Play {
            algorithm,
            input,
            speed,
            width,
        } => commands::play::play(algorithm, &input, speed, width),
        Commands::Presets => commands::presets::list(),
    }
}
