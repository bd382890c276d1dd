//! CLI frontend for the knucklebones dice and table toolkit.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use kb_dice::RollerConfig;

#[derive(Parser)]
#[command(
    name = "kb",
    about = "Knucklebones: dice, dice formulas, and random tables for tabletop games",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible results
    #[arg(long, global = true, env = "KB_SEED")]
    seed: Option<u64>,

    /// JSON file with custom tables
    #[arg(long, global = true, env = "KB_TABLES")]
    tables: Option<PathBuf>,

    /// Log level: error, warn, info, debug, or trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice formula such as 3d6+2, d20, or 2d10x5-1
    Roll {
        /// The formula to roll
        formula: String,

        /// Show the canonical formula alongside the value
        #[arg(short, long)]
        verbose: bool,

        /// Roll the formula this many times
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll COUNT dice with SIDES faces and print the sum
    Dice {
        /// Number of dice (at least 1)
        count: u32,

        /// Faces per die (at least 2)
        sides: u32,
    },

    /// Roll a success pool
    Pool {
        /// Faces per die
        sides: u32,

        /// Number of dice in the pool
        size: u32,

        /// Roll at or above this to score a success
        threshold: u32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll fudge dice (-1, 0, +1 each)
    Fudge {
        /// Number of dice
        #[arg(default_value = "4")]
        count: u32,
    },

    /// Check a probability: succeeds when a roll comes up at or under THRESHOLD
    Chance {
        /// Threshold (default: half the scale)
        threshold: Option<u32>,

        /// Scale: percent, permille, or permyriad
        #[arg(short, long, default_value = "percent")]
        scale: String,
    },

    /// Flip a coin
    Flip,

    /// Roll a d66 (tens and units d6)
    D66,

    /// Roll a d666 (two d6 for the check, one for the degree)
    D666,

    /// Roll on a random table
    Pick {
        /// Table name (see `kb tables`)
        table: String,

        /// Roll this many times
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// List available tables
    Tables,
}

fn init_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = RollerConfig { seed: cli.seed };
    let mut rng = config.build_rng();
    let tables = cli.tables.as_deref();

    let result = match cli.command {
        Commands::Roll {
            formula,
            verbose,
            times,
            json,
        } => commands::roll::run(&mut rng, &formula, verbose, times, json),
        Commands::Dice { count, sides } => commands::dice::run(&mut rng, count, sides),
        Commands::Pool {
            sides,
            size,
            threshold,
            json,
        } => commands::pool::run(&mut rng, sides, size, threshold, json),
        Commands::Fudge { count } => commands::fudge::run(&mut rng, count),
        Commands::Chance { threshold, scale } => {
            commands::chance::run(&mut rng, threshold, &scale)
        }
        Commands::Flip => commands::chance::flip(&mut rng),
        Commands::D66 => commands::special::d66(&mut rng),
        Commands::D666 => commands::special::d666(&mut rng),
        Commands::Pick { table, times } => commands::pick::run(&mut rng, tables, &table, times),
        Commands::Tables => commands::tables::run(tables),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
