//! CLI frontend for the Arc Spirits dice planner.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcplan",
    about = "Arc Spirits Planner — fit a single progressive-unlock die to class reward schedules",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample class-targets JSON file to start from
    Init {
        /// Path of the file to create
        path: PathBuf,
    },

    /// Print the default unlock schedule for a die
    Thresholds {
        /// Number of faces on the die
        #[arg(short, long, default_value = "6")]
        faces: usize,

        /// Lowest trait level of the range
        #[arg(long, default_value = "0")]
        min_trait: u32,

        /// Highest trait level of the range
        #[arg(long, default_value = "9")]
        max_trait: u32,
    },

    /// Fit face values for one class with a fixed unlock schedule
    Fit {
        /// Class-targets JSON file
        #[arg(short, long)]
        targets: PathBuf,

        /// Key of the class to fit
        #[arg(short, long)]
        class: String,

        /// Number of faces on the die
        #[arg(short, long, default_value = "6")]
        faces: usize,

        /// Comma-separated unlock thresholds, one per face
        /// (default: evenly spaced over the class's trait range)
        #[arg(long, value_delimiter = ',')]
        thresholds: Option<Vec<u32>>,

        /// Lower clamp bound for face values
        #[arg(long, default_value = "0.0")]
        min: f64,

        /// Upper clamp bound for face values
        #[arg(long, default_value = "100.0")]
        max: f64,

        /// Keep negative fitted values instead of clamping them up
        #[arg(long)]
        allow_negative: bool,

        /// Emit the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Search unlock thresholds and dice counts across every class
    Search {
        /// Class-targets JSON file
        #[arg(short, long)]
        targets: PathBuf,

        /// Number of faces on the shared die
        #[arg(short, long, default_value = "6")]
        faces: usize,

        /// Upper bound on dice rolled per breakpoint
        #[arg(long, default_value = "4")]
        max_dice: u32,

        /// Number of candidate configurations to evaluate
        #[arg(short, long, default_value = "500")]
        iterations: usize,

        /// Weight favoring more, smaller dice at similar error
        #[arg(long, default_value = "0.0")]
        variance_penalty: f64,

        /// RNG seed for the proposal strategy
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Emit the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Fit a die for one class, then verify it by Monte Carlo
    Simulate {
        /// Class-targets JSON file
        #[arg(short, long)]
        targets: PathBuf,

        /// Key of the class to fit
        #[arg(short, long)]
        class: String,

        /// Number of faces on the die
        #[arg(short, long, default_value = "6")]
        faces: usize,

        /// Trait level to roll at
        #[arg(long)]
        trait_level: u32,

        /// Number of dice to roll
        #[arg(short, long, default_value = "1")]
        dice: u32,

        /// Number of Monte Carlo rolls
        #[arg(short, long, default_value = "10000")]
        rolls: usize,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Use the re-roll-locked-faces scoring model
        #[arg(long)]
        reroll: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { path } => commands::init::run(&path),
        Commands::Thresholds {
            faces,
            min_trait,
            max_trait,
        } => commands::thresholds::run(faces, min_trait, max_trait),
        Commands::Fit {
            targets,
            class,
            faces,
            thresholds,
            min,
            max,
            allow_negative,
            json,
        } => commands::fit::run(
            &targets,
            &class,
            faces,
            thresholds,
            min,
            max,
            allow_negative,
            json,
        ),
        Commands::Search {
            targets,
            faces,
            max_dice,
            iterations,
            variance_penalty,
            seed,
            json,
        } => commands::search::run(
            &targets,
            faces,
            max_dice,
            iterations,
            variance_penalty,
            seed,
            json,
        ),
        Commands::Simulate {
            targets,
            class,
            faces,
            trait_level,
            dice,
            rolls,
            seed,
            reroll,
        } => commands::simulate::run(&targets, &class, faces, trait_level, dice, rolls, seed, reroll),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
