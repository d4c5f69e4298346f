//! Monte Carlo verification for fitted progressive-unlock dice.
//!
//! The optimizer's expected values are closed-form; this crate checks
//! them empirically by actually rolling a die many times with a seeded
//! RNG, in both scoring models:
//!
//! - locked-is-zero: every side can come up, locked faces score 0;
//! - re-roll: only unlocked faces can come up (locked sides are
//!   re-rolled), scoring their face value.
//!
//! Useful when eyeballing a candidate before committing it to card art,
//! and as an independent cross-check on the analytic formulas.

/// Error types for the simulator.
pub mod error;

pub use error::{SimError, SimResult};

use arc_core::{Die, expected_value, expected_value_reroll};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of complete rolls (each roll throws every die once).
    pub rolls: usize,
    /// RNG seed for reproducible runs.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rolls: 10_000,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Set the number of rolls.
    pub fn with_rolls(mut self, rolls: usize) -> Self {
        self.rolls = rolls;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Summary statistics of a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSummary {
    /// Sample mean of the per-roll totals.
    pub mean: f64,
    /// Sample standard deviation of the per-roll totals.
    pub std_dev: f64,
    /// The closed-form expected value for the same setup.
    pub analytic_ev: f64,
    /// `|mean − analytic_ev|`.
    pub abs_deviation: f64,
    /// Number of rolls performed.
    pub rolls: usize,
}

/// Estimate the EV under the locked-is-zero model.
///
/// Each die picks one of its sides uniformly; a side whose face is still
/// locked at `trait_level` scores zero.
pub fn simulate_ev(
    die: &Die,
    trait_level: u32,
    dice_count: u32,
    config: &SimConfig,
) -> SimResult<SimSummary> {
    check_inputs(die, config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let analytic = expected_value(die, trait_level, dice_count);
    let totals = roll_totals(die, trait_level, dice_count, config.rolls, &mut rng, false);
    Ok(summarize(&totals, analytic))
}

/// Estimate the EV under the re-roll model.
///
/// Locked sides are re-rolled, so each die picks uniformly among the
/// faces already unlocked at `trait_level`; with nothing unlocked every
/// roll scores zero.
pub fn simulate_ev_reroll(
    die: &Die,
    trait_level: u32,
    dice_count: u32,
    config: &SimConfig,
) -> SimResult<SimSummary> {
    check_inputs(die, config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let analytic = expected_value_reroll(die, trait_level, dice_count);
    let totals = roll_totals(die, trait_level, dice_count, config.rolls, &mut rng, true);
    Ok(summarize(&totals, analytic))
}

fn check_inputs(die: &Die, config: &SimConfig) -> SimResult<()> {
    die.validate()?;
    // A zero-sided die is structurally consistent (0 faces, 0 sides) but
    // there is nothing to sample from it.
    if die.num_sides == 0 {
        return Err(SimError::NoFaces(die.name.clone()));
    }
    if config.rolls == 0 {
        return Err(SimError::NoRolls);
    }
    Ok(())
}

fn roll_totals(
    die: &Die,
    trait_level: u32,
    dice_count: u32,
    rolls: usize,
    rng: &mut StdRng,
    reroll_locked: bool,
) -> Vec<f64> {
    let unlocked: Vec<f64> = die
        .faces
        .iter()
        .filter(|f| f.unlock_at <= trait_level)
        .map(|f| f.value)
        .collect();

    let mut totals = Vec::with_capacity(rolls);
    for _ in 0..rolls {
        let mut total = 0.0;
        for _ in 0..dice_count {
            if reroll_locked {
                if !unlocked.is_empty() {
                    total += unlocked[rng.random_range(0..unlocked.len())];
                }
            } else {
                let face = &die.faces[rng.random_range(0..die.num_sides)];
                if face.unlock_at <= trait_level {
                    total += face.value;
                }
            }
        }
        totals.push(total);
    }
    totals
}

fn summarize(totals: &[f64], analytic: f64) -> SimSummary {
    let n = totals.len() as f64;
    let mean = totals.iter().sum::<f64>() / n;
    let variance = totals.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;
    SimSummary {
        mean,
        std_dev: variance.sqrt(),
        analytic_ev: analytic,
        abs_deviation: (mean - analytic).abs(),
        rolls: totals.len(),
    }
}
