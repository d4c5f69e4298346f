//! Proposal strategies for the global search.
//!
//! The outer search loop is agnostic about how candidates are generated;
//! anything implementing [`ProposalStrategy`] can drive it. Two
//! strategies ship: a seeded random explorer that alternates fresh
//! samples with mutations of the best candidate so far, and a
//! deterministic coarse grid useful as a reproducible baseline.

use arc_core::{ClassTargets, SearchConfig};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::fit::default_thresholds;

/// One point in the search space: an unlock schedule for the shared die
/// plus a dice-count schedule per class (one count per trait target).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Unlock threshold per face, non-decreasing.
    pub thresholds: Vec<u32>,
    /// Dice counts per class, aligned with each class's target list.
    pub dice_counts: Vec<Vec<u32>>,
}

impl Candidate {
    /// The degenerate fallback: every face available from trait 0 and a
    /// single die per breakpoint. Used when the search budget is zero or
    /// there is nothing to fit.
    pub fn fallback(num_faces: usize, targets_per_class: &[usize]) -> Self {
        Self {
            thresholds: vec![0; num_faces],
            dice_counts: targets_per_class.iter().map(|&n| vec![1; n]).collect(),
        }
    }
}

/// Generates candidate configurations for the search loop.
///
/// Implementations must be deterministic for a fixed construction seed;
/// `current_best` is the best candidate seen so far, if any, for
/// strategies that refine rather than resample.
pub trait ProposalStrategy {
    /// Produce the candidate to evaluate at this iteration.
    fn propose(&mut self, iteration: usize, current_best: Option<&Candidate>) -> Candidate;
}

/// Seeded random exploration with local refinement.
///
/// Iteration 0 proposes the baseline (default unlock schedule, the
/// classes' existing dice counts) so the search never does worse than
/// the status quo. After that, odd iterations mutate the best candidate
/// so far and even iterations resample fresh.
pub struct RandomProposal {
    rng: StdRng,
    num_faces: usize,
    max_dice: u32,
    trait_span: (u32, u32),
    baseline_dice: Vec<Vec<u32>>,
}

impl RandomProposal {
    /// Build a strategy for the given classes, seeded from the config.
    pub fn new(classes: &[ClassTargets], config: &SearchConfig) -> Self {
        let trait_span = span_of(classes);
        let baseline_dice = classes
            .iter()
            .map(|c| c.targets.iter().map(|t| t.dice_count.clamp(1, config.max_dice)).collect())
            .collect();
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            num_faces: config.num_faces,
            max_dice: config.max_dice,
            trait_span,
            baseline_dice,
        }
    }

    fn fresh(&mut self) -> Candidate {
        let always_available = self.num_faces.min(2);
        let mut thresholds = vec![0; always_available];
        for _ in always_available..self.num_faces {
            thresholds.push(self.rng.random_range(self.trait_span.0..=self.trait_span.1));
        }
        thresholds.sort_unstable();

        let dice_counts = self
            .baseline_dice
            .iter()
            .map(|per_class| {
                per_class
                    .iter()
                    .map(|_| self.rng.random_range(1..=self.max_dice))
                    .collect()
            })
            .collect();
        Candidate {
            thresholds,
            dice_counts,
        }
    }

    fn mutate(&mut self, best: &Candidate) -> Candidate {
        let mut candidate = best.clone();

        // Nudge one late-unlocking threshold, keeping the schedule sorted.
        if candidate.thresholds.len() > 2 {
            let i = self.rng.random_range(2..candidate.thresholds.len());
            candidate.thresholds[i] =
                self.rng.random_range(self.trait_span.0..=self.trait_span.1);
            candidate.thresholds.sort_unstable();
        }

        // Step one dice count up or down within bounds.
        let class_count = candidate.dice_counts.len();
        if class_count > 0 {
            let c = self.rng.random_range(0..class_count);
            if !candidate.dice_counts[c].is_empty() {
                let t = self.rng.random_range(0..candidate.dice_counts[c].len());
                let current = candidate.dice_counts[c][t];
                let next = if self.rng.random_bool(0.5) {
                    current.saturating_add(1).min(self.max_dice)
                } else {
                    current.saturating_sub(1).max(1)
                };
                candidate.dice_counts[c][t] = next;
            }
        }
        candidate
    }
}

impl ProposalStrategy for RandomProposal {
    fn propose(&mut self, iteration: usize, current_best: Option<&Candidate>) -> Candidate {
        if iteration == 0 {
            return Candidate {
                thresholds: default_thresholds(self.num_faces, self.trait_span.0, self.trait_span.1),
                dice_counts: self.baseline_dice.clone(),
            };
        }
        match current_best {
            Some(best) if iteration % 2 == 1 => self.mutate(best),
            _ => self.fresh(),
        }
    }
}

/// Deterministic coarse sweep over uniform dice counts.
///
/// Iteration `k` proposes the default unlock schedule with every trait
/// rolling `1 + (k mod max_dice)` dice. Useful as a seed-free baseline
/// and in tests where full reproducibility without an RNG is wanted.
pub struct GridProposal {
    num_faces: usize,
    max_dice: u32,
    trait_span: (u32, u32),
    targets_per_class: Vec<usize>,
}

impl GridProposal {
    /// Build a sweep for the given classes.
    pub fn new(classes: &[ClassTargets], config: &SearchConfig) -> Self {
        Self {
            num_faces: config.num_faces,
            max_dice: config.max_dice,
            trait_span: span_of(classes),
            targets_per_class: classes.iter().map(|c| c.targets.len()).collect(),
        }
    }
}

impl ProposalStrategy for GridProposal {
    fn propose(&mut self, iteration: usize, _current_best: Option<&Candidate>) -> Candidate {
        let dice = 1 + (iteration as u32) % self.max_dice;
        Candidate {
            thresholds: default_thresholds(self.num_faces, self.trait_span.0, self.trait_span.1),
            dice_counts: self
                .targets_per_class
                .iter()
                .map(|&n| vec![dice; n])
                .collect(),
        }
    }
}

/// The union of every class's trait range, `(0, 0)` when empty.
fn span_of(classes: &[ClassTargets]) -> (u32, u32) {
    let min = classes.iter().map(|c| c.trait_range.0).min().unwrap_or(0);
    let max = classes.iter().map(|c| c.trait_range.1).max().unwrap_or(0);
    (min, max.max(min))
}
