//! Comparison reports produced by optimization runs.
//!
//! Reports are the planner's only diagnostic channel: weak fits never
//! raise, they show up as large `error`/`percent_error` entries here.

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::target::TraitColor;

/// How one trait breakpoint fares under a candidate die.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitComparison {
    /// Trait level of the breakpoint.
    pub trait_level: u32,
    /// Rarity tier of the breakpoint.
    pub color: TraitColor,
    /// Dice rolled at this breakpoint.
    pub dice_count: u32,
    /// Faces of the candidate die active at this trait level.
    pub unlocked_faces: usize,
    /// Expected value of the existing multi-dice system.
    pub old_system_ev: f64,
    /// Expected value of the candidate die.
    pub new_system_ev: f64,
    /// `|new − old|`, rounded to 3 decimals.
    pub error: f64,
    /// `error / old × 100`, rounded to 1 decimal; 0 when the target is 0.
    pub percent_error: f64,
}

/// Result of a single-die fit against one class's targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    /// The fitted die.
    pub die: Die,
    /// One comparison per input target, in input order.
    pub trait_results: Vec<TraitComparison>,
    /// Sum of per-target errors, rounded to 3 decimals.
    pub total_error: f64,
    /// Mean of squared per-target errors, rounded to 3 decimals.
    pub mean_squared_error: f64,
}

/// One class's outcome under the shared die found by the global search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassReport {
    /// Stable class identifier.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Tier used when presenting this class.
    pub color: TraitColor,
    /// Per-breakpoint comparisons under the shared die.
    pub traits: Vec<TraitComparison>,
    /// Sum of this class's per-breakpoint errors, rounded to 3 decimals.
    pub total_error: f64,
}

/// Best candidate found by the global search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The shared die, face values non-decreasing by index.
    pub die: Die,
    /// Per-class outcomes under that die.
    pub classes: Vec<ClassReport>,
    /// Sum of all classes' total errors.
    pub total_error: f64,
    /// Score the search minimized: total error plus the variance penalty.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_report_round_trips_through_json() {
        let report = SearchReport {
            die: Die::from_values("shared", &[1.0, 2.0], &[0, 3]),
            classes: vec![ClassReport {
                key: "ember-warden".into(),
                name: "Ember Warden".into(),
                color: TraitColor::Gold,
                traits: vec![TraitComparison {
                    trait_level: 3,
                    color: TraitColor::Silver,
                    dice_count: 2,
                    unlocked_faces: 2,
                    old_system_ev: 3.0,
                    new_system_ev: 3.0,
                    error: 0.0,
                    percent_error: 0.0,
                }],
                total_error: 0.0,
            }],
            total_error: 0.0,
            score: 0.0,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
