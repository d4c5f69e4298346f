//! Core types for the Arc Spirits dice planner.
//!
//! This crate defines the data model shared by the optimizer, the Monte
//! Carlo verifier, and the CLI: progressive-unlock dice, trait targets
//! extracted from class reward schedules, fit/search configuration, and
//! the comparison reports an optimization run produces. It is independent
//! of any frontend — you can construct every type programmatically or
//! deserialize it from JSON.

/// Fit and search configuration.
pub mod config;
/// Progressive-unlock dice and their faces.
pub mod die;
/// Error types used throughout the crate.
pub mod error;
/// Expected-value formulas for progressive dice.
pub mod ev;
/// Comparison reports produced by optimization runs.
pub mod report;
/// Trait targets and per-class target bundles.
pub mod target;

/// Re-export configuration types.
pub use config::{FitConfig, SearchConfig};
/// Re-export dice types.
pub use die::{Die, DieFace, format_unlock_level};
/// Re-export error types.
pub use error::{PlanError, PlanResult};
/// Re-export the expected-value formulas.
pub use ev::{expected_value, expected_value_reroll};
/// Re-export report types.
pub use report::{ClassReport, FitReport, SearchReport, TraitComparison};
/// Re-export target types.
pub use target::{ClassTargets, TraitColor, TraitTarget};
