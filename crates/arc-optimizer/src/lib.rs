//! Dice expected-value optimizer for the Arc Spirits planner.
//!
//! Fits the face values of a single progressive-unlock die so that its
//! expected value matches, as closely as possible, the targets produced
//! by the game's existing multi-dice reward schedules. Two entry points:
//!
//! - [`fit::fit_die`] — closed-form least-squares fit of face values for
//!   one class, with fixed unlock thresholds and dice counts.
//! - [`search::search_die`] — iterative global search across several
//!   classes at once, additionally searching unlock thresholds and
//!   per-trait dice counts, under a monotonic face-value constraint.
//!
//! The numeric policy throughout is graceful degradation: singular or
//! under-determined systems are regularized, degenerate inputs produce a
//! valid default result, and approximation quality is reported through
//! the comparison tables rather than raised as an error. The only hard
//! failures are shape violations in the configuration, caught before any
//! matrix is built.

/// Single-die least-squares fit.
pub mod fit;
/// Projection onto non-decreasing sequences (pool-adjacent-violators).
pub mod isotonic;
/// Normal-equations construction for the face-value system.
pub mod lstsq;
/// Dense row-major matrix and Gaussian elimination.
pub mod matrix;
/// Global search across classes, thresholds, and dice counts.
pub mod search;

/// Re-export the fit entry points.
pub use fit::{default_thresholds, fit_die};
/// Re-export the solver.
pub use lstsq::solve_face_values;
/// Re-export the search entry points and strategy seam.
pub use search::{Candidate, GridProposal, ProposalStrategy, RandomProposal, search_die, search_die_with};
