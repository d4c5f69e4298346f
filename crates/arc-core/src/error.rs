//! Error types for the planner data model.

/// Errors raised when a caller hands the planner a malformed value.
///
/// These all indicate a programming error on the caller's side; weak or
/// under-determined optimization *data* never produces an error, only a
/// best-effort result with visible diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A die's face list does not match its declared side count.
    #[error("die '{name}' declares {num_sides} sides but has {faces} faces")]
    FaceCountMismatch {
        /// Name of the offending die.
        name: String,
        /// Declared side count.
        num_sides: usize,
        /// Actual number of faces.
        faces: usize,
    },

    /// Face indices are not the contiguous sequence `0..num_sides`.
    #[error("die '{name}' has face index {found} at position {position}")]
    FaceIndexOutOfOrder {
        /// Name of the offending die.
        name: String,
        /// Index value found.
        found: usize,
        /// Position in the face list.
        position: usize,
    },

    /// A configuration declared zero die faces.
    #[error("configuration requires at least one die face")]
    NoFaces,

    /// The unlock-threshold list does not match the face count.
    #[error("expected {expected} unlock thresholds, got {got}")]
    ThresholdCountMismatch {
        /// Number of faces configured.
        expected: usize,
        /// Number of thresholds supplied.
        got: usize,
    },

    /// The face-value clamp bounds are inverted.
    #[error("min face value {min} exceeds max face value {max}")]
    InvertedBounds {
        /// Lower clamp bound.
        min: f64,
        /// Upper clamp bound.
        max: f64,
    },

    /// A search configuration allows zero dice per trait.
    #[error("max dice per trait must be at least 1")]
    NoDice,
}

/// Convenience result type for planner operations.
pub type PlanResult<T> = Result<T, PlanError>;
