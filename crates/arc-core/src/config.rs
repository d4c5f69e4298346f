//! Fit and search configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Configuration for a single-die fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitConfig {
    /// Number of faces (unknowns) on the die.
    pub num_faces: usize,
    /// Trait level at which each face unlocks, one per face.
    pub unlock_thresholds: Vec<u32>,
    /// Lower clamp bound for fitted face values.
    pub min_face_value: f64,
    /// Upper clamp bound for fitted face values.
    pub max_face_value: f64,
    /// Clamp negative solver output up to `min_face_value`.
    pub force_non_negative: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            num_faces: 6,
            unlock_thresholds: vec![0; 6],
            min_face_value: 0.0,
            max_face_value: 100.0,
            force_non_negative: true,
        }
    }
}

impl FitConfig {
    /// Set the face count and reset thresholds to all-zero to keep the
    /// shape invariant.
    pub fn with_num_faces(mut self, num_faces: usize) -> Self {
        self.num_faces = num_faces;
        self.unlock_thresholds = vec![0; num_faces];
        self
    }

    /// Set the per-face unlock thresholds.
    pub fn with_thresholds(mut self, thresholds: Vec<u32>) -> Self {
        self.unlock_thresholds = thresholds;
        self
    }

    /// Set the face-value clamp bounds.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_face_value = min;
        self.max_face_value = max;
        self
    }

    /// Allow the fit to keep negative face values.
    pub fn allow_negative(mut self) -> Self {
        self.force_non_negative = false;
        self
    }

    /// Fail fast on shape violations before any matrix is built.
    ///
    /// Out-of-order thresholds are deliberately tolerated; only shapes
    /// that would produce undefined matrix dimensions are rejected.
    pub fn validate(&self) -> PlanResult<()> {
        if self.num_faces == 0 {
            return Err(PlanError::NoFaces);
        }
        if self.unlock_thresholds.len() != self.num_faces {
            return Err(PlanError::ThresholdCountMismatch {
                expected: self.num_faces,
                got: self.unlock_thresholds.len(),
            });
        }
        if self.min_face_value > self.max_face_value {
            return Err(PlanError::InvertedBounds {
                min: self.min_face_value,
                max: self.max_face_value,
            });
        }
        Ok(())
    }
}

/// Configuration for the global search across classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of faces on the shared die.
    pub num_faces: usize,
    /// Upper bound on dice rolled per trait breakpoint.
    pub max_dice: u32,
    /// Number of candidate configurations to evaluate.
    pub iterations: usize,
    /// Weight of the fewer-larger-dice penalty; 0 disables it.
    pub variance_penalty: f64,
    /// RNG seed for the proposal strategy.
    pub seed: u64,
    /// Clamp bounds and sign handling for fitted face values.
    pub fit: FitBounds,
}

/// Clamp bounds shared by every candidate fit during a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitBounds {
    /// Lower clamp bound for fitted face values.
    pub min_face_value: f64,
    /// Upper clamp bound for fitted face values.
    pub max_face_value: f64,
    /// Clamp negative solver output up to the lower bound.
    pub force_non_negative: bool,
}

impl Default for FitBounds {
    fn default() -> Self {
        Self {
            min_face_value: 0.0,
            max_face_value: 100.0,
            force_non_negative: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_faces: 6,
            max_dice: 4,
            iterations: 200,
            variance_penalty: 0.0,
            seed: 42,
            fit: FitBounds::default(),
        }
    }
}

impl SearchConfig {
    /// Set the face count of the shared die.
    pub fn with_num_faces(mut self, num_faces: usize) -> Self {
        self.num_faces = num_faces;
        self
    }

    /// Set the dice-per-trait upper bound.
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Set the search budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the variance penalty weight.
    pub fn with_variance_penalty(mut self, penalty: f64) -> Self {
        self.variance_penalty = penalty;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fail fast on shape violations.
    pub fn validate(&self) -> PlanResult<()> {
        if self.num_faces == 0 {
            return Err(PlanError::NoFaces);
        }
        if self.max_dice == 0 {
            return Err(PlanError::NoDice);
        }
        if self.fit.min_face_value > self.fit.max_face_value {
            return Err(PlanError::InvertedBounds {
                min: self.fit.min_face_value,
                max: self.fit.max_face_value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_config_default_is_valid() {
        assert!(FitConfig::default().validate().is_ok());
    }

    #[test]
    fn fit_config_builder_chain() {
        let config = FitConfig::default()
            .with_num_faces(4)
            .with_thresholds(vec![0, 0, 3, 6])
            .with_bounds(0.5, 12.0);
        assert_eq!(config.num_faces, 4);
        assert_eq!(config.unlock_thresholds, vec![0, 0, 3, 6]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fit_config_rejects_zero_faces() {
        let config = FitConfig::default().with_num_faces(0);
        assert!(matches!(config.validate(), Err(PlanError::NoFaces)));
    }

    #[test]
    fn fit_config_rejects_threshold_mismatch() {
        let config = FitConfig::default().with_thresholds(vec![0, 1]);
        assert!(matches!(
            config.validate(),
            Err(PlanError::ThresholdCountMismatch { expected: 6, got: 2 })
        ));
    }

    #[test]
    fn fit_config_rejects_inverted_bounds() {
        let config = FitConfig::default().with_bounds(5.0, 1.0);
        assert!(matches!(config.validate(), Err(PlanError::InvertedBounds { .. })));
    }

    #[test]
    fn fit_config_tolerates_unsorted_thresholds() {
        let config = FitConfig::default().with_thresholds(vec![5, 0, 3, 1, 2, 4]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn search_config_builder_and_validation() {
        let config = SearchConfig::default()
            .with_num_faces(8)
            .with_max_dice(3)
            .with_iterations(50)
            .with_variance_penalty(0.2)
            .with_seed(7);
        assert!(config.validate().is_ok());
        assert_eq!(config.num_faces, 8);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn search_config_rejects_zero_dice() {
        let config = SearchConfig::default().with_max_dice(0);
        assert!(matches!(config.validate(), Err(PlanError::NoDice)));
    }
}
