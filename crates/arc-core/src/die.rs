//! Progressive-unlock dice.
//!
//! A planner die differs from an ordinary polyhedral die in one way: each
//! face carries an unlock threshold, the trait level at which that face
//! becomes active. Below its threshold a face still occupies a side of the
//! die but scores zero (or is re-rolled, depending on the scoring model —
//! see [`crate::ev`]).

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// One face of a progressive-unlock die.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieFace {
    /// Position of this face on the die, `0..num_sides`.
    pub index: usize,
    /// Value scored when this face is rolled while unlocked.
    pub value: f64,
    /// Trait level at which this face becomes active.
    pub unlock_at: u32,
    /// Optional display label for card rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A named die built from progressive-unlock faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Die {
    /// Display name of the die.
    pub name: String,
    /// Faces in index order, exactly `num_sides` of them.
    pub faces: Vec<DieFace>,
    /// Number of sides on the die.
    pub num_sides: usize,
}

impl Die {
    /// Build a die from a value/threshold pair per face.
    ///
    /// Faces are indexed in the order given; the caller is responsible for
    /// supplying values and thresholds in unlock order.
    pub fn from_values(name: impl Into<String>, values: &[f64], unlock_at: &[u32]) -> Self {
        let faces = values
            .iter()
            .zip(unlock_at.iter())
            .enumerate()
            .map(|(index, (&value, &unlock))| DieFace {
                index,
                value,
                unlock_at: unlock,
                label: None,
            })
            .collect::<Vec<_>>();
        Self {
            name: name.into(),
            num_sides: faces.len(),
            faces,
        }
    }

    /// Count the faces active at the given trait level.
    pub fn unlocked_faces(&self, trait_level: u32) -> usize {
        self.faces
            .iter()
            .filter(|f| f.unlock_at <= trait_level)
            .count()
    }

    /// Check the structural invariants: face count matches the declared
    /// side count and indices run `0..num_sides` in order.
    pub fn validate(&self) -> PlanResult<()> {
        if self.faces.len() != self.num_sides {
            return Err(PlanError::FaceCountMismatch {
                name: self.name.clone(),
                num_sides: self.num_sides,
                faces: self.faces.len(),
            });
        }
        for (position, face) in self.faces.iter().enumerate() {
            if face.index != position {
                return Err(PlanError::FaceIndexOutOfOrder {
                    name: self.name.clone(),
                    found: face.index,
                    position,
                });
            }
        }
        Ok(())
    }

    /// Returns true if face values never decrease with index.
    pub fn values_monotonic(&self) -> bool {
        self.faces.windows(2).all(|w| w[0].value <= w[1].value)
    }
}

/// Format an unlock count for display, e.g. `"3/6"`.
pub fn format_unlock_level(unlocked: usize, num_sides: usize) -> String {
    format!("{unlocked}/{num_sides}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_die() -> Die {
        Die::from_values("Spirit d6", &[1.0, 1.5, 2.0, 3.0, 4.5, 6.0], &[0, 0, 2, 4, 6, 8])
    }

    #[test]
    fn from_values_assigns_indices() {
        let die = sample_die();
        assert_eq!(die.num_sides, 6);
        for (i, face) in die.faces.iter().enumerate() {
            assert_eq!(face.index, i);
        }
    }

    #[test]
    fn unlocked_faces_counts_thresholds() {
        let die = sample_die();
        assert_eq!(die.unlocked_faces(0), 2);
        assert_eq!(die.unlocked_faces(3), 3);
        assert_eq!(die.unlocked_faces(8), 6);
    }

    #[test]
    fn validate_accepts_well_formed_die() {
        assert!(sample_die().validate().is_ok());
    }

    #[test]
    fn validate_rejects_side_count_mismatch() {
        let mut die = sample_die();
        die.num_sides = 8;
        assert!(matches!(
            die.validate(),
            Err(PlanError::FaceCountMismatch { num_sides: 8, faces: 6, .. })
        ));
    }

    #[test]
    fn validate_rejects_shuffled_indices() {
        let mut die = sample_die();
        die.faces.swap(1, 3);
        assert!(matches!(
            die.validate(),
            Err(PlanError::FaceIndexOutOfOrder { position: 1, .. })
        ));
    }

    #[test]
    fn monotonic_check() {
        assert!(sample_die().values_monotonic());
        let mut die = sample_die();
        die.faces[4].value = 0.5;
        assert!(!die.values_monotonic());
    }

    #[test]
    fn unlock_level_display() {
        assert_eq!(format_unlock_level(3, 6), "3/6");
        assert_eq!(format_unlock_level(0, 8), "0/8");
    }

    #[test]
    fn die_json_round_trip() {
        let die = sample_die();
        let json = serde_json::to_string(&die).unwrap();
        let back: Die = serde_json::from_str(&json).unwrap();
        assert_eq!(back, die);
    }
}
