//! Property tests for the optimizer's structural invariants.

use arc_core::{FitConfig, TraitColor, TraitTarget};
use arc_optimizer::isotonic::project_non_decreasing;
use arc_optimizer::{default_thresholds, fit_die, solve_face_values};
use proptest::prelude::*;

fn arb_targets() -> impl Strategy<Value = Vec<TraitTarget>> {
    prop::collection::vec(
        (0u32..12, 0.0f64..50.0, 1u32..6).prop_map(|(trait_level, target_ev, dice_count)| {
            TraitTarget {
                trait_level,
                target_ev,
                dice_count,
                color: TraitColor::Bronze,
            }
        }),
        1..10,
    )
}

fn arb_thresholds() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..15, 1..8)
}

proptest! {
    #[test]
    fn solver_output_is_finite_and_shaped(targets in arb_targets(), thresholds in arb_thresholds()) {
        let values = solve_face_values(&targets, &thresholds);
        prop_assert_eq!(values.len(), thresholds.len());
        prop_assert!(values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn fitted_die_has_configured_shape(targets in arb_targets(), thresholds in arb_thresholds()) {
        let config = FitConfig::default()
            .with_num_faces(thresholds.len())
            .with_thresholds(thresholds);
        let report = fit_die(&targets, &config).unwrap();
        prop_assert_eq!(report.die.faces.len(), config.num_faces);
        for (i, face) in report.die.faces.iter().enumerate() {
            prop_assert_eq!(face.index, i);
        }
        prop_assert_eq!(report.trait_results.len(), targets.len());
    }

    #[test]
    fn fitted_values_stay_in_bounds(targets in arb_targets(), thresholds in arb_thresholds()) {
        let config = FitConfig::default()
            .with_num_faces(thresholds.len())
            .with_thresholds(thresholds)
            .with_bounds(0.0, 25.0);
        let report = fit_die(&targets, &config).unwrap();
        for face in &report.die.faces {
            prop_assert!(face.value >= 0.0);
            prop_assert!(face.value <= 25.0);
        }
    }

    #[test]
    fn projection_is_non_decreasing_and_length_preserving(
        values in prop::collection::vec(-100.0f64..100.0, 0..12)
    ) {
        let projected = project_non_decreasing(&values);
        prop_assert_eq!(projected.len(), values.len());
        prop_assert!(projected.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn default_thresholds_are_sorted_and_in_range(
        num_faces in 1usize..10,
        min in 0u32..10,
        extra in 1u32..15,
    ) {
        let max = min + extra;
        let thresholds = default_thresholds(num_faces, min, max);
        prop_assert_eq!(thresholds.len(), num_faces);
        prop_assert!(thresholds.windows(2).all(|w| w[0] <= w[1]));
        for &t in thresholds.iter().skip(2) {
            prop_assert!(t >= min && t <= max);
        }
    }
}
