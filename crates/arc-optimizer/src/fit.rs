//! Single-die least-squares fit.
//!
//! Turns raw solver output into a presentable die: clamp to the
//! configured bounds, round to card-printable precision, then score the
//! candidate against every input target so weak fits are visible in the
//! report rather than hidden.

use arc_core::{
    Die, FitConfig, FitReport, PlanResult, TraitComparison, TraitTarget, expected_value,
};

use crate::lstsq::solve_face_values;

/// Round to `dp` decimal places.
pub(crate) fn round_dp(value: f64, dp: u32) -> f64 {
    let scale = 10f64.powi(dp as i32);
    (value * scale).round() / scale
}

/// Apply the sign and bound constraints from the fit configuration.
pub(crate) fn clamp_values(
    raw: &[f64],
    min: f64,
    max: f64,
    force_non_negative: bool,
) -> Vec<f64> {
    raw.iter()
        .map(|&v| {
            if force_non_negative && v < 0.0 {
                min
            } else {
                v.clamp(min, max)
            }
        })
        .collect()
}

/// Score a die against a set of targets.
///
/// Returns the per-target comparisons plus the summed error and mean
/// squared error, all rounded for display.
pub(crate) fn compare_targets(die: &Die, targets: &[TraitTarget]) -> (Vec<TraitComparison>, f64, f64) {
    let mut comparisons = Vec::with_capacity(targets.len());
    let mut total = 0.0;
    let mut squared = 0.0;
    for target in targets {
        let actual = expected_value(die, target.trait_level, target.dice_count);
        let error = (actual - target.target_ev).abs();
        let percent = if target.target_ev == 0.0 {
            0.0
        } else {
            round_dp(error / target.target_ev * 100.0, 1)
        };
        total += error;
        squared += error * error;
        comparisons.push(TraitComparison {
            trait_level: target.trait_level,
            color: target.color,
            dice_count: target.dice_count,
            unlocked_faces: die.unlocked_faces(target.trait_level),
            old_system_ev: target.target_ev,
            new_system_ev: actual,
            error: round_dp(error, 3),
            percent_error: percent,
        });
    }
    let mse = if targets.is_empty() {
        0.0
    } else {
        squared / targets.len() as f64
    };
    (comparisons, round_dp(total, 3), round_dp(mse, 3))
}

/// Fit one die to a class's trait targets.
///
/// Solves the least-squares system for the configured unlock schedule,
/// clamps and rounds the face values, and reports how the candidate
/// tracks each target. Weak data never fails; only a malformed
/// configuration does.
pub fn fit_die(targets: &[TraitTarget], config: &FitConfig) -> PlanResult<FitReport> {
    config.validate()?;

    let raw = solve_face_values(targets, &config.unlock_thresholds);
    let clamped = clamp_values(
        &raw,
        config.min_face_value,
        config.max_face_value,
        config.force_non_negative,
    );
    let values: Vec<f64> = clamped.iter().map(|&v| round_dp(v, 2)).collect();

    let die = Die::from_values(
        format!("d{}", config.num_faces),
        &values,
        &config.unlock_thresholds,
    );
    let (trait_results, total_error, mean_squared_error) = compare_targets(&die, targets);

    Ok(FitReport {
        die,
        trait_results,
        total_error,
        mean_squared_error,
    })
}

/// Default unlock schedule for a die over a class's trait range.
///
/// The first two faces are always available (unlock at trait 0); the
/// remaining faces unlock at evenly spaced trait levels strictly inside
/// `[min_trait, max_trait]`.
pub fn default_thresholds(num_faces: usize, min_trait: u32, max_trait: u32) -> Vec<u32> {
    let always_available = num_faces.min(2);
    let mut thresholds = vec![0; always_available];
    let remaining = num_faces - always_available;
    if remaining == 0 {
        return thresholds;
    }
    let step = (f64::from(max_trait) - f64::from(min_trait)) / (remaining as f64 + 1.0);
    for i in 0..remaining {
        let level = f64::from(min_trait) + step * (i as f64 + 1.0);
        thresholds.push(level.round() as u32);
    }
    thresholds
}
