//! Normal-equations construction for the face-value system.
//!
//! The fit is an over-determined linear least-squares problem: `m` trait
//! samples constrain `n` unknown face values, usually with `m > n`. Each
//! sample contributes one row of the coefficient matrix `A`:
//!
//! ```text
//! A[t][f] = dice_count[t] / n   if unlock_thresholds[f] <= trait_level[t]
//!           0                   otherwise
//! b[t]    = target_ev[t]
//! ```
//!
//! which is exactly the locked-is-zero EV formula with the face values
//! left symbolic. The reduction `AᵗA x = Aᵗb` turns this into an `n × n`
//! system solved in closed form by [`crate::matrix::solve_system`].

use arc_core::TraitTarget;

use crate::matrix::{Matrix, solve_system};

/// Best-fit face values for the given samples and unlock schedule.
///
/// Returns one finite value per face, unconstrained by any clamp bounds
/// (bounds are the caller's concern). A face that no sample unlocks has
/// an all-zero coefficient column; the pivot floor in the eliminator
/// turns that into a near-zero fitted value rather than an error.
pub fn solve_face_values(targets: &[TraitTarget], unlock_thresholds: &[u32]) -> Vec<f64> {
    let n = unlock_thresholds.len();
    if n == 0 {
        return Vec::new();
    }

    let m = targets.len();
    let mut a = Matrix::zeros(m, n);
    let mut b = vec![0.0; m];
    for (t, target) in targets.iter().enumerate() {
        for (f, &threshold) in unlock_thresholds.iter().enumerate() {
            if threshold <= target.trait_level {
                a.set(t, f, f64::from(target.dice_count) / n as f64);
            }
        }
        b[t] = target.target_ev;
    }

    // Normal equations: AᵗA x = Aᵗb.
    let mut ata = Matrix::zeros(n, n);
    let mut atb = vec![0.0; n];
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for t in 0..m {
                sum += a.get(t, i) * a.get(t, j);
            }
            ata.set(i, j, sum);
        }
        for t in 0..m {
            atb[i] += a.get(t, i) * b[t];
        }
    }

    solve_system(&ata, &atb)
}
