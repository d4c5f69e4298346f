//! Expected-value formulas for progressive dice.
//!
//! Two scoring models exist in the game and both are exposed:
//!
//! - **Locked-is-zero** ([`expected_value`]): a locked face still occupies
//!   a side of the die and scores zero when rolled. EV is the sum of
//!   unlocked face values over the full side count, times the dice count.
//! - **Re-roll** ([`expected_value_reroll`]): locked faces are re-rolled
//!   until an unlocked face comes up, so EV is the *average* of unlocked
//!   face values, times the dice count.
//!
//! The distinction matters whenever a die is partially unlocked; the two
//! formulas only coincide when every face is active.

use crate::die::Die;

/// Expected value under the locked-is-zero model.
///
/// `dice_count × Σ(unlocked face values) / num_sides`.
pub fn expected_value(die: &Die, trait_level: u32, dice_count: u32) -> f64 {
    if die.num_sides == 0 {
        return 0.0;
    }
    let unlocked_sum: f64 = die
        .faces
        .iter()
        .filter(|f| f.unlock_at <= trait_level)
        .map(|f| f.value)
        .sum();
    f64::from(dice_count) * unlocked_sum / die.num_sides as f64
}

/// Expected value under the re-roll model.
///
/// `dice_count × mean(unlocked face values)`, or `0.0` when no face is
/// unlocked yet.
pub fn expected_value_reroll(die: &Die, trait_level: u32, dice_count: u32) -> f64 {
    let unlocked: Vec<f64> = die
        .faces
        .iter()
        .filter(|f| f.unlock_at <= trait_level)
        .map(|f| f.value)
        .collect();
    if unlocked.is_empty() {
        return 0.0;
    }
    let mean = unlocked.iter().sum::<f64>() / unlocked.len() as f64;
    f64::from(dice_count) * mean
}
