use std::path::Path;

use arc_core::{FitConfig, format_unlock_level};
use arc_optimizer::{default_thresholds, fit_die};
use arc_sim::{SimConfig, simulate_ev, simulate_ev_reroll};
use colored::Colorize;

#[allow(clippy::too_many_arguments)]
pub fn run(
    targets: &Path,
    class_key: &str,
    faces: usize,
    trait_level: u32,
    dice: u32,
    rolls: usize,
    seed: u64,
    reroll: bool,
) -> Result<(), String> {
    let classes = super::load_classes(targets)?;
    let class = super::find_class(&classes, class_key)?;

    let config = FitConfig::default().with_num_faces(faces).with_thresholds(
        default_thresholds(faces, class.trait_range.0, class.trait_range.1),
    );
    let report = fit_die(&class.targets, &config).map_err(|e| e.to_string())?;
    let die = &report.die;

    let sim_config = SimConfig::default().with_rolls(rolls).with_seed(seed);
    let summary = if reroll {
        simulate_ev_reroll(die, trait_level, dice, &sim_config)
    } else {
        simulate_ev(die, trait_level, dice, &sim_config)
    }
    .map_err(|e| e.to_string())?;

    let model = if reroll { "re-roll" } else { "locked-is-zero" };
    println!(
        "Rolling {}x {} at trait {} ({} unlocked, {} model):",
        dice,
        die.name,
        trait_level,
        format_unlock_level(die.unlocked_faces(trait_level), die.num_sides),
        model
    );
    println!("  rolls        {}", summary.rolls);
    println!("  sample mean  {:.4}", summary.mean);
    println!("  std dev      {:.4}", summary.std_dev);
    println!("  analytic EV  {:.4}", summary.analytic_ev);

    let deviation = format!("  deviation    {:.4}", summary.abs_deviation);
    if summary.abs_deviation <= 0.1 {
        println!("{}", deviation.green());
    } else {
        println!("{}", deviation.yellow());
    }
    Ok(())
}
