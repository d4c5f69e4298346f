use std::path::Path;

use arc_core::SearchConfig;
use arc_optimizer::search_die;
use colored::Colorize;

pub fn run(
    targets: &Path,
    faces: usize,
    max_dice: u32,
    iterations: usize,
    variance_penalty: f64,
    seed: u64,
    json: bool,
) -> Result<(), String> {
    let classes = super::load_classes(targets)?;

    let config = SearchConfig::default()
        .with_num_faces(faces)
        .with_max_dice(max_dice)
        .with_iterations(iterations)
        .with_variance_penalty(variance_penalty)
        .with_seed(seed);
    let report = search_die(&classes, &config).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("cannot serialize report: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "Best shared die after {} iterations (seed {}):",
        iterations, seed
    );
    println!("{}", super::die_table(&report.die));

    for class in &report.classes {
        println!();
        println!("{} ({}):", class.name.bold(), class.color);
        println!("{}", super::comparison_table(&class.traits, report.die.num_sides));
        println!("  class error {:.3}", class.total_error);
    }

    println!();
    let summary = format!(
        "total error {:.3}, search score {:.3}",
        report.total_error, report.score
    );
    println!("{}", summary.bold());
    Ok(())
}
