use std::path::Path;

use arc_core::FitConfig;
use arc_optimizer::{default_thresholds, fit_die};
use colored::Colorize;

#[allow(clippy::too_many_arguments)]
pub fn run(
    targets: &Path,
    class_key: &str,
    faces: usize,
    thresholds: Option<Vec<u32>>,
    min: f64,
    max: f64,
    allow_negative: bool,
    json: bool,
) -> Result<(), String> {
    let classes = super::load_classes(targets)?;
    let class = super::find_class(&classes, class_key)?;

    let thresholds = thresholds.unwrap_or_else(|| {
        default_thresholds(faces, class.trait_range.0, class.trait_range.1)
    });
    let mut config = FitConfig::default()
        .with_num_faces(faces)
        .with_thresholds(thresholds)
        .with_bounds(min, max);
    if allow_negative {
        config = config.allow_negative();
    }

    let report = fit_die(&class.targets, &config).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("cannot serialize report: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("Fitted {} for {}:", report.die.name, class.name);
    println!("{}", super::die_table(&report.die));
    println!();
    println!("{}", super::comparison_table(&report.trait_results, report.die.num_sides));
    println!();
    let summary = format!(
        "total error {:.3}, mean squared error {:.3}",
        report.total_error, report.mean_squared_error
    );
    if report.total_error <= 0.5 {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }
    Ok(())
}
