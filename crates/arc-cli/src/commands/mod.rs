pub mod fit;
pub mod init;
pub mod search;
pub mod simulate;
pub mod thresholds;

use std::path::Path;

use arc_core::{ClassTargets, Die, TraitComparison, format_unlock_level};
use comfy_table::{ContentArrangement, Table};

/// Load a class-targets JSON file.
fn load_classes(path: &Path) -> Result<Vec<ClassTargets>, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("invalid targets file {}: {e}", path.display()))
}

/// Find one class by key, listing the available keys on a miss.
fn find_class<'a>(classes: &'a [ClassTargets], key: &str) -> Result<&'a ClassTargets, String> {
    classes.iter().find(|c| c.key == key).ok_or_else(|| {
        let available: Vec<&str> = classes.iter().map(|c| c.key.as_str()).collect();
        format!("class '{}' not found (available: {})", key, available.join(", "))
    })
}

/// Render a die's faces as a table.
fn die_table(die: &Die) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "Value", "Unlocks at trait"]);
    for face in &die.faces {
        table.add_row(vec![
            face.index.to_string(),
            format!("{:.2}", face.value),
            face.unlock_at.to_string(),
        ]);
    }
    table
}

/// Render per-trait comparisons as a table.
fn comparison_table(traits: &[TraitComparison], num_sides: usize) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Trait", "Color", "Dice", "Unlocked", "Target EV", "New EV", "Error", "% Error",
    ]);
    for row in traits {
        table.add_row(vec![
            row.trait_level.to_string(),
            row.color.to_string(),
            row.dice_count.to_string(),
            format_unlock_level(row.unlocked_faces, num_sides),
            format!("{:.2}", row.old_system_ev),
            format!("{:.2}", row.new_system_ev),
            format!("{:.3}", row.error),
            format!("{:.1}", row.percent_error),
        ]);
    }
    table
}
