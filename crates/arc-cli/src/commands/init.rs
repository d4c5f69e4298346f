use std::path::Path;

use arc_core::{ClassTargets, TraitColor, TraitTarget};

pub fn run(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("{} already exists", path.display()));
    }

    let sample = vec![
        ClassTargets {
            key: "ember-warden".into(),
            name: "Ember Warden".into(),
            color: TraitColor::Gold,
            trait_range: (1, 9),
            targets: vec![
                TraitTarget {
                    trait_level: 1,
                    target_ev: 1.0,
                    dice_count: 2,
                    color: TraitColor::Bronze,
                },
                TraitTarget {
                    trait_level: 3,
                    target_ev: 2.5,
                    dice_count: 2,
                    color: TraitColor::Silver,
                },
                TraitTarget {
                    trait_level: 6,
                    target_ev: 5.0,
                    dice_count: 3,
                    color: TraitColor::Gold,
                },
                TraitTarget {
                    trait_level: 9,
                    target_ev: 9.0,
                    dice_count: 4,
                    color: TraitColor::Prismatic,
                },
            ],
        },
        ClassTargets {
            key: "tide-caller".into(),
            name: "Tide Caller".into(),
            color: TraitColor::Silver,
            trait_range: (2, 8),
            targets: vec![
                TraitTarget {
                    trait_level: 2,
                    target_ev: 1.5,
                    dice_count: 1,
                    color: TraitColor::Bronze,
                },
                TraitTarget {
                    trait_level: 5,
                    target_ev: 4.0,
                    dice_count: 2,
                    color: TraitColor::Silver,
                },
                TraitTarget {
                    trait_level: 8,
                    target_ev: 7.5,
                    dice_count: 3,
                    color: TraitColor::Gold,
                },
            ],
        },
    ];

    let json = serde_json::to_string_pretty(&sample)
        .map_err(|e| format!("cannot serialize sample targets: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;

    println!("Wrote sample targets for 2 classes to {}.", path.display());
    println!("Edit the file, then run: arcplan search --targets {}", path.display());
    Ok(())
}
