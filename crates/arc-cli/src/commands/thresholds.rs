use arc_optimizer::default_thresholds;

pub fn run(faces: usize, min_trait: u32, max_trait: u32) -> Result<(), String> {
    if faces == 0 {
        return Err("a die needs at least one face".into());
    }
    if min_trait > max_trait {
        return Err(format!("min trait {min_trait} exceeds max trait {max_trait}"));
    }

    let thresholds = default_thresholds(faces, min_trait, max_trait);
    println!("Default unlock schedule for a d{faces} over traits {min_trait}-{max_trait}:");
    for (index, threshold) in thresholds.iter().enumerate() {
        println!("  face {index}: unlocks at trait {threshold}");
    }
    Ok(())
}
