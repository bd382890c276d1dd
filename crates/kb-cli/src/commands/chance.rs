use colored::Colorize;
use rand::rngs::StdRng;

use kb_dice::{ChanceScale, probability_check};

pub fn run(rng: &mut StdRng, threshold: Option<u32>, scale: &str) -> Result<(), String> {
    let scale = ChanceScale::parse(scale).ok_or_else(|| {
        format!("unknown scale '{scale}' (expected percent, permille, or permyriad)")
    })?;
    let threshold_shown = threshold.unwrap_or_else(|| scale.default_threshold());
    let passed = probability_check(rng, scale, threshold);
    let verdict = if passed { "yes".green() } else { "no".red() };
    println!("  {threshold_shown} in {}: {verdict}", scale.sides());
    Ok(())
}

pub fn flip(rng: &mut StdRng) -> Result<(), String> {
    let side = if kb_dice::flip(rng) { "heads" } else { "tails" };
    println!("{side}");
    Ok(())
}
