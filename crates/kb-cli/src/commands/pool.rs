use colored::Colorize;
use rand::rngs::StdRng;

use kb_dice::{PoolOutcome, success_pool};

pub fn run(
    rng: &mut StdRng,
    sides: u32,
    size: u32,
    threshold: u32,
    json: bool,
) -> Result<(), String> {
    let result = success_pool(rng, sides, size, threshold);
    if json {
        return super::print_json(&result);
    }

    let rolls: Vec<String> = result.rolls.iter().map(u32::to_string).collect();
    let outcome = result.outcome.to_string();
    let outcome = match result.outcome {
        PoolOutcome::Success { .. } => outcome.green(),
        PoolOutcome::Failure => outcome.yellow(),
        PoolOutcome::Fumble => outcome.red().bold(),
    };
    println!("  Rolls: {}", rolls.join(", "));
    println!("  Net successes: {}", result.net_successes);
    println!("  Outcome: {outcome}");
    Ok(())
}
