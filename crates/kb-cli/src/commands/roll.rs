use colored::Colorize;
use rand::rngs::StdRng;

use kb_dice::{DiceFormula, FormulaRoll, RollOutput, parse_formula};

pub fn run(
    rng: &mut StdRng,
    formula: &str,
    verbose: bool,
    times: u32,
    json: bool,
) -> Result<(), String> {
    if json {
        let parsed = DiceFormula::parse(formula).map_err(|e| e.to_string())?;
        let rolls: Vec<FormulaRoll> = (0..times.max(1)).map(|_| parsed.roll(rng)).collect();
        return super::print_json(&rolls);
    }

    for _ in 0..times.max(1) {
        match parse_formula(rng, formula, verbose) {
            RollOutput::Value(value) => println!("{value}"),
            RollOutput::Verbose(rolled) => println!(
                "{}:{}",
                rolled.formula.to_string().bold(),
                rolled.value.to_string().green()
            ),
            unparseable @ RollOutput::Unparseable => {
                // The message is the result; there is nothing more to roll.
                println!("{}", unparseable.to_string().yellow());
                break;
            }
        }
    }

    Ok(())
}
