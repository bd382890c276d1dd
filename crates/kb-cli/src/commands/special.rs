use colored::Colorize;
use rand::rngs::StdRng;

use kb_dice::D666Roll;

pub fn d66(rng: &mut StdRng) -> Result<(), String> {
    println!("{}", kb_dice::d66(rng));
    Ok(())
}

pub fn d666(rng: &mut StdRng) -> Result<(), String> {
    let result = kb_dice::d666(rng);
    match result {
        D666Roll::DivineIntervention => println!("{}", result.to_string().cyan().bold()),
        D666Roll::InfernalIntervention => println!("{}", result.to_string().red().bold()),
        D666Roll::Check { .. } => println!("{result}"),
    }
    Ok(())
}
