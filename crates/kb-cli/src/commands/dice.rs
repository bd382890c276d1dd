use rand::rngs::StdRng;

pub fn run(rng: &mut StdRng, count: u32, sides: u32) -> Result<(), String> {
    println!("{}", kb_dice::roll(rng, count, sides));
    Ok(())
}
