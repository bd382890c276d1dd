use rand::rngs::StdRng;

pub fn run(rng: &mut StdRng, count: u32) -> Result<(), String> {
    let total = kb_dice::fudge(rng, count);
    println!("{total:+}");
    Ok(())
}
