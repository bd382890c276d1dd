use std::path::Path;

use rand::rngs::StdRng;

pub fn run(rng: &mut StdRng, tables: Option<&Path>, table: &str, times: u32) -> Result<(), String> {
    let set = super::load_tables(tables)?;
    for _ in 0..times.max(1) {
        let entry = set.roll(rng, table).map_err(|e| e.to_string())?;
        println!("{}", entry.trim());
    }
    Ok(())
}
