use std::path::Path;

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

pub fn run(tables: Option<&Path>) -> Result<(), String> {
    let set = super::load_tables(tables)?;

    let mut listing = Table::new();
    listing
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Table", "Source", "Results", "Description"]);

    for info in set.list() {
        listing.add_row(vec![
            info.name,
            info.source.to_string(),
            info.combinations.to_string(),
            info.description,
        ]);
    }

    println!("{listing}");
    Ok(())
}
