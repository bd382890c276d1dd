pub mod chance;
pub mod dice;
pub mod fudge;
pub mod pick;
pub mod pool;
pub mod roll;
pub mod special;
pub mod tables;

use std::path::Path;

use kb_tables::{CustomTables, TableSet};

/// Build the table set, layering the custom table file if one was given.
fn load_tables(path: Option<&Path>) -> Result<TableSet, String> {
    match path {
        Some(path) => {
            let custom = CustomTables::load(path).map_err(|e| e.to_string())?;
            Ok(TableSet::with_custom(custom))
        }
        None => Ok(TableSet::builtin()),
    }
}

/// Serialize a value as pretty JSON and print it.
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
