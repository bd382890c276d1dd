//! Flavor-text tables for knucklebones.
//!
//! Built-in tables cover names, epithets, places of origin, oracle
//! answers, mishaps, instruments, and playing cards. Every table is a
//! plain list drawn from with [`kb_dice::pick`]. Custom tables can be
//! loaded from JSON and shadow built-ins of the same name.

pub mod curios;
pub mod custom;
pub mod error;
pub mod mishaps;
pub mod names;
pub mod oracle;
pub mod places;
pub mod table;

pub use custom::{CustomTables, TableInfo, TableSet, TableSource};
pub use error::{TableError, TableResult};
pub use table::Table;

use rand::Rng;

/// Pick one entry from a static list, or `""` when the list is empty.
pub(crate) fn pick_str<R: Rng + ?Sized>(
    rng: &mut R,
    list: &'static [&'static str],
) -> &'static str {
    kb_dice::pick(rng, list).copied().unwrap_or_default()
}

/// Normalize a table name: lowercase, with spaces and underscores as dashes.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '_'], "-")
}
