//! Custom tables loaded from JSON, layered over the built-ins.
//!
//! A table file looks like:
//!
//! ```json
//! {
//!   "tables": {
//!     "weather": ["Rain", "Fog", "Clear skies"],
//!     "tavern-name": ["The Prancing Pony", "The Green Dragon"]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::normalize_name;
use crate::table::Table;

/// User-supplied tables, keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTables {
    /// Table name to entries.
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<String>>,
}

impl CustomTables {
    /// Parse tables from a JSON document.
    ///
    /// Names that normalize to the same table have their entries merged.
    pub fn from_json(json: &str) -> TableResult<Self> {
        let raw: Self = serde_json::from_str(json)?;
        let mut tables: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, entries) in raw.tables {
            let normalized = normalize_name(&name);
            match tables.get_mut(&normalized) {
                Some(existing) => {
                    tracing::warn!(
                        table = %normalized,
                        spelling = %name,
                        "merging tables with the same name"
                    );
                    existing.extend(entries);
                }
                None => {
                    tables.insert(normalized, entries);
                }
            }
        }
        Ok(Self { tables })
    }

    /// Read and parse a JSON table file.
    pub fn load(path: &Path) -> TableResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let custom = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), count = custom.tables.len(), "loaded custom tables");
        Ok(custom)
    }

    /// Look up a table by name.
    pub fn get(&self, name: &str) -> Option<&Vec<String>> {
        self.tables.get(&normalize_name(name))
    }
}

/// Where a table comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    /// Shipped with knucklebones.
    Builtin,
    /// Loaded from a table file.
    Custom,
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Summary of one table for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    /// Canonical name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Number of equally likely draws.
    pub combinations: usize,
    /// Origin of the table.
    pub source: TableSource,
}

/// Built-in tables plus any custom ones. Custom tables win on name clashes.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    custom: CustomTables,
}

impl TableSet {
    /// Only the built-in tables.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-ins layered under `custom`.
    pub fn with_custom(custom: CustomTables) -> Self {
        Self { custom }
    }

    /// Roll on the table called `name`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R, name: &str) -> TableResult<String> {
        if let Some(entries) = self.custom.get(name) {
            return kb_dice::pick(rng, entries)
                .cloned()
                .ok_or_else(|| TableError::EmptyTable(normalize_name(name)));
        }
        Table::parse(name)
            .map(|table| table.generate(rng))
            .ok_or_else(|| TableError::UnknownTable(name.to_string()))
    }

    /// Describe every available table, custom tables after built-ins.
    pub fn list(&self) -> Vec<TableInfo> {
        let builtin = Table::all()
            .iter()
            .filter(|table| self.custom.get(table.name()).is_none())
            .map(|table| TableInfo {
                name: table.name().to_string(),
                description: table.description().to_string(),
                combinations: table.combinations(),
                source: TableSource::Builtin,
            });
        let custom = self.custom.tables.iter().map(|(name, entries)| TableInfo {
            name: name.clone(),
            description: String::new(),
            combinations: entries.len(),
            source: TableSource::Custom,
        });
        builtin.chain(custom).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    const WEATHER: &str = r#"{ "tables": { "Weather": ["Rain", "Fog"], "card": ["Joker"], "void": [] } }"#;

    #[test]
    fn from_json_normalizes_names() {
        let custom = CustomTables::from_json(WEATHER).unwrap();
        assert!(custom.tables.contains_key("weather"));
        assert_eq!(custom.get("WEATHER").map(Vec::len), Some(2));
    }

    #[test]
    fn same_name_spellings_are_merged() {
        let custom =
            CustomTables::from_json(r#"{ "tables": { "Weather": ["Rain"], "weather": ["Fog"] } }"#)
                .unwrap();
        assert_eq!(custom.tables.len(), 1);
        let weather = custom.get("weather").unwrap();
        assert_eq!(weather.len(), 2);
        assert!(weather.contains(&"Rain".to_string()));
        assert!(weather.contains(&"Fog".to_string()));
    }

    #[test]
    fn missing_tables_key_is_empty() {
        let custom = CustomTables::from_json("{}").unwrap();
        assert!(custom.tables.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = CustomTables::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TableError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WEATHER.as_bytes()).unwrap();
        let custom = CustomTables::load(file.path()).unwrap();
        assert_eq!(custom.tables.len(), 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = CustomTables::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }

    #[test]
    fn custom_shadows_builtin() {
        let set = TableSet::with_custom(CustomTables::from_json(WEATHER).unwrap());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(set.roll(&mut rng, "card").unwrap(), "Joker");
        let weather = set.roll(&mut rng, "weather").unwrap();
        assert!(weather == "Rain" || weather == "Fog");
    }

    #[test]
    fn builtin_still_reachable() {
        let set = TableSet::with_custom(CustomTables::from_json(WEATHER).unwrap());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!set.roll(&mut rng, "epithet").unwrap().is_empty());
    }

    #[test]
    fn empty_and_unknown_tables() {
        let set = TableSet::with_custom(CustomTables::from_json(WEATHER).unwrap());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            set.roll(&mut rng, "void"),
            Err(TableError::EmptyTable(name)) if name == "void"
        ));
        assert!(matches!(
            set.roll(&mut rng, "dragon-hoard"),
            Err(TableError::UnknownTable(_))
        ));
    }

    #[test]
    fn list_replaces_shadowed_builtin() {
        let set = TableSet::with_custom(CustomTables::from_json(WEATHER).unwrap());
        let listing = set.list();
        let cards: Vec<&TableInfo> = listing.iter().filter(|t| t.name == "card").collect();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].source, TableSource::Custom);
        assert_eq!(listing.len(), Table::all().len() - 1 + 3);
    }

    #[test]
    fn builtin_listing_covers_all_tables() {
        assert_eq!(TableSet::builtin().list().len(), Table::all().len());
    }
}
