//! Places of origin ("extraction"): a compass or quality word and a landform.

use rand::Rng;

use crate::pick_str;

/// Compass and quality words for places of origin (21 entries).
pub const EXTRACTION_ADJECTIVES: &[&str] = &[
    "North",
    "South",
    "East",
    "West",
    "Midnight",
    "Noontide",
    "Sunrise",
    "Sunset",
    "Outer",
    "Inner",
    "Middle",
    "Central",
    "Hidden",
    "Shadow",
    "Ivory",
    "Clouded",
    "Umber",
    "Violet",
    "Azure",
    "Verdant",
    "Crimson",
];

/// Landforms for places of origin, with a leading space (60 entries).
pub const EXTRACTION_PLACES: &[&str] = &[
    " Mount(ain(s))",
    " Crag(s)",
    " Reaches",
    " Cave(s)",
    " Hill(s)",
    " Down(s)",
    " Plain(s)",
    " Meadow(s)",
    " Grassland",
    " Lowland",
    " Highland",
    " Upland",
    " Bottom",
    " Heath",
    " Moor",
    " Savannah",
    " Steppe(s)",
    " Waste(s)",
    " Desert",
    " Forest",
    " Wood(s)",
    " Thicket",
    " Timberland",
    " Glen",
    " Grove",
    " Jungle",
    " Marsh",
    " Swamp",
    " Quagmire",
    " Fen",
    " Bog",
    " Mire",
    " Valley",
    " River",
    " Canyon",
    " Brook",
    " Floods",
    " Sea",
    " Mere",
    " Deep",
    " Gorge",
    " Expanse",
    " Flats",
    " Plateau",
    " Cavern(s)",
    " City",
    " Town",
    " Village",
    " Empire",
    " Port",
    " Kingdom",
    " March",
    " Borderland",
    " Empire",
    " Caliphate",
    " Dominion",
    " Duchy",
    " Principality",
    " Canton",
    " Khanate",
];

/// A place of origin, e.g. `North Crag(s)`.
pub fn extraction<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}",
        pick_str(rng, EXTRACTION_ADJECTIVES),
        pick_str(rng, EXTRACTION_PLACES)
    )
}
