//! Odds and ends: musical instruments and playing cards.

use rand::Rng;

use crate::pick_str;

/// Folk musical instruments (20 entries).
pub const MUSICAL_INSTRUMENTS: &[&str] = &[
    "Pan pipes",
    "Ocarina",
    "Flute",
    "Lute",
    "Fiddle",
    "Jawharp",
    "Concertina",
    "Harmonica",
    "Tamborine",
    "Lyre",
    "Zyther",
    "Bongos",
    "Shawm",
    "Bag pipes",
    "Recorder",
    "Oboe",
    "Bugle",
    "Ukulele",
    "Quijada",
    "Tabor & Three-hole Pipe",
];

/// Playing card suits (4 entries).
pub const CARD_SUITS: &[&str] = &[
    "♥",
    "♠",
    "♦",
    "♣",
];

/// Playing card ranks (13 entries).
pub const CARD_RANKS: &[&str] = &[
    "A",
    "2",
    "3",
    "4",
    "5",
    "6",
    "7",
    "8",
    "9",
    "10",
    "J",
    "Q",
    "K",
];

/// A musical instrument.
pub fn musical_instrument<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_str(rng, MUSICAL_INSTRUMENTS)
}

/// A card suit.
pub fn card_suit<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_str(rng, CARD_SUITS)
}

/// A card rank.
pub fn card_rank<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_str(rng, CARD_RANKS)
}

/// A playing card, rank then suit, e.g. `10♠`. Draws are independent (no deck).
pub fn card<R: Rng + ?Sized>(rng: &mut R) -> String {
    let rank = card_rank(rng);
    let suit = card_suit(rng);
    format!("{rank}{suit}")
}
