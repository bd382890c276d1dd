//! The catalogue of built-in tables.

use rand::Rng;

use crate::{curios, mishaps, names, normalize_name, oracle, places};

/// A built-in table that can be rolled on by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Female given name.
    FemaleName,
    /// Male given name.
    MaleName,
    /// Epithet or byname.
    Epithet,
    /// Place of origin.
    Extraction,
    /// Orc name with tribe.
    OrcName,
    /// Magic eight ball answer.
    MagicEightBall,
    /// Result of being dropped to zero hit points.
    Incapacitation,
    /// Folk musical instrument.
    MusicalInstrument,
    /// Madness, phobia, or delusion.
    Insanity,
    /// Playing card (rank and suit).
    Card,
    /// Playing card suit.
    CardSuit,
    /// Playing card rank.
    CardRank,
}

impl Table {
    /// All built-in tables, in listing order.
    pub fn all() -> &'static [Self] {
        &[
            Self::FemaleName,
            Self::MaleName,
            Self::Epithet,
            Self::Extraction,
            Self::OrcName,
            Self::MagicEightBall,
            Self::Incapacitation,
            Self::MusicalInstrument,
            Self::Insanity,
            Self::Card,
            Self::CardSuit,
            Self::CardRank,
        ]
    }

    /// Canonical name, as accepted by [`Table::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Self::FemaleName => "female-name",
            Self::MaleName => "male-name",
            Self::Epithet => "epithet",
            Self::Extraction => "extraction",
            Self::OrcName => "orc-name",
            Self::MagicEightBall => "magic-eight-ball",
            Self::Incapacitation => "incapacitation",
            Self::MusicalInstrument => "musical-instrument",
            Self::Insanity => "insanity",
            Self::Card => "card",
            Self::CardSuit => "card-suit",
            Self::CardRank => "card-rank",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::FemaleName => "Female name from prefix and suffix syllables",
            Self::MaleName => "Male name from prefix and suffix syllables",
            Self::Epithet => "Epithet or byname",
            Self::Extraction => "Place of origin",
            Self::OrcName => "Orc name with tribe",
            Self::MagicEightBall => "Magic eight ball oracle answer",
            Self::Incapacitation => "What happens at zero hit points",
            Self::MusicalInstrument => "Folk musical instrument",
            Self::Insanity => "Madness, phobia, or delusion",
            Self::Card => "Playing card, rank and suit",
            Self::CardSuit => "Playing card suit",
            Self::CardRank => "Playing card rank",
        }
    }

    /// Parse a table name, ignoring case and accepting spaces or underscores.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_name(s).as_str() {
            "eightball" | "8-ball" | "8ball" => Some(Self::MagicEightBall),
            "place" | "origin" => Some(Self::Extraction),
            "instrument" => Some(Self::MusicalInstrument),
            name => Self::all().iter().copied().find(|t| t.name() == name),
        }
    }

    /// Number of equally likely draws. Repeated list entries count separately.
    pub fn combinations(self) -> usize {
        match self {
            Self::FemaleName => names::FEMALE_PREFIXES.len() * names::FEMALE_SUFFIXES.len(),
            Self::MaleName => names::MALE_PREFIXES.len() * names::MALE_SUFFIXES.len(),
            Self::Epithet => names::EPITHETS.len(),
            Self::Extraction => {
                places::EXTRACTION_ADJECTIVES.len() * places::EXTRACTION_PLACES.len()
            }
            Self::OrcName => {
                names::ORC_PREFIXES.len() * names::ORC_SUFFIXES.len() * names::ORC_TRIBES.len()
            }
            Self::MagicEightBall => oracle::MAGIC_EIGHT_BALL.len(),
            Self::Incapacitation => mishaps::INCAPACITATIONS.len(),
            Self::MusicalInstrument => curios::MUSICAL_INSTRUMENTS.len(),
            Self::Insanity => mishaps::INSANITIES.len(),
            Self::Card => curios::CARD_RANKS.len() * curios::CARD_SUITS.len(),
            Self::CardSuit => curios::CARD_SUITS.len(),
            Self::CardRank => curios::CARD_RANKS.len(),
        }
    }

    /// Roll on this table.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            Self::FemaleName => names::female_name(rng),
            Self::MaleName => names::male_name(rng),
            Self::Epithet => names::epithet(rng),
            Self::Extraction => places::extraction(rng),
            Self::OrcName => names::orc_name(rng),
            Self::MagicEightBall => oracle::magic_eight_ball(rng).to_string(),
            Self::Incapacitation => mishaps::incapacitation(rng).to_string(),
            Self::MusicalInstrument => curios::musical_instrument(rng).to_string(),
            Self::Insanity => mishaps::insanity(rng).to_string(),
            Self::Card => curios::card(rng),
            Self::CardSuit => curios::card_suit(rng).to_string(),
            Self::CardRank => curios::card_rank(rng).to_string(),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_table_parses_by_its_name() {
        for table in Table::all() {
            assert_eq!(Table::parse(table.name()), Some(*table));
        }
    }

    #[test]
    fn parse_is_forgiving() {
        assert_eq!(Table::parse("Female Name"), Some(Table::FemaleName));
        assert_eq!(Table::parse("ORC_NAME"), Some(Table::OrcName));
        assert_eq!(Table::parse("8ball"), Some(Table::MagicEightBall));
        assert_eq!(Table::parse("origin"), Some(Table::Extraction));
        assert_eq!(Table::parse("dragon-hoard"), None);
    }

    #[test]
    fn every_table_generates_text() {
        let mut rng = StdRng::seed_from_u64(42);
        for table in Table::all() {
            assert!(!table.generate(&mut rng).is_empty(), "{table} was empty");
        }
    }

    #[test]
    fn combinations() {
        assert_eq!(Table::Card.combinations(), 52);
        assert_eq!(Table::MagicEightBall.combinations(), 20);
        assert_eq!(
            Table::Extraction.combinations(),
            places::EXTRACTION_ADJECTIVES.len() * places::EXTRACTION_PLACES.len()
        );
    }

    #[test]
    fn names_listing() {
        let listing: Vec<&str> = Table::all().iter().map(|t| t.name()).collect();
        insta::assert_snapshot!(listing.join(", "), @"female-name, male-name, epithet, extraction, orc-name, magic-eight-ball, incapacitation, musical-instrument, insanity, card, card-suit, card-rank");
    }
}
