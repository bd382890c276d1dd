//! Name tables: syllables for people and orcs, plus epithets.
//!
//! Names are built by gluing a prefix to a suffix. Parenthesized letters
//! such as `Boun(ty)` are optional spellings left for the reader to choose.

use rand::Rng;

use crate::pick_str;

/// Opening syllables for female names (98 entries).
pub const FEMALE_PREFIXES: &[&str] = &[
    "Angel",
    "Anim",
    "Bear",
    "Bless",
    "Blush",
    "Boni",
    "Boun(ty)",
    "Claw",
    "Cloud",
    "Dale",
    "Dark",
    "Dawn",
    "Doe",
    "Doll",
    "Dour",
    "Dove",
    "Dusk",
    "Eagle",
    "El(f)",
    "Ewe",
    "Fair(y)",
    "Fate",
    "Fawn",
    "Fay",
    "Fell",
    "Fiend",
    "Flax(en)",
    "Foal",
    "Fond",
    "Free",
    "Fur",
    "Gay",
    "Gem",
    "Gift",
    "Glad",
    "Glen",
    "Glor",
    "Gob",
    "Gold",
    "Grey",
    "Hiss",
    "Hon(ey)",
    "Honor",
    "Hope",
    "Horse",
    "Jade",
    "Joy",
    "Just",
    "Kind",
    "Knife",
    "Lamb",
    "Lass",
    "Law",
    "Leaf",
    "Lewd",
    "Life",
    "Love",
    "Lune",
    "Lynx",
    "Mare",
    "Mead",
    "Mew",
    "Mild",
    "Milk",
    "Moon",
    "Nag",
    "Nob(le)",
    "Pale",
    "Peace",
    "Peach",
    "Pearl",
    "Queen",
    "Red",
    "Rich",
    "Rose",
    "Rud",
    "Sacre",
    "Sea(born)",
    "Sil(ven)",
    "Sky",
    "Snow(y)",
    "Soft",
    "Sol(ar)",
    "Spear",
    "Star",
    "Sun",
    "Sweet",
    "Sword",
    "Thor",
    "True",
    "Tyr",
    "Ven(us)",
    "Vile",
    "Wand",
    "War",
    "Wave",
    "Wite",
    "Wild",
];

/// Closing syllables for female names (101 entries).
pub const FEMALE_SUFFIXES: &[&str] = &[
    "a",
    "acey",
    "ache",
    "ada",
    "adne",
    "aelia",
    "al",
    "alia",
    "alie",
    "alla",
    "anca",
    "anda",
    "ance",
    "anche",
    "andra",
    "ara",
    "arla",
    "asia",
    "asla",
    "asta",
    "ata",
    "berta",
    "beth",
    "beth",
    "bia",
    "ca",
    "cella",
    "cia",
    "da",
    "dicta",
    "dida",
    "drede",
    "een",
    "elia",
    "ella",
    "ella",
    "elle",
    "slot",
    "entia",
    "esa",
    "esca",
    "ethe",
    "etta",
    "ette",
    "farah",
    "garde",
    "genia",
    "herita",
    "ia",
    "icent",
    "ie",
    "ien",
    "ienna",
    "ika",
    "inda",
    "is",
    "isa",
    "itta",
    "la",
    "laide",
    "lene",
    "line",
    "ly",
    "lyn",
    "ma",
    "maid",
    "mela",
    "mina",
    "mira",
    "nah",
    "natta",
    "onia",
    "ora",
    "phne",
    "reda",
    "rey",
    "rie",
    "rifa",
    "rina",
    "rine",
    "rora",
    "sey",
    "silla",
    "sola",
    "strella",
    "sula",
    "tha",
    "thia",
    "thora",
    "titia",
    "tola",
    "ula",
    "usta",
    "va",
    "vere",
    "vette",
    "vilia",
    "vina",
    "vita",
    "wig",
    "wina",
];

/// Opening syllables for male names (99 entries).
pub const MALE_PREFIXES: &[&str] = &[
    "Ache",
    "Aim",
    "Bald",
    "Bear",
    "Blush",
    "Boar",
    "Boast",
    "Boil",
    "Boni",
    "Boy",
    "Bower",
    "Churl",
    "Corn",
    "Cut",
    "Dark",
    "Dire",
    "Dour",
    "Dross",
    "Dupe",
    "Dusk",
    "Dwar(f)",
    "Ebb",
    "El(f)",
    "Fag",
    "Fate",
    "Fay",
    "Fell",
    "Fly",
    "Fowl",
    "Gard",
    "Gay",
    "Gilt",
    "Girth",
    "Glut",
    "Goad",
    "Gold",
    "Gorge",
    "Grey",
    "Groan",
    "Haft",
    "Hale",
    "Hawk",
    "Haught",
    "Hiss",
    "Hock",
    "Hoof",
    "Horn",
    "Kin",
    "Kith",
    "Lank",
    "Leaf",
    "Lewd",
    "Louse",
    "Lure",
    "Man",
    "Mars",
    "Meed",
    "Moat",
    "Mould",
    "Muff",
    "Muse",
    "Not",
    "Numb",
    "Odd",
    "Ooze",
    "Ox",
    "Pale",
    "Port",
    "Quid",
    "Rau",
    "Red",
    "Rich",
    "Rob",
    "Rod",
    "Rud",
    "Ruff",
    "Run",
    "Rush",
    "Scoff",
    "Skew",
    "Sky",
    "Sly",
    "Sow",
    "Stave",
    "Steed",
    "Swar",
    "Thor",
    "Tort",
    "Twig",
    "Twit",
    "Vain",
    "Vent",
    "Vile",
    "Wail",
    "War",
    "Whip",
    "Wise",
    "Worm",
    "Yip",
];

/// Closing syllables for male names (99 entries).
pub const MALE_SUFFIXES: &[&str] = &[
    "ander",
    "ard",
    "bald",
    "ban",
    "baugh",
    "bert",
    "brand",
    "cas",
    "celot",
    "cent",
    "cester",
    "cott",
    "dane",
    "dard",
    "doch",
    "dolph",
    "don",
    "doric",
    "dower",
    "dred",
    "fird",
    "ford",
    "fram",
    "fred",
    "frid",
    "fried",
    "gal",
    "gard",
    "gernon",
    "gill",
    "gurd",
    "gus",
    "ham",
    "hard",
    "hart",
    "helm",
    "horne",
    "ister",
    "kild",
    "lan",
    "lard",
    "ley",
    "lisle",
    "loch",
    "man",
    "mar",
    "mas",
    "mon",
    "mond",
    "mour",
    "mund",
    "nald",
    "nard",
    "nath",
    "ney",
    "olas",
    "pold",
    "rad",
    "ram",
    "rard",
    "red",
    "rence",
    "reth",
    "rick",
    "ridge",
    "riel",
    "ron",
    "rone",
    "roth",
    "sander",
    "sard",
    "shall",
    "shaw",
    "son",
    "steen",
    "stone",
    "ter",
    "than",
    "ther",
    "thon",
    "thur",
    "ton",
    "tor",
    "tran",
    "tus",
    "ulf",
    "vald",
    "vard",
    "ven",
    "vid",
    "vred",
    "wald",
    "wallader",
    "ward",
    "worth",
    "wig",
    "win",
    "wood",
    "yard",
];

/// Epithets and bynames (101 entries).
pub const EPITHETS: &[&str] = &[
    "Agodeshalf",
    "Agog",
    "Backslapper",
    "Benish",
    "Blackleggs",
    "Bluff",
    "Bowyer",
    "Cad",
    "Carouser",
    "Churlish",
    "Chuffy",
    "Clear",
    "Chary-eyed",
    "Chocker",
    "Codger",
    "Croaker",
    "Crumpbacked",
    "Conycatcher",
    "Crochety",
    "Crossbiter",
    "Cussed",
    "Dewduster",
    "Dogberry",
    "Duffer",
    "Dullswift",
    "Dummyhunter",
    "Earlyworm",
    "Forfot",
    "Fussock",
    "Faytor",
    "Filcher",
    "Foyster",
    "Foyster",
    "Frumper",
    "Gabster",
    "Gaffer",
    "Galoot",
    "Geezer",
    "Gilly-gaupus",
    "Gladhand",
    "Glimflashy",
    "Groaner",
    "Grumbletonian",
    "Gullgroper",
    "Holebag",
    "Holebuc",
    "Hoydan",
    "Huckster",
    "Hulking",
    "Illefoster",
    "Jackanape",
    "Jackman",
    "Knuckler",
    "Landloper",
    "Loggerhead",
    "Merrybegotten",
    "Minikin",
    "Nacky",
    "Nagod",
    "Nickninny",
    "Nob",
    "Noddy",
    "Numbskull",
    "Onery",
    "Persnikity",
    "Pullego",
    "Quanchehand",
    "Quat",
    "Ragmuffen",
    "Rogue",
    "Rumbluffer",
    "Runt",
    "Rustyguts",
    "Sapskull",
    "Scerehog",
    "Screwjaws",
    "Shakehands",
    "Smud",
    "Snabbler",
    "Snaffler",
    "Stunch",
    "Topheavy",
    "Towhead",
    "Twohanded",
    "Unbaked",
    "Uppish",
    "Uprightman",
    "Upstart",
    "Varlet",
    "Wag",
    "Whiddler",
    "Whitelivered",
    "Wigga",
    "Wildrogue",
    "Wiseacre",
    "Woodpecker",
    "Wrongun",
    "Yahoo",
    "Yelper",
    "Zad",
    "Zouch",
];

/// Opening syllables for orc names (53 entries).
pub const ORC_PREFIXES: &[&str] = &[
    "Oink",
    "Squeal",
    "Snort",
    "Fart",
    "Spit",
    "Spew",
    "Crap",
    "Scat",
    "Croak",
    "Clap",
    "Trap",
    "Clod",
    "Gob",
    "Snot",
    "Wax",
    "Pus",
    "Puke",
    "Hurl",
    "Belch",
    "Slurp",
    "Spew",
    "Bone",
    "Jaw",
    "Teeth",
    "Skull",
    "Mud",
    "Claw",
    "Toe",
    "Chunk",
    "Blood",
    "Nose",
    "Sphincter",
    "Itch",
    "Eyeball",
    "Scalp",
    "Scab",
    "Bruise",
    "Wound",
    "Ear",
    "Tongue",
    "Rag",
    "Bag",
    "Shag",
    "Jag",
    "Jug",
    "Mug",
    "Hag",
    "Sag",
    "Zig",
    "Tick",
    "Quick",
    "Sick",
    "Fang",
];

/// Closing syllables for orc names (67 entries).
pub const ORC_SUFFIXES: &[&str] = &[
    "slip",
    "squirt",
    "choke",
    "snap",
    "clap",
    "slap",
    "flap",
    "pap",
    "splat",
    "chortle",
    "squelch",
    "smack",
    "spit",
    "throttle",
    "crack",
    "chafe",
    "spill",
    "hop",
    "knock",
    "crush",
    "break",
    "grind",
    "dig",
    "sling",
    "stick",
    "rake",
    "cripple",
    "creep",
    "smear",
    "squeeze",
    "scratch",
    "scrape",
    "pierce",
    "rip",
    "tip",
    "nip",
    "sniff",
    "lick",
    "grab",
    "bruise",
    "dump",
    "pull",
    "heave",
    "grope",
    "hurl",
    "spew",
    "tag",
    "jig",
    "tug",
    "pinch",
    "bite",
    "box",
    "nag",
    "wag",
    "brag",
    "sag",
    "zag",
    "pick",
    "kick",
    "flick",
    "nick",
    "splat",
    "blot",
    "wipe",
    "munch",
    "chew",
    "crunch",
];

/// Orc tribe names, with a leading space (21 entries).
pub const ORC_TRIBES: &[&str] = &[
    " Gobsmacker",
    " Clodhopper",
    " Fartknocker",
    " Bonecrusher",
    " Jawbreaker",
    " Teethgrinder",
    " Skulldugger",
    " Mudslinger",
    " Slapsticker",
    " Muckraker",
    " Oinkblot",
    " Mugshot",
    " Pate-spliter",
    " Mane-scalper",
    " Face-slapper",
    " Cheekpincher",
    " Earpiercer",
    " Suckerpuncher",
    " Kisserslapper",
    " Fangsinker",
    " Clawslasher",
];

/// A female name: prefix plus suffix.
pub fn female_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", pick_str(rng, FEMALE_PREFIXES), pick_str(rng, FEMALE_SUFFIXES))
}

/// A male name: prefix plus suffix.
pub fn male_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", pick_str(rng, MALE_PREFIXES), pick_str(rng, MALE_SUFFIXES))
}

/// An epithet.
pub fn epithet<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_str(rng, EPITHETS).to_string()
}

/// An orc name with its tribe, e.g. `Snortslip Gobsmacker`.
pub fn orc_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}{}",
        pick_str(rng, ORC_PREFIXES),
        pick_str(rng, ORC_SUFFIXES),
        pick_str(rng, ORC_TRIBES)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tables_are_populated() {
        for table in [
            FEMALE_PREFIXES,
            FEMALE_SUFFIXES,
            MALE_PREFIXES,
            MALE_SUFFIXES,
            EPITHETS,
            ORC_PREFIXES,
            ORC_SUFFIXES,
            ORC_TRIBES,
        ] {
            assert!(!table.is_empty());
            assert!(table.iter().all(|entry| !entry.is_empty()));
        }
    }

    #[test]
    fn female_name_joins_prefix_and_suffix() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let name = female_name(&mut rng);
            assert!(FEMALE_PREFIXES.iter().any(|p| name.starts_with(p)));
            assert!(FEMALE_SUFFIXES.iter().any(|s| name.ends_with(s)));
        }
    }

    #[test]
    fn male_name_joins_prefix_and_suffix() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let name = male_name(&mut rng);
            assert!(MALE_PREFIXES.iter().any(|p| name.starts_with(p)));
            assert!(MALE_SUFFIXES.iter().any(|s| name.ends_with(s)));
        }
    }

    #[test]
    fn orc_name_ends_with_tribe() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let name = orc_name(&mut rng);
            assert!(ORC_TRIBES.iter().any(|t| name.ends_with(t)));
            assert!(name.contains(' '));
        }
    }

    #[test]
    fn epithet_comes_from_table() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(EPITHETS.contains(&epithet(&mut rng).as_str()));
    }
}
