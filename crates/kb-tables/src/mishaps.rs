//! Bad things that happen to adventurers.

use rand::Rng;

use crate::pick_str;

/// What happens to a character dropped to zero hit points (20 entries).
pub const INCAPACITATIONS: &[&str] = &[
    "Bleed out in d6 rounds",
    "Broken shield/ripped robes, restored to 1hp in d3 rounds",
    "Lost weapon/staff/wand, restored to 1hp in d3 rounds",
    "Broken helmet/torn wizard hat, restored to 1hp in d3 rounds",
    "Winded, retored to 1hp in d3 rounds",
    "Left eye, save vs. blinding",
    "Right eye, save vs. blinding",
    "Left arm, save vs. loss",
    "Right arm, save vs. loss",
    "Left leg, save vs. loss",
    "Right leg, save vs. loss",
    "Left ear, save vs. hearing loss",
    "Right ear, save vs. hearing loss",
    "Knocked out",
    "Knocked out",
    "Knocked out",
    "Knocked out",
    "Knocked out",
    "Knocked out",
    "Knocked out",
];

/// Madnesses, phobias, and delusions (25 entries).
pub const INSANITIES: &[&str] = &[
    "Amnesia",
    "Catatonia",
    "Repetition (immediate)",
    "Doubling (again that day)",
    "Ritualizing",
    "Counting",
    "Hallucinations of (random monster)",
    "Hysteria",
    "Melancholia",
    "Phantom limb",
    "Arachnophobia",
    "Agoraphobia",
    "Claustrophobia",
    "Staurophobia",
    "Acrophobia",
    "Hemophobia",
    "Nyctophobia",
    "Nosophobia",
    "Ophidiophobia",
    "Delusions of grandeur",
    "Delusions of persecution",
    "Delusions of significance (connecting events)",
    "Delusions of reading other minds",
    "Delusions of mind being read",
    "Delusions of thoughts being injected",
];

/// Roll on the incapacitation table.
pub fn incapacitation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_str(rng, INCAPACITATIONS)
}

/// Roll on the insanity table.
pub fn insanity<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_str(rng, INSANITIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn table_sizes() {
        assert_eq!(INCAPACITATIONS.len(), 20);
        assert_eq!(INSANITIES.len(), 25);
    }

    #[test]
    fn knocked_out_is_most_common() {
        let knocked_out = INCAPACITATIONS
            .iter()
            .filter(|entry| **entry == "Knocked out")
            .count();
        assert_eq!(knocked_out, 7);
    }

    #[test]
    fn picks_come_from_tables() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            assert!(INCAPACITATIONS.contains(&incapacitation(&mut rng)));
            assert!(INSANITIES.contains(&insanity(&mut rng)));
        }
    }
}
