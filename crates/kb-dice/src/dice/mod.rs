//! Rolling plain dice.
//!
//! Every entry point clamps its inputs instead of failing: fewer than one
//! die rolls one die, and a die with fewer than two faces rolls as a d2.

pub mod fixed;
pub mod special;

pub use fixed::*;
pub use special::{D666Roll, d66, d666, d_mathematicians, fudge};

use rand::Rng;

use crate::random::uniform_int;

/// Smallest number of dice a roll will use.
pub const MIN_COUNT: u32 = 1;

/// Smallest number of faces a die may have.
pub const MIN_SIDES: u32 = 2;

/// Clamp a dice count to at least [`MIN_COUNT`].
pub fn clamp_count(count: u32) -> u32 {
    count.max(MIN_COUNT)
}

/// Clamp a face count to at least [`MIN_SIDES`].
pub fn clamp_sides(sides: u32) -> u32 {
    sides.max(MIN_SIDES)
}

/// Roll a single die with `sides` faces (clamped).
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R, sides: u32) -> u32 {
    let sides = clamp_sides(sides);
    // `1..=sides` is never inverted once clamped.
    let value = uniform_int(rng, 1, i64::from(sides))
        .ok()
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(1);
    tracing::trace!(sides, value, "rolled die");
    value
}

/// Roll `count` dice with `sides` faces each and return the sum.
///
/// The result always lies in `[count, count * sides]` after clamping.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, count: u32, sides: u32) -> u64 {
    let sides = clamp_sides(sides);
    (0..clamp_count(count))
        .map(|_| u64::from(roll_die(rng, sides)))
        .sum()
}

/// Make `rolls` independent rolls of `count` dice with `sides` faces.
pub fn multiple<R: Rng + ?Sized>(rng: &mut R, rolls: u32, count: u32, sides: u32) -> Vec<u64> {
    (0..rolls).map(|_| roll(rng, count, sides)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn clamps() {
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(4), 4);
        assert_eq!(clamp_sides(0), 2);
        assert_eq!(clamp_sides(1), 2);
        assert_eq!(clamp_sides(20), 20);
    }

    #[test]
    fn zero_dice_rolls_one() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!((1..=6).contains(&roll(&mut rng, 0, 6)));
        }
    }

    #[test]
    fn zero_dice_matches_one_die_for_same_seed() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(roll(&mut a, 0, 6), roll(&mut b, 1, 6));
        }
    }

    #[test]
    fn one_sided_die_rolls_as_d2() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let value = roll(&mut a, 3, 1);
            assert!((3..=6).contains(&value));
            assert_eq!(value, roll(&mut b, 3, 2));
        }
    }

    #[test]
    fn die_draws_come_from_uniform_int() {
        use crate::random::uniform_int;

        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert_eq!(
                i64::from(roll_die(&mut a, 8)),
                uniform_int(&mut b, 1, 8).unwrap()
            );
        }
    }

    #[test]
    fn multiple_gives_independent_results() {
        let mut rng = StdRng::seed_from_u64(42);
        let results = multiple(&mut rng, 7, 3, 6);
        assert_eq!(results.len(), 7);
        assert!(results.iter().all(|r| (3..=18).contains(r)));
    }

    #[test]
    fn multiple_zero_rolls_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(multiple(&mut rng, 0, 3, 6).is_empty());
    }

    proptest! {
        #[test]
        fn roll_stays_in_bounds(count in 1..50u32, sides in 2..1000u32, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = roll(&mut rng, count, sides);
            prop_assert!(value >= u64::from(count));
            prop_assert!(value <= u64::from(count) * u64::from(sides));
        }

        #[test]
        fn degenerate_inputs_are_clamped(count in 0..2u32, sides in 0..2u32, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = roll(&mut rng, count, sides);
            prop_assert!((1..=2).contains(&value));
        }
    }
}
