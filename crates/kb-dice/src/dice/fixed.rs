//! Fixed-die shorthands: `d6(rng, 3)` is `roll(rng, 3, 6)`.

use rand::Rng;

use super::roll;

macro_rules! fixed_dice {
    ($($name:ident => $sides:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Roll `count` d", stringify!($sides), " and return the sum.")]
            pub fn $name<R: Rng + ?Sized>(rng: &mut R, count: u32) -> u64 {
                roll(rng, count, $sides)
            }
        )+

        /// Face counts that have a fixed-die shorthand.
        pub const FIXED_SIDES: &[u32] = &[$($sides),+];
    };
}

fixed_dice! {
    d2 => 2,
    d3 => 3,
    d4 => 4,
    d5 => 5,
    d6 => 6,
    d7 => 7,
    d8 => 8,
    d9 => 9,
    d10 => 10,
    d11 => 11,
    d12 => 12,
    d13 => 13,
    d14 => 14,
    d15 => 15,
    d16 => 16,
    d17 => 17,
    d18 => 18,
    d19 => 19,
    d20 => 20,
    d24 => 24,
    d30 => 30,
    d34 => 34,
    d48 => 48,
    d50 => 50,
    d60 => 60,
    d100 => 100,
    d120 => 120,
    d1000 => 1000,
    d10000 => 10000,
}
