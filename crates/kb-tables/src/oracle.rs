//! The magic eight ball, used as a yes/no oracle.

use rand::Rng;

use crate::pick_str;

/// Magic eight ball answers (20 entries).
pub const MAGIC_EIGHT_BALL: &[&str] = &[
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes definitely",
    "You may rely on it",
    "As I see it, yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
    "Sources hazy, ask again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

/// Shake the eight ball.
pub fn magic_eight_ball<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_str(rng, MAGIC_EIGHT_BALL)
}
