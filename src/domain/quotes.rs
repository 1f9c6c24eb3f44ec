use rand::seq::SliceRandom;
use rand::Rng;

/// Messages shown when a phase completes
pub const QUOTES: &[&str] = &[
    "Great work, take a breath.",
    "Stop, stretch, get a glass of water, you earned it!",
    "Consistency beats intensity every time.",
    "Level up complete.",
    "It's not about perfect. It's about effort.",
    "Progress, not perfection.",
    "Small wins build empires.",
    "Keep the streak.",
    "Discipline is choosing between what you want now and what you want most.",
    "You don't have to be great to start, but you have to start to be great.",
    "Task crushed. Next.",
    "Success is the sum of small efforts repeated day in and day out.",
    "Great things never come from comfort zones.",
    "You don't find the time to do it. You make the time.",
    "Another commit pushed.",
    "Success is going from failure to failure without loss of enthusiasm.",
    "The successful warrior is the average man, with laser-like focus.",
    "Do not let what you cannot do interfere with what you can do.",
];

/// Pick a quote at random
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or("Session complete.")
}
