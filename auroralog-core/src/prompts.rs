//! Static reflection prompts and random suggestions.
//!
//! Every function takes the random source as an argument so callers decide
//! between `rand::thread_rng()` and a seeded generator.

use rand::Rng;
use rand::seq::SliceRandom;

pub const PROMPTS: &[&str] = &[
    "What small win do I want to remember from today?",
    "What discomfort felt unnecessary, and what can I learn from it?",
    "How did I support someone else this week?",
    "If I could describe today in a single word, what would it be and why?",
    "What is one detail about today that made me smile?",
    "Where did I hold back, and what would I try differently next time?",
    "What question should I ask myself tomorrow to stay curious?",
];

/// Returns one prompt, preferring those that mention `mood` (case-insensitive).
/// Falls back to the full list when nothing matches or the mood is blank.
pub fn suggest<R: Rng + ?Sized>(rng: &mut R, mood: Option<&str>) -> &'static str {
    let mood = mood.map(|m| m.trim().to_lowercase()).filter(|m| !m.is_empty());
    if let Some(mood) = mood {
        let matching: Vec<&'static str> = PROMPTS
            .iter()
            .copied()
            .filter(|p| p.to_lowercase().contains(&mood))
            .collect();
        if let Some(p) = matching.choose(rng).copied() {
            return p;
        }
    }
    PROMPTS.choose(rng).copied().unwrap_or(PROMPTS[0])
}

/// Returns `count` distinct prompts not listed in `exclude`.
///
/// When `count` covers the whole remaining pool, the pool is returned as is,
/// in list order.
pub fn bulk<R: Rng + ?Sized>(rng: &mut R, count: usize, exclude: &[&str]) -> Vec<&'static str> {
    let pool: Vec<&'static str> = PROMPTS
        .iter()
        .copied()
        .filter(|p| !exclude.contains(p))
        .collect();
    if count >= pool.len() {
        return pool;
    }
    pool.choose_multiple(rng, count).copied().collect()
}

/// Text written in place of an empty entry: a suggested prompt followed by
/// `extra` other prompts as a bullet list.
pub fn starter<R: Rng + ?Sized>(rng: &mut R, mood: Option<&str>, extra: usize) -> String {
    let base = suggest(rng, mood);
    let mut lines = vec![base.to_string()];
    lines.extend(bulk(rng, extra, &[base]).into_iter().map(|p| format!("- {p}")));
    lines.join("\n")
}
