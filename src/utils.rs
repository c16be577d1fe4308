// Utility functions
use rand::Rng;
use rand::seq::IndexedRandom;

const FALLBACK_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Picks a random User-Agent from the pool.
pub fn pick_user_agent(pool: &[String]) -> String {
    pool.choose(&mut rand::rng())
        .cloned()
        .unwrap_or_else(|| FALLBACK_AGENT.to_string())
}

/// Random whole-second delay in `min..=max`, used to pace detail fetches.
pub fn jitter_seconds(min: u64, max: u64) -> u64 {
    if min >= max {
        return min;
    }
    rand::rng().random_range(min..=max)
}
