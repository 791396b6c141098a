//! Time-derived unique identifiers.
//!
//! Color stops and saved gradients are keyed by their creation instant: the
//! millisecond wall clock rendered as a decimal string. A process-wide
//! monotonic floor keeps ids unique and strictly increasing even when two
//! are minted inside the same millisecond or the clock steps backwards.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Mints the next id.
pub fn next_id() -> String {
    static LAST: AtomicU64 = AtomicU64::new(0);
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    let mut prev = LAST.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let values: Vec<u64> = (0..256).map(|_| next_id().parse().unwrap()).collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn ids_look_like_millisecond_timestamps() {
        let id = next_id();
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        // 2001-09-09T01:46:40Z in milliseconds; anything modern is larger.
        assert!(id.parse::<u64>().unwrap() > 1_000_000_000_000);
    }
}
