use std::sync::atomic::{AtomicU64, Ordering};

/// First identifier issued by a fresh sequence.
pub const ID_SEQUENCE_START: u64 = 1_000_000_000;

/// Monotonic source of unique digit-string identifiers.
///
/// The counter is atomic, so a sequence shared between threads still never
/// issues the same id twice. Each synthesizer owns its own sequence; tests
/// can start one at an arbitrary value with [`IdSequence::with_start`].
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::with_start(ID_SEQUENCE_START)
    }

    pub fn with_start(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Return the current value as a digit string and advance the counter.
    pub fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_from_the_seed() {
        let ids = IdSequence::new();
        assert_eq!(ids.next_id(), "1000000000");
        assert_eq!(ids.next_id(), "1000000001");
        assert_eq!(ids.next_id(), "1000000002");
    }

    #[test]
    fn custom_start_is_honored() {
        let ids = IdSequence::with_start(99);
        assert_eq!(ids.next_id(), "99");
        assert_eq!(ids.next_id(), "100");
    }
}
