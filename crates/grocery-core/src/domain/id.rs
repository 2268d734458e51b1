//! Item id generation
//!
//! Ids look like `1718031234567-k3j9x0a`: milliseconds since the epoch, a dash,
//! and a seven character base-36 suffix.

use std::collections::HashSet;

use rand::Rng;

use super::ItemId;

const SUFFIX_LEN: usize = 7;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh item ids
pub trait IdGenerator {
    /// Return an id never returned before by this generator
    fn next_id(&mut self) -> ItemId;
}

/// Time-based generator with a random suffix.
///
/// The timestamp never moves backwards and suffixes are tracked within one
/// millisecond, so ids from one generator never repeat.
pub struct TimestampIdGenerator {
    clock: Box<dyn FnMut() -> i64>,
    last_millis: i64,
    issued: HashSet<String>,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::with_clock(|| chrono::Utc::now().timestamp_millis())
    }

    /// Use a custom millisecond clock
    pub fn with_clock(clock: impl FnMut() -> i64 + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last_millis: i64::MIN,
            issued: HashSet::new(),
        }
    }

    fn random_suffix() -> String {
        let mut rng = rand::rng();
        (0..SUFFIX_LEN)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> ItemId {
        let now = (self.clock)().max(self.last_millis);
        if now != self.last_millis {
            self.last_millis = now;
            self.issued.clear();
        }

        loop {
            let suffix = Self::random_suffix();
            if self.issued.insert(suffix.clone()) {
                return ItemId::new(format!("{}-{}", now, suffix));
            }
        }
    }
}
