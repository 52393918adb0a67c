//! Deterministic PRNG for tile spawns.

/// Deterministic PRNG using xorshift64.
///
/// Hand-rolled so that a game is bit-exact reproducible from its seed
/// across platforms and crate versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    pub(crate) const fn new(seed: u64) -> Self {
        // Ensure non-zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate next random u64.
    pub(crate) fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random index in `[0, max)`.
    pub(crate) fn next_index(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        usize::try_from(self.next_u64() % (max as u64)).unwrap_or(0)
    }
}
