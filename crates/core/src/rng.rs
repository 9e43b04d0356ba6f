//! RNG module - deterministic randomness for scene setup and spawning
//!
//! A simple LCG is enough for star placement, blink offsets and garbage columns, and it keeps
//! every scene reproducible from a single seed (tests rely on that).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 8) % max
    }

    /// Generate a random value in `[low, high]`.
    ///
    /// Returns `low` when the range is empty.
    pub fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high - low) as u32 + 1;
        low + self.next_range(span) as i32
    }

    /// Pick a random element of a slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(items.len() as u32) as usize)
    }

    /// Current state, usable as a seed to fork an identical stream.
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
