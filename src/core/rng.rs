//! RNG module - seeded LCG for shape selection
//!
//! A small linear congruential generator (Numerical Recipes constants).
//! Each spawn draws a kind uniformly and independently from the seven;
//! seeding makes game tests deterministic.

/// Simple LCG (Linear Congruential Generator) RNG
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

    /// Seed from the system clock.
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        // Numerical Recipes constants: a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn draws_are_roughly_uniform_over_seven() {
        let mut rng = SimpleRng::new(42);
        let mut counts = [0u32; 7];
        let trials = 70_000;
        for _ in 0..trials {
            counts[rng.next_range(7) as usize] += 1;
        }
        let expected = trials / 7;
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                count > expected * 8 / 10 && count < expected * 12 / 10,
                "bucket {i} count {count} far from expected {expected}"
            );
        }
    }
}
