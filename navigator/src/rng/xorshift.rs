//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG suitable for simulation work: it passes
//! TestU01's BigCrush battery while needing only 64 bits of state.
//!
//! # Determinism
//!
//! Same seed → same sequence. This is what makes a navigation run
//! reproducible: reruns for debugging, pinned-value tests, and the
//! statistical drift checks all rely on it.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use ant_navigator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let unit = rng.next_f64();          // [0.0, 1.0)
/// let turn = rng.range_f64(-0.5, 0.5); // [-0.5, 0.5)
/// assert!(unit >= 0.0 && unit < 1.0);
/// assert!(turn >= -0.5 && turn < 0.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with the given seed.
    ///
    /// A zero seed is mapped to 1 (xorshift requires nonzero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64, advancing the internal state.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random f64 in `[0.0, 1.0)`.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // 53 high bits give a uniform dyadic rational in [0, 1)
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate a random f64 in `[min, max)`.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    pub fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        assert!(min < max, "min must be less than max");
        min + self.next_f64() * (max - min)
    }

    /// Sample a standard normal deviate (Box-Muller transform).
    pub fn standard_normal(&mut self) -> f64 {
        let u1 = self.next_f64();
        let u2 = self.next_f64();
        // next_f64 is in [0, 1); flip u1 so the logarithm never sees zero
        (-2.0 * (1.0 - u1).ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Get the current RNG state (for replay).
    ///
    /// # Example
    /// ```
    /// use ant_navigator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// rng.next();
    /// let mut replay = RngManager::new(rng.get_state());
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
