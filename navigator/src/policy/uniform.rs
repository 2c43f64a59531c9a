//! Uniform turn policy
//!
//! Symmetric bounded turns, uniform on `[-max_turn, max_turn)`. This is
//! the baseline exploratory behavior: with no scanning correction the
//! resulting walk is unbiased and its net displacement grows
//! diffusively rather than linearly.

use super::TurnPolicy;
use crate::rng::RngManager;

/// Uniform turn policy: draw from `[-max_turn, max_turn)`.
///
/// # Example
/// ```
/// use ant_navigator_core_rs::{RngManager, TurnPolicy, UniformTurn};
/// use std::f64::consts::FRAC_PI_4;
///
/// let mut rng = RngManager::new(42);
/// let mut policy = UniformTurn::new(FRAC_PI_4);
/// let turn = policy.draw_turn(&mut rng);
/// assert!(turn >= -FRAC_PI_4 && turn < FRAC_PI_4);
/// ```
#[derive(Debug, Clone)]
pub struct UniformTurn {
    max_turn: f64,
}

impl UniformTurn {
    /// Create a uniform turn policy with the given half-width (radians).
    pub fn new(max_turn: f64) -> Self {
        Self { max_turn }
    }

    /// Largest turn magnitude this policy can draw.
    pub fn max_turn(&self) -> f64 {
        self.max_turn
    }
}

impl TurnPolicy for UniformTurn {
    fn draw_turn(&mut self, rng: &mut RngManager) -> f64 {
        rng.range_f64(-self.max_turn, self.max_turn)
    }
}
