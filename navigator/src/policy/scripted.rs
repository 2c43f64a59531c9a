//! Scripted turn policy
//!
//! Replays a fixed sequence of turns, ignoring the RNG. This is the
//! injection point for deterministic tests: with a scripted walk every
//! position, heading and accumulated vector of a run is computable by
//! hand. Draws past the end of the sequence return 0.0 (walk straight).

use super::TurnPolicy;
use crate::rng::RngManager;

/// Scripted turn policy for exact-value tests.
///
/// # Example
/// ```
/// use ant_navigator_core_rs::{RngManager, ScriptedTurn, TurnPolicy};
///
/// let mut rng = RngManager::new(0);
/// let mut policy = ScriptedTurn::new(vec![0.1, -0.2]);
/// assert_eq!(policy.draw_turn(&mut rng), 0.1);
/// assert_eq!(policy.draw_turn(&mut rng), -0.2);
/// assert_eq!(policy.draw_turn(&mut rng), 0.0); // exhausted
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedTurn {
    turns: Vec<f64>,
    next: usize,
}

impl ScriptedTurn {
    /// Create a scripted policy from a turn sequence (radians).
    pub fn new(turns: Vec<f64>) -> Self {
        Self { turns, next: 0 }
    }

    /// Number of scripted turns not yet drawn.
    pub fn remaining(&self) -> usize {
        self.turns.len().saturating_sub(self.next)
    }
}

impl TurnPolicy for ScriptedTurn {
    fn draw_turn(&mut self, _rng: &mut RngManager) -> f64 {
        let turn = self.turns.get(self.next).copied().unwrap_or(0.0);
        self.next += 1;
        turn
    }
}
