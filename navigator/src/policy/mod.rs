//! Turn Policy Module
//!
//! The exploration walk is shaped by one decision per step: how much to
//! turn before moving. That decision is behind the `TurnPolicy` trait so
//! the distribution is substitutable: the production policies draw from
//! the deterministic RNG, and a scripted policy replays a fixed sequence
//! for exact-value tests.
//!
//! # Policy Interface
//!
//! ```rust
//! use ant_navigator_core_rs::policy::TurnPolicy;
//! use ant_navigator_core_rs::RngManager;
//!
//! struct AlwaysLeft;
//!
//! impl TurnPolicy for AlwaysLeft {
//!     fn draw_turn(&mut self, _rng: &mut RngManager) -> f64 {
//!         0.1
//!     }
//! }
//! ```
//!
//! Available policies:
//! 1. **Uniform**: bounded symmetric turn, uniform on `[-max_turn, max_turn)`
//!    (default; this is the distribution the reference model uses)
//! 2. **Gaussian**: zero-mean normal turn with configurable spread
//! 3. **Scripted**: replays a fixed turn sequence (testing; kept in all
//!    builds so integration tests can pin exact trajectories)

mod gaussian;
mod scripted;
mod uniform;

pub use gaussian::GaussianTurn;
pub use scripted::ScriptedTurn;
pub use uniform::UniformTurn;

use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// Per-step turn decision for the exploration walk.
///
/// Policies may keep internal state (the scripted policy tracks its
/// position in the sequence), hence `&mut self`.
pub trait TurnPolicy: Send + Sync {
    /// Draw the heading perturbation for the next step, in radians.
    ///
    /// Positive values turn counterclockwise. All randomness must come
    /// from the supplied RNG so that a seed determines the whole walk.
    fn draw_turn(&mut self, rng: &mut RngManager) -> f64;
}

/// Turn-distribution selection for a run.
///
/// Deserializable so the (external) parameter-loading collaborator can
/// pick a distribution from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TurnConfig {
    /// Uniform on `[-max_turn, max_turn)`, `0 < max_turn <= π`
    Uniform {
        /// Largest single-step turn magnitude (radians)
        max_turn: f64,
    },

    /// Zero-mean normal with standard deviation `std_dev > 0` (radians)
    Gaussian { std_dev: f64 },

    /// Fixed turn sequence, replayed in order; 0.0 once exhausted.
    ///
    /// NOTE: available in all builds to support integration testing,
    /// but intended for test code.
    Scripted { turns: Vec<f64> },
}

impl TurnConfig {
    /// Instantiate the configured policy.
    pub fn build(&self) -> Box<dyn TurnPolicy> {
        match self {
            TurnConfig::Uniform { max_turn } => Box::new(UniformTurn::new(*max_turn)),
            TurnConfig::Gaussian { std_dev } => Box::new(GaussianTurn::new(*std_dev)),
            TurnConfig::Scripted { turns } => Box::new(ScriptedTurn::new(turns.clone())),
        }
    }
}

impl Default for TurnConfig {
    /// The reference model turns uniformly within a quarter-circle
    /// (±π/4) each step.
    fn default() -> Self {
        TurnConfig::Uniform {
            max_turn: FRAC_PI_4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_uniform_quarter_turn() {
        match TurnConfig::default() {
            TurnConfig::Uniform { max_turn } => assert_eq!(max_turn, FRAC_PI_4),
            other => panic!("unexpected default: {:?}", other),
        }
    }

    #[test]
    fn test_build_dispatches_to_configured_policy() {
        let mut rng = RngManager::new(7);
        let mut policy = TurnConfig::Scripted {
            turns: vec![0.25, -0.5],
        }
        .build();

        assert_eq!(policy.draw_turn(&mut rng), 0.25);
        assert_eq!(policy.draw_turn(&mut rng), -0.5);
        assert_eq!(policy.draw_turn(&mut rng), 0.0);
    }
}
