//! Gaussian turn policy
//!
//! Zero-mean normal turns. An alternative symmetric distribution for
//! studies where rare large turns matter; spread is the standard
//! deviation in radians.

use super::TurnPolicy;
use crate::rng::RngManager;

/// Gaussian turn policy: draw from `N(0, std_dev²)`.
#[derive(Debug, Clone)]
pub struct GaussianTurn {
    std_dev: f64,
}

impl GaussianTurn {
    /// Create a Gaussian turn policy with the given spread (radians).
    pub fn new(std_dev: f64) -> Self {
        Self { std_dev }
    }

    /// Standard deviation of the drawn turns.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl TurnPolicy for GaussianTurn {
    fn draw_turn(&mut self, rng: &mut RngManager) -> f64 {
        self.std_dev * rng.standard_normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_are_finite_and_scaled() {
        let mut rng = RngManager::new(2024);
        let mut policy = GaussianTurn::new(0.2);

        let draws: Vec<f64> = (0..5000).map(|_| policy.draw_turn(&mut rng)).collect();
        assert!(draws.iter().all(|t| t.is_finite()));

        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        let var =
            draws.iter().map(|t| (t - mean) * (t - mean)).sum::<f64>() / draws.len() as f64;
        assert!(mean.abs() < 0.02, "mean {} far from zero", mean);
        assert!(
            (var.sqrt() - 0.2).abs() < 0.03,
            "std dev {} far from configured 0.2",
            var.sqrt()
        );
    }
}
