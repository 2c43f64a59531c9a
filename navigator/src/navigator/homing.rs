//! Homing Controller
//!
//! After exploration the agent turns around and walks the inverse of its
//! accumulated displacement vector. Nothing else is consulted: not the
//! path it took, not the compass corrector. The return heading and
//! distance are computed analytically from the vector, and the walk
//! terminates on the origin.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Step policy for the homing walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HomingPolicy {
    /// One displacement straight to the origin (idealized perfect
    /// distance and heading estimation).
    SingleLeap,

    /// Walk in `step_length` increments along the return heading, then
    /// one final partial step landing on the origin.
    #[default]
    Stepwise,
}

/// Direction from the agent back to the origin, in radians `[-π, π]`
/// (atan2 convention).
///
/// This is the direction of the *negated* accumulated vector.
///
/// # Example
/// ```
/// use ant_navigator_core_rs::return_heading;
/// use glam::DVec2;
/// use std::f64::consts::PI;
///
/// // Agent ended up due east of the nest: home lies due west.
/// let heading = return_heading(DVec2::new(3.0, 0.0));
/// assert!((heading.abs() - PI).abs() < 1e-12);
/// ```
pub fn return_heading(accumulated: DVec2) -> f64 {
    (-accumulated.y).atan2(-accumulated.x)
}

/// Compute the displacement legs of the homing walk.
///
/// The legs sum to `-accumulated`, so applying them in order moves the
/// agent from its current position onto the origin. An exactly-zero
/// accumulated vector yields no legs. The leg count is capped at
/// `ceil(|accumulated| / step_length) + 1`, which bounds the walk even
/// under floating-point edge cases.
///
/// `step_length` must be positive and finite (enforced by config
/// validation before any run starts).
pub fn homing_legs(accumulated: DVec2, step_length: f64, policy: HomingPolicy) -> Vec<DVec2> {
    if accumulated == DVec2::ZERO {
        return Vec::new();
    }

    match policy {
        HomingPolicy::SingleLeap => vec![-accumulated],
        HomingPolicy::Stepwise => {
            let distance = accumulated.length();
            let heading = return_heading(accumulated);
            let stride = DVec2::new(heading.cos(), heading.sin()) * step_length;
            let max_legs = (distance / step_length).ceil() as usize + 1;

            let target = -accumulated;
            let mut legs = Vec::new();
            let mut travelled = DVec2::ZERO;
            let mut remaining = distance;

            while remaining > step_length && legs.len() + 1 < max_legs {
                legs.push(stride);
                travelled += stride;
                remaining -= step_length;
            }

            // Final leg closes the exact remaining gap, so the walk
            // lands on the origin regardless of trig rounding above.
            legs.push(target - travelled);
            legs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vector_yields_no_legs() {
        for policy in [HomingPolicy::SingleLeap, HomingPolicy::Stepwise] {
            assert!(homing_legs(DVec2::ZERO, 1.0, policy).is_empty());
        }
    }

    #[test]
    fn test_single_leap_is_one_negated_leg() {
        let acc = DVec2::new(3.0, -4.0);
        let legs = homing_legs(acc, 1.0, HomingPolicy::SingleLeap);
        assert_eq!(legs, vec![DVec2::new(-3.0, 4.0)]);
    }

    #[test]
    fn test_stepwise_exact_multiple_of_step_length() {
        let acc = DVec2::new(3.0, 0.0);
        let legs = homing_legs(acc, 1.0, HomingPolicy::Stepwise);
        assert_eq!(legs.len(), 3);
        let total: DVec2 = legs.iter().copied().sum();
        assert!((total - DVec2::new(-3.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_stepwise_partial_final_step() {
        let acc = DVec2::new(0.0, 2.5);
        let legs = homing_legs(acc, 1.0, HomingPolicy::Stepwise);
        assert_eq!(legs.len(), 3);
        // Two full strides south, then half a step.
        assert!((legs[0] - DVec2::new(0.0, -1.0)).length() < 1e-12);
        assert!((legs[2].length() - 0.5).abs() < 1e-12);
        let total: DVec2 = legs.iter().copied().sum();
        assert!((total + acc).length() < 1e-12);
    }

    #[test]
    fn test_stepwise_shorter_than_one_step() {
        let acc = DVec2::new(0.3, 0.1);
        let legs = homing_legs(acc, 1.0, HomingPolicy::Stepwise);
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0], -acc);
    }

    #[test]
    fn test_leg_count_within_cap() {
        let acc = DVec2::new(17.3, -42.9);
        let step = 0.7;
        let legs = homing_legs(acc, step, HomingPolicy::Stepwise);
        let cap = (acc.length() / step).ceil() as usize + 1;
        assert!(legs.len() <= cap, "{} legs exceeds cap {}", legs.len(), cap);
    }

    #[test]
    fn test_return_heading_points_home() {
        let acc = DVec2::new(1.0, 1.0);
        let heading = return_heading(acc);
        // Net displacement is north-east, so home is south-west.
        assert!((heading - (-3.0 * std::f64::consts::FRAC_PI_4)).abs() < 1e-12);
    }
}
