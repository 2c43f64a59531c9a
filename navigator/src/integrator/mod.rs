//! Path integration
//!
//! The agent's sole spatial memory is a running sum of the per-step
//! displacement vectors. One line of arithmetic, but it carries the
//! system invariant: fold exactly one displacement per exploration step
//! (never during scanning corrections or homing) and the
//! negated sum is always the way home.

use glam::DVec2;

/// Fold one step's displacement into the accumulated vector.
///
/// Pure vector addition, total over all inputs.
///
/// # Example
/// ```
/// use ant_navigator_core_rs::integrate;
/// use glam::DVec2;
///
/// let acc = integrate(DVec2::ZERO, DVec2::new(1.0, 0.0));
/// let acc = integrate(acc, DVec2::new(0.0, 2.0));
/// assert_eq!(acc, DVec2::new(1.0, 2.0));
/// ```
pub fn integrate(accumulated: DVec2, displacement: DVec2) -> DVec2 {
    accumulated + displacement
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_sums_componentwise() {
        let acc = integrate(DVec2::new(1.0, -2.0), DVec2::new(-0.5, 0.25));
        assert_eq!(acc, DVec2::new(0.5, -1.75));
    }

    #[test]
    fn test_integrate_zero_displacement_is_identity() {
        let acc = DVec2::new(3.25, -7.5);
        assert_eq!(integrate(acc, DVec2::ZERO), acc);
    }

    #[test]
    fn test_integrate_matches_manual_running_sum() {
        let steps = [
            DVec2::new(1.0, 0.0),
            DVec2::new(0.5, 0.5),
            DVec2::new(-2.0, 1.0),
        ];

        let folded = steps.iter().fold(DVec2::ZERO, |acc, d| integrate(acc, *d));
        let manual: DVec2 = steps.iter().copied().sum();
        assert_eq!(folded, manual);
    }
}
