//! Compass correction ("scanning")
//!
//! Every `scan_interval` steps the agent pauses and re-reads the fixed
//! sun direction, pulling its heading a fraction of the way back toward
//! that reference. This is the only mechanism that keeps the random walk
//! loosely compass-aligned; without it heading error accumulates freely.
//!
//! The blend always follows the shortest angular path: the raw
//! difference is reduced to `(-π, π]` before scaling so a heading just
//! past the 0/2π seam is nudged across the seam, not dragged the long
//! way around.

use crate::core::angle::{shortest_signed_angle, wrap_angle};

/// Blend `heading` toward `sun_direction` by `scan_gain`.
///
/// `scan_gain` is the correction strength in `[0, 1]`: 0 leaves the
/// heading untouched, 1 locks it onto the reference exactly. The result
/// is wrapped to `[0, 2π)`.
///
/// # Example
/// ```
/// use ant_navigator_core_rs::correct_heading;
///
/// // Full-gain scan snaps exactly onto the reference.
/// assert_eq!(correct_heading(2.5, 0.75, 1.0), 0.75);
///
/// // Zero gain is a no-op.
/// assert_eq!(correct_heading(2.5, 0.75, 0.0), 2.5);
///
/// // Half gain closes half the angular gap.
/// let corrected = correct_heading(1.0, 0.5, 0.5);
/// assert!((corrected - 0.75).abs() < 1e-12);
/// ```
pub fn correct_heading(heading: f64, sun_direction: f64, scan_gain: f64) -> f64 {
    // Full gain must land on the reference bit-for-bit; going through
    // the wrap arithmetic can leave a residual of one ulp of 2π.
    if scan_gain >= 1.0 {
        return sun_direction;
    }
    let error = shortest_signed_angle(sun_direction - heading);
    wrap_angle(heading + scan_gain * error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_zero_gain_is_exact_noop() {
        for heading in [0.0, 0.1, PI, TAU - 1e-6] {
            assert_eq!(correct_heading(heading, 3.0, 0.0), heading);
        }
    }

    #[test]
    fn test_full_gain_snaps_exactly() {
        for heading in [0.0, 1.0, 3.5, TAU - 0.01] {
            assert_eq!(correct_heading(heading, 1.234, 1.0), 1.234);
        }
    }

    #[test]
    fn test_correction_crosses_the_seam_the_short_way() {
        // Heading just below 2π, reference just above 0: the short path
        // is forward across the seam, a gap of 0.2 rad.
        let heading = TAU - 0.1;
        let corrected = correct_heading(heading, 0.1, 0.5);
        // Half of the 0.2 gap lands exactly on the seam.
        assert!(corrected < 1e-12 || corrected > TAU - 1e-12);

        // And from the other side.
        let corrected = correct_heading(0.1, TAU - 0.1, 0.5);
        assert!(corrected < 1e-12 || corrected > TAU - 1e-12);
    }

    #[test]
    fn test_partial_gain_reduces_error() {
        let heading = 2.0;
        let sun = 0.5;
        let corrected = correct_heading(heading, sun, 0.25);
        let before = shortest_signed_angle(sun - heading).abs();
        let after = shortest_signed_angle(sun - corrected).abs();
        assert!(after < before);
        assert!((after - 0.75 * before).abs() < 1e-12);
    }

    #[test]
    fn test_result_stays_in_range() {
        let corrected = correct_heading(TAU - 0.05, 0.2, 0.1);
        assert!(corrected >= 0.0 && corrected < TAU);
    }
}
