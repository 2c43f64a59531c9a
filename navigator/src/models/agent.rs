//! Agent pose model
//!
//! The complete navigational state of the agent: where it is, where it
//! points, and what it remembers. The agent does not keep the path it
//! walked; its only spatial memory is the accumulated displacement
//! vector, updated once per exploration step by the path integrator.
//!
//! CRITICAL: `accumulated_vector` is maintained as the exact running sum
//! of per-step displacements. It is never recomputed from `position`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Navigational state of the agent.
///
/// Owned exclusively by a single run. The exploration phase mutates
/// `position`, `heading` and `step_count`; the scanning correction
/// mutates `heading`; the path integrator mutates `accumulated_vector`;
/// the homing phase mutates `position` and `heading`.
///
/// # Example
/// ```
/// use ant_navigator_core_rs::AgentState;
///
/// let state = AgentState::at_origin(0.0);
/// assert_eq!(state.position.length(), 0.0);
/// assert_eq!(state.step_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    /// Physical position on the ground plane
    pub position: DVec2,

    /// Current heading in radians, `[0, 2π)`
    pub heading: f64,

    /// Running sum of per-step displacement vectors (origin → agent)
    pub accumulated_vector: DVec2,

    /// Exploration steps taken so far
    pub step_count: usize,
}

impl AgentState {
    /// Create the initial state: at the origin, zero accumulated vector,
    /// facing `heading` (the engine starts the agent along the sun
    /// direction).
    pub fn at_origin(heading: f64) -> Self {
        Self {
            position: DVec2::ZERO,
            heading,
            accumulated_vector: DVec2::ZERO,
            step_count: 0,
        }
    }
}
