//! Ant Navigator Core - Rust Engine
//!
//! Bio-inspired path-integration navigator with deterministic execution.
//! An agent explores a 2D plane with a randomized walk, keeps a running
//! displacement vector against a fixed compass reference, periodically
//! corrects heading drift by scanning, and finally walks the inverse of
//! the accumulated vector back to the origin.
//!
//! # Architecture
//!
//! - **core**: angle arithmetic (wrapping, shortest signed differences)
//! - **models**: domain types (AgentState, TrajectoryLog)
//! - **policy**: random-turn policies for the exploration walk
//! - **compass**: periodic heading correction against the sun direction
//! - **integrator**: displacement-vector accumulation
//! - **navigator**: run loop (explore phase, homing phase)
//! - **rng**: deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All angles are radians; headings live in `[0, 2π)`
//! 2. All randomness is deterministic (seeded RNG)
//! 3. The accumulated vector is the exact per-step displacement sum,
//!    never derived from position

// Module declarations
pub mod compass;
pub mod core;
pub mod integrator;
pub mod models;
pub mod navigator;
pub mod policy;
pub mod rng;

// Re-exports for convenience
pub use compass::correct_heading;
pub use crate::core::angle::{shortest_signed_angle, wrap_angle};
pub use integrator::integrate;
pub use models::{agent::AgentState, trajectory::TrajectoryLog};
pub use navigator::{
    homing::{homing_legs, return_heading},
    run, HomingPolicy, NavigationError, Navigator, NavigatorConfig, Phase, RunResult,
};
pub use policy::{GaussianTurn, ScriptedTurn, TurnConfig, TurnPolicy, UniformTurn};
pub use rng::RngManager;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn ant_navigator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::navigator::PyNavigator>()?;
    Ok(())
}
