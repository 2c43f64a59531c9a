//! Navigator Engine
//!
//! Main run loop integrating all components:
//! - Turn policy (randomized heading perturbation per step)
//! - Compass corrector (periodic scanning toward the sun direction)
//! - Path integrator (accumulated displacement vector)
//! - Homing controller (return along the negated accumulated vector)
//!
//! # Run loop
//!
//! ```text
//! For each exploration step:
//! 1. Draw a turn and add it to the heading
//! 2. Displace by step_length along the heading
//! 3. Fold the displacement into the accumulated vector
//! 4. Every scan_interval steps, correct heading toward the sun
//! 5. Record the position (when trajectory logging is on)
//! Then home: walk the legs of the negated accumulated vector.
//! ```
//!
//! # Determinism
//!
//! All randomness is via the seeded xorshift64* RNG. Same seed + same
//! config = identical trajectory and final position.

use crate::compass::correct_heading;
use crate::core::angle::wrap_angle;
use crate::integrator::integrate;
use crate::models::agent::AgentState;
use crate::models::trajectory::TrajectoryLog;
use crate::navigator::homing::{homing_legs, return_heading, HomingPolicy};
use crate::policy::{TurnConfig, TurnPolicy};
use crate::rng::RngManager;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use thiserror::Error;

// ============================================================================
// Configuration
// ============================================================================

/// Complete configuration for one navigation run.
///
/// Immutable after validation; every component reads the sun direction
/// and the other parameters from here rather than from any ambient
/// global.
///
/// # Fields
///
/// All angles are radians.
///
/// # Example
///
/// ```
/// use ant_navigator_core_rs::{NavigatorConfig, run};
///
/// let config = NavigatorConfig {
///     num_explore_steps: 50,
///     rng_seed: 42,
///     ..NavigatorConfig::default()
/// };
///
/// let result = run(config).unwrap();
/// assert!(result.final_position.length() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Distance travelled per step (must be positive)
    pub step_length: f64,

    /// Number of steps in the exploration phase
    pub num_explore_steps: usize,

    /// Steps between scanning corrections (must be positive)
    pub scan_interval: usize,

    /// Scanning correction strength in `[0, 1]`
    pub scan_gain: f64,

    /// Global compass reference direction, radians in `[0, 2π)`
    pub sun_direction: f64,

    /// RNG seed for deterministic runs
    pub rng_seed: u64,

    /// Random-turn distribution for the exploration walk
    pub turn: TurnConfig,

    /// Step policy for the homing walk
    pub homing: HomingPolicy,

    /// Record per-step positions for visualization consumers
    pub record_trajectory: bool,
}

impl Default for NavigatorConfig {
    /// Reference parameters of the original desert-ant model: half-unit
    /// steps, 120 exploration steps, a scan every 10 steps at gain 0.1,
    /// sun along the +x axis.
    fn default() -> Self {
        Self {
            step_length: 0.5,
            num_explore_steps: 120,
            scan_interval: 10,
            scan_gain: 0.1,
            sun_direction: 0.0,
            rng_seed: 1,
            turn: TurnConfig::default(),
            homing: HomingPolicy::default(),
            record_trajectory: true,
        }
    }
}

// ============================================================================
// Results and Errors
// ============================================================================

/// Output of a completed run, consumed by plotting/animation
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Position samples: origin, one per exploration step, one per
    /// homing step. Empty when `record_trajectory` was off.
    pub trajectory: Vec<DVec2>,

    /// Accumulated displacement vector at the end of exploration
    /// (origin → food site)
    pub accumulated_vector: DVec2,

    /// Agent position after homing
    pub final_position: DVec2,

    /// Index of the first homing sample in `trajectory` (0 when
    /// trajectory recording was off)
    pub phase_boundary_index: usize,

    /// Exploration steps taken
    pub explore_steps: usize,

    /// Homing steps taken
    pub homing_steps: usize,
}

/// Navigation error types.
///
/// Raised eagerly at construction; once a `Navigator` exists every
/// computation is total and `run` cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Run phase. `Done` is terminal; a navigator never re-enters an
/// earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Exploring,
    Homing,
    Done,
}

// ============================================================================
// Navigator
// ============================================================================

/// Owns the agent state and drives it through both phases.
///
/// # Example
///
/// ```
/// use ant_navigator_core_rs::{Navigator, NavigatorConfig, Phase, TurnConfig};
///
/// let config = NavigatorConfig {
///     num_explore_steps: 4,
///     turn: TurnConfig::Scripted { turns: vec![0.1, -0.2, 0.15, -0.1] },
///     ..NavigatorConfig::default()
/// };
///
/// let navigator = Navigator::new(config).unwrap();
/// assert_eq!(navigator.phase(), Phase::Init);
///
/// let result = navigator.run();
/// assert_eq!(result.explore_steps, 4);
/// assert!(result.final_position.length() < 1e-9);
/// ```
pub struct Navigator {
    /// Validated run configuration
    config: NavigatorConfig,

    /// Agent pose and vector memory
    state: AgentState,

    /// Deterministic RNG
    rng: RngManager,

    /// Per-step turn decisions
    turn_policy: Box<dyn TurnPolicy>,

    /// Position samples for visualization consumers
    trajectory: TrajectoryLog,

    /// Current run phase
    phase: Phase,
}

impl Navigator {
    /// Create a navigator from configuration.
    ///
    /// Validates eagerly: every config error surfaces here, never
    /// mid-run.
    ///
    /// # Errors
    ///
    /// `NavigationError::InvalidConfig` if any parameter is out of
    /// range (see [`NavigatorConfig`]).
    pub fn new(config: NavigatorConfig) -> Result<Self, NavigationError> {
        Self::validate_config(&config)?;

        let rng = RngManager::new(config.rng_seed);
        let turn_policy = config.turn.build();
        let state = AgentState::at_origin(config.sun_direction);
        let mut trajectory = TrajectoryLog::new(config.record_trajectory);
        trajectory.record(state.position);

        Ok(Self {
            config,
            state,
            rng,
            turn_policy,
            trajectory,
            phase: Phase::Init,
        })
    }

    /// Validate configuration.
    fn validate_config(config: &NavigatorConfig) -> Result<(), NavigationError> {
        if !(config.step_length.is_finite() && config.step_length > 0.0) {
            return Err(NavigationError::InvalidConfig(format!(
                "step_length must be positive and finite, got {}",
                config.step_length
            )));
        }

        if config.scan_interval == 0 {
            return Err(NavigationError::InvalidConfig(
                "scan_interval must be > 0".to_string(),
            ));
        }

        if !(config.scan_gain.is_finite() && (0.0..=1.0).contains(&config.scan_gain)) {
            return Err(NavigationError::InvalidConfig(format!(
                "scan_gain must be within [0, 1], got {}",
                config.scan_gain
            )));
        }

        if !(config.sun_direction.is_finite() && (0.0..TAU).contains(&config.sun_direction)) {
            return Err(NavigationError::InvalidConfig(format!(
                "sun_direction must be radians within [0, 2*pi), got {}",
                config.sun_direction
            )));
        }

        match &config.turn {
            TurnConfig::Uniform { max_turn } => {
                if !(max_turn.is_finite() && *max_turn > 0.0 && *max_turn <= PI) {
                    return Err(NavigationError::InvalidConfig(format!(
                        "uniform max_turn must be within (0, pi], got {}",
                        max_turn
                    )));
                }
            }
            TurnConfig::Gaussian { std_dev } => {
                if !(std_dev.is_finite() && *std_dev > 0.0) {
                    return Err(NavigationError::InvalidConfig(format!(
                        "gaussian std_dev must be positive and finite, got {}",
                        std_dev
                    )));
                }
            }
            TurnConfig::Scripted { turns } => {
                if turns.iter().any(|t| !t.is_finite()) {
                    return Err(NavigationError::InvalidConfig(
                        "scripted turns must all be finite".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current run phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Agent state (pose, accumulated vector, step count).
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// The validated configuration this run was built from.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    // ========================================================================
    // Run Loop
    // ========================================================================

    /// Execute the full run: explore, then home.
    ///
    /// Consumes the navigator: `Done` is terminal and a finished run
    /// cannot be restarted.
    pub fn run(mut self) -> RunResult {
        self.explore();

        let accumulated_vector = self.state.accumulated_vector;
        let phase_boundary_index = self.trajectory.len();
        let homing_steps = self.home();

        self.phase = Phase::Done;

        RunResult {
            accumulated_vector,
            final_position: self.state.position,
            phase_boundary_index: if self.trajectory.is_enabled() {
                phase_boundary_index
            } else {
                0
            },
            explore_steps: self.state.step_count,
            homing_steps,
            trajectory: self.trajectory.into_samples(),
        }
    }

    /// Exploration phase: `num_explore_steps` randomized steps with
    /// periodic scanning.
    fn explore(&mut self) {
        self.phase = Phase::Exploring;
        for _ in 0..self.config.num_explore_steps {
            self.explore_step();
        }
    }

    /// One exploration step.
    fn explore_step(&mut self) {
        let turn = self.turn_policy.draw_turn(&mut self.rng);
        self.state.heading = wrap_angle(self.state.heading + turn);

        let displacement =
            DVec2::new(self.state.heading.cos(), self.state.heading.sin()) * self.config.step_length;
        self.state.position += displacement;

        // Exactly one integration per step; the scan below only touches
        // the heading.
        self.state.accumulated_vector = integrate(self.state.accumulated_vector, displacement);

        self.state.step_count += 1;
        if self.state.step_count % self.config.scan_interval == 0 {
            self.state.heading = correct_heading(
                self.state.heading,
                self.config.sun_direction,
                self.config.scan_gain,
            );
        }

        self.trajectory.record(self.state.position);
    }

    /// Homing phase: apply the legs of the negated accumulated vector.
    ///
    /// Returns the number of homing steps taken (zero for an
    /// exactly-zero accumulated vector).
    fn home(&mut self) -> usize {
        self.phase = Phase::Homing;

        let legs = homing_legs(
            self.state.accumulated_vector,
            self.config.step_length,
            self.config.homing,
        );

        if !legs.is_empty() {
            self.state.heading = wrap_angle(return_heading(self.state.accumulated_vector));
        }

        for leg in &legs {
            self.state.position += *leg;
            self.trajectory.record(self.state.position);
        }

        legs.len()
    }
}

/// Run a complete navigation simulation.
///
/// Validates the configuration, explores, homes, and returns the
/// artifacts the visualization collaborators consume.
///
/// # Example
///
/// ```
/// use ant_navigator_core_rs::{run, NavigatorConfig};
///
/// let result = run(NavigatorConfig::default()).unwrap();
///
/// // Origin sample + 120 exploration samples + homing samples.
/// assert_eq!(result.phase_boundary_index, 121);
/// assert!(result.final_position.length() < 1e-9);
/// ```
pub fn run(config: NavigatorConfig) -> Result<RunResult, NavigationError> {
    Ok(Navigator::new(config)?.run())
}
