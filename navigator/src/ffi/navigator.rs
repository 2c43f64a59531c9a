//! PyO3 wrapper for the Navigator
//!
//! Python entry point for the navigation core.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{parse_navigator_config, run_result_to_py};
use crate::navigator::{run as run_navigation, Navigator as RustNavigator, NavigatorConfig};

/// Python wrapper for the Rust navigator.
///
/// Holds a validated configuration; each `run()` replays the same
/// deterministic simulation (same seed, same result).
///
/// # Example (from Python)
///
/// ```python
/// from ant_navigator_core_rs import Navigator
///
/// nav = Navigator.new({
///     "step_length": 0.5,
///     "num_explore_steps": 120,
///     "scan_interval": 10,
///     "scan_gain": 0.1,
///     "sun_direction": 0.0,
///     "rng_seed": 1,
/// })
/// result = nav.run()
/// print(result["final_position"], result["phase_boundary_index"])
/// ```
#[pyclass(name = "Navigator")]
pub struct PyNavigator {
    config: NavigatorConfig,
}

#[pymethods]
impl PyNavigator {
    /// Create a navigator from a configuration dict.
    ///
    /// # Errors
    ///
    /// Raises ValueError if fields have the wrong type or values are
    /// out of range.
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let config = parse_navigator_config(config)?;

        // Validate eagerly so Python callers fail at construction.
        RustNavigator::new(config.clone()).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Failed to create navigator: {}",
                e
            ))
        })?;

        Ok(PyNavigator { config })
    }

    /// Execute the full run (explore + home).
    ///
    /// # Returns
    ///
    /// Dictionary containing:
    /// - `trajectory`: list of (x, y) samples across both phases
    /// - `accumulated_vector`: (dx, dy) at the end of exploration
    /// - `final_position`: (x, y) after homing
    /// - `phase_boundary_index`: index of the first homing sample
    /// - `explore_steps` / `homing_steps`: step counts per phase
    fn run(&self, py: Python) -> PyResult<Py<PyDict>> {
        let result = run_navigation(self.config.clone()).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("Run failed: {}", e))
        })?;

        run_result_to_py(py, &result)
    }

    /// The validated configuration, as a dict-compatible JSON string.
    fn config_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Config serialization failed: {}",
                e
            ))
        })
    }
}
