//! Type conversion utilities for the FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict,
//! PyList, tuples).

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::navigator::{HomingPolicy, NavigatorConfig, RunResult};
use crate::policy::TurnConfig;

/// Extract a required field from a Python dict with a clear error.
fn extract_required<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Missing required field '{}'",
                key
            ))
        })?
        .extract()
}

/// Extract an optional field from a Python dict.
fn extract_optional<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<Option<T>> {
    match dict.get_item(key)? {
        Some(value) => Ok(Some(value.extract()?)),
        None => Ok(None),
    }
}

/// Parse a turn-policy sub-dict: `{"type": "uniform", "max_turn": 0.785}`,
/// `{"type": "gaussian", "std_dev": 0.2}` or
/// `{"type": "scripted", "turns": [0.1, -0.2]}`.
fn parse_turn_config(dict: &Bound<'_, PyDict>) -> PyResult<TurnConfig> {
    let kind: String = extract_required(dict, "type")?;
    match kind.as_str() {
        "uniform" => Ok(TurnConfig::Uniform {
            max_turn: extract_required(dict, "max_turn")?,
        }),
        "gaussian" => Ok(TurnConfig::Gaussian {
            std_dev: extract_required(dict, "std_dev")?,
        }),
        "scripted" => Ok(TurnConfig::Scripted {
            turns: extract_required(dict, "turns")?,
        }),
        other => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Unknown turn policy type '{}'",
            other
        ))),
    }
}

/// Parse a navigator configuration from a Python dict.
///
/// Missing fields fall back to the reference defaults, matching the
/// serde behavior on the Rust side.
pub fn parse_navigator_config(dict: &Bound<'_, PyDict>) -> PyResult<NavigatorConfig> {
    let defaults = NavigatorConfig::default();

    let turn = match dict.get_item("turn")? {
        Some(value) => parse_turn_config(value.downcast::<PyDict>()?)?,
        None => defaults.turn.clone(),
    };

    let homing = match extract_optional::<String>(dict, "homing")? {
        Some(name) => match name.as_str() {
            "single_leap" => HomingPolicy::SingleLeap,
            "stepwise" => HomingPolicy::Stepwise,
            other => {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Unknown homing policy '{}'",
                    other
                )))
            }
        },
        None => defaults.homing,
    };

    Ok(NavigatorConfig {
        step_length: extract_optional(dict, "step_length")?.unwrap_or(defaults.step_length),
        num_explore_steps: extract_optional(dict, "num_explore_steps")?
            .unwrap_or(defaults.num_explore_steps),
        scan_interval: extract_optional(dict, "scan_interval")?.unwrap_or(defaults.scan_interval),
        scan_gain: extract_optional(dict, "scan_gain")?.unwrap_or(defaults.scan_gain),
        sun_direction: extract_optional(dict, "sun_direction")?.unwrap_or(defaults.sun_direction),
        rng_seed: extract_optional(dict, "rng_seed")?.unwrap_or(defaults.rng_seed),
        turn,
        homing,
        record_trajectory: extract_optional(dict, "record_trajectory")?
            .unwrap_or(defaults.record_trajectory),
    })
}

/// Convert a run result into a Python dict of plain values.
pub fn run_result_to_py(py: Python, result: &RunResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);

    let trajectory = PyList::new_bound(py, result.trajectory.iter().map(|p| (p.x, p.y)));
    dict.set_item("trajectory", trajectory)?;
    dict.set_item(
        "accumulated_vector",
        (result.accumulated_vector.x, result.accumulated_vector.y),
    )?;
    dict.set_item(
        "final_position",
        (result.final_position.x, result.final_position.y),
    )?;
    dict.set_item("phase_boundary_index", result.phase_boundary_index)?;
    dict.set_item("explore_steps", result.explore_steps)?;
    dict.set_item("homing_steps", result.homing_steps)?;

    Ok(dict.unbind())
}
