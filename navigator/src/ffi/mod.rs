//! FFI boundary (PyO3)
//!
//! Python bindings for the navigation core. The plotting and animation
//! front-ends live in Python; they construct a run from a plain dict
//! and get plain lists/tuples back. The boundary is minimal: no
//! navigation logic lives here.

pub mod navigator;
pub mod types;
