//! PyO3 bindings for data-toolkit Rust components.
//!
//! Exposes the Rust implementations to Python:
//! - Min-max normalization
//! - Range (bounds) inspection
//! - Run stamp formatting

use chrono::Utc;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use toolkit_core::{format_timestamp, Error as RustError};
use toolkit_features::{normalize_checked, Bounds as RustBounds};

fn to_py_err(err: RustError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

// ============================================================================
// Python-exposed Types
// ============================================================================

/// Observed range of a non-empty sequence.
#[pyclass]
#[derive(Clone)]
pub struct Bounds {
    #[pyo3(get)]
    pub min: f64,
    #[pyo3(get)]
    pub max: f64,
}

#[pymethods]
impl Bounds {
    #[getter]
    fn span(&self) -> f64 {
        RustBounds::from(self.clone()).span()
    }

    #[getter]
    fn is_degenerate(&self) -> bool {
        RustBounds::from(self.clone()).is_degenerate()
    }

    /// Rescale one value against these bounds.
    fn scale(&self, value: f64) -> f64 {
        RustBounds::from(self.clone()).scale(value)
    }

    fn __repr__(&self) -> String {
        format!("Bounds(min={}, max={})", self.min, self.max)
    }
}

impl From<RustBounds> for Bounds {
    fn from(b: RustBounds) -> Self {
        Bounds { min: b.min, max: b.max }
    }
}

impl From<Bounds> for RustBounds {
    fn from(b: Bounds) -> Self {
        RustBounds { min: b.min, max: b.max }
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Scale numeric values into the range 0.0 to 1.0.
///
/// Empty input returns an empty list. Identical values return all zeros.
/// Raises ValueError for NaN or infinite values.
#[pyfunction]
fn normalize(values: Vec<f64>) -> PyResult<Vec<f64>> {
    normalize_checked(&values).map_err(to_py_err)
}

/// Min and max of the values, or None for an empty list.
#[pyfunction]
fn bounds(values: Vec<f64>) -> Option<Bounds> {
    RustBounds::of(&values).map(Into::into)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
#[pyfunction]
fn utc_timestamp() -> String {
    format_timestamp(&Utc::now())
}

// ============================================================================
// Module Definition
// ============================================================================

/// Example ML/AI utility functions backed by Rust.
#[pymodule]
fn example_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Bounds>()?;

    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(bounds, m)?)?;
    m.add_function(wrap_pyfunction!(utc_timestamp, m)?)?;

    Ok(())
}
