//! Python bindings for single-pole filtering

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use super::to_py_err;
use crate::filters::{get_alpha, SinglePoleLowpass};

/// Smoothing coefficient for a single-pole IIR low-pass
///
/// Args:
///     corner: Corner frequency in Hz
///     srate: Sample rate in Hz
///
/// Returns:
///     alpha in (0, 1)
#[pyfunction]
pub fn getalpha(corner: f64, srate: f64) -> PyResult<f64> {
    get_alpha(corner, srate).map_err(to_py_err)
}

/// Single-pole low-pass filter exposed to Python
#[pyclass(name = "SinglePoleLowpass")]
pub struct PySinglePoleLowpass {
    filter: SinglePoleLowpass,
}

#[pymethods]
impl PySinglePoleLowpass {
    /// Create a new filter from a smoothing coefficient
    ///
    /// Args:
    ///     alpha: Smoothing coefficient in (0, 1]
    #[new]
    fn new(alpha: f64) -> PyResult<Self> {
        Ok(Self {
            filter: SinglePoleLowpass::new(alpha).map_err(to_py_err)?,
        })
    }

    /// Design a filter from a corner frequency
    ///
    /// Args:
    ///     corner: Corner frequency in Hz
    ///     srate: Sample rate in Hz
    #[staticmethod]
    fn from_corner(corner: f64, srate: f64) -> PyResult<Self> {
        Ok(Self {
            filter: SinglePoleLowpass::from_corner(corner, srate).map_err(to_py_err)?,
        })
    }

    /// Process a block of samples
    ///
    /// Args:
    ///     input_signal: Input samples as numpy array
    ///
    /// Returns:
    ///     Filtered output as numpy array
    fn process_block<'py>(
        &mut self,
        py: Python<'py>,
        input_signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let input = input_signal.as_slice()?;
        let output = self.filter.process_block(input);

        Ok(PyArray1::from_vec(py, output))
    }

    /// Reset filter state
    fn reset(&mut self) {
        self.filter.reset();
    }

    /// Get alpha
    fn alpha(&self) -> f64 {
        self.filter.alpha()
    }

    /// Corner frequency at the given sample rate
    fn corner_frequency(&self, srate: f64) -> f64 {
        self.filter.corner_frequency(srate)
    }
}
