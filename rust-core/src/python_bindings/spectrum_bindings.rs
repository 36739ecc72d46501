//! Python bindings for RFI masks

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::to_py_err;
use crate::spectrum::{self, Mask};

/// RFI mask in split FFT order
///
/// Args:
///     srate: Sample rate in Hz
///     freq: Centre frequency in Hz
///     rfilist: RFI frequencies in Hz
///     fftsize: Number of FFT bins (positive, even)
///     iscomplex: Return complex128 instead of float64
///
/// Returns:
///     numpy array of fftsize ones with zeros at the RFI bins
#[pyfunction]
#[pyo3(signature = (srate, freq, rfilist, fftsize, iscomplex=false))]
pub fn rfi_mask(
    py: Python<'_>,
    srate: f64,
    freq: f64,
    rfilist: Vec<f64>,
    fftsize: i64,
    iscomplex: bool,
) -> PyResult<PyObject> {
    let fft_size = usize::try_from(fftsize).map_err(|_| {
        PyValueError::new_err(format!(
            "FFT size must be a positive even number of bins (got {fftsize})"
        ))
    })?;

    let mask = spectrum::rfi_mask(srate, freq, &rfilist, fft_size, iscomplex).map_err(to_py_err)?;

    let array = match mask {
        Mask::Real(m) => PyArray1::from_owned_array(py, m.into_array()).to_owned().into_py(py),
        Mask::Complex(m) => PyArray1::from_owned_array(py, m.into_array()).to_owned().into_py(py),
    };

    Ok(array)
}
