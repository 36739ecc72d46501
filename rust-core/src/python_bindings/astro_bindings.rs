//! Python bindings for fringe period and sidereal time

use pyo3::prelude::*;

use super::to_py_err;
use crate::astro::{self, MarluEphemeris};

/// Fringe period of a two-element interferometer
///
/// Args:
///     freq: Observing frequency in Hz
///     baseline: Baseline length in metres
///     decln: Source declination in degrees
///     latitude: Observer latitude in degrees (accepted, unused)
///
/// Returns:
///     Fringe period in seconds
#[pyfunction]
#[pyo3(signature = (freq, baseline, decln, latitude=0.0))]
pub fn fperiod(freq: f64, baseline: f64, decln: f64, latitude: f64) -> PyResult<f64> {
    astro::fringe_period(freq, baseline, decln, latitude).map_err(to_py_err)
}

/// Current local sidereal time
///
/// Args:
///     longitude: Observer longitude in decimal degrees, east positive
///
/// Returns:
///     "HH,MM,SS"
#[pyfunction]
pub fn cur_sidereal(longitude: f64) -> PyResult<String> {
    astro::cur_sidereal(&MarluEphemeris::system(), longitude).map_err(to_py_err)
}
