//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::{Error, ErrorKind};

mod astro_bindings;
mod filter_bindings;
mod spectrum_bindings;

/// Configuration errors become `ValueError`, provider failures `RuntimeError`
pub(crate) fn to_py_err(err: impl Into<Error>) -> PyErr {
    let err = err.into();
    match err.kind() {
        ErrorKind::Configuration => PyValueError::new_err(err.to_string()),
        ErrorKind::ExternalProvider => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Python module definition
#[pymodule]
fn radio_toolbox(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(astro_bindings::fperiod, m)?)?;
    m.add_function(wrap_pyfunction!(astro_bindings::cur_sidereal, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::getalpha, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::rfi_mask, m)?)?;

    m.add_class::<filter_bindings::PySinglePoleLowpass>()?;

    Ok(())
}
