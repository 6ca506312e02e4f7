//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod param_bindings;
mod spectrum_bindings;
mod pipeline_bindings;

/// Python module definition
#[pymodule]
fn phasor_lab(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<spectrum_bindings::PySpectralEngine>()?;
    m.add_class::<pipeline_bindings::PyPhasorPipeline>()?;

    // Enums
    m.add_class::<param_bindings::PyTransformMode>()?;
    m.add_class::<param_bindings::PyChannel>()?;

    Ok(())
}

/// Map crate errors onto Python's ValueError
pub(crate) fn to_py_err(err: crate::error::PhasorError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}
