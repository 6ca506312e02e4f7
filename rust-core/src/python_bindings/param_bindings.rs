//! Python-facing enums for synthesis parameters

use pyo3::prelude::*;
use crate::signal::{Channel, TransformMode};

/// Clarke scaling exposed to Python
#[pyclass(name = "TransformMode")]
#[derive(Clone)]
pub enum PyTransformMode {
    AmplitudeInvariant,
    PowerInvariant,
}

impl From<PyTransformMode> for TransformMode {
    fn from(py_mode: PyTransformMode) -> Self {
        match py_mode {
            PyTransformMode::AmplitudeInvariant => TransformMode::AmplitudeInvariant,
            PyTransformMode::PowerInvariant => TransformMode::PowerInvariant,
        }
    }
}

impl From<TransformMode> for PyTransformMode {
    fn from(mode: TransformMode) -> Self {
        match mode {
            TransformMode::AmplitudeInvariant => PyTransformMode::AmplitudeInvariant,
            TransformMode::PowerInvariant => PyTransformMode::PowerInvariant,
        }
    }
}

/// Spectral channel exposed to Python
#[pyclass(name = "Channel")]
#[derive(Clone)]
pub enum PyChannel {
    PhaseA,
    PhaseB,
    PhaseC,
    Alpha,
    Beta,
    ComplexVector,
}

impl From<PyChannel> for Channel {
    fn from(py_channel: PyChannel) -> Self {
        match py_channel {
            PyChannel::PhaseA => Channel::PhaseA,
            PyChannel::PhaseB => Channel::PhaseB,
            PyChannel::PhaseC => Channel::PhaseC,
            PyChannel::Alpha => Channel::Alpha,
            PyChannel::Beta => Channel::Beta,
            PyChannel::ComplexVector => Channel::ComplexVector,
        }
    }
}

impl From<Channel> for PyChannel {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::PhaseA => PyChannel::PhaseA,
            Channel::PhaseB => PyChannel::PhaseB,
            Channel::PhaseC => PyChannel::PhaseC,
            Channel::Alpha => PyChannel::Alpha,
            Channel::Beta => PyChannel::Beta,
            Channel::ComplexVector => PyChannel::ComplexVector,
        }
    }
}

#[pymethods]
impl PyChannel {
    /// Parse a display label such as "Phase A" or "Complex Vector"
    #[staticmethod]
    fn from_label(label: &str) -> PyResult<Self> {
        label
            .parse::<Channel>()
            .map(PyChannel::from)
            .map_err(super::to_py_err)
    }

    /// Display label
    fn label(&self) -> &'static str {
        Channel::from(self.clone()).label()
    }
}
