//! Python bindings for the phasor pipeline

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::pipeline::{PhasorPipeline, PipelineConfig};
use crate::signal::TrajectoryKind;
use super::param_bindings::{PyChannel, PyTransformMode};
use super::to_py_err;

/// Phasor pipeline exposed to Python
///
/// Holds the parameter set and the latest table/spectrum; every setter
/// recomputes what it affects before returning.
#[pyclass(name = "PhasorPipeline")]
pub struct PyPhasorPipeline {
    pipeline: PhasorPipeline,
}

fn trajectory_kind(name: &str) -> PyResult<TrajectoryKind> {
    match name.to_ascii_lowercase().as_str() {
        "positive" => Ok(TrajectoryKind::Positive),
        "negative" => Ok(TrajectoryKind::Negative),
        "combined" => Ok(TrajectoryKind::Combined),
        "clarke" => Ok(TrajectoryKind::Clarke),
        other => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "Unknown trajectory kind: {:?}",
            other
        ))),
    }
}

#[pymethods]
impl PyPhasorPipeline {
    /// Create a new pipeline
    ///
    /// Args:
    ///     harmonic_count: Number of positive-sequence harmonics
    ///     with_spectrum: Whether to run the FFT stage
    #[new]
    #[pyo3(signature = (harmonic_count=5, with_spectrum=true))]
    fn new(harmonic_count: usize, with_spectrum: bool) -> PyResult<Self> {
        let mut config = PipelineConfig {
            harmonic_count,
            ..PipelineConfig::default()
        };
        if !with_spectrum {
            config.spectrum = None;
        }

        Ok(Self {
            pipeline: PhasorPipeline::new(config).map_err(to_py_err)?,
        })
    }

    /// Set one harmonic amplitude (order starts at 1)
    fn set_harmonic_amplitude(&mut self, order: usize, amplitude: f64) -> PyResult<()> {
        self.pipeline.set_harmonic_amplitude(order, amplitude).map_err(to_py_err)
    }

    /// Replace all harmonic amplitudes
    fn set_harmonic_amplitudes(&mut self, amplitudes: Vec<f64>) -> PyResult<()> {
        self.pipeline.set_harmonic_amplitudes(&amplitudes).map_err(to_py_err)
    }

    /// Set the negative-sequence amplitude
    fn set_negative_amplitude(&mut self, amplitude: f64) -> PyResult<()> {
        self.pipeline.set_negative_amplitude(amplitude).map_err(to_py_err)
    }

    /// Set the Clarke scaling
    fn set_transform_mode(&mut self, mode: PyTransformMode) -> PyResult<()> {
        self.pipeline.set_transform_mode(mode.into()).map_err(to_py_err)
    }

    /// Select the analyzed channel
    fn set_channel(&mut self, channel: PyChannel) {
        self.pipeline.set_channel(channel.into());
    }

    /// Current analyzed channel
    fn channel(&self) -> PyChannel {
        self.pipeline.channel().into()
    }

    /// Current Clarke scaling
    fn transform_mode(&self) -> PyTransformMode {
        self.pipeline.params().mode.into()
    }

    /// Number of display frames
    fn num_frames(&self) -> usize {
        self.pipeline.table().len()
    }

    /// Frame times as numpy array
    fn times<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.pipeline.table().times().to_vec())
    }

    /// One channel over all frames as numpy array
    fn channel_values<'py>(&self, py: Python<'py>, channel: PyChannel) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.pipeline.table().channel_values(channel.into()))
    }

    /// Get one frame
    ///
    /// Returns:
    ///     Dictionary with keys: 'time', 'positive', 'negative', 'combined',
    ///     'alpha', 'beta', or None past the last frame
    fn frame<'py>(&self, py: Python<'py>, index: usize) -> Option<PyObject> {
        let table = self.pipeline.table();
        let sample = table.frame(index)?;
        let time = table.time(index)?;

        let dict = pyo3::types::PyDict::new(py);
        dict.set_item("time", time).ok();
        dict.set_item("positive", sample.positive.to_vec()).ok();
        dict.set_item("negative", sample.negative.to_vec()).ok();
        dict.set_item("combined", sample.combined.to_vec()).ok();
        dict.set_item("alpha", sample.alpha).ok();
        dict.set_item("beta", sample.beta).ok();

        Some(dict.into())
    }

    /// Locus up to a frame
    ///
    /// Args:
    ///     kind: "positive", "negative", "combined" or "clarke"
    ///     frame: Last frame included
    ///
    /// Returns:
    ///     Tuple of (x, y) numpy arrays
    fn trajectory<'py>(
        &self,
        py: Python<'py>,
        kind: &str,
        frame: usize,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        let points = self.pipeline.table().trajectory(trajectory_kind(kind)?, frame);
        let xs = points.iter().map(|p| p.x).collect();
        let ys = points.iter().map(|p| p.y).collect();

        Ok((PyArray1::from_vec(py, xs), PyArray1::from_vec(py, ys)))
    }

    /// Current spectrum
    ///
    /// Returns:
    ///     Tuple of (frequencies, magnitudes) numpy arrays, or None when the
    ///     FFT stage is disabled
    fn spectrum<'py>(&self, py: Python<'py>) -> Option<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        self.pipeline.spectrum().map(|spectrum| {
            (
                PyArray1::from_vec(py, spectrum.frequencies()),
                PyArray1::from_vec(py, spectrum.magnitudes()),
            )
        })
    }
}
