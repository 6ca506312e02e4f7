//! Python bindings for spectral analysis

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::signal::{HarmonicSpec, SynthesisParams};
use crate::spectrum::{SpectralEngine, SpectrumConfig};
use super::param_bindings::{PyChannel, PyTransformMode};
use super::to_py_err;

/// Spectral engine exposed to Python
#[pyclass(name = "SpectralEngine")]
pub struct PySpectralEngine {
    engine: SpectralEngine,
}

#[pymethods]
impl PySpectralEngine {
    /// Create a new spectral engine
    ///
    /// Args:
    ///     fft_size: FFT size (must be a power of 2)
    ///     sampling_interval: Time between samples (per-unit periods)
    ///     band_limit: Keep lines with |f| <= band_limit
    ///     magnitude_floor: Lines must exceed this magnitude
    #[new]
    #[pyo3(signature = (fft_size=16384, sampling_interval=2.0/199.0, band_limit=5.5, magnitude_floor=0.004))]
    fn new(
        fft_size: usize,
        sampling_interval: f64,
        band_limit: f64,
        magnitude_floor: f64,
    ) -> PyResult<Self> {
        let config = SpectrumConfig {
            fft_size,
            sampling_interval,
            band_limit,
            magnitude_floor,
            ..SpectrumConfig::default()
        };

        Ok(Self {
            engine: SpectralEngine::new(config).map_err(to_py_err)?,
        })
    }

    /// Compute harmonic lines for a parameter set
    ///
    /// Args:
    ///     amplitudes: Positive-sequence amplitudes of orders 1, 2, ...
    ///     negative_amplitude: Negative-sequence fundamental amplitude
    ///     mode: Clarke scaling
    ///     channel: Analyzed signal
    ///
    /// Returns:
    ///     Tuple of (frequencies, magnitudes) as numpy arrays
    fn compute_spectrum<'py>(
        &self,
        py: Python<'py>,
        amplitudes: Vec<f64>,
        negative_amplitude: f64,
        mode: PyTransformMode,
        channel: PyChannel,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        let harmonics = HarmonicSpec::from_amplitudes(&amplitudes).map_err(to_py_err)?;
        let params = SynthesisParams::new(harmonics, negative_amplitude, mode.into()).map_err(to_py_err)?;
        let spectrum = self.engine.compute_spectrum(&params, channel.into());

        Ok((
            PyArray1::from_vec(py, spectrum.frequencies()),
            PyArray1::from_vec(py, spectrum.magnitudes()),
        ))
    }

    /// Bin spacing in Hz
    fn frequency_resolution(&self) -> f64 {
        self.engine.frequency_resolution()
    }

    /// Update configuration
    ///
    /// Args:
    ///     fft_size: New FFT size
    ///     sampling_interval: New sampling interval
    ///     band_limit: New band limit
    ///     magnitude_floor: New magnitude floor
    #[pyo3(signature = (fft_size=None, sampling_interval=None, band_limit=None, magnitude_floor=None))]
    fn update_config(
        &mut self,
        fft_size: Option<usize>,
        sampling_interval: Option<f64>,
        band_limit: Option<f64>,
        magnitude_floor: Option<f64>,
    ) -> PyResult<()> {
        let mut config = self.engine.config().clone();

        if let Some(size) = fft_size {
            config.fft_size = size;
        }
        if let Some(dt) = sampling_interval {
            config.sampling_interval = dt;
        }
        if let Some(limit) = band_limit {
            config.band_limit = limit;
        }
        if let Some(floor) = magnitude_floor {
            config.magnitude_floor = floor;
        }

        self.engine.update_config(config).map_err(to_py_err)
    }

    /// Get current FFT size
    fn get_fft_size(&self) -> usize {
        self.engine.config().fft_size
    }
}
