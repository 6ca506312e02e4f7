//! Spectral engine for synthesized three-phase signals
//!
//! Samples one channel over a long power-of-two grid, applies the flat-top
//! window, runs the radix-2 kernel and reduces the dense result to a sparse
//! list of harmonic lines inside a display band.

use super::fft::transform;
use super::peaks::{extract_peaks, Spectrum, SpectrumPeak};
use super::windowing::{Window, WindowType};
use crate::error::{PhasorError, Result};
use crate::signal::params::{Channel, SynthesisParams};
use crate::signal::synth::sample_at;

/// Spectral engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumConfig {
    /// FFT size (number of samples, must be a power of 2)
    pub fft_size: usize,

    /// Time between samples (per-unit periods)
    pub sampling_interval: f64,

    /// Keep bins with |f| <= band_limit
    pub band_limit: f64,

    /// Lines must exceed this normalized magnitude
    pub magnitude_floor: f64,

    /// Window applied before the transform
    pub window_type: WindowType,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            fft_size: 16384,
            // Same step as the default 200-point, 2-period display grid
            sampling_interval: 2.0 / 199.0,
            band_limit: 5.5,
            magnitude_floor: 0.004,
            window_type: WindowType::FlatTop,
        }
    }
}

impl SpectrumConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.fft_size.is_power_of_two() || self.fft_size < 2 {
            return Err(PhasorError::InvalidFftSize(self.fft_size));
        }
        if !self.sampling_interval.is_finite() || self.sampling_interval <= 0.0 {
            return Err(PhasorError::InvalidSamplingInterval(self.sampling_interval));
        }
        if !self.band_limit.is_finite() || self.band_limit <= 0.0 {
            return Err(PhasorError::InvalidBand(self.band_limit));
        }
        if !self.magnitude_floor.is_finite() || self.magnitude_floor < 0.0 {
            return Err(PhasorError::InvalidFloor(self.magnitude_floor));
        }
        Ok(())
    }
}

/// Windowed FFT analysis of one synthesized channel
#[derive(Debug, Clone)]
pub struct SpectralEngine {
    config: SpectrumConfig,
    window: Window,
}

impl SpectralEngine {
    /// Create a new engine, validating the configuration once
    pub fn new(config: SpectrumConfig) -> Result<Self> {
        config.validate()?;
        let window = checked_window(config.window_type, config.fft_size)?;

        log::debug!(
            "spectral engine: N={} dt={} window={:?} sum={:.3}",
            config.fft_size,
            config.sampling_interval,
            config.window_type,
            window.sum()
        );

        Ok(Self { config, window })
    }

    /// Sparse harmonic lines of one channel
    ///
    /// # Arguments
    /// * `params` - Synthesis parameters
    /// * `channel` - Which signal to analyze
    pub fn compute_spectrum(&self, params: &SynthesisParams, channel: Channel) -> Spectrum {
        let band = self.band_spectrum(params, channel);
        let peaks = extract_peaks(&band, self.frequency_resolution(), self.config.magnitude_floor);

        log::debug!(
            "spectrum of {}: {} band bins -> {} lines",
            channel,
            band.len(),
            peaks.len()
        );

        Spectrum::new(peaks)
    }

    /// Every bin inside the band, sorted by ascending frequency
    pub fn band_spectrum(&self, params: &SynthesisParams, channel: Channel) -> Vec<SpectrumPeak> {
        let (real, imag) = self.transformed(params, channel);
        let n = self.config.fft_size;
        let limit = self.config.band_limit;

        let mut bins: Vec<SpectrumPeak> = (0..n)
            .map(|i| SpectrumPeak {
                frequency: self.bin_frequency(i),
                magnitude: real[i].hypot(imag[i]) / self.window.sum(),
            })
            .filter(|bin| bin.frequency >= -limit && bin.frequency <= limit)
            .collect();

        bins.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
        bins
    }

    /// Signed frequency of an FFT bin in unshifted order
    ///
    /// Bins below N/2 are non-negative; bin i >= N/2 maps to (i − N)/(N·dt).
    pub fn bin_frequency(&self, bin: usize) -> f64 {
        let n = self.config.fft_size;
        let span = n as f64 * self.config.sampling_interval;
        if bin < n / 2 {
            bin as f64 / span
        } else {
            (bin as f64 - n as f64) / span
        }
    }

    /// Bin spacing in Hz: 1/(N·dt)
    pub fn frequency_resolution(&self) -> f64 {
        1.0 / (self.config.fft_size as f64 * self.config.sampling_interval)
    }

    /// Update configuration
    ///
    /// The window is regenerated only when the size or window type changes.
    /// On error the engine keeps its previous configuration.
    pub fn update_config(&mut self, config: SpectrumConfig) -> Result<()> {
        config.validate()?;

        let needs_new_window = config.fft_size != self.config.fft_size
            || config.window_type != self.config.window_type;
        if needs_new_window {
            self.window = checked_window(config.window_type, config.fft_size)?;
        }

        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Sample, window and transform one channel
    fn transformed(&self, params: &SynthesisParams, channel: Channel) -> (Vec<f64>, Vec<f64>) {
        let n = self.config.fft_size;
        let dt = self.config.sampling_interval;

        let mut real = vec![0.0; n];
        let mut imag = vec![0.0; n];
        for (i, (re, im)) in real.iter_mut().zip(imag.iter_mut()).enumerate() {
            let (value_re, value_im) = sample_at(i as f64 * dt, params).channel(channel);
            *re = value_re;
            *im = value_im;
        }

        self.window.apply_inplace(&mut real);
        self.window.apply_inplace(&mut imag);

        transform(&mut real, &mut imag);
        (real, imag)
    }
}

fn checked_window(window_type: WindowType, size: usize) -> Result<Window> {
    let window = Window::new(window_type, size);
    if window.sum() > 0.0 {
        Ok(window)
    } else {
        Err(PhasorError::DegenerateWindow {
            size,
            sum: window.sum(),
        })
    }
}
