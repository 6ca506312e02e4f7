//! Parameter-driven pipeline feeding the display layer
//!
//! Owns the current parameter set together with the SignalTable and
//! Spectrum computed from it. Every inbound change either fails without
//! touching anything or replaces the affected outputs wholesale.

use crate::error::{PhasorError, Result};
use crate::signal::params::{Channel, HarmonicSpec, SynthesisParams, TransformMode, DEFAULT_HARMONIC_COUNT};
use crate::signal::table::{build_table, SignalTable, TableConfig};
use crate::spectrum::analysis::{SpectralEngine, SpectrumConfig};
use crate::spectrum::peaks::Spectrum;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Number of positive-sequence harmonics exposed (orders 1..=count)
    pub harmonic_count: usize,

    /// Display grid
    pub table: TableConfig,

    /// Spectral analysis, `None` to skip the FFT stage entirely
    pub spectrum: Option<SpectrumConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            harmonic_count: DEFAULT_HARMONIC_COUNT,
            table: TableConfig::default(),
            spectrum: Some(SpectrumConfig::default()),
        }
    }
}

impl PipelineConfig {
    /// Fundamental-only sequence demo, no spectrum
    pub fn sequences() -> Self {
        Self {
            harmonic_count: 1,
            spectrum: None,
            ..Self::default()
        }
    }

    /// Harmonics and Clarke decomposition, no spectrum
    pub fn clarke() -> Self {
        Self {
            spectrum: None,
            ..Self::default()
        }
    }
}

/// Synthesis + analysis state for one visualizer instance
#[derive(Debug, Clone)]
pub struct PhasorPipeline {
    config: PipelineConfig,
    params: SynthesisParams,
    channel: Channel,
    engine: Option<SpectralEngine>,
    table: SignalTable,
    spectrum: Option<Spectrum>,
}

impl PhasorPipeline {
    /// Create a pipeline with default parameters (unit fundamental,
    /// 0.1 negative sequence, power-invariant, Phase A)
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let harmonics = HarmonicSpec::fundamental(1.0, config.harmonic_count)?;
        let params = SynthesisParams::new(harmonics, 0.1, TransformMode::default())?;
        Self::with_params(config, params, Channel::default())
    }

    /// Create a pipeline with explicit starting parameters
    pub fn with_params(config: PipelineConfig, params: SynthesisParams, channel: Channel) -> Result<Self> {
        if params.harmonics.len() != config.harmonic_count {
            return Err(PhasorError::HarmonicCountMismatch {
                expected: config.harmonic_count,
                found: params.harmonics.len(),
            });
        }

        let engine = config.spectrum.clone().map(SpectralEngine::new).transpose()?;
        let table = build_table(&params, &config.table)?;
        let spectrum = engine.as_ref().map(|e| e.compute_spectrum(&params, channel));

        log::info!(
            "pipeline ready: {} harmonics, {} frames, spectrum {}",
            config.harmonic_count,
            table.len(),
            if engine.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            config,
            params,
            channel,
            engine,
            table,
            spectrum,
        })
    }

    /// Set the amplitude of one positive-sequence harmonic
    pub fn set_harmonic_amplitude(&mut self, order: usize, amplitude: f64) -> Result<()> {
        if self.params.harmonics.amplitude(order) == Some(amplitude) {
            return Ok(());
        }
        let mut params = self.params.clone();
        params.harmonics.set_amplitude(order, amplitude)?;
        self.commit(params)
    }

    /// Replace all positive-sequence amplitudes at once
    pub fn set_harmonic_amplitudes(&mut self, amplitudes: &[f64]) -> Result<()> {
        if amplitudes.len() != self.config.harmonic_count {
            return Err(PhasorError::HarmonicCountMismatch {
                expected: self.config.harmonic_count,
                found: amplitudes.len(),
            });
        }
        let harmonics = HarmonicSpec::from_amplitudes(amplitudes)?;
        if harmonics == self.params.harmonics {
            return Ok(());
        }
        let params = SynthesisParams {
            harmonics,
            ..self.params.clone()
        };
        self.commit(params)
    }

    /// Set the negative-sequence amplitude
    pub fn set_negative_amplitude(&mut self, amplitude: f64) -> Result<()> {
        if self.params.negative_amplitude == amplitude {
            return Ok(());
        }
        let mut params = self.params.clone();
        params.set_negative_amplitude(amplitude)?;
        self.commit(params)
    }

    /// Switch the Clarke scaling
    pub fn set_transform_mode(&mut self, mode: TransformMode) -> Result<()> {
        if self.params.mode == mode {
            return Ok(());
        }
        let params = SynthesisParams {
            mode,
            ..self.params.clone()
        };
        self.commit(params)
    }

    /// Select the analyzed channel; only the spectrum is recomputed
    pub fn set_channel(&mut self, channel: Channel) {
        if self.channel == channel {
            return;
        }
        self.channel = channel;
        self.rebuild_spectrum();
    }

    pub fn table(&self) -> &SignalTable {
        &self.table
    }

    /// Current spectrum, `None` when the FFT stage is disabled
    pub fn spectrum(&self) -> Option<&Spectrum> {
        self.spectrum.as_ref()
    }

    pub fn params(&self) -> &SynthesisParams {
        &self.params
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Apply validated parameters and rebuild both outputs
    fn commit(&mut self, params: SynthesisParams) -> Result<()> {
        let table = build_table(&params, &self.config.table)?;
        self.params = params;
        self.table = table;
        self.rebuild_spectrum();
        Ok(())
    }

    fn rebuild_spectrum(&mut self) {
        if let Some(engine) = &self.engine {
            self.spectrum = Some(engine.compute_spectrum(&self.params, self.channel));
            log::debug!("spectrum rebuilt for {}", self.channel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::TrajectoryKind;

    /// Small FFT keeps the tests quick
    fn small_config() -> PipelineConfig {
        PipelineConfig {
            spectrum: Some(SpectrumConfig {
                fft_size: 4096,
                ..SpectrumConfig::default()
            }),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let pipeline = PhasorPipeline::new(small_config()).unwrap();

        assert_eq!(pipeline.params().harmonics.amplitudes(), vec![1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(pipeline.params().negative_amplitude, 0.1);
        assert_eq!(pipeline.params().mode, TransformMode::PowerInvariant);
        assert_eq!(pipeline.channel(), Channel::PhaseA);
        assert_eq!(pipeline.table().len(), 200);
        assert!(!pipeline.spectrum().unwrap().is_empty());
    }

    #[test]
    fn test_presets_without_spectrum() {
        let sequences = PhasorPipeline::new(PipelineConfig::sequences()).unwrap();
        assert_eq!(sequences.params().harmonics.len(), 1);
        assert!(sequences.spectrum().is_none());

        let clarke = PhasorPipeline::new(PipelineConfig::clarke()).unwrap();
        assert_eq!(clarke.params().harmonics.len(), 5);
        assert!(clarke.spectrum().is_none());
    }

    #[test]
    fn test_harmonic_change_rebuilds_everything() {
        let mut pipeline = PhasorPipeline::new(small_config()).unwrap();
        let before_table = pipeline.table().clone();
        let before_lines = pipeline.spectrum().unwrap().len();

        pipeline.set_harmonic_amplitude(5, 0.2).unwrap();

        assert_ne!(pipeline.table(), &before_table);
        assert_eq!(pipeline.spectrum().unwrap().len(), before_lines + 2);
        assert!(pipeline.spectrum().unwrap().peak_near(5.0, 0.05).is_some());
    }

    #[test]
    fn test_rejected_update_keeps_state() {
        let mut pipeline = PhasorPipeline::new(small_config()).unwrap();
        let table = pipeline.table().clone();
        let spectrum = pipeline.spectrum().cloned();
        let params = pipeline.params().clone();

        assert!(pipeline.set_negative_amplitude(-0.3).is_err());
        assert!(pipeline.set_harmonic_amplitude(6, 1.0).is_err());
        assert!(pipeline.set_harmonic_amplitude(2, f64::INFINITY).is_err());
        assert!(matches!(
            pipeline.set_harmonic_amplitudes(&[1.0, 0.0]),
            Err(PhasorError::HarmonicCountMismatch { expected: 5, found: 2 })
        ));

        assert_eq!(pipeline.params(), &params);
        assert_eq!(pipeline.table(), &table);
        assert_eq!(pipeline.spectrum().cloned(), spectrum);
    }

    #[test]
    fn test_channel_change_keeps_table() {
        let mut pipeline = PhasorPipeline::new(small_config()).unwrap();
        let table = pipeline.table().clone();

        pipeline.set_channel(Channel::ComplexVector);

        assert_eq!(pipeline.table(), &table);
        let spectrum = pipeline.spectrum().unwrap();
        // Positive sequence at +1, negative sequence at -1
        assert!(spectrum.peak_near(1.0, 0.05).is_some());
        assert!(spectrum.peak_near(-1.0, 0.05).is_some());
        assert!(spectrum.peak_near(1.0, 0.05).unwrap().magnitude > spectrum.peak_near(-1.0, 0.05).unwrap().magnitude);
    }

    #[test]
    fn test_mode_change_rescales_alpha() {
        let mut pipeline = PhasorPipeline::new(small_config()).unwrap();
        let power_alpha = pipeline.table().frame(0).unwrap().alpha;

        pipeline.set_transform_mode(TransformMode::AmplitudeInvariant).unwrap();
        let amp_alpha = pipeline.table().frame(0).unwrap().alpha;

        let ratio = TransformMode::AmplitudeInvariant.scale() / TransformMode::PowerInvariant.scale();
        assert!((amp_alpha - power_alpha * ratio).abs() < 1e-12);
    }

    #[test]
    fn test_zero_input_everywhere() {
        let mut pipeline = PhasorPipeline::new(small_config()).unwrap();
        pipeline.set_harmonic_amplitudes(&[0.0; 5]).unwrap();
        pipeline.set_negative_amplitude(0.0).unwrap();

        assert!(pipeline
            .table()
            .trajectory(TrajectoryKind::Combined, usize::MAX)
            .iter()
            .all(|p| p.x == 0.0 && p.y == 0.0));
        assert!(pipeline.spectrum().unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_params_rejected() {
        let params = SynthesisParams::default();
        let result = PhasorPipeline::with_params(PipelineConfig::sequences(), params, Channel::Alpha);
        assert!(matches!(
            result,
            Err(PhasorError::HarmonicCountMismatch { expected: 1, found: 5 })
        ));
    }
}
