//! Synthesis parameters for three-phase test signals
//!
//! Everything the synthesizer needs to produce a sample, plus the channel
//! selector used by the spectral engine.

use crate::error::{PhasorError, Result};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Unit angular frequency (per-unit fundamental at 1 Hz)
pub const OMEGA: f64 = 2.0 * PI;

/// Phase displacement of phases A, B and C in radians (0°, 120°, 240°)
pub const PHASE_ANGLES: [f64; 3] = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];

/// Harmonics at or below this amplitude are skipped during synthesis
pub const AMPLITUDE_EPSILON: f64 = 0.001;

/// Default number of positive-sequence harmonics (H1..H5)
pub const DEFAULT_HARMONIC_COUNT: usize = 5;

fn check_amplitude(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PhasorError::InvalidAmplitude { what, value })
    }
}

/// Clarke transform scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// k = 2/3: alpha/beta amplitude equals the phase amplitude
    AmplitudeInvariant,

    /// k = √(2/3): instantaneous power is preserved
    #[default]
    PowerInvariant,
}

impl TransformMode {
    /// Scale constant k applied to the Clarke projection
    pub fn scale(&self) -> f64 {
        match self {
            TransformMode::AmplitudeInvariant => 2.0 / 3.0,
            TransformMode::PowerInvariant => (2.0_f64 / 3.0).sqrt(),
        }
    }
}

/// One positive-sequence harmonic component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Harmonic order h (1 = fundamental)
    pub order: usize,

    /// Peak amplitude (per unit)
    pub amplitude: f64,
}

impl Harmonic {
    /// Whether this component contributes to synthesis
    pub fn is_enabled(&self) -> bool {
        self.amplitude > AMPLITUDE_EPSILON
    }
}

/// Ordered set of positive-sequence harmonics
///
/// Orders are consecutive starting at 1, so slot `i` always holds order
/// `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicSpec {
    harmonics: Vec<Harmonic>,
}

impl HarmonicSpec {
    /// Build from amplitudes of orders 1, 2, 3, ...
    pub fn from_amplitudes(amplitudes: &[f64]) -> Result<Self> {
        let harmonics = amplitudes
            .iter()
            .enumerate()
            .map(|(idx, &amp)| {
                check_amplitude("harmonic", amp).map(|amplitude| Harmonic {
                    order: idx + 1,
                    amplitude,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { harmonics })
    }

    /// Pure fundamental of the given amplitude followed by `count - 1` silent harmonics
    pub fn fundamental(amplitude: f64, count: usize) -> Result<Self> {
        let mut amplitudes = vec![0.0; count.max(1)];
        amplitudes[0] = amplitude;
        Self::from_amplitudes(&amplitudes)
    }

    /// Number of harmonic slots
    pub fn len(&self) -> usize {
        self.harmonics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.harmonics.is_empty()
    }

    /// Amplitude of the given order, if present
    pub fn amplitude(&self, order: usize) -> Option<f64> {
        order
            .checked_sub(1)
            .and_then(|idx| self.harmonics.get(idx))
            .map(|h| h.amplitude)
    }

    /// Replace the amplitude of one order
    pub fn set_amplitude(&mut self, order: usize, amplitude: f64) -> Result<()> {
        let max = self.harmonics.len();
        if order == 0 || order > max {
            return Err(PhasorError::InvalidHarmonicOrder { order, max });
        }
        self.harmonics[order - 1].amplitude = check_amplitude("harmonic", amplitude)?;
        Ok(())
    }

    /// All amplitudes in order
    pub fn amplitudes(&self) -> Vec<f64> {
        self.harmonics.iter().map(|h| h.amplitude).collect()
    }

    /// Components that pass the amplitude epsilon
    pub fn enabled(&self) -> impl Iterator<Item = &Harmonic> {
        self.harmonics.iter().filter(|h| h.is_enabled())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Harmonic> {
        self.harmonics.iter()
    }
}

impl Default for HarmonicSpec {
    fn default() -> Self {
        let mut harmonics: Vec<Harmonic> = (1..=DEFAULT_HARMONIC_COUNT)
            .map(|order| Harmonic { order, amplitude: 0.0 })
            .collect();
        harmonics[0].amplitude = 1.0;
        Self { harmonics }
    }
}

/// Full input of the sample synthesizer
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisParams {
    /// Positive-sequence harmonic content
    pub harmonics: HarmonicSpec,

    /// Amplitude of the negative-sequence fundamental
    pub negative_amplitude: f64,

    /// Clarke scaling
    pub mode: TransformMode,
}

impl SynthesisParams {
    pub fn new(harmonics: HarmonicSpec, negative_amplitude: f64, mode: TransformMode) -> Result<Self> {
        Ok(Self {
            harmonics,
            negative_amplitude: check_amplitude("negative-sequence", negative_amplitude)?,
            mode,
        })
    }

    /// Replace the negative-sequence amplitude
    pub fn set_negative_amplitude(&mut self, amplitude: f64) -> Result<()> {
        self.negative_amplitude = check_amplitude("negative-sequence", amplitude)?;
        Ok(())
    }

    /// Clarke scale constant for the current mode
    pub fn scale(&self) -> f64 {
        self.mode.scale()
    }
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            harmonics: HarmonicSpec::default(),
            negative_amplitude: 0.1,
            mode: TransformMode::default(),
        }
    }
}

/// Signal fed into the spectral engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    PhaseA,
    PhaseB,
    PhaseC,
    Alpha,
    Beta,
    /// alpha + j·beta, the only channel with an imaginary part
    ComplexVector,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::PhaseA,
        Channel::PhaseB,
        Channel::PhaseC,
        Channel::Alpha,
        Channel::Beta,
        Channel::ComplexVector,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Channel::PhaseA => "Phase A",
            Channel::PhaseB => "Phase B",
            Channel::PhaseC => "Phase C",
            Channel::Alpha => "Alpha",
            Channel::Beta => "Beta",
            Channel::ComplexVector => "Complex Vector",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = PhasorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Channel::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PhasorError::UnknownChannel(s.to_string()))
    }
}
