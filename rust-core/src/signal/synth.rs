//! Instantaneous three-phase sample synthesis
//!
//! Positive sequence: Σ A_h·cos(h·(ωt − φ_p)) over the enabled harmonics.
//! Negative sequence: A_neg·cos(ωt + φ_p), fundamental only.

use super::clarke::clarke_scaled;
use super::params::{Channel, HarmonicSpec, SynthesisParams, OMEGA, PHASE_ANGLES};

/// One instant of the three-phase signal and its αβ projection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Positive-sequence phase values (a, b, c)
    pub positive: [f64; 3],

    /// Negative-sequence phase values (a, b, c)
    pub negative: [f64; 3],

    /// positive + negative, per phase
    pub combined: [f64; 3],

    /// Clarke alpha of `combined`
    pub alpha: f64,

    /// Clarke beta of `combined`
    pub beta: f64,
}

impl Sample {
    /// Value of a spectral channel as (real, imaginary)
    ///
    /// Only [`Channel::ComplexVector`] has a non-zero imaginary part.
    pub fn channel(&self, channel: Channel) -> (f64, f64) {
        match channel {
            Channel::PhaseA => (self.combined[0], 0.0),
            Channel::PhaseB => (self.combined[1], 0.0),
            Channel::PhaseC => (self.combined[2], 0.0),
            Channel::Alpha => (self.alpha, 0.0),
            Channel::Beta => (self.beta, 0.0),
            Channel::ComplexVector => (self.alpha, self.beta),
        }
    }
}

/// Synthesize one sample
///
/// # Arguments
/// * `t` - Time (per-unit periods of the fundamental)
/// * `k` - Clarke scale constant
/// * `harmonics` - Positive-sequence content
/// * `negative_amplitude` - Negative-sequence fundamental amplitude
pub fn sample(t: f64, k: f64, harmonics: &HarmonicSpec, negative_amplitude: f64) -> Sample {
    let wt = OMEGA * t;

    let mut positive = [0.0; 3];
    for harmonic in harmonics.enabled() {
        let h = harmonic.order as f64;
        for (value, &angle) in positive.iter_mut().zip(PHASE_ANGLES.iter()) {
            *value += harmonic.amplitude * (h * (wt - angle)).cos();
        }
    }

    let negative = PHASE_ANGLES.map(|angle| negative_amplitude * (wt + angle).cos());

    let mut combined = [0.0; 3];
    for p in 0..3 {
        combined[p] = positive[p] + negative[p];
    }

    let (alpha, beta) = clarke_scaled(combined, k);

    Sample {
        positive,
        negative,
        combined,
        alpha,
        beta,
    }
}

/// Synthesize one sample from a full parameter set
#[inline]
pub fn sample_at(t: f64, params: &SynthesisParams) -> Sample {
    sample(t, params.scale(), &params.harmonics, params.negative_amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::params::TransformMode;

    fn params(amplitudes: &[f64], negative: f64, mode: TransformMode) -> SynthesisParams {
        SynthesisParams::new(HarmonicSpec::from_amplitudes(amplitudes).unwrap(), negative, mode).unwrap()
    }

    #[test]
    fn test_fundamental_at_zero() {
        let p = params(&[1.0], 0.0, TransformMode::PowerInvariant);
        let s = sample_at(0.0, &p);

        assert!((s.combined[0] - 1.0).abs() < 1e-12);
        assert!((s.combined[1] + 0.5).abs() < 1e-12);
        assert!((s.combined[2] + 0.5).abs() < 1e-12);
        assert_eq!(s.negative, [0.0; 3]);

        assert!((s.alpha - 1.5_f64.sqrt()).abs() < 1e-12);
        assert!(s.beta.abs() < 1e-12);
    }

    #[test]
    fn test_negative_sequence_rotates_backwards() {
        // Quarter period: positive sequence beta > 0, negative sequence beta < 0
        let pos = sample_at(0.25, &params(&[1.0], 0.0, TransformMode::AmplitudeInvariant));
        let neg = sample_at(0.25, &params(&[0.0], 1.0, TransformMode::AmplitudeInvariant));

        assert!((pos.beta - 1.0).abs() < 1e-12);
        assert!((neg.beta + 1.0).abs() < 1e-12);
        assert!(neg.alpha.abs() < 1e-12);
    }

    #[test]
    fn test_combined_is_sum() {
        let p = params(&[1.0, 0.0, 0.3, 0.0, 0.1], 0.2, TransformMode::PowerInvariant);
        for i in 0..50 {
            let s = sample_at(i as f64 * 0.037, &p);
            for ph in 0..3 {
                assert_eq!(s.combined[ph], s.positive[ph] + s.negative[ph]);
            }
        }
    }

    #[test]
    fn test_triplen_harmonic_is_zero_sequence() {
        // 3rd harmonic is in phase on all three phases and vanishes in αβ
        let p = params(&[0.0, 0.0, 1.0], 0.0, TransformMode::PowerInvariant);
        let s = sample_at(0.13, &p);

        assert!((s.combined[0] - s.combined[1]).abs() < 1e-12);
        assert!((s.combined[1] - s.combined[2]).abs() < 1e-12);
        assert!(s.alpha.abs() < 1e-12);
        assert!(s.beta.abs() < 1e-12);
    }

    #[test]
    fn test_zero_input() {
        let p = params(&[0.0; 5], 0.0, TransformMode::PowerInvariant);
        let s = sample_at(0.42, &p);
        assert_eq!(s, Sample::default());
    }

    #[test]
    fn test_channel_selection() {
        let p = params(&[1.0], 0.1, TransformMode::PowerInvariant);
        let s = sample_at(0.1, &p);

        assert_eq!(s.channel(Channel::PhaseB), (s.combined[1], 0.0));
        assert_eq!(s.channel(Channel::Beta), (s.beta, 0.0));
        assert_eq!(s.channel(Channel::ComplexVector), (s.alpha, s.beta));
    }
}
