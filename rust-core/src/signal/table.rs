//! Display-length signal tables
//!
//! Samples the synthesizer over a short, evenly spaced time grid so the
//! display layer can animate phasors and plot waveforms frame by frame.

use super::clarke::space_vector;
use super::params::{Channel, SynthesisParams};
use super::synth::{sample_at, Sample};
use crate::error::{PhasorError, Result};

/// Display grid configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Number of frames (N_disp), both endpoints included
    pub points: usize,

    /// Time covered by the grid (per-unit periods)
    pub duration: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            points: 200,
            duration: 2.0,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<()> {
        if self.points < 2 || !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(PhasorError::InvalidTable {
                points: self.points,
                duration: self.duration,
            });
        }
        Ok(())
    }

    /// Spacing between consecutive frames
    pub fn time_step(&self) -> f64 {
        self.duration / (self.points - 1) as f64
    }
}

/// Which locus a trajectory follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryKind {
    /// Space vector of the positive-sequence phases
    Positive,
    /// Space vector of the negative-sequence phases
    Negative,
    /// Space vector of the combined phases
    Combined,
    /// (alpha, beta)
    Clarke,
}

/// A point of a phasor locus
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
}

impl TrajectoryPoint {
    fn of(sample: &Sample, kind: TrajectoryKind) -> Self {
        let (x, y) = match kind {
            TrajectoryKind::Positive => space_vector(sample.positive),
            TrajectoryKind::Negative => space_vector(sample.negative),
            TrajectoryKind::Combined => space_vector(sample.combined),
            TrajectoryKind::Clarke => (sample.alpha, sample.beta),
        };
        Self { x, y }
    }
}

/// Samples over the display grid, rebuilt wholesale on every parameter change
#[derive(Debug, Clone, PartialEq)]
pub struct SignalTable {
    times: Vec<f64>,
    samples: Vec<Sample>,
}

impl SignalTable {
    /// Number of frames
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at a frame index
    pub fn frame(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Time of a frame index
    pub fn time(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// One channel over all frames (real part only for the complex vector)
    pub fn channel_values(&self, channel: Channel) -> Vec<f64> {
        self.samples.iter().map(|s| s.channel(channel).0).collect()
    }

    /// Locus traced from frame 0 up to and including `frame`
    ///
    /// `frame` past the end is clamped to the last frame.
    pub fn trajectory(&self, kind: TrajectoryKind, frame: usize) -> Vec<TrajectoryPoint> {
        let end = frame.saturating_add(1).min(self.samples.len());
        self.samples[..end]
            .iter()
            .map(|s| TrajectoryPoint::of(s, kind))
            .collect()
    }
}

/// Build the display table for a parameter set
///
/// # Arguments
/// * `params` - Synthesis parameters
/// * `config` - Display grid (must pass [`TableConfig::validate`])
pub fn build_table(params: &SynthesisParams, config: &TableConfig) -> Result<SignalTable> {
    config.validate()?;

    let dt = config.time_step();
    let times: Vec<f64> = (0..config.points).map(|i| i as f64 * dt).collect();
    let samples = times.iter().map(|&t| sample_at(t, params)).collect();

    Ok(SignalTable { times, samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::params::{HarmonicSpec, TransformMode};

    #[test]
    fn test_default_grid() {
        let table = build_table(&SynthesisParams::default(), &TableConfig::default()).unwrap();

        assert_eq!(table.len(), 200);
        assert_eq!(table.time(0), Some(0.0));
        assert!((table.time(199).unwrap() - 2.0).abs() < 1e-12);
        assert!((TableConfig::default().time_step() - 2.0 / 199.0).abs() < 1e-15);
        assert!(table.frame(200).is_none());
    }

    #[test]
    fn test_invalid_config() {
        let params = SynthesisParams::default();
        let bad = TableConfig { points: 1, duration: 2.0 };
        assert!(matches!(build_table(&params, &bad), Err(PhasorError::InvalidTable { .. })));

        let bad = TableConfig { points: 10, duration: 0.0 };
        assert!(build_table(&params, &bad).is_err());
    }

    #[test]
    fn test_zero_input_table() {
        let params = SynthesisParams::new(
            HarmonicSpec::from_amplitudes(&[0.0; 5]).unwrap(),
            0.0,
            TransformMode::AmplitudeInvariant,
        )
        .unwrap();
        let table = build_table(&params, &TableConfig::default()).unwrap();

        assert!(table.samples().iter().all(|s| *s == Sample::default()));
    }

    #[test]
    fn test_deterministic() {
        let params = SynthesisParams::default();
        let a = build_table(&params, &TableConfig::default()).unwrap();
        let b = build_table(&params, &TableConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_channel_column() {
        let table = build_table(&SynthesisParams::default(), &TableConfig::default()).unwrap();
        let alpha = table.channel_values(Channel::Alpha);

        assert_eq!(alpha.len(), table.len());
        assert_eq!(alpha[17], table.frame(17).unwrap().alpha);
    }

    #[test]
    fn test_trajectory_clamps_and_traces_circle() {
        let params = SynthesisParams::new(
            HarmonicSpec::from_amplitudes(&[1.0]).unwrap(),
            0.0,
            TransformMode::AmplitudeInvariant,
        )
        .unwrap();
        let table = build_table(&params, &TableConfig::default()).unwrap();

        assert_eq!(table.trajectory(TrajectoryKind::Clarke, 9).len(), 10);
        assert_eq!(table.trajectory(TrajectoryKind::Clarke, 10_000).len(), 200);

        // Pure positive sequence: Clarke locus is the unit circle,
        // space vector has radius 1.5
        for p in table.trajectory(TrajectoryKind::Clarke, 199) {
            assert!((p.x.hypot(p.y) - 1.0).abs() < 1e-12);
        }
        for p in table.trajectory(TrajectoryKind::Combined, 199) {
            assert!((p.x.hypot(p.y) - 1.5).abs() < 1e-12);
        }
        for p in table.trajectory(TrajectoryKind::Negative, 199) {
            assert_eq!(p.x.hypot(p.y), 0.0);
        }
    }
}
