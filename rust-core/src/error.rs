//! Error type shared by the pipeline, the spectral engine and the bindings

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhasorError {
    #[error("FFT size must be a power of two (got {0})")]
    InvalidFftSize(usize),

    #[error("Window of length {size} sums to {sum}, cannot normalize by it")]
    DegenerateWindow { size: usize, sum: f64 },

    #[error("Invalid {what} amplitude: {value} (must be finite and non-negative)")]
    InvalidAmplitude { what: &'static str, value: f64 },

    #[error("Harmonic order {order} out of range 1..={max}")]
    InvalidHarmonicOrder { order: usize, max: usize },

    #[error("Expected {expected} harmonic amplitudes, got {found}")]
    HarmonicCountMismatch { expected: usize, found: usize },

    #[error("Sampling interval must be finite and positive (got {0})")]
    InvalidSamplingInterval(f64),

    #[error("Display table needs at least 2 points over a positive duration (got {points} points over {duration})")]
    InvalidTable { points: usize, duration: f64 },

    #[error("Band limit must be finite and positive (got {0})")]
    InvalidBand(f64),

    #[error("Magnitude floor must be finite and non-negative (got {0})")]
    InvalidFloor(f64),

    #[error("Unknown spectral channel: {0:?}")]
    UnknownChannel(String),
}

pub type Result<T> = std::result::Result<T, PhasorError>;
