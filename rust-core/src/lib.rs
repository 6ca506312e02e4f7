//! Phasor Lab - Three-Phase Signal Synthesis and Spectral Core
//!
//! Positive/negative sequence synthesis, Clarke decomposition and windowed
//! FFT harmonic analysis, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod signal;
pub mod spectrum;
pub mod pipeline;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{PhasorError, Result};
pub use signal::{Channel, HarmonicSpec, Sample, SignalTable, SynthesisParams, TransformMode};
pub use spectrum::{SpectralEngine, Spectrum, SpectrumConfig, SpectrumPeak, WindowType};
pub use pipeline::{PhasorPipeline, PipelineConfig};
