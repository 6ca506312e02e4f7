//! Spectral analysis with FFT

pub mod fft;
pub mod windowing;
pub mod peaks;
pub mod analysis;

pub use fft::{inverse_transform, transform};
pub use windowing::{generate_window, Window, WindowType};
pub use peaks::{extract_peaks, Spectrum, SpectrumPeak};
pub use analysis::{SpectralEngine, SpectrumConfig};
