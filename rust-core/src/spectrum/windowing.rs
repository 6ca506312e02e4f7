//! Amplitude-correction windows for spectral analysis
//!
//! The spectrum is normalized by the window sum, so a window with a flat
//! main lobe (flat-top) reads harmonic amplitudes almost exactly even when
//! the tone falls between two bins.

use std::f64::consts::PI;

/// Flat-top coefficients a0..a4
const FLAT_TOP: [f64; 5] = [0.21557895, 0.41663158, 0.277263158, 0.083578947, 0.006947368];

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// w[n] = a0 − a1·cos(2πn/(N−1)) + a2·cos(4πn/(N−1)) − a3·cos(6πn/(N−1)) + a4·cos(8πn/(N−1))
    /// Scalloping loss ≈ 0 dB, wide mainlobe
    #[default]
    FlatTop,

    /// w[n] = 0.5 − 0.5·cos(2πn/(N−1))
    Hann,

    /// w[n] = 1
    Rectangular,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    // N = 1 keeps the n = 0 term instead of dividing by zero
    let denom = length.saturating_sub(1).max(1) as f64;

    (0..length)
        .map(|n| {
            let x = 2.0 * PI * n as f64 / denom;
            match window_type {
                WindowType::FlatTop => {
                    let [a0, a1, a2, a3, a4] = FLAT_TOP;
                    a0 - a1 * x.cos() + a2 * (2.0 * x).cos() - a3 * (3.0 * x).cos()
                        + a4 * (4.0 * x).cos()
                }
                WindowType::Hann => 0.5 - 0.5 * x.cos(),
                WindowType::Rectangular => 1.0,
            }
        })
        .collect()
}

/// Window coefficients together with their sum (the FFT normalization divisor)
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    window_type: WindowType,
    coefficients: Vec<f64>,
    sum: f64,
}

impl Window {
    pub fn new(window_type: WindowType, length: usize) -> Self {
        let coefficients = generate_window(window_type, length);
        let sum = coefficients.iter().sum();
        Self {
            window_type,
            coefficients,
            sum,
        }
    }

    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Σ w[n]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Multiply a buffer by the window in place
    pub fn apply_inplace(&self, buffer: &mut [f64]) {
        for (s, w) in buffer.iter_mut().zip(self.coefficients.iter()) {
            *s *= w;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_top_shape() {
        let length = 1025;
        let window = generate_window(WindowType::FlatTop, length);

        assert_eq!(window.len(), length);

        // Symmetric, peak of 1.0 at the center
        assert!((window[0] - window[length - 1]).abs() < 1e-12);
        assert!((window[10] - window[length - 11]).abs() < 1e-12);
        assert!((window[length / 2] - 1.0).abs() < 1e-6);

        // Endpoints dip slightly below zero
        assert!(window[0] < 0.0 && window[0] > -0.001);
    }

    #[test]
    fn test_flat_top_sum() {
        let window = Window::new(WindowType::FlatTop, 16384);
        // Sum tends to a0·N for large N
        let expected = FLAT_TOP[0] * 16384.0;
        assert!((window.sum() - expected).abs() / expected < 1e-3);
        assert!(window.sum() > 0.0);
    }

    #[test]
    fn test_rectangular_sum_is_length() {
        let window = Window::new(WindowType::Rectangular, 64);
        assert_eq!(window.sum(), 64.0);
        assert!(window.coefficients().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_hann_endpoints() {
        let window = generate_window(WindowType::Hann, 65);
        assert!(window[0].abs() < 1e-12);
        assert!((window[32] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_point_window() {
        let window = generate_window(WindowType::FlatTop, 1);
        let expected = FLAT_TOP[0] - FLAT_TOP[1] + FLAT_TOP[2] - FLAT_TOP[3] + FLAT_TOP[4];
        assert_eq!(window.len(), 1);
        assert!((window[0] - expected).abs() < 1e-15);
        assert!(generate_window(WindowType::Hann, 0).is_empty());
    }

    #[test]
    fn test_apply_inplace() {
        let window = Window::new(WindowType::Hann, 9);
        let mut buffer = vec![2.0; 9];
        window.apply_inplace(&mut buffer);

        assert!(buffer[0].abs() < 1e-12);
        assert!((buffer[4] - 2.0).abs() < 1e-12);
    }
}
