//! Clarke (αβ) transform and space-vector resultant

use super::params::{TransformMode, PHASE_ANGLES};

const SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// Project a phase triple onto the stationary αβ frame
///
/// # Arguments
/// * `abc` - Instantaneous phase values (a, b, c)
/// * `k` - Scale constant (see [`TransformMode::scale`])
///
/// # Returns
/// `(alpha, beta)` where
/// alpha = k·(a − b/2 − c/2), beta = k·(√3/2·b − √3/2·c)
#[inline]
pub fn clarke_scaled(abc: [f64; 3], k: f64) -> (f64, f64) {
    let [a, b, c] = abc;
    let alpha = k * (a - 0.5 * b - 0.5 * c);
    let beta = k * (SQRT3_2 * b - SQRT3_2 * c);
    (alpha, beta)
}

/// Clarke transform using the scale of the given mode
#[inline]
pub fn clarke(abc: [f64; 3], mode: TransformMode) -> (f64, f64) {
    clarke_scaled(abc, mode.scale())
}

/// Resultant of the three phase phasors drawn at 0°, 120° and 240°
///
/// This is the rotating-field vector the display traces; for a balanced
/// set it equals the unscaled (k = 1) Clarke projection.
pub fn space_vector(phases: [f64; 3]) -> (f64, f64) {
    phases
        .iter()
        .zip(PHASE_ANGLES.iter())
        .fold((0.0, 0.0), |(x, y), (&v, &angle)| {
            (x + v * angle.cos(), y + v * angle.sin())
        })
}
