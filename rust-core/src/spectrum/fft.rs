//! In-place radix-2 FFT on split real/imaginary buffers
//!
//! Iterative decimation-in-time Cooley–Tukey. Output is left in natural
//! (unshifted) order: bin k holds frequency k for k < N/2 and k − N above.

use num_complex::Complex;
use std::f64::consts::PI;

/// Forward transform, in place
///
/// # Arguments
/// * `real` - Real parts, length N
/// * `imag` - Imaginary parts, length N
///
/// # Panics
/// If the buffers differ in length or N > 1 is not a power of two.
pub fn transform(real: &mut [f64], imag: &mut [f64]) {
    let n = real.len();
    assert_eq!(n, imag.len(), "real and imaginary buffers differ in length");
    if n <= 1 {
        return;
    }
    assert!(n.is_power_of_two(), "FFT length {} is not a power of two", n);

    bit_reverse_permute(real, imag);

    let mut len = 2;
    while len <= n {
        let half_len = len / 2;
        let theta = -2.0 * PI / len as f64;
        let step = Complex::new(theta.cos(), theta.sin());

        for start in (0..n).step_by(len) {
            let mut w = Complex::new(1.0, 0.0);
            for j in 0..half_len {
                let lo = start + j;
                let hi = lo + half_len;

                let u = Complex::new(real[lo], imag[lo]);
                let v = w * Complex::new(real[hi], imag[hi]);

                let sum = u + v;
                let diff = u - v;
                real[lo] = sum.re;
                imag[lo] = sum.im;
                real[hi] = diff.re;
                imag[hi] = diff.im;

                w *= step;
            }
        }
        len <<= 1;
    }
}

/// Inverse transform, in place, scaled by 1/N
///
/// Uses the conjugation identity IFFT(x) = conj(FFT(conj(x))) / N.
///
/// # Panics
/// Same preconditions as [`transform`].
pub fn inverse_transform(real: &mut [f64], imag: &mut [f64]) {
    let n = real.len();
    for im in imag.iter_mut() {
        *im = -*im;
    }

    transform(real, imag);

    if n == 0 {
        return;
    }
    let scale = 1.0 / n as f64;
    for (re, im) in real.iter_mut().zip(imag.iter_mut()) {
        *re *= scale;
        *im = -*im * scale;
    }
}

/// Reorder both buffers by bit-reversed index
///
/// Walks j = 0..N−2 while carrying a bit-reversed counter i; each pair is
/// swapped once, when j < i.
fn bit_reverse_permute(real: &mut [f64], imag: &mut [f64]) {
    let n = real.len();
    let mut i = 0;
    for j in 0..n - 1 {
        if j < i {
            real.swap(j, i);
            imag.swap(j, i);
        }
        let mut k = n >> 1;
        while k <= i {
            i -= k;
            k >>= 1;
        }
        i += k;
    }
}
