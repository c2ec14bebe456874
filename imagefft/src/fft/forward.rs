use std::f64::consts::PI;

use itertools::izip;
use num_complex::Complex64;

use crate::{error::FftError, fft::check_len};

/// Forward DFT of `samples`.
///
/// With `phase_shift` the twiddle phase is offset by `-n/2` at every level,
/// which is the convention of the 2D forward transform. The inverse path
/// runs with `phase_shift = false`.
///
/// # Panics
/// If `samples.len()` is not a power of two.
pub fn forward(samples: &[Complex64], phase_shift: bool) -> Vec<Complex64> {
    assert!(
        samples.len().is_power_of_two(),
        "invalid argument: len = {} is not a power of two",
        samples.len()
    );
    forward_rec(samples, phase_shift)
}

pub fn try_forward(samples: &[Complex64], phase_shift: bool) -> Result<Vec<Complex64>, FftError> {
    check_len(samples.len())?;
    Ok(forward_rec(samples, phase_shift))
}

fn forward_rec(samples: &[Complex64], phase_shift: bool) -> Vec<Complex64> {
    let n: usize = samples.len();

    if n == 1 {
        let x: Complex64 = samples[0];
        if x.is_nan() {
            return vec![Complex64::new(0.0, 0.0)];
        }
        return vec![x];
    }

    let h: usize = n >> 1;
    let even_in: Vec<Complex64> = samples.iter().copied().step_by(2).collect();
    let odd_in: Vec<Complex64> = samples.iter().copied().skip(1).step_by(2).collect();

    let even: Vec<Complex64> = forward_rec(&even_in, phase_shift);
    let mut odd: Vec<Complex64> = forward_rec(&odd_in, phase_shift);

    let omega: f64 = -2.0 * PI / n as f64;
    odd.iter_mut().enumerate().for_each(|(k, o)| {
        let phase: f64 = if phase_shift {
            k as f64 - h as f64
        } else {
            k as f64
        };
        *o *= Complex64::from_polar(1.0, omega * phase);
    });

    let mut res: Vec<Complex64> = vec![Complex64::new(0.0, 0.0); n];
    let (lo, hi) = res.split_at_mut(h);
    for (r_lo, r_hi, e, o) in izip!(lo.iter_mut(), hi.iter_mut(), even.iter(), odd.iter()) {
        *r_lo = e + o;
        *r_hi = e - o;
    }
    res
}
