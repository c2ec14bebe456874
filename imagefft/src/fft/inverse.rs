use num_complex::Complex64;

use crate::{
    error::FftError,
    fft::{check_len, forward},
};

/// Unnormalized inverse DFT by the conjugate trick:
/// `conj(forward(conj(x), phase_shift = false))`.
///
/// The result is `n` times the textbook inverse; callers divide.
///
/// # Panics
/// If `spectrum.len()` is not a power of two.
pub fn inverse(spectrum: &[Complex64]) -> Vec<Complex64> {
    let conj: Vec<Complex64> = spectrum.iter().map(|c| c.conj()).collect();
    let mut res: Vec<Complex64> = forward(&conj, false);
    res.iter_mut().for_each(|c| *c = c.conj());
    res
}

pub fn try_inverse(spectrum: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    check_len(spectrum.len())?;
    Ok(inverse(spectrum))
}
