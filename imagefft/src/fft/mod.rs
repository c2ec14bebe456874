//! Recursive radix-2 Cooley-Tukey FFT over complex lines.
//!
//! Only power-of-two lengths are supported. [`forward`] and [`inverse`]
//! panic on anything else, [`try_forward`] and [`try_inverse`] report
//! [`FftError::UnsupportedSize`] instead.

mod forward;
mod inverse;

pub use forward::*;
pub use inverse::*;

use crate::error::FftError;

#[inline(always)]
pub(crate) fn check_len(len: usize) -> Result<(), FftError> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::UnsupportedSize { len })
    }
}
