//! Separable 2D transforms.
//!
//! Both directions run one pass over the lines of a [`SampleGrid`], transpose,
//! and run a second pass over lines. The forward result is *not* transposed
//! back; [`inverse2d`] expects exactly that orientation. Rewriting either
//! side as a direct double loop over both axes breaks the pairing.

use log::{debug, trace};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::{
    error::FftError,
    fft::{self, check_len},
    grayscale::to_grayscale,
    layouts::{PixelBuffer, SampleGrid},
};

/// How reconstructed magnitudes become 8-bit channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Drop the fractional part.
    #[default]
    Truncate,
    Nearest,
}

impl Rounding {
    #[inline(always)]
    pub fn to_u8(self, x: f64) -> u8 {
        // `as` saturates, so overshoot past 255 stays 255
        match self {
            Rounding::Truncate => x as u8,
            Rounding::Nearest => x.round() as u8,
        }
    }
}

/// Grayscale spectrum of a square power-of-two image.
pub fn forward2d(pixels: &PixelBuffer, phase_shift: bool) -> Result<SampleGrid, FftError> {
    if !pixels.is_square() {
        return Err(FftError::DimensionMismatch {
            width: pixels.width(),
            height: pixels.height(),
        });
    }
    let size: usize = pixels.width();
    check_len(size)?;

    debug!("forward2d: size={} phase_shift={}", size, phase_shift);

    let mut grid: SampleGrid = to_grayscale(pixels)?;
    forward_lines(&mut grid, phase_shift);
    trace!("forward2d: row pass done");

    let mut grid: SampleGrid = grid.transpose();
    forward_lines(&mut grid, phase_shift);
    trace!("forward2d: column pass done");

    Ok(grid)
}

/// Reconstructs an opaque gray image from a spectrum produced by [`forward2d`].
pub fn inverse2d(spectrum: &SampleGrid, rounding: Rounding) -> Result<PixelBuffer, FftError> {
    let size: usize = spectrum.size();
    check_len(size)?;

    debug!("inverse2d: size={} rounding={:?}", size, rounding);

    let mut grid: SampleGrid = spectrum.clone();
    inverse_lines(&mut grid);
    trace!("inverse2d: row pass done");

    let scale: f64 = (size * size) as f64;
    let mut grid: SampleGrid = grid.transpose().map(|c| c / scale);
    inverse_lines(&mut grid);
    trace!("inverse2d: column pass done");

    let mut res: PixelBuffer = PixelBuffer::new(size, size);
    for x in 0..size {
        for y in 0..size {
            let v: u8 = rounding.to_u8(grid.at(x, y).norm());
            res.set_pixel(x, y, [v, v, v, 255]);
        }
    }
    Ok(res)
}

fn forward_lines(grid: &mut SampleGrid, phase_shift: bool) {
    grid.lines_mut().for_each(|line| {
        let res: Vec<Complex64> = fft::forward(line, phase_shift);
        line.copy_from_slice(&res);
    });
}

fn inverse_lines(grid: &mut SampleGrid) {
    grid.lines_mut().for_each(|line| {
        let res: Vec<Complex64> = fft::inverse(line);
        line.copy_from_slice(&res);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within_one(a: &PixelBuffer, b: &PixelBuffer) {
        assert_eq!((a.width(), a.height()), (b.width(), b.height()));
        a.as_bytes()
            .iter()
            .zip(b.as_bytes())
            .enumerate()
            .for_each(|(i, (x, y))| {
                assert!(x.abs_diff(*y) <= 1, "byte {}: {} vs {}", i, x, y);
            });
    }

    #[test]
    fn white_2x2_round_trip() {
        let img: PixelBuffer = PixelBuffer::filled(2, 2, [255, 255, 255, 255]);
        let spectrum: SampleGrid = forward2d(&img, true).unwrap();
        let res: PixelBuffer = inverse2d(&spectrum, Rounding::Truncate).unwrap();
        assert_within_one(&res, &img);
        (0..2).for_each(|y| (0..2).for_each(|x| assert_eq!(res.pixel(x, y)[3], 255)));
    }

    #[test]
    fn dc_term_without_phase_shift_is_luma_sum() {
        let img: PixelBuffer = PixelBuffer::from_luma(2, 2, &[10, 20, 30, 40]).unwrap();
        let spectrum: SampleGrid = forward2d(&img, false).unwrap();
        assert!((spectrum.at(0, 0) - Complex64::new(100.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn forward_is_rows_then_transposed_rows() {
        let values: Vec<u8> = (0..64).map(|i| ((i * 37 + i / 8 * 11) % 251) as u8).collect();
        let img: PixelBuffer = PixelBuffer::from_luma(8, 8, &values).unwrap();
        let gray: SampleGrid = to_grayscale(&img).unwrap();

        for phase_shift in [true, false] {
            let p: Vec<Vec<Complex64>> = (0..8).map(|x| fft::forward(gray.line(x), phase_shift)).collect();
            let want: Vec<Vec<Complex64>> = (0..8)
                .map(|l| {
                    let t: Vec<Complex64> = (0..8).map(|k| p[k][l]).collect();
                    fft::forward(&t, phase_shift)
                })
                .collect();

            let spectrum: SampleGrid = forward2d(&img, phase_shift).unwrap();
            for l in 0..8 {
                for k in 0..8 {
                    assert!(
                        (spectrum.at(l, k) - want[l][k]).norm() < 1e-9,
                        "phase_shift={} at({}, {}): {} ~!= {}",
                        phase_shift,
                        l,
                        k,
                        spectrum.at(l, k),
                        want[l][k]
                    );
                }
            }
        }
    }

    #[test]
    fn asymmetric_image_keeps_orientation() {
        let values: Vec<u8> = (0..16).map(|i| (i * 15) as u8).collect();
        let img: PixelBuffer = PixelBuffer::from_luma(4, 4, &values).unwrap();
        for phase_shift in [true, false] {
            let res: PixelBuffer = inverse2d(&forward2d(&img, phase_shift).unwrap(), Rounding::Nearest).unwrap();
            assert_within_one(&res, &img);
        }
    }

    #[test]
    fn forward_rejects_non_square() {
        assert_eq!(
            forward2d(&PixelBuffer::new(4, 8), true),
            Err(FftError::DimensionMismatch { width: 4, height: 8 })
        );
    }

    #[test]
    fn forward_rejects_non_power_of_two() {
        assert_eq!(
            forward2d(&PixelBuffer::new(6, 6), true),
            Err(FftError::UnsupportedSize { len: 6 })
        );
    }

    #[test]
    fn inverse_rejects_non_power_of_two() {
        assert_eq!(
            inverse2d(&SampleGrid::new(3), Rounding::Truncate),
            Err(FftError::UnsupportedSize { len: 3 })
        );
    }

    #[test]
    fn rounding_saturates() {
        assert_eq!(Rounding::Truncate.to_u8(254.9), 254);
        assert_eq!(Rounding::Nearest.to_u8(254.9), 255);
        assert_eq!(Rounding::Truncate.to_u8(255.000001), 255);
        assert_eq!(Rounding::Nearest.to_u8(300.0), 255);
    }
}
