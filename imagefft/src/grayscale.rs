use num_complex::Complex64;

use crate::{
    error::FftError,
    layouts::{PixelBuffer, Rgba, SampleGrid},
};

/// Weighted luma, `(29.9 R + 58.7 G + 11.4 B) / 100`. Alpha is ignored.
#[inline(always)]
pub fn luma(rgba: Rgba) -> f64 {
    (29.9 * rgba[0] as f64 + 58.7 * rgba[1] as f64 + 11.4 * rgba[2] as f64) / 100.0
}

/// Real-valued grid with `at(x, y) = luma(pixel(x, y))`.
pub fn to_grayscale(pixels: &PixelBuffer) -> Result<SampleGrid, FftError> {
    if !pixels.is_square() {
        return Err(FftError::DimensionMismatch {
            width: pixels.width(),
            height: pixels.height(),
        });
    }
    let size: usize = pixels.width();
    let mut grid: SampleGrid = SampleGrid::new(size);
    for x in 0..size {
        grid.line_mut(x)
            .iter_mut()
            .enumerate()
            .for_each(|(y, s)| *s = Complex64::new(luma(pixels.pixel(x, y)), 0.0));
    }
    Ok(grid)
}
