use log::{debug, warn};

use crate::layouts::{PixelBuffer, SampleGrid};

/// Log-scaled magnitude image of a spectrum.
///
/// Pixel `(k, l)` shows coefficient `at(l, k)` as
/// `floor(255 * log10(1 + |F|) / log10(1 + max|F|))`. Pixels whose value is
/// NaN (an all-zero spectrum) keep the default transparent black.
pub fn visualize(spectrum: &SampleGrid) -> PixelBuffer {
    let size: usize = spectrum.size();
    let max: f64 = spectrum.max_magnitude();

    debug!("visualize: size={} max_magnitude={}", size, max);
    if max == 0.0 {
        warn!("visualize: spectrum has zero peak magnitude, output left blank");
    }

    let denom: f64 = (1.0 + max).log10();
    let mut res: PixelBuffer = PixelBuffer::new(size, size);
    for l in 0..size {
        for k in 0..size {
            let value: f64 = (1.0 + spectrum.at(l, k).norm()).log10() * 255.0 / denom;
            if !value.is_nan() {
                let gray: u8 = value as u8;
                res.set_pixel(k, l, [gray, gray, gray, 255]);
            }
        }
    }
    res
}
