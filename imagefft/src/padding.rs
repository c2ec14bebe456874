use log::debug;

use crate::layouts::{PixelBuffer, Rgba};

/// Smallest `2^n >= max(width, height)`. An exact power of two is kept as is.
pub fn padded_side(width: usize, height: usize) -> usize {
    width.max(height).next_power_of_two()
}

/// Centers `pixels` on a square power-of-two canvas pre-filled with `fill`.
///
/// Content keeps its RGB channels and is made opaque. Margins split with
/// the extra pixel on the right/bottom when odd.
pub fn pad(pixels: &PixelBuffer, fill: Rgba) -> PixelBuffer {
    let (w, h) = (pixels.width(), pixels.height());
    let side: usize = padded_side(w, h);
    let left: usize = (side - w) / 2;
    let top: usize = (side - h) / 2;

    debug!("pad: {}x{} -> {}x{} (left={}, top={})", w, h, side, side, left, top);

    let mut res: PixelBuffer = PixelBuffer::filled(side, side, fill);
    for y in 0..h {
        for x in 0..w {
            let [r, g, b, _] = pixels.pixel(x, y);
            res.set_pixel(left + x, top + y, [r, g, b, 255]);
        }
    }
    res
}
