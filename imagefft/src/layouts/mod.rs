mod pixel_buffer;
mod sample_grid;

pub use pixel_buffer::*;
pub use sample_grid::*;

/// RGBA8 pixel, channel order R, G, B, A.
pub type Rgba = [u8; 4];

pub const OPAQUE_WHITE: Rgba = [255, 255, 255, 255];
