use crate::{error::FftError, layouts::Rgba};

/// Owned RGBA8 image, row-major with a stride of `4 * width` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// All bytes zero, i.e. transparent black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 4],
        }
    }

    pub fn filled(width: usize, height: usize, rgba: Rgba) -> Self {
        let mut data: Vec<u8> = Vec::with_capacity(width * height * 4);
        (0..width * height).for_each(|_| data.extend_from_slice(&rgba));
        Self { width, height, data }
    }

    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FftError> {
        let expected: usize = width * height * 4;
        if data.len() != expected {
            return Err(FftError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Opaque gray image from row-major luma values.
    pub fn from_luma(width: usize, height: usize, values: &[u8]) -> Result<Self, FftError> {
        if values.len() != width * height {
            return Err(FftError::BufferLength {
                expected: width * height * 4,
                actual: values.len() * 4,
            });
        }
        let mut data: Vec<u8> = Vec::with_capacity(values.len() * 4);
        values.iter().for_each(|&v| data.extend_from_slice(&[v, v, v, 255]));
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    #[inline(always)]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width, "x={} >= width={}", x, self.width);
        debug_assert!(y < self.height, "y={} >= height={}", y, self.height);
        (y * self.width + x) * 4
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let off: usize = self.offset(x, y);
        [
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: Rgba) {
        let off: usize = self.offset(x, y);
        self.data[off..off + 4].copy_from_slice(&rgba);
    }

    /// True when every pixel has R == G == B.
    pub fn is_grayscale(&self) -> bool {
        self.data
            .chunks_exact(4)
            .all(|px| px[0] == px[1] && px[1] == px[2])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
