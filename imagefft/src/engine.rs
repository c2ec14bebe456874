//! Facade driving the collaborator flows: pad, forward + visualize,
//! forward + inverse.

use log::debug;

use crate::{
    config::EngineConfig,
    error::FftError,
    layouts::{PixelBuffer, SampleGrid},
    padding, spectrum, transform,
};

pub trait ImagePad {
    fn pad_image(&self, pixels: &PixelBuffer) -> PixelBuffer;
}

pub trait ImageForward {
    fn forward_image(&self, pixels: &PixelBuffer) -> Result<SampleGrid, FftError>;
}

pub trait SpectrumInverse {
    fn inverse_spectrum(&self, spectrum: &SampleGrid) -> Result<PixelBuffer, FftError>;
}

pub trait SpectrumVisualize {
    fn visualize_spectrum(&self, spectrum: &SampleGrid) -> PixelBuffer;
}

/// Stateless transform engine; the config is read-only.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// pad -> forward -> visualize
    pub fn spectrum_image(&self, pixels: &PixelBuffer) -> Result<PixelBuffer, FftError> {
        debug!("spectrum_image: {}x{}", pixels.width(), pixels.height());
        let padded: PixelBuffer = self.pad_image(pixels);
        let spectrum: SampleGrid = self.forward_image(&padded)?;
        Ok(self.visualize_spectrum(&spectrum))
    }

    /// pad -> forward -> inverse. The result has the padded size.
    pub fn round_trip(&self, pixels: &PixelBuffer) -> Result<PixelBuffer, FftError> {
        debug!("round_trip: {}x{}", pixels.width(), pixels.height());
        let padded: PixelBuffer = self.pad_image(pixels);
        let spectrum: SampleGrid = self.forward_image(&padded)?;
        self.inverse_spectrum(&spectrum)
    }
}

impl ImagePad for Engine {
    fn pad_image(&self, pixels: &PixelBuffer) -> PixelBuffer {
        padding::pad(pixels, self.config.pad_fill)
    }
}

impl ImageForward for Engine {
    fn forward_image(&self, pixels: &PixelBuffer) -> Result<SampleGrid, FftError> {
        transform::forward2d(pixels, self.config.phase_shift)
    }
}

impl SpectrumInverse for Engine {
    fn inverse_spectrum(&self, spectrum: &SampleGrid) -> Result<PixelBuffer, FftError> {
        transform::inverse2d(spectrum, self.config.rounding)
    }
}

impl SpectrumVisualize for Engine {
    fn visualize_spectrum(&self, spectrum: &SampleGrid) -> PixelBuffer {
        spectrum::visualize(spectrum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::OPAQUE_WHITE;

    #[test]
    fn round_trip_pads_first() {
        let engine: Engine = Engine::default();
        let img: PixelBuffer = PixelBuffer::filled(3, 2, [40, 40, 40, 255]);
        let res: PixelBuffer = engine.round_trip(&img).unwrap();
        assert_eq!((res.width(), res.height()), (4, 4));
        // left = 0, top = 1
        assert!(res.pixel(0, 1)[0].abs_diff(40) <= 1);
        assert!(res.pixel(3, 0)[0] >= 254);
    }

    #[test]
    fn spectrum_image_is_square_power_of_two() {
        let engine: Engine = Engine::default();
        let img: PixelBuffer = PixelBuffer::filled(5, 9, [10, 200, 30, 255]);
        let res: PixelBuffer = engine.spectrum_image(&img).unwrap();
        assert_eq!((res.width(), res.height()), (16, 16));
    }

    #[test]
    fn forward_image_does_not_pad() {
        let engine: Engine = Engine::default();
        assert_eq!(
            engine.forward_image(&PixelBuffer::new(3, 3)),
            Err(FftError::UnsupportedSize { len: 3 })
        );
    }

    #[test]
    fn pad_fill_comes_from_config() {
        let black: [u8; 4] = [0, 0, 0, 255];
        let engine: Engine = Engine::new(EngineConfig {
            pad_fill: black,
            ..EngineConfig::default()
        });
        let res: PixelBuffer = engine.pad_image(&PixelBuffer::filled(1, 2, OPAQUE_WHITE));
        assert_eq!(res.pixel(1, 0), black);
        assert_eq!(res.pixel(0, 0), OPAQUE_WHITE);
    }

    #[test]
    fn config_is_kept() {
        let config: EngineConfig = EngineConfig {
            phase_shift: false,
            ..EngineConfig::default()
        };
        assert_eq!(Engine::new(config).config(), &config);
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Engine>();
    }
}
