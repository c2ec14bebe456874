//! # imagefft
//!
//! A 2D discrete Fourier transform engine for square, power-of-two grayscale
//! images, built on a recursive radix-2 Cooley-Tukey FFT.
//!
//! ## Pipeline
//!
//! ```text
//! PixelBuffer --pad--> square 2^n PixelBuffer --forward2d--> SampleGrid
//!                                                  |-- visualize --> PixelBuffer (log magnitude)
//!                                                  `-- inverse2d --> PixelBuffer (reconstruction)
//! ```
//!
//! - [`padding::pad`] centers any image on the next power-of-two square.
//! - [`transform::forward2d`] extracts luma ([`grayscale`]) and runs the
//!   separable row/column FFT ([`fft`]).
//! - [`transform::inverse2d`] reconstructs an opaque gray image, exact to
//!   within one step per channel.
//! - [`spectrum::visualize`] renders `log10(1 + |F|)` against the peak.
//!
//! [`engine::Engine`] bundles the three flows behind an [`config::EngineConfig`].
//!
//! Every operation is a pure function over owned buffers. There is no shared
//! state, so independent transforms can run on separate threads freely.

pub mod config;
pub mod engine;
pub mod error;
pub mod fft;
pub mod grayscale;
pub mod layouts;
pub mod padding;
pub mod spectrum;
pub mod transform;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, ImageForward, ImagePad, SpectrumInverse, SpectrumVisualize};
pub use error::FftError;
pub use layouts::{OPAQUE_WHITE, PixelBuffer, Rgba, SampleGrid};
pub use transform::{Rounding, forward2d, inverse2d};
