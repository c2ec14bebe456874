use rand_distr::{Distribution, Normal, NormalError};

use crate::source::Source;

/// Per-pixel intensity law used to synthesise grayscale images.
#[derive(Debug, Clone, Copy)]
pub enum Intensity {
    Constant(u8),
    Uniform,
    Normal(Normal<f64>),
}

impl Intensity {
    /// Gaussian intensities centered on `mean`, clamped to `0..=255` when sampled.
    ///
    /// Fails only for a non-finite `sigma`. A negative `sigma` is accepted and
    /// mirrors the distribution around `mean`.
    pub fn normal(mean: f64, sigma: f64) -> Result<Self, NormalError> {
        Ok(Intensity::Normal(Normal::new(mean, sigma)?))
    }

    pub fn sample(&self, source: &mut Source) -> u8 {
        match self {
            Intensity::Constant(v) => *v,
            Intensity::Uniform => source.next_u8(),
            Intensity::Normal(normal) => normal.sample(source).round().clamp(0.0, 255.0) as u8,
        }
    }

    pub fn fill(&self, source: &mut Source, res: &mut [u8]) {
        res.iter_mut().for_each(|x| *x = self.sample(source));
    }
}
