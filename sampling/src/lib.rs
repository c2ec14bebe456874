//! Deterministic randomness for synthesising test and benchmark images.

pub mod distributions;
pub mod source;
