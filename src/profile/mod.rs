//! The radial-profile extraction pipeline: 2D FFT helpers, periodic
//! autocorrelation, and integer-radius ring averaging.

pub mod autocorr;
pub mod fft;
pub mod radial;

pub use autocorr::{autocorrelate, radial_autocorrelation, AutocorrelationMap};
pub use radial::radial_profile;
