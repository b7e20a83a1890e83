//! Periodic 2D autocorrelation via the Wiener–Khinchin relation.

use crate::error::Result;
use crate::image::GrayscaleImage;
use crate::profile::fft::{fft_2d, fftshift, ifft_2d_real};
use crate::profile::radial::radial_profile;

/// Centred 2D autocorrelation scores, same shape as the source image.
///
/// The value at offset (dy, dx) from the centre is the correlation of the
/// image with itself shifted by that offset on a toroidal domain; the
/// zero-lag maximum sits at `(height/2, width/2)`.
#[derive(Debug, Clone)]
pub struct AutocorrelationMap {
    pub data: Vec<f64>,
    pub width: usize,
    pub height: usize,
}

impl AutocorrelationMap {
    /// Grid index of the zero-lag bin, as `(cy, cx)`.
    pub fn centre(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    pub fn get(&self, y: usize, x: usize) -> f64 {
        self.data[y * self.width + x]
    }
}

/// Full 2D circular autocorrelation of a grayscale image.
///
/// Computed as `ifft2(fft2(img) * conj(fft2(img)))`, the inverse transform
/// of the power spectrum, which keeps the cost at two transforms instead of
/// an O(H²W²) direct correlation. The result of a conjugate-symmetric
/// product is real up to rounding noise; the imaginary part is discarded.
/// The zero-lag quadrant is then shifted to the grid centre.
pub fn autocorrelate(image: &GrayscaleImage) -> AutocorrelationMap {
    let spectrum = fft_2d(&image.data, image.width, image.height);
    let power: Vec<_> = spectrum.iter().map(|c| c * c.conj()).collect();
    let corr = ifft_2d_real(&power, image.width, image.height);
    let centred = fftshift(&corr, image.width, image.height);

    log::debug!(
        "autocorrelation map computed: {}x{}",
        image.width,
        image.height
    );

    AutocorrelationMap {
        data: centred,
        width: image.width,
        height: image.height,
    }
}

/// Autocorrelation map together with its radial profile around the centre.
pub fn radial_autocorrelation(image: &GrayscaleImage) -> Result<(AutocorrelationMap, Vec<f64>)> {
    let map = autocorrelate(image);
    let (cy, cx) = map.centre();
    let profile = radial_profile(&map.data, map.width, map.height, (cy as f64, cx as f64))?;
    Ok((map, profile))
}
