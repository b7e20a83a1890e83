use crate::error::{AnalysisError, Result};
use image::{DynamicImage, GenericImageView, ImageBuffer};
use std::path::Path;

/// Synthetic patterns with known analytic autocorrelations, used by tests
/// and benches.
#[derive(Debug, Clone, Copy)]
pub enum SyntheticPattern {
    /// Every pixel at the same intensity.
    Uniform(f64),
    /// 1-pixel checkerboard of 0/1 cells.
    Checkerboard,
    /// Filled disc of intensity 1 centred on the grid, radius 0.3 * size.
    CentredDisc,
    /// A single bright pixel at the grid centre on a zero background.
    SinglePoint,
}

/// Single-channel luminance raster, row-major, values in `[0, 1]`.
///
/// Immutable once produced; the autocorrelation pipeline consumes it
/// without modification.
#[derive(Debug, Clone)]
pub struct GrayscaleImage {
    pub data: Vec<f64>,
    pub width: usize,
    pub height: usize,
}

impl GrayscaleImage {
    /// Load an image file and convert it to normalised luminance.
    ///
    /// Any decode or read failure is reported with the offending path so a
    /// batch build can name the file that sank it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|source| AnalysisError::UnreadableImage {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Ok(Self::from_dynamic_image(img))
    }

    /// Convert a decoded image to normalised luminance.
    ///
    /// A 4th (alpha) channel is dropped before conversion; RGB collapses
    /// through the ITU-R BT.709 luma weights.
    pub fn from_dynamic_image(img: DynamicImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;

        match img {
            DynamicImage::ImageRgb8(img) => {
                let data = img
                    .pixels()
                    .map(|pixel| {
                        (0.2125 * pixel[0] as f64
                            + 0.7154 * pixel[1] as f64
                            + 0.0721 * pixel[2] as f64)
                            / 255.0
                    })
                    .collect();
                Self { data, width, height }
            }
            DynamicImage::ImageRgba8(img) => {
                let data = img
                    .pixels()
                    .map(|pixel| {
                        // Alpha is discarded, not premultiplied
                        (0.2125 * pixel[0] as f64
                            + 0.7154 * pixel[1] as f64
                            + 0.0721 * pixel[2] as f64)
                            / 255.0
                    })
                    .collect();
                Self { data, width, height }
            }
            DynamicImage::ImageLuma8(img) => {
                let data = img.pixels().map(|pixel| pixel[0] as f64 / 255.0).collect();
                Self { data, width, height }
            }
            _ => {
                // Convert any other format through RGB8 first
                let rgb_img = img.to_rgb8();
                Self::from_dynamic_image(DynamicImage::ImageRgb8(rgb_img))
            }
        }
    }

    /// Wrap raw luminance values; test fixtures are built this way.
    pub fn from_raw(data: Vec<f64>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height, "raw buffer does not match dimensions");
        Self { data, width, height }
    }

    pub fn get(&self, y: usize, x: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Save as an 8-bit luma PNG (for debugging and test fixtures).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut img_buffer = ImageBuffer::new(self.width as u32, self.height as u32);
        for (x, y, pixel) in img_buffer.enumerate_pixels_mut() {
            let intensity = self.data[y as usize * self.width + x as usize];
            let byte_val = (intensity * 255.0).round().clamp(0.0, 255.0) as u8;
            *pixel = image::Luma([byte_val]);
        }
        img_buffer.save(path)?;
        Ok(())
    }

    /// Create a square synthetic image.
    pub fn synthetic(pattern: SyntheticPattern, size: usize) -> Self {
        let mut data = vec![0.0; size * size];
        match pattern {
            SyntheticPattern::Uniform(value) => {
                data.fill(value);
            }
            SyntheticPattern::Checkerboard => {
                for y in 0..size {
                    for x in 0..size {
                        data[y * size + x] = ((x + y) % 2) as f64;
                    }
                }
            }
            SyntheticPattern::CentredDisc => {
                let centre = size as f64 / 2.0;
                let radius = size as f64 * 0.3;
                for y in 0..size {
                    for x in 0..size {
                        let dx = x as f64 - centre;
                        let dy = y as f64 - centre;
                        if (dx * dx + dy * dy).sqrt() <= radius {
                            data[y * size + x] = 1.0;
                        }
                    }
                }
            }
            SyntheticPattern::SinglePoint => {
                data[(size / 2) * size + size / 2] = 1.0;
            }
        }
        Self {
            data,
            width: size,
            height: size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_uniform_is_flat() {
        let img = GrayscaleImage::synthetic(SyntheticPattern::Uniform(0.25), 6);
        assert_eq!(img.width, 6);
        assert_eq!(img.height, 6);
        assert!(img.data.iter().all(|&v| v == 0.25));
    }

    #[test]
    fn synthetic_checkerboard_alternates() {
        let img = GrayscaleImage::synthetic(SyntheticPattern::Checkerboard, 4);
        assert_eq!(img.get(0, 0), 0.0);
        assert_eq!(img.get(0, 1), 1.0);
        assert_eq!(img.get(1, 0), 1.0);
        assert_eq!(img.get(1, 1), 0.0);
    }

    #[test]
    fn rgba_alpha_is_discarded() {
        let mut rgba = image::RgbaImage::new(2, 2);
        for pixel in rgba.pixels_mut() {
            *pixel = image::Rgba([255, 255, 255, 0]);
        }
        let img = GrayscaleImage::from_dynamic_image(DynamicImage::ImageRgba8(rgba));
        // Fully transparent white still reads as white luminance
        assert!(img.data.iter().all(|&v| (v - 1.0).abs() < 1e-9));
    }

    #[test]
    fn luma_values_normalised() {
        let mut luma = image::GrayImage::new(2, 1);
        luma.put_pixel(0, 0, image::Luma([0]));
        luma.put_pixel(1, 0, image::Luma([255]));
        let img = GrayscaleImage::from_dynamic_image(DynamicImage::ImageLuma8(luma));
        assert_eq!(img.data, vec![0.0, 1.0]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GrayscaleImage::from_file("/no/such/file.png").unwrap_err();
        match err {
            AnalysisError::UnreadableImage { path, .. } => {
                assert!(path.ends_with("file.png"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
