//! Texture Autocorrelation Library
//!
//! Extracts a rotation-invariant shape/texture descriptor from batches of
//! images and compares labelled groups of images in a 2-component plane.
//!
//! The pipeline:
//!
//! 1. **Autocorrelation** (`profile::autocorr`): the 2D spatial
//!    autocorrelation of a grayscale image is computed on a periodic
//!    (toroidal) domain in the Fourier domain as `ifft2(fft2(img) * conj)`,
//!    exploiting the Wiener–Khinchin relation to avoid the O(H²W²) direct
//!    computation.
//! 2. **Radial profile** (`profile::radial`): the centred 2D map collapses
//!    into a 1D profile by averaging over concentric integer-radius rings,
//!    which is what makes the descriptor rotation-invariant.
//! 3. **Dataset assembly** (`dataset`): profiles from labelled image
//!    directories are truncated to the shortest profile in the batch and
//!    stacked into a fixed-width matrix with an aligned label vector.
//! 4. **Projection** (`pca`): the matrix is mean-centred and projected onto
//!    its top-2 variance directions for visualisation.
//!
//! A companion estimator (`fractal`) reports a box-counting fractal
//! dimension for thresholded images; `render` draws autocorrelation
//! heat-maps and the PC1/PC2 scatter.

pub mod dataset;
pub mod error;
pub mod fractal;
pub mod image;
pub mod pca;
pub mod profile;
pub mod render;

pub use crate::image::loader::{GrayscaleImage, SyntheticPattern};
pub use dataset::{build_profile_dataset, LabeledDirectory, ProfileDataset, ProfileMatrix};
pub use error::{AnalysisError, Result};
pub use pca::{project_to_plane, Projection};
pub use profile::autocorr::{autocorrelate, radial_autocorrelation, AutocorrelationMap};
pub use profile::radial::radial_profile;
