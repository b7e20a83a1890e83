//! Batch assembly: labelled image directories → fixed-width profile matrix.

use crate::error::{AnalysisError, Result};
use crate::image::GrayscaleImage;
use crate::profile::radial_autocorrelation;
use std::path::{Path, PathBuf};

/// File extensions accepted by the directory scan (case-insensitive).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// One labelled group of images: the group name and the directory holding
/// its files.
#[derive(Debug, Clone)]
pub struct LabeledDirectory {
    pub label: String,
    pub path: PathBuf,
}

impl LabeledDirectory {
    pub fn new<L: Into<String>, P: Into<PathBuf>>(label: L, path: P) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Row-major numeric matrix of radial profiles, every row truncated to the
/// batch-wide minimum profile length.
#[derive(Debug, Clone)]
pub struct ProfileMatrix {
    data: Vec<f64>,
    pub rows: usize,
    pub cols: usize,
}

impl ProfileMatrix {
    /// Wrap a row-major buffer. Panics if the buffer does not match the
    /// dimensions.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "buffer does not match dimensions");
        Self { data, rows, cols }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// A profile matrix with its aligned per-row labels and source files.
#[derive(Debug, Clone)]
pub struct ProfileDataset {
    pub matrix: ProfileMatrix,
    pub labels: Vec<String>,
    pub files: Vec<PathBuf>,
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Image files in `dir` that pass the extension allow-list, sorted by file
/// name for a reproducible order.
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

/// Run the radial-autocorrelation pipeline over every image in every
/// labelled directory and stack the profiles into a fixed-width matrix.
///
/// Rows are label-major in caller order, file-name order within each label.
/// All profiles are truncated to the minimum length in the batch, keeping
/// the low-radius `[0, L)` region and discarding only the tails of longer
/// profiles.
///
/// A directory that yields no images contributes nothing; if the whole
/// batch is empty the build fails with `EmptyBatch`. The first file that
/// cannot be decoded aborts the build; no degraded partial matrix is ever
/// returned.
pub fn build_profile_dataset(groups: &[LabeledDirectory]) -> Result<ProfileDataset> {
    let mut profiles: Vec<Vec<f64>> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    let mut files: Vec<PathBuf> = Vec::new();

    for group in groups {
        let group_files = list_image_files(&group.path)?;
        log::info!(
            "group '{}': {} image(s) in {}",
            group.label,
            group_files.len(),
            group.path.display()
        );
        for file in group_files {
            let image = GrayscaleImage::from_file(&file)?;
            let (_, profile) = radial_autocorrelation(&image)?;
            log::debug!(
                "{}: {}x{} -> profile of length {}",
                file.display(),
                image.width,
                image.height,
                profile.len()
            );
            profiles.push(profile);
            labels.push(group.label.clone());
            files.push(file);
        }
    }

    if profiles.is_empty() {
        return Err(AnalysisError::EmptyBatch);
    }

    let cols = profiles.iter().map(|p| p.len()).min().unwrap_or(0);
    let rows = profiles.len();
    let mut data = Vec::with_capacity(rows * cols);
    for profile in &profiles {
        data.extend_from_slice(&profile[..cols]);
    }

    log::info!("profile matrix assembled: {rows} rows x {cols} cols");

    Ok(ProfileDataset {
        matrix: ProfileMatrix::new(data, rows, cols),
        labels,
        files,
    })
}
