//! Ring averaging: collapse a 2D map into a profile over integer radii.

use crate::error::{AnalysisError, Result};

/// Mean map value at each integer radius from `centre = (cy, cx)`.
///
/// Every cell contributes to the bucket `floor(sqrt((x-cx)² + (y-cy)²))`;
/// the profile runs from radius 0 to the largest occupied radius. The
/// outermost ring may be fed by only a few corner cells; it stays in the
/// profile, valid but noisy.
///
/// On a dense rectangular grid with the centre inside it, every interior
/// bucket receives at least one cell; an empty one would mean the inputs
/// violated that assumption and is reported as `EmptyRadiusBucket` rather
/// than silently divided.
pub fn radial_profile(
    data: &[f64],
    width: usize,
    height: usize,
    centre: (f64, f64),
) -> Result<Vec<f64>> {
    let (cy, cx) = centre;
    let mut sums: Vec<f64> = Vec::new();
    let mut counts: Vec<u64> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let r = (dx * dx + dy * dy).sqrt() as usize;
            if r >= sums.len() {
                sums.resize(r + 1, 0.0);
                counts.resize(r + 1, 0);
            }
            sums[r] += data[y * width + x];
            counts[r] += 1;
        }
    }

    sums.iter()
        .zip(counts.iter())
        .enumerate()
        .map(|(radius, (&sum, &count))| {
            if count == 0 {
                Err(AnalysisError::EmptyRadiusBucket { radius })
            } else {
                Ok(sum / count as f64)
            }
        })
        .collect()
}
