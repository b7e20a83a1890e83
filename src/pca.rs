//! Fixed 2-component principal-axis projection of a profile matrix.

use crate::dataset::ProfileMatrix;
use crate::error::{AnalysisError, Result};
use nalgebra::{DMatrix, SymmetricEigen};

/// 2-component embedding of a profile matrix, one point per row.
///
/// Axis sign and orientation are implementation-defined up to reflection;
/// only explained-variance ratios and relative point separations are stable
/// quantities to assert on.
#[derive(Debug, Clone)]
pub struct Projection {
    /// `[pc1, pc2]` per input row, in row order.
    pub points: Vec<[f64; 2]>,
    /// Eigenvalues of the two retained axes, descending.
    pub explained_variance: [f64; 2],
    /// Retained eigenvalues over the total positive spectrum.
    pub explained_variance_ratio: [f64; 2],
}

/// Mean-centre the matrix and project every row onto the two orthonormal
/// directions of maximum variance.
///
/// The column covariance `XᵀX/(n−1)` is eigendecomposed symmetrically and
/// the axes ordered by descending eigenvalue. Requires at least 2 rows and
/// 2 columns (`InsufficientDimensionality` otherwise; a second axis is not
/// well-defined below that). A matrix with zero variance in every column is
/// *not* an error: it projects to all-zero points with zero ratios.
pub fn project_to_plane(matrix: &ProfileMatrix) -> Result<Projection> {
    let n = matrix.rows;
    let k = matrix.cols;
    if n < 2 || k < 2 {
        return Err(AnalysisError::InsufficientDimensionality { rows: n, cols: k });
    }

    // Column means
    let mut mean = vec![0.0; k];
    for i in 0..n {
        for (j, &value) in matrix.row(i).iter().enumerate() {
            mean[j] += value;
        }
    }
    for m in &mut mean {
        *m /= n as f64;
    }

    // Centred data matrix, n x k
    let mut centred = DMatrix::<f64>::zeros(n, k);
    for i in 0..n {
        for (j, &value) in matrix.row(i).iter().enumerate() {
            centred[(i, j)] = value - mean[j];
        }
    }

    // Covariance (k x k) and its symmetric eigendecomposition
    let cov = (centred.transpose() * &centred) / (n - 1) as f64;
    let eigen = SymmetricEigen::new(cov);
    let eigenvalues = eigen.eigenvalues;
    let eigenvectors = eigen.eigenvectors;

    // Axes by descending eigenvalue
    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| {
        eigenvalues[b]
            .partial_cmp(&eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total_variance: f64 = eigenvalues.iter().filter(|&&v| v > 0.0).sum();
    let mut explained_variance = [0.0; 2];
    let mut explained_variance_ratio = [0.0; 2];
    let mut axes = [vec![0.0; k], vec![0.0; k]];
    for (slot, &idx) in order.iter().take(2).enumerate() {
        let ev = eigenvalues[idx].max(0.0);
        explained_variance[slot] = ev;
        explained_variance_ratio[slot] = if total_variance > 0.0 {
            ev / total_variance
        } else {
            0.0
        };
        for row in 0..k {
            axes[slot][row] = eigenvectors[(row, idx)];
        }
    }

    // Project each centred row onto the two axes
    let points = (0..n)
        .map(|i| {
            let mut point = [0.0; 2];
            for (slot, axis) in axes.iter().enumerate() {
                point[slot] = (0..k).map(|j| centred[(i, j)] * axis[j]).sum();
            }
            point
        })
        .collect();

    Ok(Projection {
        points,
        explained_variance,
        explained_variance_ratio,
    })
}
