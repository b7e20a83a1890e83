//! Row-column 2D FFT helpers over flat row-major buffers.

use rustfft::{num_complex::Complex, FftPlanner};

fn transpose(data: &[Complex<f64>], width: usize, height: usize) -> Vec<Complex<f64>> {
    let mut out = vec![Complex::new(0.0, 0.0); width * height];
    for y in 0..height {
        for x in 0..width {
            out[x * height + y] = data[y * width + x];
        }
    }
    out
}

/// Forward 2D FFT of real data.
pub fn fft_2d(data: &[f64], width: usize, height: usize) -> Vec<Complex<f64>> {
    let mut planner = FftPlanner::new();
    let mut complex_data: Vec<Complex<f64>> =
        data.iter().map(|&x| Complex::new(x, 0.0)).collect();

    // Rows
    let fft_width = planner.plan_fft_forward(width);
    for row in complex_data.chunks_exact_mut(width) {
        fft_width.process(row);
    }

    // Columns, via transpose
    let mut transposed = transpose(&complex_data, width, height);
    let fft_height = planner.plan_fft_forward(height);
    for col in transposed.chunks_exact_mut(height) {
        fft_height.process(col);
    }

    transpose(&transposed, height, width)
}

/// Inverse 2D FFT, returning the real part.
///
/// rustfft leaves the inverse unnormalised; the `1/(width*height)` factor is
/// applied here. The imaginary residue of a conjugate-symmetric spectrum is
/// numerical noise and is discarded.
pub fn ifft_2d_real(data: &[Complex<f64>], width: usize, height: usize) -> Vec<f64> {
    let mut planner = FftPlanner::new();
    let mut complex_data = data.to_vec();

    // Rows
    let ifft_width = planner.plan_fft_inverse(width);
    for row in complex_data.chunks_exact_mut(width) {
        ifft_width.process(row);
    }

    // Columns, via transpose
    let mut transposed = transpose(&complex_data, width, height);
    let ifft_height = planner.plan_fft_inverse(height);
    for col in transposed.chunks_exact_mut(height) {
        ifft_height.process(col);
    }

    let back = transpose(&transposed, height, width);
    let normalisation = (width * height) as f64;
    back.iter().map(|c| c.re / normalisation).collect()
}

/// Swap quadrants so the (0,0) bin moves to `(height/2, width/2)`.
///
/// The standard frequency-shift: every index moves by half the extent of its
/// axis, modulo that extent. Works for odd and even extents alike.
pub fn fftshift(data: &[f64], width: usize, height: usize) -> Vec<f64> {
    let mut out = vec![0.0; width * height];
    for y in 0..height {
        let sy = (y + height / 2) % height;
        for x in 0..width {
            let sx = (x + width / 2) % width;
            out[sy * width + sx] = data[y * width + x];
        }
    }
    out
}
