//! Presentation output: autocorrelation heat-maps and the PC1/PC2 scatter.
//!
//! Everything here is output-only; the numeric pipeline never depends on it.

use crate::error::{AnalysisError, Result};
use crate::pca::Projection;
use crate::profile::AutocorrelationMap;
use image::RgbImage;
use plotters::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

/// Anchor points of an inferno-style colour scale, low to high.
const HEAT_ANCHORS: [[u8; 3]; 8] = [
    [0, 0, 4],
    [40, 11, 84],
    [101, 21, 110],
    [159, 42, 99],
    [212, 72, 66],
    [245, 125, 21],
    [250, 193, 39],
    [252, 255, 164],
];

/// Fixed palette cycled per label in the scatter plot.
const SCATTER_PALETTE: [RGBColor; 3] = [RED, GREEN, BLUE];

fn heat_colour(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0) * (HEAT_ANCHORS.len() - 1) as f64;
    let lo = t.floor() as usize;
    let hi = (lo + 1).min(HEAT_ANCHORS.len() - 1);
    let frac = t - lo as f64;
    let mut rgb = [0u8; 3];
    for (channel, value) in rgb.iter_mut().enumerate() {
        let a = HEAT_ANCHORS[lo][channel] as f64;
        let b = HEAT_ANCHORS[hi][channel] as f64;
        *value = (a + (b - a) * frac).round() as u8;
    }
    rgb
}

/// Render an autocorrelation map as a min–max normalised heat-map.
pub fn heatmap_image(map: &AutocorrelationMap) -> RgbImage {
    let min = map.data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = map.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let mut img = RgbImage::new(map.width as u32, map.height as u32);
    for (i, pixel) in img.pixels_mut().enumerate() {
        let t = if range > 0.0 {
            (map.data[i] - min) / range
        } else {
            0.0
        };
        *pixel = image::Rgb(heat_colour(t));
    }
    img
}

/// Save the heat-map PNG for visual inspection.
pub fn save_heatmap<P: AsRef<Path>>(map: &AutocorrelationMap, path: P) -> Result<()> {
    let img = heatmap_image(map);
    img.save(path.as_ref())?;
    log::info!("heat-map saved: {}", path.as_ref().display());
    Ok(())
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    if span > 0.0 {
        (min - span * 0.05, max + span * 0.05)
    } else {
        // Degenerate (all points coincide): give the axes some room anyway
        (min - 1.0, max + 1.0)
    }
}

/// Scatter the 2-component embedding, one colour per unique label, with a
/// legend. `labels` must be aligned with `projection.points` row for row.
pub fn save_scatter_plot<P: AsRef<Path>>(
    projection: &Projection,
    labels: &[String],
    path: P,
) -> Result<()> {
    let render = |e: &dyn std::fmt::Display| AnalysisError::Render(e.to_string());

    let (x_min, x_max) = padded_range(projection.points.iter().map(|p| p[0]));
    let (y_min, y_max) = padded_range(projection.points.iter().map(|p| p[1]));

    let root = BitMapBackend::new(path.as_ref(), (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("PCA of autocorrelation profiles", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| render(&e))?;

    chart
        .configure_mesh()
        .x_desc("PC1")
        .y_desc("PC2")
        .draw()
        .map_err(|e| render(&e))?;

    let unique_labels: BTreeSet<&String> = labels.iter().collect();
    for (i, label) in unique_labels.iter().enumerate() {
        let colour = SCATTER_PALETTE[i % SCATTER_PALETTE.len()];
        let points = projection
            .points
            .iter()
            .zip(labels.iter())
            .filter(|(_, l)| l.as_str() == label.as_str())
            .map(|(p, _)| Circle::new((p[0], p[1]), 4, colour.filled()));
        chart
            .draw_series(points)
            .map_err(|e| render(&e))?
            .label(label.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 4, colour.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| render(&e))?;

    root.present().map_err(|e| render(&e))?;
    log::info!("scatter plot saved: {}", path.as_ref().display());
    Ok(())
}
