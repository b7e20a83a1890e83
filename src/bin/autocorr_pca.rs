//! Compare labelled image groups in the autocorrelation-profile PCA plane.
//!
//! Each `--group` names one labelled directory of images, e.g.
//!
//! ```text
//! autocorr-pca \
//!     --group "Cladonia rangiferina=data/cladonia" \
//!     --group "Hypogymnia physodes=data/hypogymnia" \
//!     --group "Xanthoria parietina=data/xanthoria" \
//!     --scatter lichen_pca.png
//! ```

use clap::Parser;
use std::path::PathBuf;
use texture_autocorr::render::{save_heatmap, save_scatter_plot};
use texture_autocorr::{
    autocorrelate, build_profile_dataset, project_to_plane, GrayscaleImage, LabeledDirectory,
};

#[derive(Parser)]
#[command(name = "autocorr-pca")]
#[command(about = "PCA of radial autocorrelation profiles across labelled image groups")]
struct Args {
    /// Labelled image directory as LABEL=DIR; repeat once per group
    #[arg(long = "group", value_parser = parse_group, required = true)]
    groups: Vec<(String, PathBuf)>,

    /// Output path for the PC1/PC2 scatter plot
    #[arg(long, default_value = "pca_scatter.png")]
    scatter: PathBuf,

    /// If set, save a per-image autocorrelation heat-map into this directory
    #[arg(long)]
    heatmap_dir: Option<PathBuf>,
}

fn parse_group(s: &str) -> Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((label, dir)) if !label.is_empty() && !dir.is_empty() => {
            Ok((label.to_string(), PathBuf::from(dir)))
        }
        _ => Err(format!("expected LABEL=DIR, got '{s}'")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let groups: Vec<LabeledDirectory> = args
        .groups
        .iter()
        .map(|(label, dir)| LabeledDirectory::new(label.clone(), dir.clone()))
        .collect();

    let dataset = build_profile_dataset(&groups)?;

    if let Some(dir) = &args.heatmap_dir {
        std::fs::create_dir_all(dir)?;
        for file in &dataset.files {
            let image = GrayscaleImage::from_file(file)?;
            let map = autocorrelate(&image);
            let stem = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("image");
            save_heatmap(&map, dir.join(format!("{stem}_autocorr.png")))?;
        }
    }

    let projection = project_to_plane(&dataset.matrix)?;
    save_scatter_plot(&projection, &dataset.labels, &args.scatter)?;

    println!(
        "{} profiles of length {} across {} group(s)",
        dataset.matrix.rows,
        dataset.matrix.cols,
        groups.len()
    );
    println!(
        "explained variance: PC1 {:.1}%, PC2 {:.1}%",
        projection.explained_variance_ratio[0] * 100.0,
        projection.explained_variance_ratio[1] * 100.0
    );
    println!("scatter plot written to {}", args.scatter.display());

    Ok(())
}
