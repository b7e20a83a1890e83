//! Box-counting fractal dimension of every image in a directory.
//!
//! Prints one `file: dimension` line per image. The threshold is given in
//! percent; pixels darker than it count as foreground.

use clap::Parser;
use std::path::PathBuf;
use texture_autocorr::dataset::list_image_files;
use texture_autocorr::fractal::fractal_dimension;
use texture_autocorr::GrayscaleImage;

#[derive(Parser)]
#[command(name = "fractal-dim")]
#[command(about = "Box-counting fractal dimension of thresholded images")]
struct Args {
    /// Directory with images to process
    dir: PathBuf,

    /// Binarisation threshold in percent (0-100)
    #[arg(long, default_value_t = 50.0)]
    threshold: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let threshold = args.threshold / 100.0;
    let files = list_image_files(&args.dir)?;
    if files.is_empty() {
        return Err(format!("no images found in {}", args.dir.display()).into());
    }

    for file in &files {
        let image = GrayscaleImage::from_file(file)?;
        let fd = fractal_dimension(&image, threshold)?;
        let name = file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        println!("{name}: {fd:.4}");
    }

    Ok(())
}
