use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot decode image {}: {source}", .path.display())]
    UnreadableImage {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("no images found in any labelled directory")]
    EmptyBatch,

    #[error("radius bucket {radius} received no samples")]
    EmptyRadiusBucket { radius: usize },

    #[error("profile matrix of {rows}x{cols} cannot support a 2-component projection")]
    InsufficientDimensionality { rows: usize, cols: usize },

    #[error("render error: {0}")]
    Render(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
