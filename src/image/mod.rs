pub mod loader;

pub use loader::{GrayscaleImage, SyntheticPattern};
