//! Pixel buffer storage

mod buffer;

pub use buffer::{PixelBuffer, RowOrder};
