//! Asset output: the persistence interface and its PNG implementation

mod import;
mod png_sink;
mod sink;

pub use import::{ImportSettings, NpotScale, TextureCompression, WrapMode};
pub use png_sink::{write_png, PngAssetSink, PngSinkOptions};
pub use sink::{AssetSink, MemorySink};
