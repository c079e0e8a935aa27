//! # rampgen Core
//!
//! Core types, traits and asset output for the rampgen ramp texture generator.
//!
//! This crate provides:
//! - `Rgb` / `Rgba`: linear floating-point colors
//! - `PixelBuffer`: dense row-major RGBA pixel grid
//! - `AssetSink`: the interface generated textures are persisted through,
//!   with a PNG implementation and import settings for the host pipeline
//! - Error types shared by every rampgen crate
//! - `Algorithm`: the shape every generator step (such as ramp synthesis) takes

pub mod color;
pub mod error;
pub mod io;
pub mod raster;

pub use color::{Rgb, Rgba};
pub use error::{Error, Result, ValidationError};
pub use raster::{PixelBuffer, RowOrder};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::color::{Rgb, Rgba};
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::io::{AssetSink, ImportSettings, MemorySink, PngAssetSink};
    pub use crate::raster::{PixelBuffer, RowOrder};
    pub use crate::Algorithm;
}

/// A pure transformation from one ramp description to a generated asset.
///
/// Implementors own no state between calls; the same input and params always
/// produce the same output. `Params` carries per-call tuning and falls back to
/// its `Default` through [`execute_default`](Algorithm::execute_default).
pub trait Algorithm {
    type Input;
    type Output;
    type Params: Default;
    type Error: std::error::Error;

    /// Short identifier
    fn name(&self) -> &'static str;

    /// One-line summary
    fn description(&self) -> &'static str;

    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
