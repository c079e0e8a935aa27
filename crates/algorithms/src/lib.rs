//! # rampgen Algorithms
//!
//! Ramp texture generation for rampgen.
//!
//! - **ramp**: configuration model, batch validation, raster synthesis
//! - **batch**: validate a batch, synthesize it and persist every texture
//!   through an [`AssetSink`](rampgen_core::io::AssetSink)

pub mod batch;
pub mod ramp;

pub(crate) mod maybe_rayon;

pub use batch::{generate_batch, synthesize_batch, BatchOptions, BatchReport, RampReport};
pub use rampgen_core::ValidationError;
pub use ramp::{synthesize, validate, RampBatch, RampSize, RampSpec};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::batch::{generate_batch, BatchOptions, BatchReport};
    pub use crate::ramp::{synthesize, validate, RampBatch, RampSize, RampSpec, Synthesize};
    pub use rampgen_colormap::{Gradient, GradientMode, RemapCurve};
    pub use rampgen_core::prelude::*;
    pub use rampgen_parallel::ProcessingMode;
}
