//! Ramp textures
//!
//! - Spec: the configuration model a batch is loaded into
//! - Validate: whole-batch checks run before any texture is produced
//! - Synthesize: gradients and remap curve to pixels

mod spec;
mod synthesize;
mod validate;

pub use spec::{RampBatch, RampSize, RampSpec, MAX_SIZE, MIN_SIZE};
pub use synthesize::{synthesize, BlendIndex, Synthesize};
pub use validate::validate;
