//! # rampgen Colormap
//!
//! Color gradients and remap curves for rampgen.
//!
//! A [`Gradient`] maps a normalized position to an RGBA color through sorted
//! color and alpha keys. A [`RemapCurve`] is a keyframe curve with Hermite
//! segments, used to pick (and blend between) stacked gradients.
//!
//! ## Usage
//!
//! ```ignore
//! use rampgen_colormap::{Gradient, RemapCurve};
//! use rampgen_core::Rgba;
//!
//! let gradient = Gradient::linear(Rgba::BLACK, Rgba::WHITE);
//! let mid = gradient.evaluate(0.5);
//! let index = RemapCurve::linear(0.0, 0.0, 3.0, 2.0).evaluate(1.5);
//! ```

mod curve;
mod gradient;

pub use curve::{CurveWrapMode, Keyframe, RemapCurve};
pub use gradient::{AlphaKey, ColorKey, Gradient, GradientMode};
