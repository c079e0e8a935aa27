//! Ramp texture synthesis
//!
//! Every column samples the gradients at `x / width`, so the last column
//! stops one texel short of 1.0. A ramp with a single gradient repeats the
//! same row on every line. With several gradients each row asks the remap
//! curve for a fractional gradient index and blends the two gradients
//! around it.

use crate::maybe_rayon::*;
use crate::ramp::spec::RampSpec;
use ndarray::{Array2, Axis};
use rampgen_colormap::RemapCurve;
use rampgen_core::{Algorithm, Error, PixelBuffer, Result, Rgba};

/// Synthesis algorithm
#[derive(Debug, Clone, Default)]
pub struct Synthesize;

impl Algorithm for Synthesize {
    type Input = RampSpec;
    type Output = PixelBuffer;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Synthesize"
    }

    fn description(&self) -> &'static str {
        "Render a ramp texture from its gradients and remap curve"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        Ok(synthesize(&input))
    }
}

/// The pair of stacked gradients one row blends, and the blend factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendIndex {
    pub lower: usize,
    pub upper: usize,
    /// Weight of `upper`, in `[0, 1)`
    pub t: f32,
}

impl BlendIndex {
    /// Resolve a remap curve output for `count` stacked gradients.
    ///
    /// The value is clamped to `[0, count - 1]` before flooring, and both
    /// derived indices are clamped again, so a curve overshooting the stack
    /// behaves like one ending exactly on the last gradient. NaN resolves
    /// to the first gradient.
    pub fn from_curve_value(value: f32, count: usize) -> Self {
        let last = count.saturating_sub(1);
        let value = if value.is_nan() { 0.0 } else { value };

        let y_rate = value.clamp(0.0, last as f32);
        let floor = y_rate.floor();
        let base = floor as i64;

        Self {
            lower: base.clamp(0, last as i64) as usize,
            upper: (base + 1).clamp(0, last as i64) as usize,
            t: y_rate - floor,
        }
    }

    /// Blend index for row `y` of a `height`-row texture.
    ///
    /// The curve is sampled at `y / height * count`.
    pub fn for_row(curve: &RemapCurve, y: usize, height: usize, count: usize) -> Self {
        let scan = y as f32 / height as f32 * count as f32;
        Self::from_curve_value(curve.evaluate(scan), count)
    }
}

/// Horizontal gradient position of column `x`.
fn x_rate(x: usize, width: usize) -> f32 {
    x as f32 / width as f32
}

/// Render one ramp into a fresh pixel buffer.
///
/// The buffer is `size.width x size.height`, row 0 first. Rows are rendered
/// in parallel when the `parallel` feature is enabled.
///
/// # Panics
///
/// Panics if the ramp has no gradients, if a gradient has no keys, or if a
/// ramp with several gradients has no remap curve. [`validate`] rejects all
/// of these.
///
/// [`validate`]: crate::ramp::validate
pub fn synthesize(spec: &RampSpec) -> PixelBuffer {
    assert!(
        !spec.gradients.is_empty(),
        "ramp `{}` has no gradients",
        spec.name
    );

    let (width, height) = spec.size.dimensions();
    let gradients = &spec.gradients;
    let count = gradients.len();
    let curve = if count > 1 {
        match &spec.remap_curve {
            Some(curve) => Some(curve),
            None => panic!("ramp `{}` blends {count} gradients without a remap curve", spec.name),
        }
    } else {
        None
    };

    let mut data = Array2::from_elem((height, width), Rgba::TRANSPARENT);

    data.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| match curve {
            None => {
                for (x, px) in row.iter_mut().enumerate() {
                    *px = gradients[0].evaluate(x_rate(x, width));
                }
            }
            Some(curve) => {
                let blend = BlendIndex::for_row(curve, y, height, count);
                let lower = &gradients[blend.lower];
                let upper = &gradients[blend.upper];
                for (x, px) in row.iter_mut().enumerate() {
                    let x_rate = x_rate(x, width);
                    *px = lower.evaluate(x_rate).lerp(upper.evaluate(x_rate), blend.t);
                }
            }
        });

    PixelBuffer::from_array(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::spec::RampSize;
    use approx::assert_relative_eq;
    use rampgen_colormap::Gradient;

    const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);
    const BLUE: Rgba = Rgba::opaque(0.0, 0.0, 1.0);

    #[test]
    fn warm_example_row() {
        let spec = RampSpec::new("warm", Gradient::linear(RED, BLUE), RampSize::new(4, 1));
        let buffer = synthesize(&spec);
        assert_eq!(buffer.dimensions(), (4, 1));

        for (x, expected_t) in [0.0f32, 0.25, 0.5, 0.75].into_iter().enumerate() {
            let px = buffer.get(x, 0).unwrap();
            assert_relative_eq!(px.r, 1.0 - expected_t);
            assert_relative_eq!(px.b, expected_t);
            assert_relative_eq!(px.a, 1.0);
        }
    }

    #[test]
    fn last_column_stops_short_of_endpoint() {
        let spec = RampSpec::new("edge", Gradient::linear(RED, BLUE), RampSize::new(8, 1));
        let buffer = synthesize(&spec);
        assert_eq!(buffer.get(0, 0), Some(RED));
        let last = buffer.get(7, 0).unwrap();
        assert_ne!(last, BLUE);
        assert_relative_eq!(last.b, 7.0 / 8.0);
    }

    #[test]
    fn single_gradient_rows_are_identical() {
        let gradient = Gradient::from_stops(&[
            (0.0, RED),
            (0.4, Rgba::new(0.0, 1.0, 0.0, 0.5)),
            (1.0, BLUE),
        ]);
        let buffer = synthesize(&RampSpec::new("tall", gradient, RampSize::new(16, 9)));
        let first = buffer.row(0).unwrap().to_owned();
        for y in 1..9 {
            assert_eq!(buffer.row(y).unwrap(), first.view(), "row {y}");
        }
    }

    fn stack() -> Vec<Gradient> {
        vec![
            Gradient::solid(RED),
            Gradient::solid(Rgba::opaque(0.0, 1.0, 0.0)),
            Gradient::linear(BLUE, Rgba::WHITE),
        ]
    }

    #[test]
    fn integral_curve_value_picks_one_gradient() {
        let gradients = stack();
        for k in 0..gradients.len() {
            let curve = RemapCurve::constant(0.0, 3.0, k as f32);
            let spec = RampSpec::blended("k", gradients.clone(), curve, RampSize::new(8, 4));
            let buffer = synthesize(&spec);
            for y in 0..4 {
                for x in 0..8 {
                    assert_eq!(
                        buffer.get(x, y).unwrap(),
                        gradients[k].evaluate(x as f32 / 8.0),
                        "k={k} ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn overshooting_curve_clamps_to_last_gradient() {
        let gradients = stack();
        let over = RampSpec::blended(
            "over",
            gradients.clone(),
            RemapCurve::constant(0.0, 3.0, gradients.len() as f32 + 5.0),
            RampSize::new(8, 3),
        );
        let at_last = RampSpec::blended(
            "last",
            gradients.clone(),
            RemapCurve::constant(0.0, 3.0, gradients.len() as f32 - 1.0),
            RampSize::new(8, 3),
        );
        assert_eq!(synthesize(&over), synthesize(&at_last));
    }

    #[test]
    fn rows_blend_between_neighbours() {
        // Row y scans y / 4 * 2; identity curve over [0, 2].
        let gradients = vec![Gradient::solid(Rgba::BLACK), Gradient::solid(Rgba::WHITE)];
        let spec = RampSpec::blended(
            "fade",
            gradients,
            RemapCurve::linear(0.0, 0.0, 2.0, 2.0),
            RampSize::new(2, 4),
        );
        let buffer = synthesize(&spec);
        for (y, grey) in [0.0f32, 0.5, 1.0, 1.0].into_iter().enumerate() {
            let px = buffer.get(1, y).unwrap();
            assert_relative_eq!(px.r, grey, epsilon = 1e-6);
            assert_relative_eq!(px.a, 1.0);
        }
    }

    #[test]
    fn synthesis_is_deterministic() {
        let spec = RampSpec::blended(
            "again",
            stack(),
            RemapCurve::ease_in_out(0.0, 0.0, 3.0, 2.0),
            RampSize::new(33, 17),
        );
        assert_eq!(synthesize(&spec), synthesize(&spec));
    }

    #[test]
    fn blend_index_interior() {
        let b = BlendIndex::from_curve_value(1.25, 3);
        assert_eq!((b.lower, b.upper), (1, 2));
        assert_relative_eq!(b.t, 0.25);
    }

    #[test]
    fn blend_index_clamps_overshoot() {
        let top = BlendIndex::from_curve_value(2.0, 3);
        assert_eq!(BlendIndex::from_curve_value(8.0, 3), top);
        assert_eq!((top.lower, top.upper, top.t), (2, 2, 0.0));

        let bottom = BlendIndex::from_curve_value(-4.0, 3);
        assert_eq!((bottom.lower, bottom.upper, bottom.t), (0, 1, 0.0));
        assert_eq!(BlendIndex::from_curve_value(f32::NAN, 3), bottom);
    }

    #[test]
    fn algorithm_trait_matches_function() {
        let spec = RampSpec::new("algo", Gradient::linear(RED, BLUE), RampSize::new(5, 2));
        let out = Synthesize.execute_default(spec.clone()).unwrap();
        assert_eq!(out, synthesize(&spec));
        assert_eq!(Synthesize.name(), "Synthesize");
    }

    #[test]
    #[should_panic(expected = "without a remap curve")]
    fn blended_without_curve_panics() {
        let mut spec = RampSpec::new("stack", Gradient::solid(RED), RampSize::new(2, 2));
        spec.gradients.push(Gradient::solid(BLUE));
        synthesize(&spec);
    }

    #[test]
    #[should_panic(expected = "has no gradients")]
    fn empty_ramp_panics() {
        let mut spec = RampSpec::new("none", Gradient::solid(RED), RampSize::new(2, 2));
        spec.gradients.clear();
        synthesize(&spec);
    }
}
