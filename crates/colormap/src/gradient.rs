//! Color gradients and multi-key interpolation engine.
//!
//! A gradient carries two independent key tracks: color keys (RGB) and alpha
//! keys. Each track is evaluated on its own and the results are combined.

use rampgen_core::{Rgb, Rgba};
use serde::{Deserialize, Serialize};

/// A color key: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
    pub time: f32,
    pub color: Rgb,
}

impl ColorKey {
    pub const fn new(time: f32, color: Rgb) -> Self {
        Self { time, color }
    }
}

/// An alpha key: position in [0, 1] mapped to an opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaKey {
    pub time: f32,
    pub alpha: f32,
}

impl AlphaKey {
    pub const fn new(time: f32, alpha: f32) -> Self {
        Self { time, alpha }
    }
}

/// How values between two keys are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
    /// Linear interpolation between the bracketing keys
    #[default]
    Blend,
    /// Value of the first key at or after the position (hard steps)
    Fixed,
}

/// A color gradient over the normalized range [0, 1].
///
/// Keys are kept sorted by time. Positions before the first key take the
/// first key's value, positions after the last key take the last key's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GradientData")]
pub struct Gradient {
    mode: GradientMode,
    color_keys: Vec<ColorKey>,
    alpha_keys: Vec<AlphaKey>,
}

/// Unsorted deserialized form of [`Gradient`].
#[derive(Deserialize)]
struct GradientData {
    #[serde(default)]
    mode: GradientMode,
    #[serde(default)]
    color_keys: Vec<ColorKey>,
    #[serde(default = "default_alpha_keys")]
    alpha_keys: Vec<AlphaKey>,
}

fn default_alpha_keys() -> Vec<AlphaKey> {
    vec![AlphaKey::new(0.0, 1.0)]
}

impl From<GradientData> for Gradient {
    fn from(data: GradientData) -> Self {
        Gradient::new(data.color_keys, data.alpha_keys).with_mode(data.mode)
    }
}

impl Gradient {
    /// Create a blending gradient; keys are sorted by time.
    pub fn new(mut color_keys: Vec<ColorKey>, mut alpha_keys: Vec<AlphaKey>) -> Self {
        color_keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        alpha_keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            mode: GradientMode::Blend,
            color_keys,
            alpha_keys,
        }
    }

    /// Gradient from RGBA stops, split into color and alpha keys.
    pub fn from_stops(stops: &[(f32, Rgba)]) -> Self {
        let color_keys = stops
            .iter()
            .map(|&(time, c)| ColorKey::new(time, c.rgb()))
            .collect();
        let alpha_keys = stops
            .iter()
            .map(|&(time, c)| AlphaKey::new(time, c.a))
            .collect();
        Self::new(color_keys, alpha_keys)
    }

    /// Two-stop gradient from `start` at 0 to `end` at 1.
    pub fn linear(start: Rgba, end: Rgba) -> Self {
        Self::from_stops(&[(0.0, start), (1.0, end)])
    }

    /// Single-color gradient.
    pub fn solid(color: Rgba) -> Self {
        Self::from_stops(&[(0.0, color)])
    }

    pub fn with_mode(mut self, mode: GradientMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> GradientMode {
        self.mode
    }

    pub fn color_keys(&self) -> &[ColorKey] {
        &self.color_keys
    }

    pub fn alpha_keys(&self) -> &[AlphaKey] {
        &self.alpha_keys
    }

    /// Evaluate the gradient at normalized position `t`.
    ///
    /// # Panics
    ///
    /// Panics if the gradient has no color keys or no alpha keys.
    pub fn evaluate(&self, t: f32) -> Rgba {
        assert!(!self.color_keys.is_empty(), "gradient has no color keys");
        assert!(!self.alpha_keys.is_empty(), "gradient has no alpha keys");

        let rgb = multi_key(&self.color_keys, t, self.mode, |k| k.time, |k| k.color, Rgb::lerp);
        let alpha = multi_key(&self.alpha_keys, t, self.mode, |k| k.time, |k| k.alpha, lerp);
        rgb.with_alpha(alpha)
    }
}

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sample a sorted, non-empty key track at `t`.
fn multi_key<K, V: Copy>(
    keys: &[K],
    t: f32,
    mode: GradientMode,
    time: impl Fn(&K) -> f32,
    value: impl Fn(&K) -> V,
    mix: impl Fn(V, V, f32) -> V,
) -> V {
    let first = &keys[0];
    if t <= time(first) {
        return value(first);
    }
    for pair in keys.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if t <= time(hi) {
            return match mode {
                GradientMode::Fixed => value(hi),
                GradientMode::Blend => {
                    let span = time(hi) - time(lo);
                    if span > 0.0 {
                        mix(value(lo), value(hi), (t - time(lo)) / span)
                    } else {
                        value(hi)
                    }
                }
            };
        }
    }
    value(&keys[keys.len() - 1])
}
