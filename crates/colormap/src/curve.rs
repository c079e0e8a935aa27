//! Keyframe curves used to remap a vertical scan position onto a gradient index.
//!
//! Segments between keys are cubic Hermite splines driven by each key's
//! tangents. Outside the key range the curve is extended according to its
//! wrap modes.

use serde::{Deserialize, Serialize};

/// One curve key.
///
/// `in_tangent` is the slope arriving at the key, `out_tangent` the slope
/// leaving it. An infinite tangent turns the adjoining segment into a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    /// Key with flat tangents.
    pub const fn new(time: f32, value: f32) -> Self {
        Self::with_tangents(time, value, 0.0, 0.0)
    }

    pub const fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }

    /// Key that holds its value until the next key.
    pub const fn stepped(time: f32, value: f32) -> Self {
        Self::with_tangents(time, value, f32::INFINITY, f32::INFINITY)
    }
}

/// Extension of a curve beyond its first or last key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveWrapMode {
    /// Hold the end key's value
    #[default]
    Clamp,
    /// Repeat the curve
    Loop,
    /// Repeat the curve, mirrored every other cycle
    PingPong,
}

/// A continuous real-valued keyframe curve.
///
/// A curve without keys evaluates to `0.0`; a single key yields its value
/// everywhere.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CurveData")]
pub struct RemapCurve {
    keys: Vec<Keyframe>,
    pre_wrap: CurveWrapMode,
    post_wrap: CurveWrapMode,
}

#[derive(Deserialize)]
struct CurveData {
    #[serde(default)]
    keys: Vec<Keyframe>,
    #[serde(default)]
    pre_wrap: CurveWrapMode,
    #[serde(default)]
    post_wrap: CurveWrapMode,
}

impl From<CurveData> for RemapCurve {
    fn from(data: CurveData) -> Self {
        RemapCurve::new(data.keys).with_wrap(data.pre_wrap, data.post_wrap)
    }
}

impl RemapCurve {
    /// Create a clamped curve; keys are sorted by time.
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            keys,
            pre_wrap: CurveWrapMode::Clamp,
            post_wrap: CurveWrapMode::Clamp,
        }
    }

    /// Straight line from `(t0, v0)` to `(t1, v1)`.
    pub fn linear(t0: f32, v0: f32, t1: f32, v1: f32) -> Self {
        let slope = if t1 != t0 { (v1 - v0) / (t1 - t0) } else { 0.0 };
        Self::new(vec![
            Keyframe::with_tangents(t0, v0, slope, slope),
            Keyframe::with_tangents(t1, v1, slope, slope),
        ])
    }

    /// S-shaped curve from `(t0, v0)` to `(t1, v1)` with flat ends.
    pub fn ease_in_out(t0: f32, v0: f32, t1: f32, v1: f32) -> Self {
        Self::new(vec![Keyframe::new(t0, v0), Keyframe::new(t1, v1)])
    }

    /// Flat curve with the given value over `[t0, t1]`.
    pub fn constant(t0: f32, t1: f32, value: f32) -> Self {
        Self::new(vec![Keyframe::new(t0, value), Keyframe::new(t1, value)])
    }

    pub fn with_wrap(mut self, pre_wrap: CurveWrapMode, post_wrap: CurveWrapMode) -> Self {
        self.pre_wrap = pre_wrap;
        self.post_wrap = post_wrap;
        self
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn pre_wrap(&self) -> CurveWrapMode {
        self.pre_wrap
    }

    pub fn post_wrap(&self) -> CurveWrapMode {
        self.post_wrap
    }

    /// Time of the first and last key.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        Some((self.keys.first()?.time, self.keys.last()?.time))
    }

    /// Evaluate the curve at `time`.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        let span = last.time - first.time;
        if self.keys.len() == 1 || span <= 0.0 {
            return first.value;
        }

        let time = if time < first.time {
            match self.pre_wrap {
                CurveWrapMode::Clamp => return first.value,
                mode => wrap(time, first.time, span, mode),
            }
        } else if time > last.time {
            match self.post_wrap {
                CurveWrapMode::Clamp => return last.value,
                mode => wrap(time, first.time, span, mode),
            }
        } else {
            time
        };
        if time >= last.time {
            return last.value;
        }

        // First key strictly after `time`, kept inside the key range.
        let hi = self
            .keys
            .partition_point(|k| k.time <= time)
            .clamp(1, self.keys.len() - 1);
        hermite(&self.keys[hi - 1], &self.keys[hi], time)
    }
}

/// Fold `time` back into `[start, start + span]`.
fn wrap(time: f32, start: f32, span: f32, mode: CurveWrapMode) -> f32 {
    match mode {
        CurveWrapMode::Clamp => time.clamp(start, start + span),
        CurveWrapMode::Loop => start + (time - start).rem_euclid(span),
        CurveWrapMode::PingPong => {
            let phase = (time - start).rem_euclid(2.0 * span);
            start + if phase > span { 2.0 * span - phase } else { phase }
        }
    }
}

/// Cubic Hermite segment between two keys.
fn hermite(a: &Keyframe, b: &Keyframe, time: f32) -> f32 {
    let dt = b.time - a.time;
    if dt <= 0.0 {
        return b.value;
    }
    if !a.out_tangent.is_finite() || !b.in_tangent.is_finite() {
        return a.value;
    }

    let s = ((time - a.time) / dt).clamp(0.0, 1.0);
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * a.value + h10 * dt * a.out_tangent + h01 * b.value + h11 * dt * b.in_tangent
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_and_single_key() {
        assert_eq!(RemapCurve::default().evaluate(3.0), 0.0);
        let c = RemapCurve::new(vec![Keyframe::new(1.0, 7.0)]);
        assert_eq!(c.evaluate(-5.0), 7.0);
        assert_eq!(c.evaluate(5.0), 7.0);
    }

    #[test]
    fn linear_curve_is_linear() {
        let c = RemapCurve::linear(0.0, 0.0, 4.0, 2.0);
        for i in 0..=8 {
            let t = i as f32 * 0.5;
            assert_relative_eq!(c.evaluate(t), t * 0.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn passes_through_keys() {
        let c = RemapCurve::new(vec![
            Keyframe::with_tangents(0.0, 0.0, 0.0, 3.0),
            Keyframe::with_tangents(1.0, 2.0, -1.0, 0.5),
            Keyframe::with_tangents(3.0, 1.0, 2.0, 0.0),
        ]);
        assert_eq!(c.evaluate(0.0), 0.0);
        assert_relative_eq!(c.evaluate(1.0), 2.0);
        assert_relative_eq!(c.evaluate(3.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_smooth() {
        let c = RemapCurve::ease_in_out(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(c.evaluate(0.5), 0.5);
        // Flat ends: slower than linear near the start.
        assert!(c.evaluate(0.1) < 0.1);
        assert!(c.evaluate(0.9) > 0.9);
    }

    #[test]
    fn clamp_holds_end_values() {
        let c = RemapCurve::linear(0.0, 1.0, 2.0, 3.0);
        assert_eq!(c.evaluate(-10.0), 1.0);
        assert_eq!(c.evaluate(10.0), 3.0);
    }

    #[test]
    fn loop_and_ping_pong() {
        let c = RemapCurve::linear(0.0, 0.0, 1.0, 1.0)
            .with_wrap(CurveWrapMode::PingPong, CurveWrapMode::Loop);
        assert_relative_eq!(c.evaluate(1.25), 0.25, epsilon = 1e-5);
        assert_relative_eq!(c.evaluate(-0.25), 0.25, epsilon = 1e-5);
        assert_relative_eq!(c.evaluate(-1.25), 0.75, epsilon = 1e-5);
    }

    #[test]
    fn stepped_keys_hold_value() {
        let c = RemapCurve::new(vec![Keyframe::stepped(0.0, 0.0), Keyframe::stepped(1.0, 2.0)]);
        assert_eq!(c.evaluate(0.99), 0.0);
        assert_eq!(c.evaluate(1.0), 2.0);
    }

    #[test]
    fn deserialize_with_defaults() {
        let json = r#"{ "keys": [ { "time": 2.0, "value": 1.0 }, { "time": 0.0, "value": 0.0 } ] }"#;
        let c: RemapCurve = serde_json::from_str(json).unwrap();
        assert_eq!(c.keys()[0].time, 0.0);
        assert_eq!(c.pre_wrap(), CurveWrapMode::Clamp);
        assert_eq!(c.time_range(), Some((0.0, 2.0)));
        assert_relative_eq!(c.evaluate(1.0), 0.5);
    }
}
