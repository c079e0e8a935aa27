//! Ramp configuration model.
//!
//! A [`RampBatch`] is the list of ramps one source configuration describes.
//! Each [`RampSpec`] produces one texture named after it.

use rampgen_colormap::{Gradient, RemapCurve};
use rampgen_core::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Smallest allowed texture side
pub const MIN_SIZE: i64 = 1;
/// Largest allowed texture side
pub const MAX_SIZE: i64 = 2048;

/// Target texture size in pixels.
///
/// Signed and 64-bit so that out-of-range sizes from a configuration survive
/// loading and are reported by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampSize {
    #[serde(alias = "x")]
    pub width: i64,
    #[serde(alias = "y")]
    pub height: i64,
}

impl RampSize {
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Both sides within `MIN_SIZE..=MAX_SIZE`
    pub fn is_valid(&self) -> bool {
        (MIN_SIZE..=MAX_SIZE).contains(&self.width) && (MIN_SIZE..=MAX_SIZE).contains(&self.height)
    }

    /// (width, height) as buffer dimensions; negative sides become 0
    pub fn dimensions(&self) -> (usize, usize) {
        (
            usize::try_from(self.width).unwrap_or(0),
            usize::try_from(self.height).unwrap_or(0),
        )
    }
}

impl Default for RampSize {
    fn default() -> Self {
        Self::new(100, 1)
    }
}

/// One ramp texture description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RampSpec {
    /// Output file stem, unique within the batch
    pub name: String,
    /// Gradients stacked bottom to top; a `null` in the configuration loads as empty
    #[serde(deserialize_with = "null_as_empty")]
    pub gradients: Vec<Gradient>,
    /// Maps the vertical scan position onto a gradient index; only read when
    /// more than one gradient is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remap_curve: Option<RemapCurve>,
    pub size: RampSize,
}

impl RampSpec {
    /// Single-gradient ramp
    pub fn new(name: impl Into<String>, gradient: Gradient, size: RampSize) -> Self {
        Self {
            name: name.into(),
            gradients: vec![gradient],
            remap_curve: None,
            size,
        }
    }

    /// Ramp blending several gradients along its height
    pub fn blended(
        name: impl Into<String>,
        gradients: Vec<Gradient>,
        remap_curve: RemapCurve,
        size: RampSize,
    ) -> Self {
        Self {
            name: name.into(),
            gradients,
            remap_curve: Some(remap_curve),
            size,
        }
    }

    /// Whether synthesis blends between stacked gradients
    pub fn is_blended(&self) -> bool {
        self.gradients.len() > 1
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list of ramps loaded from one configuration source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RampBatch {
    #[serde(default)]
    pub ramps: Vec<RampSpec>,
}

impl RampBatch {
    pub fn new(ramps: Vec<RampSpec>) -> Self {
        Self { ramps }
    }

    /// Parse a batch from JSON. The batch is not validated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a batch from a JSON file. The batch is not validated.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }
}
