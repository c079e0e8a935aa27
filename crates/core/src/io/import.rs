//! Import hints for the host asset pipeline.
//!
//! A ramp texture must be sampled clamped, at its authored size, without
//! mipmaps or lossy compression. These settings travel next to each new
//! texture as a JSON sidecar.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Texture addressing outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    #[default]
    Clamp,
    Repeat,
    Mirror,
}

/// Rescaling of non-power-of-two textures on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpotScale {
    #[default]
    None,
    ToNearest,
    ToLarger,
    ToSmaller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureCompression {
    #[default]
    Uncompressed,
    Compressed,
}

/// Import settings attached to a generated ramp texture.
///
/// The default is what ramps require: clamped, unscaled, no mipmaps,
/// uncompressed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub wrap_mode: WrapMode,
    pub npot_scale: NpotScale,
    pub mipmaps: bool,
    pub compression: TextureCompression,
}

impl ImportSettings {
    /// Write the settings as pretty-printed JSON.
    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(serde_json::from_reader(reader)?)
    }
}
