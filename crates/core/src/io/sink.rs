//! The asset persistence boundary.

use crate::raster::PixelBuffer;
use std::io;

/// Destination for generated ramp textures.
///
/// Called once per ramp, in batch order, with the ramp name and its pixels.
/// Implementations decide how a buffer is encoded and where it lands.
/// Failures are returned as-is and are never retried by the caller.
///
/// Any `FnMut(&str, &PixelBuffer) -> io::Result<()>` closure is a sink.
pub trait AssetSink {
    fn persist(&mut self, name: &str, buffer: &PixelBuffer) -> io::Result<()>;
}

impl<F> AssetSink for F
where
    F: FnMut(&str, &PixelBuffer) -> io::Result<()>,
{
    fn persist(&mut self, name: &str, buffer: &PixelBuffer) -> io::Result<()> {
        self(name, buffer)
    }
}

/// Keeps persisted buffers in memory, in the order they arrived.
///
/// Useful for dry runs and tests. Persisting a name twice keeps both entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    assets: Vec<(String, PixelBuffer)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persisted assets in arrival order
    pub fn assets(&self) -> &[(String, PixelBuffer)] {
        &self.assets
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.assets.iter().map(|(name, _)| name.as_str())
    }

    /// Most recently persisted buffer with the given name
    pub fn get(&self, name: &str) -> Option<&PixelBuffer> {
        self.assets
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, buffer)| buffer)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn into_assets(self) -> Vec<(String, PixelBuffer)> {
        self.assets
    }
}

impl AssetSink for MemorySink {
    fn persist(&mut self, name: &str, buffer: &PixelBuffer) -> io::Result<()> {
        self.assets.push((name.to_string(), buffer.clone()));
        Ok(())
    }
}
