//! PNG output for generated ramps.
//!
//! Each ramp lands at `<dir>/<name>.png` as 8-bit RGBA. The first time a
//! texture is created an import sidecar `<name>.png.import.json` is written
//! beside it; regenerating an existing texture leaves its sidecar alone.

use crate::io::import::ImportSettings;
use crate::io::sink::AssetSink;
use crate::raster::{PixelBuffer, RowOrder};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Options for [`PngAssetSink`]
#[derive(Debug, Clone)]
pub struct PngSinkOptions {
    /// How buffer rows map onto image rows
    pub row_order: RowOrder,
    /// Settings written next to newly created textures; `None` skips the sidecar
    pub import_settings: Option<ImportSettings>,
}

impl Default for PngSinkOptions {
    fn default() -> Self {
        Self {
            row_order: RowOrder::BottomUp,
            import_settings: Some(ImportSettings::default()),
        }
    }
}

/// Writes each ramp as a PNG file inside one directory.
#[derive(Debug, Clone)]
pub struct PngAssetSink {
    dir: PathBuf,
    options: PngSinkOptions,
}

impl PngAssetSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_options(dir, PngSinkOptions::default())
    }

    pub fn with_options(dir: impl Into<PathBuf>, options: PngSinkOptions) -> Self {
        Self {
            dir: dir.into(),
            options,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/<name>.png`
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }

    /// `<dir>/<name>.png.import.json`
    pub fn sidecar_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png.import.json"))
    }
}

impl AssetSink for PngAssetSink {
    fn persist(&mut self, name: &str, buffer: &PixelBuffer) -> io::Result<()> {
        let path = self.asset_path(name);
        let is_overwrite = path.exists();

        let file = File::create(&path)?;
        write_png(BufWriter::new(file), buffer, self.options.row_order)?;

        if !is_overwrite {
            if let Some(settings) = &self.options.import_settings {
                settings.write_to(self.sidecar_path(name))?;
            }
        }
        Ok(())
    }
}

/// Encode a buffer as an 8-bit RGBA PNG.
pub fn write_png<W: Write>(writer: W, buffer: &PixelBuffer, order: RowOrder) -> io::Result<()> {
    let (width, height) = buffer.dimensions();
    let dims = |v: usize| {
        u32::try_from(v).map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "buffer too large for PNG"))
    };

    let mut encoder = png::Encoder::new(writer, dims(width)?, dims(height)?);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header().map_err(encoding_error)?;
    png_writer
        .write_image_data(&buffer.to_rgba8_top_first(order))
        .map_err(encoding_error)?;
    png_writer.finish().map_err(encoding_error)
}

fn encoding_error(err: png::EncodingError) -> io::Error {
    match err {
        png::EncodingError::IoError(err) => err,
        other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn decode(path: &Path) -> (u32, u32, Vec<u8>) {
        let decoder = png::Decoder::new(File::open(path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info.width, info.height, buf)
    }

    fn two_row_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::filled(2, 2, Rgba::BLACK);
        buffer.set(0, 0, Rgba::WHITE).unwrap();
        buffer.set(1, 0, Rgba::WHITE).unwrap();
        buffer
    }

    #[test]
    fn writes_named_png_bottom_up() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = PngAssetSink::new(dir.path());
        sink.persist("toon", &two_row_buffer()).unwrap();

        let (w, h, bytes) = decode(&dir.path().join("toon.png"));
        assert_eq!((w, h), (2, 2));
        // Buffer row 0 (white) is the bottom image row.
        assert_eq!(&bytes[..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[8..12], &[255, 255, 255, 255]);
    }

    #[test]
    fn top_down_keeps_row_order() {
        let dir = tempfile::tempdir().unwrap();
        let options = PngSinkOptions {
            row_order: RowOrder::TopDown,
            import_settings: None,
        };
        let mut sink = PngAssetSink::with_options(dir.path(), options);
        sink.persist("toon", &two_row_buffer()).unwrap();

        let (_, _, bytes) = decode(&dir.path().join("toon.png"));
        assert_eq!(&bytes[..4], &[255, 255, 255, 255]);
        assert!(!sink.sidecar_path("toon").exists());
    }

    #[test]
    fn sidecar_written_only_for_new_textures() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = PngAssetSink::new(dir.path());
        let sidecar = sink.sidecar_path("toon");

        sink.persist("toon", &two_row_buffer()).unwrap();
        assert_eq!(ImportSettings::read_from(&sidecar).unwrap(), ImportSettings::default());

        std::fs::remove_file(&sidecar).unwrap();
        sink.persist("toon", &two_row_buffer()).unwrap();
        assert!(!sidecar.exists());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = PngAssetSink::new(dir.path().join("missing"));
        let err = sink.persist("toon", &two_row_buffer()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
