//! Main PixelBuffer type

use crate::color::Rgba;
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut2};

/// Order in which buffer rows map onto image rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Row 0 is the bottom of the image (texture-space origin bottom-left).
    #[default]
    BottomUp,
    /// Row 0 is the top of the image.
    TopDown,
}

/// A dense `width x height` grid of RGBA pixels.
///
/// Pixels are stored row-major without padding, indexed as `(x, y)` with
/// `y` selecting the row. Row 0 is the bottom row of the texture.
///
/// # Example
///
/// ```ignore
/// use rampgen_core::{PixelBuffer, Rgba};
///
/// let mut buffer = PixelBuffer::new(4, 2);
/// buffer.set(3, 1, Rgba::WHITE)?;
/// assert_eq!(buffer.get(3, 1), Some(Rgba::WHITE));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Pixel data stored as (row, col)
    data: Array2<Rgba>,
}

impl PixelBuffer {
    /// Create a new buffer filled with transparent black
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a new buffer filled with a specific color
    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        Self {
            data: Array2::from_elem((height, width), color),
        }
    }

    /// Create a buffer from row-major pixel data
    pub fn from_vec(pixels: Vec<Rgba>, width: usize, height: usize) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(Error::InvalidDimensions { width, height });
        }

        let data = Array2::from_shape_vec((height, width), pixels)
            .map_err(|_| Error::InvalidDimensions { width, height })?;

        Ok(Self { data })
    }

    /// Create a buffer from an ndarray of shape `(height, width)`
    pub fn from_array(data: Array2<Rgba>) -> Self {
        Self { data }
    }

    // Dimensions

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Pixel at column `x` of row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        self.data.get((y, x)).copied()
    }

    /// Set the pixel at column `x` of row `y`
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) -> Result<()> {
        match self.data.get_mut((y, x)) {
            Some(px) => {
                *px = color;
                Ok(())
            }
            None => Err(Error::InvalidParameter {
                name: "pixel",
                value: format!("({x}, {y})"),
                reason: format!("outside {}x{} buffer", self.width(), self.height()),
            }),
        }
    }

    /// One row of pixels
    pub fn row(&self, y: usize) -> Option<ArrayView1<'_, Rgba>> {
        (y < self.height()).then(|| self.data.row(y))
    }

    /// Iterate over all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = &Rgba> + '_ {
        self.data.iter()
    }

    pub fn view(&self) -> ArrayView2<'_, Rgba> {
        self.data.view()
    }

    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, Rgba> {
        self.data.view_mut()
    }

    pub fn data(&self) -> &Array2<Rgba> {
        &self.data
    }

    /// Consume the buffer and return the underlying array
    pub fn into_array(self) -> Array2<Rgba> {
        self.data
    }

    // Conversion

    /// Quantized 8-bit RGBA bytes, `width * height * 4` long, row 0 first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.to_rgba8()).collect()
    }

    /// Quantized 8-bit RGBA bytes with the top image row first.
    ///
    /// With [`RowOrder::BottomUp`] the last buffer row comes first, which is
    /// the order image formats such as PNG expect.
    pub fn to_rgba8_top_first(&self, order: RowOrder) -> Vec<u8> {
        match order {
            RowOrder::TopDown => self.to_rgba8(),
            RowOrder::BottomUp => self
                .data
                .outer_iter()
                .rev()
                .flat_map(|row| row.into_iter().flat_map(|px| px.to_rgba8()))
                .collect(),
        }
    }
}
