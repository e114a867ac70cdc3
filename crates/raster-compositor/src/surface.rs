//! [`Surface`]: an owned, caller-sized pixel buffer.
//!
//! Surfaces are external, caller-owned memory that the compositor borrows
//! strides out of; no concrete `Surface` type is required by the core
//! compositing contract. This one exists to make
//! [`crate::surface_compositor`] usable and testable without every caller
//! hand-rolling a `Vec<u8>` and a row-stride calculation. It is
//! deliberately a plain concrete struct rather than a generic,
//! color-space-typed image container, since this codebase's
//! `Pixel`/`Stride` types are already non-generic (see `DESIGN.md`).

use raster_core::{Pixel, Rect, StrideFormat, StrideMut, StrideView};

use crate::error::{Error, Result};

/// An owned 2D pixel buffer in one [`StrideFormat`], row-major, top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    format: StrideFormat,
    width: u32,
    height: u32,
    row_bytes: usize,
    data: Vec<u8>,
}

impl Surface {
    /// Allocates a zero-filled surface (transparent black for alpha-bearing
    /// formats).
    pub fn new(format: StrideFormat, width: u32, height: u32) -> Self {
        let row_bytes = row_bytes(format, width);
        Self { format, width, height, row_bytes, data: vec![0u8; row_bytes * height as usize] }
    }

    /// Wraps caller-supplied pixel data, validating its length matches
    /// `format`/`width`/`height` exactly (a constructor boundary
    /// validation, not a precondition violation).
    pub fn from_data(format: StrideFormat, width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let row_bytes = row_bytes(format, width);
        let expected = row_bytes * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch { width, height, format, expected, actual: data.len() });
        }
        Ok(Self { format, width, height, row_bytes, data })
    }

    /// This surface's pixel format.
    #[inline]
    pub fn format(&self) -> StrideFormat {
        self.format
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// This surface's bounds as a [`Rect`] at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Bytes occupied by one scanline.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// Raw backing bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Raw backing bytes, mutable. Used by the `parallel` surface-compositor
    /// path to hand out disjoint per-scanline chunks to a rayon thread pool.
    #[cfg(feature = "parallel")]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn scanline(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_bytes;
        &self.data[start..start + self.row_bytes]
    }

    fn scanline_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.row_bytes;
        &mut self.data[start..start + self.row_bytes]
    }

    /// Builds a read-only stride over row `y`, columns `[x, x + len)`,
    /// clipped per the stride constructor contract.
    pub fn stride_view(&self, x: u32, y: u32, len: u32) -> StrideView<'_> {
        if y >= self.height {
            return StrideView::empty(self.format);
        }
        StrideView::new(self.format, self.scanline(y), self.width, x, len)
    }

    /// Builds a mutable stride over row `y`, columns `[x, x + len)`.
    pub fn stride_mut(&mut self, x: u32, y: u32, len: u32) -> StrideMut<'_> {
        if y >= self.height {
            return StrideMut::new(self.format, &mut [], 0, 0, 0);
        }
        let width = self.width;
        StrideMut::new(self.format, self.scanline_mut(y), width, x, len)
    }

    /// Reads the pixel at `(x, y)`. Out-of-bounds coordinates read as
    /// transparent black (out-of-range coordinates are empty strides,
    /// not an error).
    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        let stride = self.stride_view(x, y, 1);
        if stride.is_empty() {
            return Pixel::TRANSPARENT_BLACK;
        }
        stride.get(0)
    }

    /// Writes `pixel` at `(x, y)`. No-op if `(x, y)` is out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let mut stride = self.stride_mut(x, y, 1);
        if !stride.is_empty() {
            stride.set(0, pixel);
        }
    }
}

/// Bytes needed for one scanline of `width` pixels in `format`, MSB-first
/// packing for sub-byte formats.
fn row_bytes(format: StrideFormat, width: u32) -> usize {
    let width = width as usize;
    if format.is_packed() {
        let bpp = format.bits_per_pixel() as usize;
        (width * bpp).div_ceil(8)
    } else {
        width * (format.bits_per_pixel() as usize / 8)
    }
}
