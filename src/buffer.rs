//! Typed sample buffers at the decode boundary.
//!
//! Uses `imgref::ImgVec` for 2D sample data with typed pixels from the
//! `rgb` crate. A decoder produces whichever [`SampleBuffer`] variant
//! matches the bitstream; [`to_packed`](SampleBuffer::to_packed)
//! applies the [`PackedRgba`] conversion family per pixel to reach the
//! uniform packed representation.

use alloc::vec::Vec;

use imgref::ImgVec;
use rgb::alt::{BGRA, GrayAlpha};
use rgb::{Gray, Rgb, Rgba};

use crate::packed::PackedRgba;

/// Decoded sample data in a typed buffer.
///
/// The variant determines both the channel layout and precision.
/// Width and height are embedded in the `ImgVec`.
#[non_exhaustive]
pub enum SampleBuffer {
    Rgb8(ImgVec<Rgb<u8>>),
    Rgba8(ImgVec<Rgba<u8>>),
    Rgb16(ImgVec<Rgb<u16>>),
    Rgba16(ImgVec<Rgba<u16>>),
    Gray8(ImgVec<Gray<u8>>),
    Gray16(ImgVec<Gray<u16>>),
    GrayAlpha8(ImgVec<GrayAlpha<u8>>),
    GrayAlpha16(ImgVec<GrayAlpha<u16>>),
    /// 8-bit BGRA (blue, green, red, alpha byte order).
    Bgra8(ImgVec<BGRA<u8>>),
}

impl SampleBuffer {
    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            SampleBuffer::Rgb8(img) => img.width() as u32,
            SampleBuffer::Rgba8(img) => img.width() as u32,
            SampleBuffer::Rgb16(img) => img.width() as u32,
            SampleBuffer::Rgba16(img) => img.width() as u32,
            SampleBuffer::Gray8(img) => img.width() as u32,
            SampleBuffer::Gray16(img) => img.width() as u32,
            SampleBuffer::GrayAlpha8(img) => img.width() as u32,
            SampleBuffer::GrayAlpha16(img) => img.width() as u32,
            SampleBuffer::Bgra8(img) => img.width() as u32,
        }
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            SampleBuffer::Rgb8(img) => img.height() as u32,
            SampleBuffer::Rgba8(img) => img.height() as u32,
            SampleBuffer::Rgb16(img) => img.height() as u32,
            SampleBuffer::Rgba16(img) => img.height() as u32,
            SampleBuffer::Gray8(img) => img.height() as u32,
            SampleBuffer::Gray16(img) => img.height() as u32,
            SampleBuffer::GrayAlpha8(img) => img.height() as u32,
            SampleBuffer::GrayAlpha16(img) => img.height() as u32,
            SampleBuffer::Bgra8(img) => img.height() as u32,
        }
    }

    /// Whether the layout carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(
            self,
            SampleBuffer::Rgba8(_)
                | SampleBuffer::Rgba16(_)
                | SampleBuffer::GrayAlpha8(_)
                | SampleBuffer::GrayAlpha16(_)
                | SampleBuffer::Bgra8(_)
        )
    }

    /// Convert to packed pixels, allocating a new buffer.
    ///
    /// Each pixel goes through the matching [`PackedRgba`] narrowing
    /// constructor: 16-bit channels keep their top byte, luminance is
    /// replicated, alpha is forced opaque where the source has none.
    pub fn to_packed(&self) -> ImgVec<PackedRgba> {
        match self {
            SampleBuffer::Rgb8(img) => convert(img, PackedRgba::from_rgb8),
            SampleBuffer::Rgba8(img) => convert(img, PackedRgba::from_rgba8),
            SampleBuffer::Rgb16(img) => convert(img, PackedRgba::from_rgb16),
            SampleBuffer::Rgba16(img) => convert(img, PackedRgba::from_rgba16),
            SampleBuffer::Gray8(img) => convert(img, PackedRgba::from_gray8),
            SampleBuffer::Gray16(img) => convert(img, PackedRgba::from_gray16),
            SampleBuffer::GrayAlpha8(img) => convert(img, PackedRgba::from_gray_alpha8),
            SampleBuffer::GrayAlpha16(img) => convert(img, PackedRgba::from_gray_alpha16),
            SampleBuffer::Bgra8(img) => convert(img, PackedRgba::from_bgra8),
        }
    }

    /// Wrap a packed buffer back into a [`SampleBuffer`].
    ///
    /// Packed pixels unpack losslessly to RGBA8, so the result is
    /// always the [`Rgba8`](SampleBuffer::Rgba8) variant.
    pub fn from_packed(img: ImgVec<PackedRgba>) -> Self {
        let (buf, w, h) = img.as_ref().to_contiguous_buf();
        let rgba: Vec<Rgba<u8>> = buf.iter().map(|p| p.to_rgba8()).collect();
        SampleBuffer::Rgba8(ImgVec::new(rgba, w, h))
    }
}

fn convert<T: Copy>(img: &ImgVec<T>, f: impl Fn(T) -> PackedRgba) -> ImgVec<PackedRgba> {
    let (buf, w, h) = img.as_ref().to_contiguous_buf();
    let packed: Vec<PackedRgba> = buf.iter().map(|p| f(*p)).collect();
    ImgVec::new(packed, w, h)
}

impl core::fmt::Debug for SampleBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let variant = match self {
            SampleBuffer::Rgb8(_) => "Rgb8",
            SampleBuffer::Rgba8(_) => "Rgba8",
            SampleBuffer::Rgb16(_) => "Rgb16",
            SampleBuffer::Rgba16(_) => "Rgba16",
            SampleBuffer::Gray8(_) => "Gray8",
            SampleBuffer::Gray16(_) => "Gray16",
            SampleBuffer::GrayAlpha8(_) => "GrayAlpha8",
            SampleBuffer::GrayAlpha16(_) => "GrayAlpha16",
            SampleBuffer::Bgra8(_) => "Bgra8",
        };
        write!(
            f,
            "SampleBuffer::{}({}x{})",
            variant,
            self.width(),
            self.height()
        )
    }
}
