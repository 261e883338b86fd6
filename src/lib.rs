//! Packed pixel, region, and decode policy types for raster image codecs.
//!
//! This crate defines the value types a decoder and its collaborators
//! share:
//!
//! - [`PackedRgba`] — normalized ⇄ packed 8-bit pixel conversion, layout
//!   narrowing conversions, and the hex text codec
//! - [`Rect`] / [`RectF`] / [`Size`] — axis-aligned region algebra
//! - [`DecoderOptions`] — per-decode configuration and the ICC profile
//!   disposition policy
//! - [`SampleBuffer`] — typed sample buffers over `imgref::ImgVec`
//!
//! A decoder asks [`DecoderOptions`] what to do with each embedded
//! profile it encounters ([`resolve_conversion`](DecoderOptions::resolve_conversion),
//! [`resolve_removal`](DecoderOptions::resolve_removal)) and what
//! geometry to produce ([`effective_size`](DecoderOptions::effective_size));
//! decoded samples cross into the packed representation at the buffer
//! boundary. Everything here is a pure value transformation — no I/O,
//! no blocking, no shared mutable state — so all types are safe to use
//! from any number of threads.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod options;
mod packed;
mod profile;
mod rect;

pub use buffer::SampleBuffer;
pub use options::{
    ColorProfileHandling, DecoderOptions, ProfileConversion, ProfileRemoval, Sampler,
    SegmentIntegrityHandling,
};
pub use packed::{PackedRgba, ParseColorError};
pub use profile::{ProfileClassification, classify_profile};
pub use rect::{Rect, RectF, Size};

// Re-exports for codec implementors and users.
pub use imgref::{Img, ImgRef, ImgRefMut, ImgVec};
pub use rgb;
pub use rgb::alt::BGRA as Bgra;
pub use rgb::alt::GrayAlpha;
pub use rgb::{Gray, Rgb, Rgba};
