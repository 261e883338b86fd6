//! Decoder configuration and the color-profile disposition policy.
//!
//! [`DecoderOptions`] is constructed once per decode call with the
//! `with_*` builders and is immutable from then on, so a single value
//! can be shared read-only across concurrent decodes. The two
//! `resolve_*` functions are the whole profile state machine: pure,
//! total decisions over the closed [`ColorProfileHandling`] enum — a
//! new variant left unhandled is a compile error.

use crate::profile::{ProfileClassification, classify_profile};
use crate::rect::Size;

/// Named resampling kernels a decoder may pre-scale with.
///
/// Identifiers only — the convolution itself lives in the resampler
/// collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sampler {
    /// Box filter (area average). The default.
    #[default]
    Box,
    /// Nearest-neighbor point sampling.
    NearestNeighbor,
    /// Triangle (bilinear) filter.
    Triangle,
    /// Catmull-Rom cubic filter.
    CatmullRom,
    /// Lanczos windowed sinc, radius 3.
    Lanczos3,
}

/// How a decoder treats recoverable bitstream damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SegmentIntegrityHandling {
    /// Ignore errors in non-critical segments and keep decoding.
    #[default]
    IgnoreNonCritical,
    /// Any segment error fails the decode.
    Strict,
}

/// What to do with an embedded ICC profile during decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorProfileHandling {
    /// Keep pixels and profile exactly as decoded.
    #[default]
    Preserve,
    /// Convert pixels to the working color space and drop the
    /// now-redundant profile.
    Convert,
    /// Drop only demonstrably-redundant sRGB profiles. Non-standard
    /// profiles are preserved while their pixels are converted.
    Compact,
}

/// Verdict of [`DecoderOptions::resolve_conversion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileConversion {
    /// Leave pixel values in the authored color space.
    Keep,
    /// Convert pixel values to the working color space.
    Convert,
}

/// Verdict of [`DecoderOptions::resolve_removal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileRemoval {
    /// Keep the embedded profile in the decoded metadata.
    Keep,
    /// Drop the embedded profile from the decoded metadata.
    Remove,
}

/// Per-decode configuration.
///
/// Construct with [`Default`] and the consuming `with_*` builders:
///
/// ```
/// use rasterbits::{ColorProfileHandling, DecoderOptions, Size};
///
/// let options = DecoderOptions::default()
///     .with_target_size(Size::new(320, 240))
///     .with_max_frames(16)
///     .with_color_profile_handling(ColorProfileHandling::Compact);
/// assert_eq!(options.max_frames(), 16);
/// ```
///
/// Fields are read through accessors and never change after
/// construction. The one escape hatch, [`replace`](DecoderOptions::replace),
/// takes `&mut self`, so swapping a shared instance requires exclusive
/// access and cannot race concurrent readers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderOptions {
    target_size: Option<Size>,
    sampler: Sampler,
    skip_metadata: bool,
    max_frames: u32,
    segment_integrity: SegmentIntegrityHandling,
    color_profile_handling: ColorProfileHandling,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            target_size: None,
            sampler: Sampler::default(),
            skip_metadata: false,
            max_frames: u32::MAX,
            segment_integrity: SegmentIntegrityHandling::default(),
            color_profile_handling: ColorProfileHandling::default(),
        }
    }
}

impl DecoderOptions {
    /// Request a pre-scaled decode toward the given size.
    pub fn with_target_size(mut self, size: Size) -> Self {
        self.target_size = Some(size);
        self
    }

    /// Set the resampling kernel used when a target size is set.
    pub fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Skip decoding of ancillary metadata (EXIF, XMP, comments).
    pub fn with_skip_metadata(mut self, skip: bool) -> Self {
        self.skip_metadata = skip;
        self
    }

    /// Cap the number of decoded animation frames.
    ///
    /// The value is clamped into `[1, u32::MAX]`: a request of 0 is
    /// silently raised to 1, never rejected.
    pub fn with_max_frames(mut self, frames: u32) -> Self {
        self.max_frames = frames.max(1);
        self
    }

    /// Set how bitstream damage is handled.
    pub fn with_segment_integrity(mut self, handling: SegmentIntegrityHandling) -> Self {
        self.segment_integrity = handling;
        self
    }

    /// Set the embedded color profile policy.
    pub fn with_color_profile_handling(mut self, handling: ColorProfileHandling) -> Self {
        self.color_profile_handling = handling;
        self
    }

    /// Requested target size, if any.
    pub fn target_size(&self) -> Option<Size> {
        self.target_size
    }

    /// The resampling kernel.
    pub fn sampler(&self) -> Sampler {
        self.sampler
    }

    /// Whether ancillary metadata decoding is skipped.
    pub fn skip_metadata(&self) -> bool {
        self.skip_metadata
    }

    /// The frame cap, always at least 1.
    pub fn max_frames(&self) -> u32 {
        self.max_frames
    }

    /// How bitstream damage is handled.
    pub fn segment_integrity(&self) -> SegmentIntegrityHandling {
        self.segment_integrity
    }

    /// The embedded color profile policy.
    pub fn color_profile_handling(&self) -> ColorProfileHandling {
        self.color_profile_handling
    }

    /// Swap this instance for another configuration.
    ///
    /// Escape hatch for test harnesses that own a shared options value.
    /// Requires `&mut self`; not for concurrent production use.
    pub fn replace(&mut self, other: Self) {
        *self = other;
    }

    // --- Geometry resolution ---

    /// The size the decode should produce: the requested target when
    /// present, otherwise the source size. The resampler receives
    /// `effective_size(source).bounds()`.
    pub fn effective_size(&self, source: Size) -> Size {
        self.target_size.unwrap_or(source)
    }

    // --- Profile disposition ---

    /// Whether pixel values should be converted to the working color
    /// space.
    ///
    /// No profile means nothing to convert from; a likely-sRGB profile
    /// already matches the working space; `Preserve` never converts.
    /// Only a non-sRGB profile under `Convert` or `Compact` converts.
    pub fn resolve_conversion(&self, profile: Option<&[u8]>) -> ProfileConversion {
        let Some(profile) = profile else {
            return ProfileConversion::Keep;
        };
        match (classify_profile(profile), self.color_profile_handling) {
            (ProfileClassification::LikelySrgb, _) => ProfileConversion::Keep,
            (ProfileClassification::Other, ColorProfileHandling::Preserve) => {
                ProfileConversion::Keep
            }
            (
                ProfileClassification::Other,
                ColorProfileHandling::Convert | ColorProfileHandling::Compact,
            ) => ProfileConversion::Convert,
        }
    }

    /// Whether the embedded profile should be dropped from the decoded
    /// metadata.
    ///
    /// `Convert` always removes (the profile is redundant after
    /// conversion); `Compact` removes only demonstrably-redundant sRGB
    /// profiles; `Preserve` never removes.
    pub fn resolve_removal(&self, profile: Option<&[u8]>) -> ProfileRemoval {
        let Some(profile) = profile else {
            return ProfileRemoval::Keep;
        };
        match (self.color_profile_handling, classify_profile(profile)) {
            (ColorProfileHandling::Preserve, _) => ProfileRemoval::Keep,
            (ColorProfileHandling::Convert, _) => ProfileRemoval::Remove,
            (ColorProfileHandling::Compact, ProfileClassification::LikelySrgb) => {
                ProfileRemoval::Remove
            }
            (ColorProfileHandling::Compact, ProfileClassification::Other) => ProfileRemoval::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::testutil::{srgb_profile, wide_gamut_profile};
    use crate::rect::Rect;

    #[test]
    fn defaults() {
        let options = DecoderOptions::default();
        assert!(options.target_size().is_none());
        assert_eq!(options.sampler(), Sampler::Box);
        assert!(!options.skip_metadata());
        assert_eq!(options.max_frames(), u32::MAX);
        assert_eq!(
            options.segment_integrity(),
            SegmentIntegrityHandling::IgnoreNonCritical
        );
        assert_eq!(
            options.color_profile_handling(),
            ColorProfileHandling::Preserve
        );
    }

    #[test]
    fn builders_set_fields() {
        let options = DecoderOptions::default()
            .with_target_size(Size::new(320, 240))
            .with_sampler(Sampler::Lanczos3)
            .with_skip_metadata(true)
            .with_segment_integrity(SegmentIntegrityHandling::Strict)
            .with_color_profile_handling(ColorProfileHandling::Convert);
        assert_eq!(options.target_size(), Some(Size::new(320, 240)));
        assert_eq!(options.sampler(), Sampler::Lanczos3);
        assert!(options.skip_metadata());
        assert_eq!(options.segment_integrity(), SegmentIntegrityHandling::Strict);
        assert_eq!(
            options.color_profile_handling(),
            ColorProfileHandling::Convert
        );
    }

    #[test]
    fn max_frames_clamps_to_at_least_one() {
        assert_eq!(DecoderOptions::default().with_max_frames(0).max_frames(), 1);
        assert_eq!(DecoderOptions::default().with_max_frames(1).max_frames(), 1);
        assert_eq!(
            DecoderOptions::default().with_max_frames(500).max_frames(),
            500
        );
        assert_eq!(
            DecoderOptions::default()
                .with_max_frames(u32::MAX)
                .max_frames(),
            u32::MAX
        );
    }

    #[test]
    fn replace_requires_exclusive_access() {
        let mut options = DecoderOptions::default();
        options.replace(DecoderOptions::default().with_max_frames(3));
        assert_eq!(options.max_frames(), 3);
    }

    #[test]
    fn effective_size_prefers_target() {
        let source = Size::new(4000, 3000);
        let options = DecoderOptions::default();
        assert_eq!(options.effective_size(source), source);

        let options = options.with_target_size(Size::new(400, 300));
        assert_eq!(options.effective_size(source), Size::new(400, 300));
        assert_eq!(
            options.effective_size(source).bounds(),
            Rect::new(0, 0, 400, 300)
        );
    }

    // --- Profile policy table ---

    #[test]
    fn absent_profile_needs_nothing() {
        for handling in [
            ColorProfileHandling::Preserve,
            ColorProfileHandling::Convert,
            ColorProfileHandling::Compact,
        ] {
            let options = DecoderOptions::default().with_color_profile_handling(handling);
            assert_eq!(options.resolve_conversion(None), ProfileConversion::Keep);
            assert_eq!(options.resolve_removal(None), ProfileRemoval::Keep);
        }
    }

    #[test]
    fn preserve_never_converts_or_removes() {
        let options = DecoderOptions::default()
            .with_color_profile_handling(ColorProfileHandling::Preserve);
        for profile in [srgb_profile(), wide_gamut_profile()] {
            assert_eq!(
                options.resolve_conversion(Some(&profile)),
                ProfileConversion::Keep
            );
            assert_eq!(
                options.resolve_removal(Some(&profile)),
                ProfileRemoval::Keep
            );
        }
    }

    #[test]
    fn convert_converts_non_srgb_and_always_removes() {
        let options =
            DecoderOptions::default().with_color_profile_handling(ColorProfileHandling::Convert);
        let wide = wide_gamut_profile();
        assert_eq!(
            options.resolve_conversion(Some(&wide)),
            ProfileConversion::Convert
        );
        assert_eq!(options.resolve_removal(Some(&wide)), ProfileRemoval::Remove);

        // Already-sRGB pixels need no conversion, but the redundant
        // profile still goes.
        let srgb = srgb_profile();
        assert_eq!(
            options.resolve_conversion(Some(&srgb)),
            ProfileConversion::Keep
        );
        assert_eq!(options.resolve_removal(Some(&srgb)), ProfileRemoval::Remove);
    }

    #[test]
    fn compact_removes_only_redundant_srgb() {
        let options =
            DecoderOptions::default().with_color_profile_handling(ColorProfileHandling::Compact);
        let srgb = srgb_profile();
        assert_eq!(
            options.resolve_conversion(Some(&srgb)),
            ProfileConversion::Keep
        );
        assert_eq!(options.resolve_removal(Some(&srgb)), ProfileRemoval::Remove);

        let wide = wide_gamut_profile();
        assert_eq!(
            options.resolve_conversion(Some(&wide)),
            ProfileConversion::Convert
        );
        assert_eq!(options.resolve_removal(Some(&wide)), ProfileRemoval::Keep);
    }
}
