//! ICC color profile classification.
//!
//! Decoders hand embedded profile bytes to [`classify_profile`], which
//! answers one question cheaply: is this profile effectively the
//! standard sRGB profile? The answer drives the
//! [`ColorProfileHandling`](crate::ColorProfileHandling) policy — a
//! redundant sRGB profile can be dropped, a non-standard one must be
//! preserved or converted.
//!
//! This is header inspection, not an ICC transform: only the 128-byte
//! header and the profile description tag are examined. See ICC.1:2022
//! section 7.2 for the header layout.

/// Profile file signature, `acsp`.
const PROFILE_SIGNATURE: u32 = u32::from_be_bytes(*b"acsp");

/// `RGB ` data color space signature.
const RGB_SPACE: u32 = u32::from_be_bytes(*b"RGB ");

/// `XYZ ` profile connection space signature.
const XYZ_PCS: u32 = u32::from_be_bytes(*b"XYZ ");

/// `desc` tag signature (profile description).
const DESC_TAG: u32 = u32::from_be_bytes(*b"desc");

/// The header is exactly 128 bytes; the tag table follows it.
const HEADER_LEN: usize = 128;

/// Upper bound on tag-table entries a well-formed profile would carry.
const MAX_TAG_COUNT: usize = 1024;

/// Cheap two-way verdict on an embedded ICC profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileClassification {
    /// The profile is effectively the standard sRGB profile.
    LikelySrgb,
    /// Anything else: non-RGB, truncated, or an unrecognized RGB space.
    Other,
}

impl ProfileClassification {
    /// Whether the verdict is [`LikelySrgb`](ProfileClassification::LikelySrgb).
    #[inline]
    pub const fn is_likely_srgb(self) -> bool {
        matches!(self, Self::LikelySrgb)
    }
}

/// Classify raw ICC profile bytes.
///
/// A profile is [`LikelySrgb`](ProfileClassification::LikelySrgb) iff it
/// carries a well-formed `acsp` header declaring `RGB ` data in an
/// `XYZ ` connection space, and its description tag mentions `sRGB`
/// (ASCII, case-insensitive). Everything else — truncated data, wrong
/// signature, other color spaces, a missing or non-matching description
/// — is [`Other`](ProfileClassification::Other). Total; never fails.
pub fn classify_profile(data: &[u8]) -> ProfileClassification {
    if has_rgb_header(data) && description_mentions_srgb(data) {
        ProfileClassification::LikelySrgb
    } else {
        ProfileClassification::Other
    }
}

fn has_rgb_header(data: &[u8]) -> bool {
    data.len() >= HEADER_LEN
        && read_u32_be(data, 36) == Some(PROFILE_SIGNATURE)
        && read_u32_be(data, 16) == Some(RGB_SPACE)
        && read_u32_be(data, 20) == Some(XYZ_PCS)
}

fn description_mentions_srgb(data: &[u8]) -> bool {
    match desc_tag_body(data) {
        Some(body) => body.windows(4).any(|w| w.eq_ignore_ascii_case(b"srgb")),
        None => false,
    }
}

/// Locate the `desc` tag via the tag table and return its data.
fn desc_tag_body(data: &[u8]) -> Option<&[u8]> {
    let count = read_u32_be(data, HEADER_LEN)? as usize;
    if count > MAX_TAG_COUNT {
        return None;
    }
    for i in 0..count {
        let entry = HEADER_LEN + 4 + i * 12;
        if read_u32_be(data, entry)? == DESC_TAG {
            let offset = read_u32_be(data, entry + 4)? as usize;
            let size = read_u32_be(data, entry + 8)? as usize;
            return data.get(offset..offset.checked_add(size)?);
        }
    }
    None
}

fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
pub(crate) mod testutil {
    use alloc::vec::Vec;

    /// Build a minimal well-formed RGB profile whose `desc` tag carries
    /// the given text.
    pub(crate) fn rgb_profile_with_description(description: &str) -> Vec<u8> {
        let desc_offset = 128 + 4 + 12;
        let mut data = alloc::vec![0u8; desc_offset + description.len()];
        data[16..20].copy_from_slice(b"RGB ");
        data[20..24].copy_from_slice(b"XYZ ");
        data[36..40].copy_from_slice(b"acsp");
        // Tag table: one entry.
        data[128..132].copy_from_slice(&1u32.to_be_bytes());
        data[132..136].copy_from_slice(b"desc");
        data[136..140].copy_from_slice(&(desc_offset as u32).to_be_bytes());
        data[140..144].copy_from_slice(&(description.len() as u32).to_be_bytes());
        data[desc_offset..].copy_from_slice(description.as_bytes());
        let size = data.len() as u32;
        data[0..4].copy_from_slice(&size.to_be_bytes());
        data
    }

    /// A profile that classifies as likely-sRGB.
    pub(crate) fn srgb_profile() -> Vec<u8> {
        rgb_profile_with_description("sRGB IEC61966-2.1")
    }

    /// A well-formed RGB profile that does not classify as sRGB.
    pub(crate) fn wide_gamut_profile() -> Vec<u8> {
        rgb_profile_with_description("Display P3")
    }
}
