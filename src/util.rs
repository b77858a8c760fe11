/*!
Primitive tests on code units and code points shared by all three encoding
forms.

Nothing in here decodes anything. These are the classification routines the
decoders in [`utf8`], [`utf16`] and [`utf32`] are built from.
*/

pub mod utf16;
pub mod utf32;
pub mod utf8;
#[cfg(test)]
mod tests;

/// The code point substituted for anything that fails to decode or that is
/// not a valid code point when it reaches an encoder.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// The largest valid Unicode code point.
pub const CODE_POINT_MAX: u32 = 0x10_FFFF;

// Leading (high) surrogates: d800 - dbff
// Trailing (low) surrogates: dc00 - dfff
pub const LEAD_SURROGATE_MIN: u16 = 0xD800;
pub const LEAD_SURROGATE_MAX: u16 = 0xDBFF;
pub const TRAIL_SURROGATE_MIN: u16 = 0xDC00;
pub const TRAIL_SURROGATE_MAX: u16 = 0xDFFF;

/// `LEAD_SURROGATE_MIN - (0x10000 >> 10)`
pub(crate) const LEAD_OFFSET: u32 = 0xD7C0;
/// `0x10000 - (LEAD_SURROGATE_MIN << 10) - TRAIL_SURROGATE_MIN`, wrapping.
pub(crate) const SURROGATE_OFFSET: u32 = 0x1_0000u32
    .wrapping_sub((LEAD_SURROGATE_MIN as u32) << 10)
    .wrapping_sub(TRAIL_SURROGATE_MIN as u32);

/// Returns true if and only if `byte` is a UTF-8 continuation byte, i.e. its
/// two most significant bits are `10`.
///
/// Only testing `byte > 0x7F` is not enough: lead bytes of multi byte
/// sequences (`0xC0..=0xFF`) would be accepted as continuations.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_trail_unit(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_lead_surrogate(unit: u16) -> bool {
    unit >= LEAD_SURROGATE_MIN && unit <= LEAD_SURROGATE_MAX
}

#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_trail_surrogate(unit: u16) -> bool {
    unit >= TRAIL_SURROGATE_MIN && unit <= TRAIL_SURROGATE_MAX
}

/// Returns true if `cp` falls anywhere in the surrogate band
/// `0xD800..=0xDFFF`.
///
/// This takes a `u32` so that it can be used both on 16-bit units (widened)
/// and on decoded code points.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_surrogate(cp: u32) -> bool {
    cp >= LEAD_SURROGATE_MIN as u32 && cp <= TRAIL_SURROGATE_MAX as u32
}

/// Returns true if and only if `cp` is a Unicode scalar value: at most
/// [`CODE_POINT_MAX`] and not a surrogate.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_valid_code_point(cp: u32) -> bool {
    cp <= CODE_POINT_MAX && !is_surrogate(cp)
}

/// Returns `cp` if it is valid, and [`REPLACEMENT_CHARACTER`] otherwise.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) const fn replace_invalid(cp: u32) -> u32 {
    if is_valid_code_point(cp) {
        cp
    } else {
        REPLACEMENT_CHARACTER
    }
}

/// Returns true if `len` UTF-8 code units are more than the minimum needed
/// to encode `cp`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_overlong(cp: u32, len: usize) -> bool {
    if cp < 0x80 {
        len != 1
    } else if cp < 0x800 {
        len != 2
    } else if cp < 0x1_0000 {
        len != 3
    } else {
        false
    }
}

/// Given a UTF-8 leading byte, this returns the total number of code units
/// in the sequence it starts.
///
/// Returns `0` if the byte can not start a sequence at all.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn sequence_len_utf8(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if lead >> 5 == 0b110 {
        2
    } else if lead >> 4 == 0b1110 {
        3
    } else if lead >> 3 == 0b1_1110 {
        4
    } else {
        0
    }
}

/// Returns the number of UTF-16 code units in the sequence started by `unit`:
/// two for any surrogate, one otherwise.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn sequence_len_utf16(unit: u16) -> usize {
    if is_surrogate(unit as u32) {
        2
    } else {
        1
    }
}
