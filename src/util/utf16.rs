/*!
Decoding and encoding of single UTF-16 sequences (one unit, or a surrogate
pair).
*/

use crate::error::ErrorKind;
use crate::util::{
    is_lead_surrogate, is_surrogate, is_trail_surrogate, is_valid_code_point, replace_invalid,
    LEAD_OFFSET, SURROGATE_OFFSET, TRAIL_SURROGATE_MIN,
};
use crate::Decoded;

/// The longest UTF-16 sequence, in units.
pub const MAX_LEN: usize = 2;

/// Decodes the UTF-16 sequence at the start of `units`.
///
/// A trail surrogate in lead position is an
/// [`InvalidLead`](ErrorKind::InvalidLead). A lead surrogate that is the last
/// unit, or that is not followed by a trail surrogate, is an
/// [`IncompleteSequence`](ErrorKind::IncompleteSequence). Every error consumes
/// exactly one unit (none for empty input).
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn decode(units: &[u16]) -> Decoded {
    let Some(&first) = units.first() else {
        return Decoded::failed(0, ErrorKind::IncompleteSequence);
    };
    if !is_surrogate(first as u32) {
        return Decoded::ok(1, first as u32);
    }
    if !is_lead_surrogate(first) {
        return Decoded::failed(1, ErrorKind::InvalidLead);
    }
    let second = match units.get(1) {
        Some(&second) if is_trail_surrogate(second) => second,
        _ => return Decoded::failed(1, ErrorKind::IncompleteSequence),
    };

    let cp = SURROGATE_OFFSET.wrapping_add((first as u32) << 10).wrapping_add(second as u32);
    if !is_valid_code_point(cp) {
        return Decoded::failed(1, ErrorKind::InvalidCodePoint);
    }
    Decoded::ok(2, cp)
}

/// Encodes `cp` as UTF-16 into `dst` and returns the written prefix.
///
/// Invalid code points are encoded as the replacement character. Code points
/// outside the basic multilingual plane become a surrogate pair.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn encode(cp: u32, dst: &mut [u16; MAX_LEN]) -> &[u16] {
    let cp = replace_invalid(cp);
    if cp < 0x1_0000 {
        dst[0] = cp as u16;
        return &dst[..1];
    }
    dst[0] = (LEAD_OFFSET + (cp >> 10)) as u16;
    dst[1] = TRAIL_SURROGATE_MIN + (cp & 0x3FF) as u16;
    &dst[..2]
}
