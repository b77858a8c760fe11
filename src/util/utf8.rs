/*!
Decoding and encoding of single UTF-8 sequences.
*/

use crate::error::ErrorKind;
use crate::util::{
    is_overlong, is_trail_unit, is_valid_code_point, replace_invalid, sequence_len_utf8,
};
use crate::Decoded;

/// The longest UTF-8 sequence, in bytes.
pub const MAX_LEN: usize = 4;

/// Decodes the UTF-8 sequence at the start of `bytes`.
///
/// On failure the returned code point is the replacement character and
/// `consumed` is `1` (or `0` for empty input), so that a caller can skip the
/// offending byte and try again.
///
/// Checks are done in this order:
///
/// * an empty slice is an [`IncompleteSequence`](ErrorKind::IncompleteSequence)
///   of length zero,
/// * a byte that can not start a sequence is an
///   [`InvalidLead`](ErrorKind::InvalidLead),
/// * a truncated sequence, or one with a byte that is not a continuation in a
///   trailing position, is an `IncompleteSequence`,
/// * a surrogate or a value above `U+10FFFF` is an
///   [`InvalidCodePoint`](ErrorKind::InvalidCodePoint),
/// * a value encoded in more bytes than needed is an
///   [`OverlongSequence`](ErrorKind::OverlongSequence).
///
/// This never panics.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn decode(bytes: &[u8]) -> Decoded {
    let Some(&lead) = bytes.first() else {
        return Decoded::failed(0, ErrorKind::IncompleteSequence);
    };
    let len = match sequence_len_utf8(lead) {
        0 => return Decoded::failed(1, ErrorKind::InvalidLead),
        // ASCII, nothing left to check
        1 => return Decoded::ok(1, lead as u32),
        len => len,
    };
    let Some(seq) = bytes.get(..len) else {
        return Decoded::failed(1, ErrorKind::IncompleteSequence);
    };
    if !seq[1..].iter().all(|&b| is_trail_unit(b)) {
        return Decoded::failed(1, ErrorKind::IncompleteSequence);
    }

    let lead = lead as u32;
    let cp = match *seq {
        [_, b1] => ((lead << 6) & 0x7FF) + (b1 as u32 & 0x3F),
        [_, b1, b2] => ((lead << 12) & 0xFFFF) + ((b1 as u32 & 0x3F) << 6) + (b2 as u32 & 0x3F),
        [_, b1, b2, b3] => {
            ((lead << 18) & 0x1F_FFFF)
                + ((b1 as u32 & 0x3F) << 12)
                + ((b2 as u32 & 0x3F) << 6)
                + (b3 as u32 & 0x3F)
        }
        _ => unreachable!("UTF-8 sequence length is always 2, 3 or 4 here"),
    };

    if !is_valid_code_point(cp) {
        return Decoded::failed(1, ErrorKind::InvalidCodePoint);
    }
    if is_overlong(cp, len) {
        return Decoded::failed(1, ErrorKind::OverlongSequence);
    }
    Decoded::ok(len, cp)
}

/// Encodes `cp` as UTF-8 into `dst` and returns the written prefix.
///
/// Invalid code points are encoded as the replacement character, so this
/// never fails.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn encode(cp: u32, dst: &mut [u8; MAX_LEN]) -> &[u8] {
    let cp = replace_invalid(cp);
    let len = if cp < 0x80 {
        dst[0] = cp as u8;
        1
    } else if cp < 0x800 {
        dst[0] = (cp >> 6) as u8 | 0b1100_0000;
        dst[1] = (cp & 0x3F) as u8 | 0b1000_0000;
        2
    } else if cp < 0x1_0000 {
        dst[0] = (cp >> 12) as u8 | 0b1110_0000;
        dst[1] = ((cp >> 6) & 0x3F) as u8 | 0b1000_0000;
        dst[2] = (cp & 0x3F) as u8 | 0b1000_0000;
        3
    } else {
        dst[0] = (cp >> 18) as u8 | 0b1111_0000;
        dst[1] = ((cp >> 12) & 0x3F) as u8 | 0b1000_0000;
        dst[2] = ((cp >> 6) & 0x3F) as u8 | 0b1000_0000;
        dst[3] = (cp & 0x3F) as u8 | 0b1000_0000;
        4
    };
    &dst[..len]
}
