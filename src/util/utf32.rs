/*!
UTF-32 needs no transcoding, every unit is either a valid code point or it
isn't.
*/

use crate::error::ErrorKind;
use crate::util::{is_valid_code_point, replace_invalid};
use crate::Decoded;

/// Validates the first unit of `units`.
///
/// This always consumes exactly one unit (none for empty input), since a
/// malformed UTF-32 unit can not desynchronize the units following it.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn decode(units: &[u32]) -> Decoded {
    match units.first() {
        None => Decoded::failed(0, ErrorKind::IncompleteSequence),
        Some(&cp) if is_valid_code_point(cp) => Decoded::ok(1, cp),
        Some(_) => Decoded::failed(1, ErrorKind::InvalidCodePoint),
    }
}

/// Returns the single UTF-32 unit for `cp`, the replacement character if `cp`
/// is not valid.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn encode(cp: u32) -> u32 {
    replace_invalid(cp)
}
