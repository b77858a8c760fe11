use crate::unit::CodeUnit;

/// A destination for decoded code points.
///
/// Conversions push every code point they decode, replacement characters
/// included, into a sink. The sink decides how to encode and store it.
///
/// Implementations must not fail: a code point that is not valid is stored
/// as the replacement character.
pub trait Sink {
    fn push_code_point(&mut self, cp: u32);
}

impl<U: CodeUnit> Sink for Vec<U> {
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn push_code_point(&mut self, cp: u32) {
        U::encode_into(cp, self)
    }
}

impl Sink for String {
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn push_code_point(&mut self, cp: u32) {
        self.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}
