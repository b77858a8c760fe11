use crate::error::{DecodeError, ErrorKind};
use crate::util::{utf16, utf32, utf8, REPLACEMENT_CHARACTER};

/// The outcome of decoding a single sequence.
///
/// `consumed` is the number of code units the sequence occupied. On error it
/// is `1` unless the input was empty, which lets callers skip the offending
/// unit and resynchronize. `code_point` is [`REPLACEMENT_CHARACTER`] whenever
/// `error` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub consumed: usize,
    pub code_point: u32,
    pub error: Option<ErrorKind>,
}

impl Decoded {
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(crate) const fn ok(consumed: usize, code_point: u32) -> Decoded {
        Decoded { consumed, code_point, error: None }
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(crate) const fn failed(consumed: usize, kind: ErrorKind) -> Decoded {
        Decoded { consumed, code_point: REPLACEMENT_CHARACTER, error: Some(kind) }
    }

    /// Returns true if the sequence decoded without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts this into `(code_point, consumed)`, or a [`DecodeError`] at
    /// offset zero if decoding failed.
    ///
    /// # Example
    ///
    /// ```
    /// use utf_cursor::{CodeUnit, ErrorKind};
    ///
    /// assert_eq!(Ok((0x65E5, 3)), u8::decode(&[0xE6, 0x97, 0xA5]).into_result());
    ///
    /// let err = u16::decode(&[0xDC07]).into_result().unwrap_err();
    /// assert_eq!(ErrorKind::InvalidLead, err.kind());
    /// ```
    pub fn into_result(self) -> Result<(u32, usize), DecodeError> {
        match self.error {
            None => Ok((self.code_point, self.consumed)),
            Some(kind) => Err(DecodeError::new(kind, 0)),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A code unit of one of the three Unicode encoding forms: `u8` for UTF-8,
/// `u16` for UTF-16 and `u32` for UTF-32.
///
/// This is what [`Cursor`](crate::Cursor), [`View`](crate::View) and the
/// conversion routines are generic over. It is sealed, the three
/// implementations are the only ones.
pub trait CodeUnit: Copy + Eq + core::fmt::Debug + sealed::Sealed {
    /// Decodes the sequence at the start of `units`.
    fn decode(units: &[Self]) -> Decoded;

    /// Appends the encoding of `cp` to `dst`. Invalid code points are
    /// appended as the replacement character.
    fn encode_into(cp: u32, dst: &mut Vec<Self>);
}

impl CodeUnit for u8 {
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn decode(units: &[u8]) -> Decoded {
        utf8::decode(units)
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn encode_into(cp: u32, dst: &mut Vec<u8>) {
        let mut buf = [0; utf8::MAX_LEN];
        dst.extend_from_slice(utf8::encode(cp, &mut buf));
    }
}

impl CodeUnit for u16 {
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn decode(units: &[u16]) -> Decoded {
        utf16::decode(units)
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn encode_into(cp: u32, dst: &mut Vec<u16>) {
        let mut buf = [0; utf16::MAX_LEN];
        dst.extend_from_slice(utf16::encode(cp, &mut buf));
    }
}

impl CodeUnit for u32 {
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn decode(units: &[u32]) -> Decoded {
        utf32::decode(units)
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn encode_into(cp: u32, dst: &mut Vec<u32>) {
        dst.push(utf32::encode(cp));
    }
}
