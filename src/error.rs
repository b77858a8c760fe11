/// The reason a sequence of code units failed to decode.
///
/// Decoding routines report the absence of an error as `None`, so this enum
/// only lists actual failures. There is no payload beyond the kind; the
/// position of the failure is tracked by whoever drives the decoder (see
/// [`DecodeError`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The destination was too small to hold the result.
    ///
    /// None of the routines in this crate produce this today since all
    /// destinations grow on demand.
    NotEnoughRoom,
    /// The first unit can not start any valid sequence: a UTF-8
    /// continuation byte or one of `0xF8..=0xFF`, or a UTF-16 trail
    /// surrogate.
    InvalidLead,
    /// The sequence ended early, or a unit in trailing position was not a
    /// valid trailing unit.
    IncompleteSequence,
    /// A valid code point was encoded with more UTF-8 bytes than needed.
    OverlongSequence,
    /// The decoded value is a surrogate or larger than `U+10FFFF`.
    InvalidCodePoint,
}

impl ErrorKind {
    /// A short, human readable description of this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotEnoughRoom => "not enough room",
            ErrorKind::InvalidLead => "invalid lead unit",
            ErrorKind::IncompleteSequence => "incomplete sequence",
            ErrorKind::OverlongSequence => "overlong sequence",
            ErrorKind::InvalidCodePoint => "invalid code point",
        }
    }
}

impl std::error::Error for ErrorKind {}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Like [`ErrorKind::message`] but also covers the absence of an error, as
/// returned by [`Decoded`](crate::Decoded) and
/// [`Cursor::error`](crate::Cursor::error).
pub fn describe(error: Option<ErrorKind>) -> &'static str {
    error.map_or("ok", ErrorKind::message)
}

/// An error produced when decoding is asked to fail instead of substituting
/// replacement characters.
///
/// The decoders themselves never return this. It is produced by the strict
/// adapters, [`Decoded::into_result`](crate::Decoded::into_result) and
/// [`try_convert_to`](crate::convert::try_convert_to).
///
/// # Example
///
/// ```
/// use utf_cursor::{convert::try_convert_to, ErrorKind};
///
/// let err = try_convert_to::<u8, u16>(b"ab\xFFcd").unwrap_err();
/// assert_eq!(ErrorKind::InvalidLead, err.kind());
/// assert_eq!(2, err.offset());
/// assert_eq!("invalid lead unit at unit offset 2", err.to_string());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    kind: ErrorKind,
    offset: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> DecodeError {
        DecodeError { kind, offset }
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offset, in code units, of the start of the sequence that failed
    /// to decode.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::error::Error for DecodeError {}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at unit offset {}", self.kind, self.offset)
    }
}
