use crate::error::ErrorKind;
use crate::unit::{CodeUnit, Decoded};
use crate::util::REPLACEMENT_CHARACTER;

/// Conversion into a [`Cursor`].
///
/// Implemented for unit slices of all three encoding forms, for `&str`
/// (decoded as UTF-8) and for cursors themselves.
pub trait IntoCursor<'a> {
    type Unit: CodeUnit;
    fn into_cursor(self) -> Cursor<'a, Self::Unit>;
}

impl<'a, U: CodeUnit> IntoCursor<'a> for Cursor<'a, U> {
    type Unit = U;

    fn into_cursor(self) -> Self {
        self
    }
}

impl<'a, U: CodeUnit> IntoCursor<'a> for &'a [U] {
    type Unit = U;

    fn into_cursor(self) -> Cursor<'a, U> {
        Cursor::new(self)
    }
}

impl<'a, U: CodeUnit, const N: usize> IntoCursor<'a> for &'a [U; N] {
    type Unit = U;

    fn into_cursor(self) -> Cursor<'a, U> {
        Cursor::new(self)
    }
}

impl<'a> IntoCursor<'a> for &'a str {
    type Unit = u8;

    fn into_cursor(self) -> Cursor<'a, u8> {
        Cursor::new(self.as_bytes())
    }
}

/// A lazy decoder over a borrowed sequence of code units.
///
/// A cursor is either positioned on a decoded sequence or done. Creating a
/// cursor eagerly decodes the first sequence, [`Cursor::advance`] drops the
/// current sequence from the front of the remaining units and decodes the
/// next one. Nothing is ever copied out of the underlying buffer.
///
/// Decoding errors do not stop the cursor: the current code point becomes the
/// replacement character, [`Cursor::error`] reports what went wrong, and
/// advancing skips a single unit. A run of bad units therefore produces one
/// replacement character per skipped unit.
///
/// Cursors also implement [`Iterator`], yielding the code point of every
/// sequence (replacement characters included).
///
/// # Example
///
/// ```
/// use utf_cursor::{Cursor, ErrorKind, REPLACEMENT_CHARACTER};
///
/// let mut cursor = Cursor::new(&[0x61u16, 0xDC07, 0xD834, 0xDD1E][..]);
/// assert_eq!(0x61, cursor.code_point());
/// cursor.advance();
/// assert_eq!((REPLACEMENT_CHARACTER, Some(ErrorKind::InvalidLead)), cursor.decode());
/// cursor.advance();
/// assert_eq!(0x1D11E, cursor.code_point());
/// assert_eq!(2, cursor.remaining().len());
/// cursor.advance();
/// assert!(cursor.is_done());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor<'a, U: CodeUnit> {
    units: &'a [U],
    /// Number of units the current sequence occupies
    consumed: usize,
    code_point: u32,
    error: Option<ErrorKind>,
}

impl<'a, U: CodeUnit> Cursor<'a, U> {
    /// Create a cursor positioned on the first sequence of `units`.
    #[inline]
    pub fn new(units: &'a [U]) -> Self {
        let mut cursor = Cursor {
            units,
            consumed: 0,
            code_point: REPLACEMENT_CHARACTER,
            error: Some(ErrorKind::InvalidCodePoint),
        };
        cursor.decode_current();
        cursor
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn decode_current(&mut self) {
        if self.units.is_empty() {
            return;
        }
        let Decoded { consumed, code_point, error } = U::decode(self.units);
        self.consumed = consumed;
        self.code_point = code_point;
        self.error = error;
    }

    /// Moves past the current sequence. Does nothing once the cursor is done.
    ///
    /// At least one unit is dropped on every call, so advancing repeatedly
    /// always reaches the end of finite input.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub fn advance(&mut self) {
        if self.units.is_empty() {
            return;
        }
        let step = self.consumed.max(1).min(self.units.len());
        self.units = &self.units[step..];
        self.decode_current();
    }

    /// Returns true once every unit has been consumed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.units.is_empty()
    }

    /// The current code point, or the replacement character if decoding the
    /// current sequence failed or the cursor is done.
    #[inline]
    pub fn code_point(&self) -> u32 {
        if self.is_done() {
            REPLACEMENT_CHARACTER
        } else {
            self.code_point
        }
    }

    /// The current code point together with the error decoding it produced.
    ///
    /// A cursor that is done reports `(REPLACEMENT_CHARACTER,
    /// Some(ErrorKind::InvalidCodePoint))`.
    #[inline]
    pub fn decode(&self) -> (u32, Option<ErrorKind>) {
        (self.code_point(), self.error())
    }

    /// The error decoding the current sequence produced, if any.
    #[inline]
    pub fn error(&self) -> Option<ErrorKind> {
        if self.is_done() {
            Some(ErrorKind::InvalidCodePoint)
        } else {
            self.error
        }
    }

    /// The units not yet moved past, starting with the current sequence.
    #[inline]
    pub fn remaining(&self) -> &'a [U] {
        self.units
    }
}

impl<U: CodeUnit> Iterator for Cursor<'_, U> {
    type Item = u32;

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn next(&mut self) -> Option<u32> {
        if self.is_done() {
            return None;
        }
        let code_point = self.code_point;
        self.advance();
        Some(code_point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.units.len();
        // every sequence is at most 4 units and at least 1
        ((len + 3) / 4, Some(len))
    }
}

impl<U: CodeUnit> core::iter::FusedIterator for Cursor<'_, U> {}
