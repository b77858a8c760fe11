use crate::cursor::Cursor;
use crate::unit::CodeUnit;

/// A borrowed sequence of code units viewed as a sequence of code points.
///
/// A view has no decoding logic of its own, it only hands out fresh
/// [`Cursor`]s positioned at the start of the units. Iterating a view twice
/// decodes it twice.
///
/// Lengths are always measured in code units, never in code points.
///
/// # Example
///
/// ```
/// use utf_cursor::View;
///
/// let view = View::from("水手");
/// assert_eq!(6, view.len());
/// assert_eq!(vec![0x6C34, 0x624B], view.iter().collect::<Vec<_>>());
/// assert_eq!(2, view.into_iter().count());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct View<'a, U: CodeUnit> {
    units: &'a [U],
}

pub type Utf8View<'a> = View<'a, u8>;
pub type Utf16View<'a> = View<'a, u16>;
pub type Utf32View<'a> = View<'a, u32>;

impl<'a, U: CodeUnit> View<'a, U> {
    #[inline]
    pub fn new(units: &'a [U]) -> Self {
        View { units }
    }

    /// A cursor positioned on the first sequence.
    #[inline]
    pub fn iter(&self) -> Cursor<'a, U> {
        Cursor::new(self.units)
    }

    /// Returns true if there are no units at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The number of code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// The underlying units.
    #[inline]
    pub fn units(&self) -> &'a [U] {
        self.units
    }
}

impl<'a, U: CodeUnit> From<&'a [U]> for View<'a, U> {
    fn from(units: &'a [U]) -> Self {
        View::new(units)
    }
}

impl<'a> From<&'a str> for View<'a, u8> {
    fn from(s: &'a str) -> Self {
        View::new(s.as_bytes())
    }
}

/// A view converts to `true` when it has at least one unit.
impl<U: CodeUnit> From<View<'_, U>> for bool {
    fn from(view: View<'_, U>) -> bool {
        !view.is_empty()
    }
}

impl<'a, U: CodeUnit> IntoIterator for View<'a, U> {
    type Item = u32;
    type IntoIter = Cursor<'a, U>;

    fn into_iter(self) -> Cursor<'a, U> {
        self.iter()
    }
}

impl<'a, U: CodeUnit> IntoIterator for &View<'a, U> {
    type Item = u32;
    type IntoIter = Cursor<'a, U>;

    fn into_iter(self) -> Cursor<'a, U> {
        self.iter()
    }
}
