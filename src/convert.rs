/*!
Validation and whole-sequence transcoding built on top of [`Cursor`].

Everything in here drives a cursor over the source units and either inspects
the error it reports or pushes its code points into a [`Sink`]. The lossy
conversions never fail, every sequence that does not decode becomes exactly
one replacement character. [`try_convert_to`] is the strict variant.
*/

use log::debug;

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::sink::Sink;
use crate::unit::CodeUnit;

/// Returns the offset, in code units, of the first sequence in `src` that
/// does not decode. Returns `src.len()` if all of `src` is valid.
///
/// # Example
///
/// ```
/// use utf_cursor::convert::find_invalid;
///
/// assert_eq!(5, find_invalid(&[0xE6u8, 0x97, 0xA5, 0xD1, 0x88, 0xFA]));
/// assert_eq!(2, find_invalid(&[0x65E5u16, 0x0448, 0xD83D]));
/// assert_eq!(2, find_invalid("ab".as_bytes()));
/// ```
pub fn find_invalid<U: CodeUnit>(src: &[U]) -> usize {
    let mut cursor = Cursor::new(src);
    while !cursor.is_done() && cursor.error().is_none() {
        cursor.advance();
    }
    src.len() - cursor.remaining().len()
}

/// Returns true if every sequence in `src` decodes without error.
pub fn is_valid<U: CodeUnit>(src: &[U]) -> bool {
    find_invalid(src) >= src.len()
}

/// Decodes `src` and pushes every code point into `dst`.
///
/// Sequences that fail to decode are pushed as the replacement character.
/// Returns how many replacement characters were substituted that way.
pub fn convert_into<Src: CodeUnit, S: Sink + ?Sized>(src: &[Src], dst: &mut S) -> usize {
    let mut cursor = Cursor::new(src);
    let mut replaced = 0;
    while !cursor.is_done() {
        let (code_point, error) = cursor.decode();
        replaced += error.is_some() as usize;
        dst.push_code_point(code_point);
        cursor.advance();
    }
    if replaced != 0 {
        debug!("substituted {} replacement characters converting {} units", replaced, src.len());
    }
    replaced
}

/// Transcodes `src` into a new buffer of `Dst` units, replacing every
/// sequence that fails to decode with one replacement character.
///
/// Converting into the same encoding form is not a plain copy, invalid
/// sequences are still replaced.
///
/// # Example
///
/// ```
/// use utf_cursor::convert::convert_to;
///
/// let utf16 = convert_to::<u32, u16>(&[0x65E5, 0x0448, 0x11_FFFF]);
/// assert_eq!(vec![0x65E5, 0x0448, 0xFFFD], utf16);
/// ```
pub fn convert_to<Src: CodeUnit, Dst: CodeUnit>(src: &[Src]) -> Vec<Dst> {
    let mut dst = Vec::with_capacity(src.len());
    convert_into(src, &mut dst);
    dst
}

/// Like [`convert_to`], but stops at the first sequence that fails to
/// decode.
///
/// # Example
///
/// ```
/// use utf_cursor::{convert::try_convert_to, ErrorKind};
///
/// assert_eq!(Ok(vec![0x61, 0x1F600]), try_convert_to::<u16, u32>(&[0x61, 0xD83D, 0xDE00]));
///
/// let err = try_convert_to::<u16, u32>(&[0x61, 0xD83D, 0x62]).unwrap_err();
/// assert_eq!(ErrorKind::IncompleteSequence, err.kind());
/// assert_eq!(1, err.offset());
/// ```
pub fn try_convert_to<Src: CodeUnit, Dst: CodeUnit>(src: &[Src]) -> Result<Vec<Dst>, DecodeError> {
    let mut dst = Vec::with_capacity(src.len());
    let mut cursor = Cursor::new(src);
    while !cursor.is_done() {
        let (code_point, error) = cursor.decode();
        if let Some(kind) = error {
            let offset = src.len() - cursor.remaining().len();
            debug!("stopped converting at unit offset {}: {}", offset, kind);
            return Err(DecodeError::new(kind, offset));
        }
        Dst::encode_into(code_point, &mut dst);
        cursor.advance();
    }
    Ok(dst)
}

macro_rules! conversions {
    ($($name:ident: $src:ty => $dst:ty;)*) => {
        $(
            #[doc = concat!(
                "Transcodes `", stringify!($src), "` units into `", stringify!($dst),
                "` units, see [`convert_to`]."
            )]
            pub fn $name(src: &[$src]) -> Vec<$dst> {
                convert_to::<$src, $dst>(src)
            }
        )*
    };
}

conversions! {
    utf8_to_8: u8 => u8;
    utf8_to_16: u8 => u16;
    utf8_to_32: u8 => u32;
    utf16_to_8: u16 => u8;
    utf16_to_16: u16 => u16;
    utf16_to_32: u16 => u32;
    utf32_to_8: u32 => u8;
    utf32_to_16: u32 => u16;
    utf32_to_32: u32 => u32;
}

/// Decodes UTF-16 into a `String`, replacing invalid sequences.
pub fn utf16_to_string(src: &[u16]) -> String {
    let mut dst = String::with_capacity(src.len());
    convert_into(src, &mut dst);
    dst
}

/// Decodes UTF-32 into a `String`, replacing invalid code points.
pub fn utf32_to_string(src: &[u32]) -> String {
    let mut dst = String::with_capacity(src.len());
    convert_into(src, &mut dst);
    dst
}
