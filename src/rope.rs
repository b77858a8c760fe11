/*!
Transcoding straight out of a [`ropey`] rope.

Ropey stores its text as a sequence of UTF-8 chunks and never splits a code
point across two chunks, so every chunk can be decoded on its own and the
results appended one after the other.
*/

use ropey::iter::Chunks;
use ropey::RopeSlice;

use crate::convert::convert_into;
use crate::sink::Sink;

/// Walks the non-empty chunks of a rope slice.
pub struct RopeyChunks<'a> {
    iter: Chunks<'a>,
}

impl<'a> RopeyChunks<'a> {
    pub fn new(slice: RopeSlice<'a>) -> Self {
        RopeyChunks { iter: slice.chunks() }
    }
}

impl<'a> Iterator for RopeyChunks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        self.iter.by_ref().find(|chunk| !chunk.is_empty()).map(str::as_bytes)
    }
}

/// Pushes every code point of `slice` into `dst`.
pub fn convert_rope_into<S: Sink + ?Sized>(slice: RopeSlice<'_>, dst: &mut S) {
    for chunk in RopeyChunks::new(slice) {
        convert_into(chunk, &mut *dst);
    }
}

/// Encodes the text of `slice` as UTF-16.
///
/// # Example
///
/// ```
/// use ropey::Rope;
///
/// let rope = Rope::from_str("a𐌀");
/// assert_eq!(vec![0x61, 0xD800, 0xDF00], utf_cursor::rope::to_utf16(rope.slice(..)));
/// ```
pub fn to_utf16(slice: RopeSlice<'_>) -> Vec<u16> {
    let mut dst = Vec::with_capacity(slice.len_utf16_cu());
    convert_rope_into(slice, &mut dst);
    dst
}

/// Encodes the text of `slice` as UTF-32.
pub fn to_utf32(slice: RopeSlice<'_>) -> Vec<u32> {
    let mut dst = Vec::with_capacity(slice.len_chars());
    convert_rope_into(slice, &mut dst);
    dst
}
