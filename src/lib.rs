/*!
Lazy decoding and transcoding of the three Unicode encoding forms: UTF-8
(`u8` units), UTF-16 (`u16` units) and UTF-32 (`u32` units).

The building blocks are the single sequence decoders and encoders in
[`util`], a [`Cursor`] that lazily decodes a borrowed slice of units one
sequence at a time, and the validation and conversion routines in
[`convert`] built on top of it. Decoding never fails: bad input is reported
as an [`ErrorKind`] alongside the replacement character and the number of
units to skip.

```
use utf_cursor::convert::{find_invalid, utf8_to_16};

let bytes = [0xE6u8, 0x97, 0xA5, 0xD1, 0x88, 0xFA];
assert_eq!(5, find_invalid(&bytes));
assert_eq!(vec![0x65E5, 0x0448, 0xFFFD], utf8_to_16(&bytes));
```
*/

pub use cursor::{Cursor, IntoCursor};
pub use error::{DecodeError, ErrorKind};
pub use sink::Sink;
pub use unit::{CodeUnit, Decoded};
pub use util::{CODE_POINT_MAX, REPLACEMENT_CHARACTER};
pub use view::{Utf16View, Utf32View, Utf8View, View};

pub mod convert;
mod cursor;
pub mod error;
#[cfg(feature = "ropey")]
pub mod rope;
mod sink;
mod unit;
pub mod util;
mod view;

#[cfg(all(test, feature = "ropey"))]
mod test_rope;
