use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::{prop_assert_eq, proptest};
use ropey::{Rope, RopeBuilder};

use crate::convert::{utf8_to_16, utf8_to_32};
use crate::rope::{to_utf16, to_utf32, RopeyChunks};

#[derive(Debug)]
struct XorShift64Star {
    state: Cell<u64>,
}

impl XorShift64Star {
    fn new() -> Self {
        // Any non-zero seed will do -- this uses the hash of a global counter.
        let mut seed = 0;
        while seed == 0 {
            let mut hasher = DefaultHasher::new();
            static COUNTER: AtomicUsize = AtomicUsize::new(0);
            hasher.write_usize(COUNTER.fetch_add(1, Ordering::Relaxed));
            seed = hasher.finish();
        }

        XorShift64Star { state: Cell::new(seed) }
    }

    fn next(&self) -> u64 {
        let mut x = self.state.get();
        debug_assert_ne!(x, 0);
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state.set(x);
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Return a value from `0..n`.
    fn next_usize(&self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

/// Builds a rope out of `text` appended in randomly sized pieces, so that the
/// chunk boundaries differ from run to run.
fn random_rope(text: &str) -> Rope {
    let ran = XorShift64Star::new();
    let mut builder = RopeBuilder::new();
    let mut pos = 0;
    while pos < text.len() {
        let mut end = (pos + ran.next_usize(250) + 1).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        builder.append(&text[pos..end]);
        pos = end;
    }
    builder.finish()
}

#[test]
fn empty_rope() {
    let rope = Rope::new();
    assert_eq!(0, RopeyChunks::new(rope.slice(..)).count());
    assert!(to_utf16(rope.slice(..)).is_empty());
    assert!(to_utf32(rope.slice(..)).is_empty());
}

#[test]
fn rope_slice() {
    let rope = random_rope(&"abcdxyzшницла水手𐌀".repeat(100));
    let slice = rope.slice(7..16);
    assert_eq!("шницла水手𐌀".encode_utf16().collect::<Vec<_>>(), to_utf16(slice));
    let expected: Vec<u32> = "шницла水手𐌀".chars().map(u32::from).collect();
    assert_eq!(expected, to_utf32(slice));
}

proptest! {
    #[test]
    fn rope_matches_flat(text: String) {
        let rope = random_rope(&text);
        let chunks: Vec<u8> = RopeyChunks::new(rope.slice(..)).flatten().copied().collect();
        prop_assert_eq!(text.as_bytes(), &*chunks);
        prop_assert_eq!(utf8_to_16(text.as_bytes()), to_utf16(rope.slice(..)));
        prop_assert_eq!(utf8_to_32(text.as_bytes()), to_utf32(rope.slice(..)));
    }
}
