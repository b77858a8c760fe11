use crate::util::*;
use crate::{Decoded, ErrorKind};
use proptest::{prop_assert_eq, proptest};

#[test]
fn trail_unit() {
    assert!(!is_trail_unit(b'a'));
    assert!(!is_trail_unit(0x7F));
    assert!(is_trail_unit(0x80));
    assert!(is_trail_unit(0x99));
    assert!(is_trail_unit(0xBF));
    // lead bytes have their second most significant bit set
    assert!(!is_trail_unit(0xC0));
    assert!(!is_trail_unit(0xE6));
    assert!(!is_trail_unit(0xFF));
}

#[test]
fn surrogates() {
    assert!(!is_lead_surrogate(0x0000));
    assert!(!is_lead_surrogate(b'z' as u16));
    assert!(!is_lead_surrogate(0xD7FF));
    assert!(is_lead_surrogate(0xD800));
    assert!(is_lead_surrogate(0xDAB0));
    assert!(is_lead_surrogate(0xDBFF));
    assert!(!is_lead_surrogate(0xDC00));
    assert!(!is_lead_surrogate(0xDFFF));

    assert!(!is_trail_surrogate(0xD7FF));
    assert!(!is_trail_surrogate(0xD800));
    assert!(!is_trail_surrogate(0xDBFF));
    assert!(is_trail_surrogate(0xDC00));
    assert!(is_trail_surrogate(0xDE02));
    assert!(is_trail_surrogate(0xDFFF));
    assert!(!is_trail_surrogate(0xE000));

    assert!(!is_surrogate(0xD7FF));
    assert!(is_surrogate(0xD800));
    assert!(is_surrogate(0xDFFF));
    assert!(!is_surrogate(0xE000));
    assert!(!is_surrogate(0x10_12AF));
}

#[test]
fn code_point_validity() {
    assert!(is_valid_code_point(0));
    assert!(is_valid_code_point(0x80));
    assert!(is_valid_code_point(0xD7FF));
    assert!(!is_valid_code_point(0xDBFF));
    assert!(!is_valid_code_point(0xDC00));
    assert!(is_valid_code_point(0xE000));
    assert!(is_valid_code_point(CODE_POINT_MAX));
    assert!(!is_valid_code_point(0x11_FFFF));
    assert!(!is_valid_code_point(u32::MAX));
}

#[test]
fn overlong() {
    assert!(!is_overlong(0x41, 1));
    assert!(is_overlong(0x41, 2));
    assert!(!is_overlong(0x7FF, 2));
    assert!(is_overlong(0x7FF, 3));
    assert!(!is_overlong(0xFFFF, 3));
    assert!(is_overlong(0xFFFF, 4));
    assert!(!is_overlong(0x1_0000, 4));
}

#[test]
fn sequence_lengths() {
    assert_eq!(1, sequence_len_utf8(b'Z'));
    assert_eq!(1, sequence_len_utf8(0x79));
    assert_eq!(0, sequence_len_utf8(0x80));
    assert_eq!(0, sequence_len_utf8(0xBF));
    assert_eq!(2, sequence_len_utf8(0xC2));
    assert_eq!(3, sequence_len_utf8(0xE0));
    assert_eq!(4, sequence_len_utf8(0xF0));
    assert_eq!(4, sequence_len_utf8(0xF7));
    assert_eq!(0, sequence_len_utf8(0xF8));
    assert_eq!(0, sequence_len_utf8(0xFF));

    assert_eq!(1, sequence_len_utf16(0x61));
    assert_eq!(2, sequence_len_utf16(0xD800));
    assert_eq!(2, sequence_len_utf16(0xDC00));
    assert_eq!(1, sequence_len_utf16(0xE000));
}

#[test]
fn decode_utf8() {
    assert_eq!(Decoded::ok(1, 0x61), utf8::decode(b"abcdxyz"));
    assert_eq!(Decoded::ok(2, 'ш' as u32), utf8::decode("шницла".as_bytes()));
    assert_eq!(Decoded::ok(3, 0x65E5), utf8::decode(&[0xE6, 0x97, 0xA5]));
    assert_eq!(Decoded::ok(4, 0x10300), utf8::decode("𐌀".as_bytes()));
}

#[test]
fn decode_utf8_errors() {
    let failed = |consumed, kind| Decoded {
        consumed,
        code_point: REPLACEMENT_CHARACTER,
        error: Some(kind),
    };
    assert_eq!(failed(0, ErrorKind::IncompleteSequence), utf8::decode(&[]));
    assert_eq!(failed(1, ErrorKind::InvalidLead), utf8::decode(&[0x80, 0x80]));
    assert_eq!(failed(1, ErrorKind::InvalidLead), utf8::decode(&[0xFA]));
    // truncated
    assert_eq!(failed(1, ErrorKind::IncompleteSequence), utf8::decode(&[0xE6, 0x97]));
    // second unit is a lead byte, not a continuation
    assert_eq!(failed(1, ErrorKind::IncompleteSequence), utf8::decode(&[0xC3, 0xC3]));
    assert_eq!(failed(1, ErrorKind::IncompleteSequence), utf8::decode(&[0xE6, 0x41, 0xA5]));
    // encoded surrogate
    assert_eq!(failed(1, ErrorKind::InvalidCodePoint), utf8::decode(&[0xED, 0xA0, 0x80]));
    // above U+10FFFF
    assert_eq!(failed(1, ErrorKind::InvalidCodePoint), utf8::decode(&[0xF4, 0x90, 0x80, 0x80]));
    assert_eq!(failed(1, ErrorKind::InvalidCodePoint), utf8::decode(&[0xF5, 0x80, 0x80, 0x80]));
    // overlong
    assert_eq!(failed(1, ErrorKind::OverlongSequence), utf8::decode(&[0xC0, 0xAF]));
    assert_eq!(failed(1, ErrorKind::OverlongSequence), utf8::decode(&[0xE0, 0x80, 0x80]));
    assert_eq!(failed(1, ErrorKind::OverlongSequence), utf8::decode(&[0xF0, 0x8F, 0xBF, 0xBF]));
}

#[test]
fn encode_utf8() {
    let mut buf = [0; utf8::MAX_LEN];
    assert_eq!(b"a", utf8::encode('a' as u32, &mut buf));
    assert_eq!("ц".as_bytes(), utf8::encode('ц' as u32, &mut buf));
    assert_eq!("水".as_bytes(), utf8::encode('水' as u32, &mut buf));
    assert_eq!("𐌀".as_bytes(), utf8::encode('𐌀' as u32, &mut buf));
    assert_eq!(&[0xEFu8, 0xBF, 0xBD], utf8::encode(0xD800, &mut buf));
    assert_eq!(&[0xEFu8, 0xBF, 0xBD], utf8::encode(0x11_0000, &mut buf));
}

#[test]
fn decode_utf16() {
    assert_eq!(Decoded::ok(1, 0x61), utf16::decode(&[0x61, 0x62]));
    assert_eq!(Decoded::ok(1, 'ш' as u32), utf16::decode(&[0x0448]));
    assert_eq!(Decoded::ok(2, 0x10300), utf16::decode(&[0xD800, 0xDF00]));
    assert_eq!(Decoded::ok(2, CODE_POINT_MAX), utf16::decode(&[0xDBFF, 0xDFFF]));
}

#[test]
fn decode_utf16_errors() {
    let failed = |consumed, kind| Decoded {
        consumed,
        code_point: REPLACEMENT_CHARACTER,
        error: Some(kind),
    };
    assert_eq!(failed(0, ErrorKind::IncompleteSequence), utf16::decode(&[]));
    assert_eq!(failed(1, ErrorKind::InvalidLead), utf16::decode(&[0xDC07]));
    assert_eq!(failed(1, ErrorKind::InvalidLead), utf16::decode(&[0xDC07, 0xDC07]));
    assert_eq!(failed(1, ErrorKind::IncompleteSequence), utf16::decode(&[0xD800]));
    assert_eq!(failed(1, ErrorKind::IncompleteSequence), utf16::decode(&[0xD800, 0x61]));
    assert_eq!(failed(1, ErrorKind::IncompleteSequence), utf16::decode(&[0xD800, 0xD800]));
}

#[test]
fn encode_utf16() {
    let mut buf = [0; utf16::MAX_LEN];
    assert_eq!(&[0x61u16], utf16::encode(0x61, &mut buf));
    assert_eq!(&[0xFFFFu16], utf16::encode(0xFFFF, &mut buf));
    assert_eq!(&[0xD800u16, 0xDF00], utf16::encode(0x10300, &mut buf));
    assert_eq!(&[0xDBFFu16, 0xDFFF], utf16::encode(CODE_POINT_MAX, &mut buf));
    assert_eq!(&[0xFFFDu16], utf16::encode(0xDC00, &mut buf));
    assert_eq!(&[0xFFFDu16], utf16::encode(0x11_FFFF, &mut buf));
}

#[test]
fn decode_utf32() {
    assert_eq!(Decoded::ok(1, 0x65E5), utf32::decode(&[0x65E5, 0x11_FFFF]));
    assert_eq!(Some(ErrorKind::InvalidCodePoint), utf32::decode(&[0x11_FFFF]).error);
    assert_eq!(Some(ErrorKind::InvalidCodePoint), utf32::decode(&[0xD800]).error);
    assert_eq!(Decoded::failed(0, ErrorKind::IncompleteSequence), utf32::decode(&[]));
    assert_eq!(0x65E5, utf32::encode(0x65E5));
    assert_eq!(REPLACEMENT_CHARACTER, utf32::encode(0xDFFF));
}

proptest! {
    #[test]
    fn utf8_round_trip(c: char) {
        let mut buf = [0; utf8::MAX_LEN];
        let encoded = utf8::encode(c as u32, &mut buf);
        let expected = c.to_string();
        prop_assert_eq!(expected.as_bytes(), &*encoded);
        prop_assert_eq!(Decoded::ok(encoded.len(), c as u32), utf8::decode(encoded));
    }

    #[test]
    fn utf16_round_trip(c: char) {
        let mut buf = [0; utf16::MAX_LEN];
        let encoded = utf16::encode(c as u32, &mut buf);
        let mut reference = [0; 2];
        prop_assert_eq!(&*c.encode_utf16(&mut reference), &*encoded);
        prop_assert_eq!(Decoded::ok(encoded.len(), c as u32), utf16::decode(encoded));
    }

    #[test]
    fn utf32_round_trip(cp: u32) {
        let decoded = utf32::decode(&[cp]);
        prop_assert_eq!(char::from_u32(cp).is_some(), decoded.is_ok());
        let expected = char::from_u32(cp).map_or(REPLACEMENT_CHARACTER, u32::from);
        prop_assert_eq!(expected, decoded.code_point);
    }
}
