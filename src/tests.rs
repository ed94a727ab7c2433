use crate::*;
use pretty_hex::PrettyHex;

#[test]
fn new_buffer_is_empty_big_endian() {
    let b = ByteArray::new();
    assert_eq!(b.len(), 0);
    assert!(b.is_empty());
    assert_eq!(b.position(), 0);
    assert_eq!(b.endian(), Endian::Big);
    assert_eq!(b.bytes_available(), 0);
}

#[test]
fn basic_u8() {
    let mut b = ByteArray::from(vec![42, 43, 44]);
    assert_eq!(b.read_u8(), Ok(42));
    assert_eq!(b.position(), 1);
    assert_eq!(b.bytes_available(), 2);
}

#[test]
fn i8_round_trip_ignores_endian() {
    for endian in [Endian::Big, Endian::Little] {
        let mut b = ByteArray::new();
        b.set_endian(endian);
        b.write_i8(-5);
        assert_eq!(b.as_slice(), [0xfb]);
        b.set_position(0);
        assert_eq!(b.read_i8(), Ok(-5));
        assert_eq!(b.read_i8(), Err(ByteArrayError::EndOfData));
    }
}

#[test]
fn numeric_round_trips() {
    for endian in [Endian::Big, Endian::Little] {
        let mut b = ByteArray::new();
        b.set_endian(endian);
        b.write_i16(-12345);
        b.write_u16(0xbeef);
        b.write_i32(-123456789);
        b.write_u32(0xdeadbeef);
        b.write_f32(1.5);
        b.write_f64(-2.25e10);
        assert_eq!(b.len(), 2 + 2 + 4 + 4 + 4 + 8);
        assert_eq!(b.position(), b.len());

        b.set_position(0);
        assert_eq!(b.read_i16(), Ok(-12345));
        assert_eq!(b.read_u16(), Ok(0xbeef));
        assert_eq!(b.read_i32(), Ok(-123456789));
        assert_eq!(b.read_u32(), Ok(0xdeadbeef));
        assert_eq!(b.read_f32(), Ok(1.5));
        assert_eq!(b.read_f64(), Ok(-2.25e10));
        assert_eq!(b.bytes_available(), 0);
    }
}

#[test]
fn u32_byte_images() {
    let mut b = ByteArray::new();
    b.write_u32(0x01020304);
    assert_eq!(b.as_slice(), [0x01, 0x02, 0x03, 0x04]);

    let mut b = ByteArray::new();
    b.set_endian(Endian::Little);
    b.write_u32(0x01020304);
    assert_eq!(b.as_slice(), [0x04, 0x03, 0x02, 0x01]);
}

#[test]
fn endian_is_read_per_operation() {
    // Written big-endian, read back little-endian: the same two bytes must
    // reinterpret as the swapped value.
    let mut b = ByteArray::new();
    b.write_i16(0x0102);
    b.set_endian(Endian::Little);
    b.set_position(0);
    assert_eq!(b.read_u16(), Ok(0x0201));
}

#[test]
fn bool_round_trip() {
    let mut b = ByteArray::new();
    b.write_bool(true);
    b.write_bool(false);
    assert_eq!(b.as_slice(), [1, 0]);
    b.set_position(0);
    assert_eq!(b.read_bool(), Ok(true));
    assert_eq!(b.read_bool(), Ok(false));
}

#[test]
fn bool_decodes_as_equal_to_one() {
    let mut b = ByteArray::from(vec![2]);
    assert_eq!(b.read_bool(), Ok(false));
}

#[test]
fn reads_never_extend_the_store() {
    let mut b = ByteArray::from(vec![0x01, 0x02, 0x03]);
    assert_eq!(b.read_u32(), Err(ByteArrayError::EndOfData));
    assert_eq!(b.len(), 3);

    b.set_position(2);
    assert_eq!(b.read_i16(), Err(ByteArrayError::EndOfData));
}

#[test]
fn get_extends_with_zero_fill() {
    let mut b = ByteArray::from(vec![7]);
    assert_eq!(b.get(0), 7);
    assert_eq!(b.get(5), 0);
    assert_eq!(b.len(), 6);
    assert_eq!(b.as_slice(), [7, 0, 0, 0, 0, 0]);
    // No cursor movement.
    assert_eq!(b.position(), 0);
}

#[test]
fn put_supports_sparse_writes() {
    let mut b = ByteArray::new();
    b.put(4, 9);
    assert_eq!(b.as_slice(), [0, 0, 0, 0, 9]);
    b.put(0, 1);
    assert_eq!(b.as_slice(), [1, 0, 0, 0, 9]);
    assert_eq!(b.position(), 0);
}

#[test]
fn set_length_grows_and_truncates() {
    let mut b = ByteArray::from(vec![1, 2, 3]);
    b.set_length(5);
    assert_eq!(b.as_slice(), [1, 2, 3, 0, 0]);
    b.set_length(2);
    assert_eq!(b.as_slice(), [1, 2]);
}

#[test]
fn truncation_leaves_cursor_dangling() {
    let mut b = ByteArray::new();
    b.write_u32(0xaabbccdd);
    assert_eq!(b.position(), 4);
    b.set_length(0);
    assert_eq!(b.bytes_available(), -4);
    b.set_position(0);
    assert_eq!(b.read_u8(), Err(ByteArrayError::EndOfData));
}

#[test]
fn write_past_end_zero_fills_gap() {
    let mut b = ByteArray::new();
    b.set_position(3);
    b.write_i8(1);
    assert_eq!(b.as_slice(), [0, 0, 0, 1]);
}

#[test]
fn utf_exact_bytes_big_endian() {
    let mut b = ByteArray::new();
    b.write_utf("AB").unwrap();
    assert_eq!(b.as_slice(), [0x00, 0x02, 0x41, 0x42]);

    b.set_position(0);
    assert_eq!(b.read_utf(), Ok("AB".to_string()));
    assert_eq!(b.position(), 4);
}

#[test]
fn utf_prefix_honors_endian() {
    let mut b = ByteArray::new();
    b.set_endian(Endian::Little);
    b.write_utf("AB").unwrap();
    assert_eq!(b.as_slice(), [0x02, 0x00, 0x41, 0x42]);
    b.set_position(0);
    assert_eq!(b.read_utf(), Ok("AB".to_string()));
}

#[test]
fn utf_from_hex_fixture() {
    let mut b = ByteArray::from(hex::decode("00024142").unwrap());
    assert_eq!(b.read_utf(), Ok("AB".to_string()));
}

#[test]
fn utf_bytes_has_no_prefix() {
    let mut b = ByteArray::new();
    b.write_utf_bytes("hi");
    assert_eq!(b.as_slice(), [b'h', b'i']);
    b.set_position(0);
    assert_eq!(b.read_utf_bytes(2), Ok("hi".to_string()));
    assert_eq!(b.read_utf_bytes(1), Err(ByteArrayError::EndOfData));
}

#[test]
fn utf_bytes_single_byte_codec() {
    // One byte per character: the low 8 bits of the code point on the way
    // in, the Unicode scalar of equal value on the way out.
    let mut b = ByteArray::new();
    b.write_utf_bytes("ÿ");
    assert_eq!(b.as_slice(), [0xff]);
    b.set_position(0);
    assert_eq!(b.read_utf_bytes(1), Ok("ÿ".to_string()));

    let mut b = ByteArray::new();
    b.write_utf_bytes("\u{0141}"); // truncated to its low byte, 0x41
    assert_eq!(b.as_slice(), [0x41]);
}

#[test]
fn utf_read_with_short_payload_fails() {
    // Prefix says 5 characters, only 2 present.
    let mut b = ByteArray::from(vec![0x00, 0x05, 0x41, 0x42]);
    assert_eq!(b.read_utf(), Err(ByteArrayError::EndOfData));
}

#[cfg(feature = "bstr")]
#[test]
fn utf_bstr_view() {
    let mut b = ByteArray::new();
    b.write_utf("Hello!").unwrap();
    b.set_position(0);
    assert_eq!(b.read_utf_bstr(), Ok(bstr::BStr::new(b"Hello!")));
    assert_eq!(b.position(), 8);
}

#[test]
fn read_bytes_explicit_length() {
    let mut src = ByteArray::from(vec![1, 2, 3, 4]);
    src.set_position(1);
    let mut dest = ByteArray::new();
    src.read_bytes(&mut dest, 2, 3).unwrap();
    assert_eq!(dest.as_slice(), [0, 0, 2, 3, 4]);
    assert_eq!(src.position(), 4);
}

#[test]
fn read_bytes_zero_length_means_whole_store() {
    let mut src = ByteArray::from(vec![1, 2, 3]);
    let mut dest = ByteArray::new();
    src.read_bytes(&mut dest, 0, 0).unwrap();
    assert_eq!(dest.as_slice(), [1, 2, 3]);
    assert_eq!(src.position(), 3);
}

#[test]
fn read_bytes_length_beyond_store_fails() {
    let mut src = ByteArray::from(vec![1, 2, 3]);
    let mut dest = ByteArray::new();
    assert_eq!(
        src.read_bytes(&mut dest, 0, 4),
        Err(ByteArrayError::OutOfRange)
    );
    assert_eq!(src.position(), 0);
}

#[test]
fn read_bytes_never_runs_past_the_cursor_remainder() {
    // length 0 resolves to the whole store length, which overruns once the
    // cursor has advanced.
    let mut src = ByteArray::from(vec![1, 2, 3]);
    src.set_position(1);
    let mut dest = ByteArray::new();
    assert_eq!(
        src.read_bytes(&mut dest, 0, 0),
        Err(ByteArrayError::EndOfData)
    );
}

#[test]
fn write_bytes_remainder_of_source() {
    let src = ByteArray::from(vec![1, 2, 3, 4]);
    let mut dest = ByteArray::new();
    dest.write_bytes(&src, 1, 0).unwrap();
    assert_eq!(dest.as_slice(), [2, 3, 4]);
    assert_eq!(dest.position(), 3);
    // Source cursor is untouched by the copy.
    assert_eq!(src.position(), 0);
}

#[test]
fn write_bytes_offset_past_source_fails() {
    let src = ByteArray::from(vec![1, 2]);
    let mut dest = ByteArray::new();
    assert_eq!(dest.write_bytes(&src, 2, 1), Err(ByteArrayError::OutOfRange));
    // A zero length with the same offset is a no-op, not an error.
    dest.write_bytes(&src, 2, 0).unwrap();
    assert_eq!(dest.len(), 0);
}

#[test]
fn write_bytes_overrun_reads_as_zero() {
    let src = ByteArray::from(vec![1, 2]);
    let mut dest = ByteArray::new();
    dest.write_bytes(&src, 1, 3).unwrap();
    assert_eq!(dest.as_slice(), [2, 0, 0]);
}

#[test]
fn write_bytes_appends_at_cursor() {
    let src = ByteArray::from(vec![9, 8]);
    let mut dest = ByteArray::new();
    dest.write_u16(0xaa55);
    dest.write_bytes(&src, 0, 0).unwrap();
    assert_eq!(dest.as_slice(), [0xaa, 0x55, 9, 8]);
}

#[test]
fn utf_too_long_cannot_encode() {
    let long = "x".repeat(0x1_0000);
    let mut b = ByteArray::new();
    assert_eq!(b.write_utf(&long), Err(ByteArrayError::CannotEncode));
    assert_eq!(b.len(), 0);
}

#[test]
fn unsupported_operations() {
    let mut b = ByteArray::new();
    assert_eq!(b.object_encoding(), Err(ByteArrayError::Unsupported));
    assert_eq!(b.set_object_encoding(3), Err(ByteArrayError::Unsupported));
    assert_eq!(
        b.read_multi_byte(4, "utf-8"),
        Err(ByteArrayError::Unsupported)
    );
    assert_eq!(
        b.write_multi_byte("hi", "utf-8"),
        Err(ByteArrayError::Unsupported)
    );
    assert!(matches!(b.read_object(), Err(ByteArrayError::Unsupported)));
    assert_eq!(b.write_object(&1u32), Err(ByteArrayError::Unsupported));
}

#[test]
fn capability_traits_are_object_safe() {
    fn encode(out: &mut dyn DataOutput) {
        out.set_endian(Endian::Little);
        out.write_u32(0x01020304);
        out.write_bool(true);
    }

    fn decode(input: &mut dyn DataInput) -> Result<(u32, bool)> {
        input.set_endian(Endian::Little);
        Ok((input.read_u32()?, input.read_bool()?))
    }

    let mut b = ByteArray::new();
    encode(&mut b);
    b.set_position(0);
    assert_eq!(decode(&mut b), Ok((0x01020304, true)));
}

#[cfg(feature = "std")]
#[test]
fn io_write_appends_at_cursor() {
    use std::io::Write;

    let mut b = ByteArray::new();
    b.write_u16(0x0102);
    b.write_all(&[3, 4]).unwrap();
    assert_eq!(b.as_slice(), [1, 2, 3, 4]);
    assert_eq!(b.position(), 4);
}

#[test]
fn mixed() {
    let mut b = ByteArray::new();
    b.write_u8(42);
    b.write_i16(0x0102);
    b.write_utf("Hello, world!").unwrap();
    b.write_i32(-33);

    println!("{}", b.as_slice().hex_dump());

    b.set_position(0);
    assert_eq!(b.read_u8(), Ok(42));
    assert_eq!(b.read_i16(), Ok(0x0102));
    assert_eq!(b.read_utf(), Ok("Hello, world!".to_string()));
    assert_eq!(b.read_i32(), Ok(-33));
    assert_eq!(b.bytes_available(), 0);
}
