use alloc::boxed::Box;
use alloc::string::String;
use core::any::Any;

use crate::byte_array::{ByteArray, Endian};
use crate::error::Result;

/// The read side of a [`ByteArray`]: anything that can supply primitive
/// values and raw byte ranges from a sequential, endianness-aware source.
///
/// This is a pure contract restating the buffer's read operations; it adds
/// no behavior of its own. Code that only consumes binary data should accept
/// `&mut impl DataInput` (or `&mut dyn DataInput`) rather than the concrete
/// buffer type.
pub trait DataInput {
    /// Bytes between the cursor and the end of the source; may be negative.
    fn bytes_available(&self) -> i64;

    /// Returns the active byte order.
    fn endian(&self) -> Endian;

    /// Sets the byte order for subsequent multi-byte reads.
    fn set_endian(&mut self, endian: Endian);

    /// Object encoding versioning; not implemented.
    fn object_encoding(&self) -> Result<u32>;

    /// Object encoding versioning; not implemented.
    fn set_object_encoding(&mut self, value: u32) -> Result<()>;

    /// Reads a `bool`: one byte, true iff it equals 1.
    fn read_bool(&mut self) -> Result<bool>;

    /// Reads a single signed byte.
    fn read_i8(&mut self) -> Result<i8>;

    /// Reads a single unsigned byte.
    fn read_u8(&mut self) -> Result<u8>;

    /// Reads an `i16` in the active byte order.
    fn read_i16(&mut self) -> Result<i16>;

    /// Reads a `u16` in the active byte order.
    fn read_u16(&mut self) -> Result<u16>;

    /// Reads an `i32` in the active byte order.
    fn read_i32(&mut self) -> Result<i32>;

    /// Reads a `u32` in the active byte order.
    fn read_u32(&mut self) -> Result<u32>;

    /// Reads an `f32` in the active byte order.
    fn read_f32(&mut self) -> Result<f32>;

    /// Reads an `f64` in the active byte order.
    fn read_f64(&mut self) -> Result<f64>;

    /// Copies `length` bytes from the cursor into `dest` at `offset`; a
    /// `length` of 0 means the source's entire store length.
    fn read_bytes(&mut self, dest: &mut ByteArray, offset: usize, length: usize) -> Result<()>;

    /// Reads a length-prefixed string.
    fn read_utf(&mut self) -> Result<String>;

    /// Reads exactly `length` single-byte characters, no prefix.
    fn read_utf_bytes(&mut self, length: usize) -> Result<String>;

    /// Arbitrary charset decoding; not implemented.
    fn read_multi_byte(&mut self, length: usize, charset: &str) -> Result<String>;

    /// Generic object graph deserialization; not implemented.
    fn read_object(&mut self) -> Result<Box<dyn Any>>;
}

impl DataInput for ByteArray {
    fn bytes_available(&self) -> i64 {
        ByteArray::bytes_available(self)
    }

    fn endian(&self) -> Endian {
        ByteArray::endian(self)
    }

    fn set_endian(&mut self, endian: Endian) {
        ByteArray::set_endian(self, endian);
    }

    fn object_encoding(&self) -> Result<u32> {
        ByteArray::object_encoding(self)
    }

    fn set_object_encoding(&mut self, value: u32) -> Result<()> {
        ByteArray::set_object_encoding(self, value)
    }

    fn read_bool(&mut self) -> Result<bool> {
        ByteArray::read_bool(self)
    }

    fn read_i8(&mut self) -> Result<i8> {
        ByteArray::read_i8(self)
    }

    fn read_u8(&mut self) -> Result<u8> {
        ByteArray::read_u8(self)
    }

    fn read_i16(&mut self) -> Result<i16> {
        ByteArray::read_i16(self)
    }

    fn read_u16(&mut self) -> Result<u16> {
        ByteArray::read_u16(self)
    }

    fn read_i32(&mut self) -> Result<i32> {
        ByteArray::read_i32(self)
    }

    fn read_u32(&mut self) -> Result<u32> {
        ByteArray::read_u32(self)
    }

    fn read_f32(&mut self) -> Result<f32> {
        ByteArray::read_f32(self)
    }

    fn read_f64(&mut self) -> Result<f64> {
        ByteArray::read_f64(self)
    }

    fn read_bytes(&mut self, dest: &mut ByteArray, offset: usize, length: usize) -> Result<()> {
        ByteArray::read_bytes(self, dest, offset, length)
    }

    fn read_utf(&mut self) -> Result<String> {
        ByteArray::read_utf(self)
    }

    fn read_utf_bytes(&mut self, length: usize) -> Result<String> {
        ByteArray::read_utf_bytes(self, length)
    }

    fn read_multi_byte(&mut self, length: usize, charset: &str) -> Result<String> {
        ByteArray::read_multi_byte(self, length, charset)
    }

    fn read_object(&mut self) -> Result<Box<dyn Any>> {
        ByteArray::read_object(self)
    }
}
