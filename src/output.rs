use core::any::Any;

use crate::byte_array::{ByteArray, Endian};
use crate::error::Result;

/// The write side of a [`ByteArray`]: anything that can accept primitive
/// values and raw byte ranges into a sequential, endianness-aware sink.
///
/// Like [`DataInput`](crate::DataInput), this is a pure contract over the
/// buffer's write operations with no behavior of its own.
pub trait DataOutput {
    /// Returns the active byte order.
    fn endian(&self) -> Endian;

    /// Sets the byte order for subsequent multi-byte writes.
    fn set_endian(&mut self, endian: Endian);

    /// Object encoding versioning; not implemented.
    fn object_encoding(&self) -> Result<u32>;

    /// Object encoding versioning; not implemented.
    fn set_object_encoding(&mut self, value: u32) -> Result<()>;

    /// Writes a `bool` as byte value 1 or 0.
    fn write_bool(&mut self, value: bool);

    /// Writes a single signed byte.
    fn write_i8(&mut self, value: i8);

    /// Writes an `i16` in the active byte order.
    fn write_i16(&mut self, value: i16);

    /// Writes an `i32` in the active byte order.
    fn write_i32(&mut self, value: i32);

    /// Writes a `u32` in the active byte order.
    fn write_u32(&mut self, value: u32);

    /// Writes an `f32` in the active byte order.
    fn write_f32(&mut self, value: f32);

    /// Writes an `f64` in the active byte order.
    fn write_f64(&mut self, value: f64);

    /// Writes `length` bytes from `source` starting at `offset`; a `length`
    /// of 0 means the remainder of `source` from `offset`.
    fn write_bytes(&mut self, source: &ByteArray, offset: usize, length: usize) -> Result<()>;

    /// Writes a length-prefixed string.
    fn write_utf(&mut self, value: &str) -> Result<()>;

    /// Writes one byte per character, no prefix.
    fn write_utf_bytes(&mut self, value: &str);

    /// Arbitrary charset encoding; not implemented.
    fn write_multi_byte(&mut self, value: &str, charset: &str) -> Result<()>;

    /// Generic object graph serialization; not implemented.
    fn write_object(&mut self, object: &dyn Any) -> Result<()>;
}

impl DataOutput for ByteArray {
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

    fn write_bool(&mut self, value: bool) {
        ByteArray::write_bool(self, value);
    }

    fn write_i8(&mut self, value: i8) {
        ByteArray::write_i8(self, value);
    }

    fn write_i16(&mut self, value: i16) {
        ByteArray::write_i16(self, value);
    }

    fn write_i32(&mut self, value: i32) {
        ByteArray::write_i32(self, value);
    }

    fn write_u32(&mut self, value: u32) {
        ByteArray::write_u32(self, value);
    }

    fn write_f32(&mut self, value: f32) {
        ByteArray::write_f32(self, value);
    }

    fn write_f64(&mut self, value: f64) {
        ByteArray::write_f64(self, value);
    }

    fn write_bytes(&mut self, source: &ByteArray, offset: usize, length: usize) -> Result<()> {
        ByteArray::write_bytes(self, source, offset, length)
    }

    fn write_utf(&mut self, value: &str) -> Result<()> {
        ByteArray::write_utf(self, value)
    }

    fn write_utf_bytes(&mut self, value: &str) {
        ByteArray::write_utf_bytes(self, value);
    }

    fn write_multi_byte(&mut self, value: &str, charset: &str) -> Result<()> {
        ByteArray::write_multi_byte(self, value, charset)
    }

    fn write_object(&mut self, object: &dyn Any) -> Result<()> {
        ByteArray::write_object(self, object)
    }
}
