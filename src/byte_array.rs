use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use crate::error::{ByteArrayError, Result};

/// Byte order applied to multi-byte numeric values.
///
/// Single-byte operations and the single-byte-per-character string codec are
/// unaffected by this setting.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Endian {
    /// Most significant byte first. This is the default.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

/// A growable byte store with a read/write cursor and a selectable byte
/// order.
///
/// Sequential `read_*`/`write_*` methods operate at the cursor and advance it
/// by the byte width of the value. Writes extend the store as needed and
/// never fail for lack of space; reads fail with
/// [`ByteArrayError::EndOfData`] rather than fabricate bytes.
///
/// The byte order is consulted at each call, so changing [`Self::set_endian`]
/// between a write and a read reinterprets the stored bytes.
///
/// Random access through [`Self::get`] and [`Self::put`] silently grows the
/// store (zero-filling any gap) when the index is past the end. Callers rely
/// on this for sparse-write patterns; it is deliberate, not a missing bounds
/// check.
///
/// A `ByteArray` is a plain single-owner value type. The cursor and store are
/// shared mutable state, so an instance must not be used from multiple
/// readers or writers at once without external synchronization; `&mut self`
/// on every mutating method enforces this within safe Rust.
#[derive(Clone, Debug, Default)]
pub struct ByteArray {
    store: Vec<u8>,
    position: usize,
    endian: Endian,
}

impl ByteArray {
    /// Creates an empty buffer: zero length, cursor at 0, big-endian.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer whose store has the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            position: 0,
            endian: Endian::Big,
        }
    }

    /// Consumes the buffer and returns the underlying store.
    pub fn into_inner(self) -> Vec<u8> {
        self.store
    }

    /// Returns the stored bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.store
    }

    /// Returns the number of bytes in the store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the store holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Sets the store length. Growing zero-fills the new tail positions;
    /// shrinking truncates from the tail and never shifts retained bytes.
    pub fn set_length(&mut self, length: usize) {
        self.store.resize(length, 0);
    }

    /// Returns the cursor: the next offset to be read or written.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor. Positions past the end of the store are permitted;
    /// a subsequent read there fails, a subsequent write zero-fills the gap.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Returns the number of bytes between the cursor and the end of the
    /// store. Negative when the cursor has been moved past the end.
    pub fn bytes_available(&self) -> i64 {
        self.store.len() as i64 - self.position as i64
    }

    /// Returns the active byte order.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Sets the byte order for subsequent multi-byte operations. Bytes
    /// already in the store are not touched.
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Object encoding versioning is not supported. Always returns
    /// [`ByteArrayError::Unsupported`].
    pub fn object_encoding(&self) -> Result<u32> {
        Err(ByteArrayError::Unsupported)
    }

    /// Object encoding versioning is not supported. Always returns
    /// [`ByteArrayError::Unsupported`].
    pub fn set_object_encoding(&mut self, _value: u32) -> Result<()> {
        Err(ByteArrayError::Unsupported)
    }

    /// Ensures the store covers `size` bytes starting at the cursor,
    /// zero-filling anything added. Growth is append-only; bytes at lower
    /// indices are never moved or lost.
    fn extends_data(&mut self, size: usize) {
        let needed = self.position + size;
        if needed > self.store.len() {
            self.store.resize(needed, 0);
        }
    }

    /// Returns the byte at `index`.
    ///
    /// If `index` is past the end, the store is first extended so that
    /// `len() == index + 1` (zero-filling the gap), so this never fails and
    /// may grow the buffer as a side effect. The cursor does not move.
    pub fn get(&mut self, index: usize) -> u8 {
        if index >= self.store.len() {
            self.set_length(index + 1);
        }
        self.store[index]
    }

    /// Writes the byte at `index`, extending the store exactly as
    /// [`Self::get`] does. The cursor does not move.
    pub fn put(&mut self, index: usize, value: u8) {
        if index >= self.store.len() {
            self.set_length(index + 1);
        }
        self.store[index] = value;
    }

    /// Writes one raw byte at the cursor, extending the store as needed.
    fn push_byte(&mut self, value: u8) {
        self.extends_data(1);
        self.store[self.position] = value;
        self.position += 1;
    }

    /// Writes a small, fixed-size array of bytes at the cursor.
    fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) {
        self.extends_data(N);
        self.store[self.position..self.position + N].copy_from_slice(&value);
        self.position += N;
    }

    /// Reads a small, fixed-size array of bytes at the cursor.
    fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let end = self
            .position
            .checked_add(N)
            .ok_or(ByteArrayError::EndOfData)?;
        if end > self.store.len() {
            return Err(ByteArrayError::EndOfData);
        }
        let bytes = &self.store[self.position..end];
        self.position = end;
        // This unwrap() call will get optimized out.
        Ok(*<&[u8; N]>::try_from(bytes).unwrap())
    }

    /// Reads a `bool`: one byte, true iff it equals 1.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_i8()? == 1)
    }

    /// Reads a single signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        let [b] = self.read_cbytes()?;
        Ok(b as i8)
    }

    /// Reads a single unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_cbytes()?;
        Ok(b)
    }

    /// Reads an `i16` in the active byte order.
    pub fn read_i16(&mut self) -> Result<i16> {
        let b = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Big => i16::from_be_bytes(b),
            Endian::Little => i16::from_le_bytes(b),
        })
    }

    /// Reads a `u16` in the active byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Big => u16::from_be_bytes(b),
            Endian::Little => u16::from_le_bytes(b),
        })
    }

    /// Reads an `i32` in the active byte order.
    pub fn read_i32(&mut self) -> Result<i32> {
        let b = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Big => i32::from_be_bytes(b),
            Endian::Little => i32::from_le_bytes(b),
        })
    }

    /// Reads a `u32` in the active byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Big => u32::from_be_bytes(b),
            Endian::Little => u32::from_le_bytes(b),
        })
    }

    /// Reads an `f32` in the active byte order.
    pub fn read_f32(&mut self) -> Result<f32> {
        let b = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Big => f32::from_be_bytes(b),
            Endian::Little => f32::from_le_bytes(b),
        })
    }

    /// Reads an `f64` in the active byte order.
    pub fn read_f64(&mut self) -> Result<f64> {
        let b = self.read_cbytes()?;
        Ok(match self.endian {
            Endian::Big => f64::from_be_bytes(b),
            Endian::Little => f64::from_le_bytes(b),
        })
    }

    /// Writes a `bool` as byte value 1 (true) or 0 (false).
    pub fn write_bool(&mut self, value: bool) {
        self.push_byte(value as u8);
    }

    /// Writes a single signed byte.
    pub fn write_i8(&mut self, value: i8) {
        self.push_byte(value as u8);
    }

    /// Writes a single unsigned byte.
    pub fn write_u8(&mut self, value: u8) {
        self.push_byte(value);
    }

    /// Writes an `i16` in the active byte order.
    pub fn write_i16(&mut self, value: i16) {
        match self.endian {
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
        }
    }

    /// Writes a `u16` in the active byte order.
    pub fn write_u16(&mut self, value: u16) {
        match self.endian {
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
        }
    }

    /// Writes an `i32` in the active byte order.
    pub fn write_i32(&mut self, value: i32) {
        match self.endian {
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
        }
    }

    /// Writes a `u32` in the active byte order.
    pub fn write_u32(&mut self, value: u32) {
        match self.endian {
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
        }
    }

    /// Writes an `f32` in the active byte order.
    pub fn write_f32(&mut self, value: f32) {
        match self.endian {
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
        }
    }

    /// Writes an `f64` in the active byte order.
    pub fn write_f64(&mut self, value: f64) {
        match self.endian {
            Endian::Big => self.write_cbytes(value.to_be_bytes()),
            Endian::Little => self.write_cbytes(value.to_le_bytes()),
        }
    }

    /// Copies `length` bytes from the cursor into `dest` starting at
    /// `offset`, then advances the cursor by the bytes copied.
    ///
    /// A `length` of 0 means "the entire current store length of this
    /// buffer", not zero bytes. This is a legacy default kept for wire
    /// compatibility; pass an explicit length to copy a specific range.
    ///
    /// The destination grows through the same zero-filling rule as
    /// [`Self::put`]. Errors with [`ByteArrayError::OutOfRange`] when
    /// `length` exceeds this buffer's total store length, and with
    /// [`ByteArrayError::EndOfData`] when the copy would run past the end of
    /// the store; no bytes are fabricated.
    pub fn read_bytes(&mut self, dest: &mut ByteArray, offset: usize, length: usize) -> Result<()> {
        if length > self.store.len() {
            return Err(ByteArrayError::OutOfRange);
        }
        let length = if length == 0 { self.store.len() } else { length };

        let end = self
            .position
            .checked_add(length)
            .ok_or(ByteArrayError::EndOfData)?;
        if end > self.store.len() {
            return Err(ByteArrayError::EndOfData);
        }

        if dest.store.len() < offset + length {
            dest.set_length(offset + length);
        }
        dest.store[offset..offset + length].copy_from_slice(&self.store[self.position..end]);
        self.position = end;
        Ok(())
    }

    /// Writes `length` bytes taken from `source` starting at `offset`
    /// through the single-byte write path, so this buffer grows as needed.
    ///
    /// A `length` of 0 means "the remainder of `source` from `offset` to its
    /// end". An explicit `length` reaching past the source's end yields zero
    /// bytes for the overrun, matching what the source's growth-on-access
    /// `get` would have produced. Errors with
    /// [`ByteArrayError::OutOfRange`] when `offset` is at or past the
    /// source's end and `length` is positive.
    pub fn write_bytes(&mut self, source: &ByteArray, offset: usize, length: usize) -> Result<()> {
        if offset >= source.store.len() && length > 0 {
            return Err(ByteArrayError::OutOfRange);
        }
        let length = if length == 0 {
            source.store.len().saturating_sub(offset)
        } else {
            length
        };

        for i in 0..length {
            let byte = source.store.get(offset + i).copied().unwrap_or(0);
            self.push_byte(byte);
        }
        Ok(())
    }

    /// Writes a length-prefixed string: a 2-byte unsigned character count in
    /// the active byte order, then one byte per character holding the low 8
    /// bits of its code point.
    ///
    /// This is not a general text encoding; characters above U+00FF are
    /// truncated to their low byte. Errors with
    /// [`ByteArrayError::CannotEncode`] when the character count does not fit
    /// in 16 bits.
    pub fn write_utf(&mut self, value: &str) -> Result<()> {
        let count = value.chars().count();
        let count = u16::try_from(count).map_err(|_| ByteArrayError::CannotEncode)?;
        self.write_u16(count);
        self.write_utf_bytes(value);
        Ok(())
    }

    /// Reads a length-prefixed string written by [`Self::write_utf`]: a
    /// 2-byte unsigned character count in the active byte order, then that
    /// many single-byte characters.
    pub fn read_utf(&mut self) -> Result<String> {
        let length = self.read_u16()?;
        self.read_utf_bytes(length as usize)
    }

    /// Writes one byte per character (the low 8 bits of its code point) with
    /// no length prefix.
    pub fn write_utf_bytes(&mut self, value: &str) {
        for c in value.chars() {
            self.push_byte(c as u32 as u8);
        }
    }

    /// Reads exactly `length` single-byte characters with no length prefix.
    /// Each stored byte becomes the Unicode scalar of equal value.
    pub fn read_utf_bytes(&mut self, length: usize) -> Result<String> {
        let end = self
            .position
            .checked_add(length)
            .ok_or(ByteArrayError::EndOfData)?;
        if end > self.store.len() {
            return Err(ByteArrayError::EndOfData);
        }
        let value = self.store[self.position..end]
            .iter()
            .map(|&b| char::from(b))
            .collect();
        self.position = end;
        Ok(value)
    }

    /// Reads a length-prefixed string payload and returns it as a `&BStr`
    /// view over the store, without the per-character decode of
    /// [`Self::read_utf`]. The cursor advances past the prefix and payload.
    #[cfg(feature = "bstr")]
    pub fn read_utf_bstr(&mut self) -> Result<&bstr::BStr> {
        let length = self.read_u16()? as usize;
        let end = self
            .position
            .checked_add(length)
            .ok_or(ByteArrayError::EndOfData)?;
        if end > self.store.len() {
            return Err(ByteArrayError::EndOfData);
        }
        let start = self.position;
        self.position = end;
        Ok(bstr::BStr::new(&self.store[start..end]))
    }

    /// Arbitrary charset decoding is not supported. Always returns
    /// [`ByteArrayError::Unsupported`].
    pub fn read_multi_byte(&mut self, _length: usize, _charset: &str) -> Result<String> {
        Err(ByteArrayError::Unsupported)
    }

    /// Generic object graph deserialization is not supported. Always returns
    /// [`ByteArrayError::Unsupported`].
    pub fn read_object(&mut self) -> Result<Box<dyn Any>> {
        Err(ByteArrayError::Unsupported)
    }

    /// Arbitrary charset encoding is not supported. Always returns
    /// [`ByteArrayError::Unsupported`].
    pub fn write_multi_byte(&mut self, _value: &str, _charset: &str) -> Result<()> {
        Err(ByteArrayError::Unsupported)
    }

    /// Generic object graph serialization is not supported. Always returns
    /// [`ByteArrayError::Unsupported`].
    pub fn write_object(&mut self, _object: &dyn Any) -> Result<()> {
        Err(ByteArrayError::Unsupported)
    }
}

impl From<Vec<u8>> for ByteArray {
    /// Wraps an existing byte vector; cursor at 0, big-endian.
    fn from(store: Vec<u8>) -> Self {
        Self {
            store,
            position: 0,
            endian: Endian::Big,
        }
    }
}

/// Appends bytes at the cursor through the sequential write path.
#[cfg(feature = "std")]
impl std::io::Write for ByteArray {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.extends_data(buf.len());
        self.store[self.position..self.position + buf.len()].copy_from_slice(buf);
        self.position += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
