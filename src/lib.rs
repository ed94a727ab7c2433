//! Growable byte buffer using the same encoding rules as ActionScript's
//! `flash.utils.ByteArray`.
//!
//! The central type is [`ByteArray`]: an owned, resizable byte store with a
//! read/write cursor and a runtime-selectable byte order. Sequential reads
//! and writes operate at the cursor and advance it by the width of the value;
//! multi-byte values are encoded in whichever [`Endian`] is active at the
//! moment of the call.
//!
//! Two small capability traits, [`DataInput`] and [`DataOutput`], restate the
//! read side and write side of the buffer's operations so other code can
//! accept "anything readable/writable this way" without depending on the
//! concrete type.
//!
//! # References
//! * <https://airsdk.dev/reference/actionscript/3.0/flash/utils/ByteArray.html>

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod byte_array;
mod error;
mod input;
mod output;

#[cfg(test)]
mod tests;

pub use byte_array::{ByteArray, Endian};
pub use error::{ByteArrayError, Result};
pub use input::DataInput;
pub use output::DataOutput;
