use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, ByteArrayError>;

/// Error type for [`ByteArray`](crate::ByteArray) operations.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum ByteArrayError {
    /// A `read_*` method needed more bytes than remain between the cursor and
    /// the end of the store. The store is never silently extended on the read
    /// path, and no value is fabricated.
    #[error("end of data reached while decoding a value")]
    EndOfData,

    /// A raw-range copy was asked to move more bytes than the source holds,
    /// or was given an offset outside the source's bounds with a nonzero
    /// length.
    #[error("requested range is outside the buffer bounds")]
    OutOfRange,

    /// A string has more characters than the 16-bit length prefix can
    /// represent.
    #[error("value cannot be encoded")]
    CannotEncode,

    /// The operation is part of the `ByteArray` surface but is not
    /// implemented: multi-byte charset text and generic object graph
    /// (de)serialization.
    #[error("operation is not implemented")]
    Unsupported,
}
