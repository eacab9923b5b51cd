//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, NotepadCryptError>`](NotepadCryptError).
//! Every error is terminal for the call that produced it; nothing is retried.

use thiserror::Error;

/// The error type for all NotepadCrypt operations.
#[derive(Error, Debug)]
pub enum NotepadCryptError {
    /// I/O error while reading the container or writing plaintext.
    ///
    /// Only produced by the reader/writer facade ([`crate::decrypt`],
    /// [`crate::read_format`]); the in-memory core never does I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The magic number at offset 0 is not `0x04030201`.
    #[error("Unsupported file format (magic 0x{magic:08X})")]
    UnsupportedFileFormat {
        /// The magic number actually found.
        magic: u32,
    },

    /// The format tag at offset 4 is neither of the two known tags.
    #[error("Unsupported encryption format (tag 0x{tag:08X})")]
    UnsupportedEncryptionFormat {
        /// The tag actually found.
        tag: u32,
    },

    /// A non-empty input is shorter than the header it claims to have.
    #[error("Truncated file: header needs {expected} bytes, found {actual}")]
    Truncated {
        /// Minimum length required by the header read so far.
        expected: usize,
        /// Actual input length.
        actual: usize,
    },

    /// Master-key mode was requested but the file has no master-key section.
    #[error("Master key mode requested on file data with no master key")]
    NoMasterKeyPresent,

    /// Ciphertext or IV length is not a multiple of the 16-byte block size.
    #[error("Invalid file length")]
    InvalidLength,

    /// Key material is not 16, 24 or 32 bytes long.
    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// Padding check failed after decryption.
    ///
    /// The format cannot tell a wrong passphrase from corrupted data, so both
    /// surface here.
    #[error("Incorrect key or corrupt data")]
    BadPaddingOrKey,

    /// The message bit length does not fit the 64-bit length field of SHA-256.
    #[error("Message too large to hash")]
    MessageTooLarge,
}
