// src/lib.rs

//! Decryptor for the legacy NotepadCrypt file format.
//!
//! A container is `magic | tag | IV [| master IV | wrapped key] | body`. The
//! body key is `SHA-256(passphrase)`, or, in master-key mode, a file key
//! unwrapped from the header with `SHA-256(master passphrase)`. The body is
//! AES-256-CBC with PKCS#7-style padding. SHA-256 and AES are implemented in
//! [`crypto`]; nothing here encrypts.
//!
//! ```no_run
//! let data = std::fs::read("notes.bin")?;
//! let plaintext = notepadcrypt_rs::decrypt_file_data(&data, b"password123", false)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod error;
pub mod header;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_file_data, CipherKey};
pub use error::NotepadCryptError;

pub use crypto::kdf::derive_passphrase_key;
pub use header::{parse_header, read_format, FileHeader, FormatTag};

#[cfg(feature = "batch-ops")]
pub use batch_ops::decrypt_batch;
