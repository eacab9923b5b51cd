// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt_file_data(bytes, passphrase, use_master_key)?` for
//! in-memory buffers, `decrypt(input, output, passphrase, use_master_key)?`
//! for readers and writers. [`CipherKey`] exposes the key-selection step.

pub(crate) mod decrypt;
pub(crate) mod key;

pub use decrypt::{decrypt, decrypt_file_data};
pub use key::CipherKey;
