// src/crypto/mod.rs

//! Cryptographic primitives used by the NotepadCrypt format.
//!
//! Leaf-first: [`sha256`] and [`aes`] have no format knowledge; [`cbc`] drives
//! the block cipher over a buffer; [`padding`] strips the trailing pad;
//! [`kdf`] turns a passphrase into an AES-256 key.

pub mod aes;
pub mod cbc;
pub mod kdf;
pub mod padding;
pub mod sha256;
