//! # Secure-Gate Type Aliases
//!
//! Fixed-size buffers that hold key material or decrypted blocks. All of them
//! are [`secure_gate::Fixed`] wrappers: zeroized on drop, and the bytes are
//! only reachable through `.expose_secret()` / `.expose_secret_mut()`.
//!
//! - [`Key32`] - AES-256 key (passphrase digest or unwrapped file key)
//! - [`WrappedKey32`] - file key as stored in the header, before unwrapping
//! - [`Iv16`] - CBC initialization vector
//! - [`Block16`] - one AES block of working state

/// Generic secure stack buffer (direct alias to secure-gate's `Fixed`).
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<16>; // one AES block
pub type Iv16 = SpanBuffer<16>; // primary IV, master IV
pub type Key32 = SpanBuffer<32>; // SHA-256(passphrase), file key
pub type WrappedKey32 = SpanBuffer<32>; // encrypted file key from the header
