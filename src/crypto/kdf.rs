//! src/crypto/kdf.rs
//! Passphrase key derivation: a single unsalted SHA-256 of the raw passphrase
//! bytes. No stretching; this is what the format defines.

use crate::aliases::Key32;
use crate::crypto::sha256::sha256;
use crate::error::NotepadCryptError;

/// Derive the passphrase key directly into the caller's buffer.
#[inline(always)]
pub fn derive_passphrase_key(
    passphrase: &[u8],
    out_key: &mut Key32,
) -> Result<(), NotepadCryptError> {
    let mut digest = sha256(passphrase)?;
    out_key.expose_secret_mut().copy_from_slice(&digest);
    zeroize::Zeroize::zeroize(&mut digest);
    Ok(())
}
