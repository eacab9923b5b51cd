//! src/crypto/cbc.rs
//! AES-CBC decryption, in place.

use crate::aliases::Block16;
use crate::consts::BLOCK_LEN;
use crate::crypto::aes::KeySchedule;
use crate::error::NotepadCryptError;
use crate::utils::xor_blocks;

/// Decrypts `buffer` in place with AES-CBC under `key` and `iv`.
///
/// The chaining value for block `n` is the *ciphertext* of block `n - 1`
/// (the IV for the first block), captured before the block is overwritten.
///
/// # Errors
///
/// - [`NotepadCryptError::InvalidLength`] if `buffer` is not a whole number
///   of blocks or `iv` is not exactly one block.
/// - [`NotepadCryptError::InvalidKeyLength`] if `key` is not 16, 24 or 32 bytes.
pub fn decrypt_cbc(buffer: &mut [u8], key: &[u8], iv: &[u8]) -> Result<(), NotepadCryptError> {
    if buffer.len() % BLOCK_LEN != 0 || iv.len() != BLOCK_LEN {
        return Err(NotepadCryptError::InvalidLength);
    }
    let schedule = KeySchedule::expand(key)?;

    let mut previous = [0u8; BLOCK_LEN];
    previous.copy_from_slice(iv);
    let mut working = Block16::new([0u8; BLOCK_LEN]);

    for chunk in buffer.chunks_exact_mut(BLOCK_LEN) {
        let mut ciphertext = [0u8; BLOCK_LEN];
        ciphertext.copy_from_slice(chunk);

        let block = working.expose_secret_mut();
        *block = ciphertext;
        schedule.decrypt_block(block);

        let mut plaintext = [0u8; BLOCK_LEN];
        xor_blocks(block, &previous, &mut plaintext);
        chunk.copy_from_slice(&plaintext);

        previous = ciphertext;
    }
    Ok(())
}
