//! src/crypto/padding.rs
//! PKCS#7-style padding check over 16-byte blocks.
//!
//! Rejection is always correct. Acceptance is not proof of integrity: a
//! garbled final block passes with probability about 1/255.

use crate::consts::BLOCK_LEN;
use crate::error::NotepadCryptError;

/// Validates and strips padding from a decrypted buffer.
///
/// The last byte `n` must be in `1..=16` and the last `n` bytes must all
/// equal `n`. The returned buffer is the input truncated by `n` bytes.
///
/// # Errors
///
/// [`NotepadCryptError::BadPaddingOrKey`] when the buffer is empty or the
/// padding is malformed.
///
/// # Example
///
/// ```
/// use notepadcrypt_rs::crypto::padding::strip_padding;
///
/// let mut block = b"hello".to_vec();
/// block.extend_from_slice(&[11u8; 11]);
/// assert_eq!(strip_padding(block)?, b"hello");
/// # Ok::<(), notepadcrypt_rs::NotepadCryptError>(())
/// ```
pub fn strip_padding(mut plaintext: Vec<u8>) -> Result<Vec<u8>, NotepadCryptError> {
    let padding = *plaintext.last().ok_or(NotepadCryptError::BadPaddingOrKey)?;
    let pad_len = usize::from(padding);
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > plaintext.len() {
        return Err(NotepadCryptError::BadPaddingOrKey);
    }

    let kept = plaintext.len() - pad_len;
    // Fold every pad byte so the check does not exit early.
    let mismatch = plaintext[kept..]
        .iter()
        .fold(0u8, |acc, &byte| acc | (byte ^ padding));
    if mismatch != 0 {
        return Err(NotepadCryptError::BadPaddingOrKey);
    }

    plaintext.truncate(kept);
    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(data: &[u8]) -> Vec<u8> {
        let pad = BLOCK_LEN - data.len() % BLOCK_LEN;
        let mut out = data.to_vec();
        out.resize(data.len() + pad, pad as u8);
        out
    }

    #[test]
    fn strips_every_valid_length() {
        for len in 0..40 {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            assert_eq!(strip_padding(padded(&data)).unwrap(), data, "len {len}");
        }
    }

    #[test]
    fn full_padding_block() {
        let buffer = vec![16u8; 16];
        assert!(strip_padding(buffer).unwrap().is_empty());
    }

    #[test]
    fn rejects_zero_and_oversized_pad_byte() {
        for last in [0u8, 17, 0x80, 0xFF] {
            let mut buffer = vec![last; 32];
            buffer[31] = last;
            assert!(matches!(
                strip_padding(buffer),
                Err(NotepadCryptError::BadPaddingOrKey)
            ));
        }
    }

    #[test]
    fn rejects_inconsistent_pad_bytes() {
        let mut buffer = padded(b"abcdefghij"); // six bytes of 0x06
        buffer[11] = 0x05;
        assert!(matches!(
            strip_padding(buffer),
            Err(NotepadCryptError::BadPaddingOrKey)
        ));
    }

    #[test]
    fn rejects_empty_buffer() {
        assert!(matches!(
            strip_padding(Vec::new()),
            Err(NotepadCryptError::BadPaddingOrKey)
        ));
    }

    #[test]
    fn rejects_pad_longer_than_buffer() {
        assert!(matches!(
            strip_padding(vec![4u8; 3]),
            Err(NotepadCryptError::BadPaddingOrKey)
        ));
    }
}
