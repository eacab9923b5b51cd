//! src/decryptor/decrypt.rs
//! NotepadCrypt decryption: header -> key -> CBC -> padding.

use std::io::{Read, Write};

use crate::crypto::cbc::decrypt_cbc;
use crate::crypto::padding::strip_padding;
use crate::decryptor::key::CipherKey;
use crate::error::NotepadCryptError;
use crate::header::parse_header;

/// Decrypt an in-memory NotepadCrypt container.
///
/// `passphrase` is used as raw bytes. With `use_master_key`, it is treated as
/// the master passphrase and the file key is unwrapped from the header first.
///
/// An empty container decrypts to an empty plaintext for any passphrase and
/// either mode.
///
/// # Errors
///
/// Any header, key or padding failure; see [`NotepadCryptError`]. No partial
/// plaintext is ever returned.
///
/// # Example
///
/// ```
/// use notepadcrypt_rs::decrypt_file_data;
///
/// assert!(decrypt_file_data(&[], b"anything", true)?.is_empty());
/// # Ok::<(), notepadcrypt_rs::NotepadCryptError>(())
/// ```
pub fn decrypt_file_data(
    file_data: &[u8],
    passphrase: &[u8],
    use_master_key: bool,
) -> Result<Vec<u8>, NotepadCryptError> {
    if file_data.is_empty() {
        tracing::debug!("empty container, nothing to decrypt");
        return Ok(Vec::new());
    }

    let header = parse_header(file_data)?;
    let cipher_key = CipherKey::derive(&header, passphrase, use_master_key)?;

    let mut body = file_data[header.body_offset()..].to_vec();
    decrypt_cbc(
        &mut body,
        cipher_key.expose_secret(),
        header.primary_iv.expose_secret(),
    )?;

    strip_padding(body)
}

/// Decrypt a NotepadCrypt container from `input_reader` into `output_writer`.
///
/// The whole container is read and decrypted in memory; the plaintext is
/// written only after every check has passed, so a failed call writes nothing.
#[inline(always)]
pub fn decrypt<R: Read, W: Write>(
    mut input_reader: R,
    mut output_writer: W,
    passphrase: &[u8],
    use_master_key: bool,
) -> Result<(), NotepadCryptError> {
    let mut file_data = Vec::new();
    input_reader.read_to_end(&mut file_data)?;

    let plaintext = decrypt_file_data(&file_data, passphrase, use_master_key)?;
    output_writer.write_all(&plaintext)?;
    output_writer.flush()?;
    Ok(())
}
